//! # Pricing Report
//!
//! Library half of the `pricing-report` binary, split out so the report can
//! be built and rendered from integration tests.

pub mod config;
pub mod report;

pub use config::{ConfigError, OutputFormat, ReportConfig, UnknownOutputFormat};
pub use report::{build_report, PricingReport, ReportError};
