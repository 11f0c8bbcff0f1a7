//! # pricing-store: User Records for Order Pricing
//!
//! Loads customer records from the semicolon-delimited user file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Order Pricing Data Flow                          │
//! │                                                                         │
//! │  pricing-report (build_report)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  pricing-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   UserSource (trait) ◄── UserRepository (users.csv)            │   │
//! │  │                      ◄── InMemoryUsers (tests, fixtures)        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  users.csv   id;name;tier                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pricing_store::{UserRepository, UserSource};
//!
//! let repo = UserRepository::new("users.csv");
//! let users = repo.load_users().await?;
//! ```

pub mod error;
pub mod repository;

pub use error::{StoreError, StoreResult};
pub use repository::user::{parse_user_line, parse_users, InMemoryUsers, UserRepository};
pub use repository::UserSource;
