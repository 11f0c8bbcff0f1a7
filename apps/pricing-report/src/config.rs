//! Report configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use pricing_core::{CoreError, QuoteParams};
use serde::{Deserialize, Serialize};

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = UnknownOutputFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UnknownOutputFormat(s.to_string())),
        }
    }
}

/// Output format name that is neither `text` nor `json`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown output format '{0}' (expected text or json)")]
pub struct UnknownOutputFormat(pub String);

/// Pricing report configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path of the `id;name;tier` user file
    pub users_file: PathBuf,

    /// Sample order priced for every user
    pub params: QuoteParams,

    /// Output format (text or json)
    pub output: OutputFormat,
}

impl ReportConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = |key: &str, default: f64| -> Result<f64, ConfigError> {
            match lookup(key) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue(key.to_string())),
                None => Ok(default),
            }
        };

        let defaults = QuoteParams::default();
        let params = QuoteParams {
            order_total: number("PRICING_ORDER_TOTAL", defaults.order_total)?,
            weight_kg: number("PRICING_WEIGHT_KG", defaults.weight_kg)?,
            distance_km: number("PRICING_DISTANCE_KM", defaults.distance_km)?,
        };
        params.validate()?;

        let output = match lookup("PRICING_OUTPUT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PRICING_OUTPUT".to_string()))?,
            None => OutputFormat::default(),
        };

        Ok(ReportConfig {
            users_file: lookup("PRICING_USERS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("users.csv")),
            params,
            output,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid sample order: {0}")]
    Validation(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ReportConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.users_file, PathBuf::from("users.csv"));
        assert_eq!(config.params, QuoteParams::default());
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = ReportConfig::from_lookup(lookup_from(&[
            ("PRICING_USERS_FILE", "/tmp/people.csv"),
            ("PRICING_ORDER_TOTAL", "250"),
            ("PRICING_WEIGHT_KG", " 16.5 "),
            ("PRICING_OUTPUT", "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.users_file, PathBuf::from("/tmp/people.csv"));
        assert_eq!(config.params.order_total, 250.0);
        assert_eq!(config.params.weight_kg, 16.5);
        assert_eq!(config.params.distance_km, 900.0);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_unparseable_number() {
        let err = ReportConfig::from_lookup(lookup_from(&[("PRICING_DISTANCE_KM", "far")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "PRICING_DISTANCE_KM"));
    }

    #[test]
    fn test_negative_sample_rejected() {
        let err = ReportConfig::from_lookup(lookup_from(&[("PRICING_ORDER_TOTAL", "-5")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(" Json ".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));

        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert_eq!(err, UnknownOutputFormat("xml".to_string()));
        assert_eq!(
            err.to_string(),
            "Unknown output format 'xml' (expected text or json)"
        );
    }

    #[test]
    fn test_unknown_output_format() {
        let err =
            ReportConfig::from_lookup(lookup_from(&[("PRICING_OUTPUT", "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }
}
