//! # Pricing Report
//!
//! Loads every user from a [`UserSource`], prices the sample order for each,
//! and renders the result.
//!
//! ## Text Layout
//! ```text
//! [1] Ana Torres - tier=gold
//! Discount: 0.00
//! Domestic shipping: 13.20
//! International shipping: 15.20
//! ---------------------------------------
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use pricing_core::{Quote, QuoteParams};
use pricing_store::{StoreError, UserSource};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::OutputFormat;

const SEPARATOR: &str = "---------------------------------------";

/// Everything one run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingReport {
    pub generated_at: DateTime<Utc>,
    pub params: QuoteParams,
    pub quotes: Vec<Quote>,
}

/// Errors while building a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to price user {user_id}: {source}")]
    Pricing {
        user_id: String,
        #[source]
        source: pricing_core::CoreError,
    },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Loads users from `source` and quotes each of them.
pub async fn build_report<S>(source: &S, params: QuoteParams) -> Result<PricingReport, ReportError>
where
    S: UserSource + ?Sized,
{
    let users = source.load_users().await?;
    info!(count = users.len(), "Pricing users");

    let quotes = users
        .iter()
        .map(|user| {
            debug!(user_id = %user.id, tier = %user.tier(), "Quoting user");
            Quote::for_user(user, &params).map_err(|source| ReportError::Pricing {
                user_id: user.id.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PricingReport {
        generated_at: Utc::now(),
        params,
        quotes,
    })
}

impl PricingReport {
    pub fn render(&self, format: OutputFormat) -> Result<String, ReportError> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// Text layout: one block per user, in load order.
impl fmt::Display for PricingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for quote in &self.quotes {
            writeln!(f, "[{}] {} - tier={}", quote.user_id, quote.user_name, quote.tier)?;
            writeln!(f, "Discount: {:.2}", quote.discount)?;
            writeln!(f, "Domestic shipping: {:.2}", quote.domestic_shipping)?;
            writeln!(f, "International shipping: {:.2}", quote.international_shipping)?;
            writeln!(f, "{SEPARATOR}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricing_core::User;
    use pricing_store::InMemoryUsers;

    #[tokio::test]
    async fn test_build_report_quotes_every_user() {
        let source = InMemoryUsers::new(vec![
            User::new("1", "Ana", "gold"),
            User::new("2", "Luis", "silver"),
        ]);

        let report = build_report(&source, QuoteParams::default()).await.unwrap();
        assert_eq!(report.quotes.len(), 2);
        assert_eq!(report.quotes[0].discount, 0.0);
        assert!((report.quotes[1].discount - 19.999).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_invalid_params_fail_with_user_context() {
        let source = InMemoryUsers::new(vec![User::new("7", "Eva", "gold")]);
        let params = QuoteParams {
            distance_km: -1.0,
            ..QuoteParams::default()
        };

        let err = build_report(&source, params).await.unwrap_err();
        assert!(matches!(err, ReportError::Pricing { ref user_id, .. } if user_id == "7"));
    }

    #[tokio::test]
    async fn test_render_text() {
        let source = InMemoryUsers::new(vec![User::new("1", "Ana Torres", "Gold")]);
        let params = QuoteParams {
            order_total: 300.0,
            ..QuoteParams::default()
        };

        let report = build_report(&source, params).await.unwrap();
        assert_eq!(report.render(OutputFormat::Text).unwrap(), report.to_string());
        assert_eq!(
            report.to_string(),
            "[1] Ana Torres - tier=Gold\n\
             Discount: 60.00\n\
             Domestic shipping: 13.20\n\
             International shipping: 15.20\n\
             ---------------------------------------\n"
        );
    }

    #[tokio::test]
    async fn test_render_json() {
        let source = InMemoryUsers::new(vec![User::new("1", "Ana", "silver")]);
        let report = build_report(&source, QuoteParams::default()).await.unwrap();

        let json = report.render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["quotes"][0]["user_id"], "1");
        assert_eq!(value["params"]["weight_kg"], 12.0);
    }

    #[tokio::test]
    async fn test_empty_source_renders_nothing() {
        let report = build_report(&InMemoryUsers::default(), QuoteParams::default())
            .await
            .unwrap();
        assert!(report.to_string().is_empty());
    }
}
