//! USD to NGN exchange rates.
//!
//! Catalog prices are stored in USD; the storefront displays Naira.
//! Rates come from free public endpoints, are cached for an hour, and
//! always resolve: when every endpoint fails a conservative fallback
//! rate is used (and not cached, so the next call retries the network).

use std::collections::HashMap;
use std::time::Duration;

use moka::future::Cache;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Endpoints tried in order; both return `{ "rates": { "NGN": ... } }`.
const RATE_ENDPOINTS: &[&str] = &[
    "https://open.er-api.com/v6/latest/USD",
    "https://api.exchangerate-api.com/v4/latest/USD",
];

/// Rate applied when no endpoint is reachable.
const FALLBACK_RATE: Decimal = Decimal::from_parts(1600, 0, 0, false, 0);

/// How long a fetched rate stays fresh.
const RATE_TTL: Duration = Duration::from_secs(3600);

/// Per-request timeout; a slow rate API must not stall catalog reads.
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct RateResponse {
    rates: HashMap<String, Decimal>,
}

/// Cached USD→NGN exchange-rate source.
#[derive(Debug, Clone)]
pub struct ExchangeRates {
    client: reqwest::Client,
    cache: Cache<&'static str, Decimal>,
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self::new()
    }
}

impl ExchangeRates {
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            cache: Cache::builder()
                .max_capacity(4)
                .time_to_live(RATE_TTL)
                .build(),
        }
    }

    /// Current USD→NGN rate. Never fails; worst case is the fallback rate.
    pub async fn usd_to_ngn(&self) -> Decimal {
        if let Some(rate) = self.cache.get(&"NGN").await {
            return rate;
        }
        match self.fetch_rate().await {
            Some(rate) => {
                self.cache.insert("NGN", rate).await;
                rate
            }
            None => {
                tracing::warn!(
                    fallback = %FALLBACK_RATE,
                    "All exchange-rate endpoints failed, using fallback rate"
                );
                FALLBACK_RATE
            }
        }
    }

    async fn fetch_rate(&self) -> Option<Decimal> {
        for &endpoint in RATE_ENDPOINTS {
            match self.try_endpoint(endpoint).await {
                Ok(rate) if rate > Decimal::ZERO => {
                    tracing::debug!(endpoint, rate = %rate, "Fetched USD→NGN rate");
                    return Some(rate);
                }
                Ok(rate) => {
                    tracing::warn!(endpoint, rate = %rate, "Rejected non-positive rate");
                }
                Err(error) => {
                    tracing::warn!(endpoint, %error, "Exchange-rate endpoint failed");
                }
            }
        }
        None
    }

    async fn try_endpoint(&self, endpoint: &str) -> Result<Decimal, RateError> {
        let response: RateResponse = self
            .client
            .get(endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        response
            .rates
            .get("NGN")
            .copied()
            .ok_or(RateError::MissingCurrency)
    }
}

#[derive(Debug, thiserror::Error)]
enum RateError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("Response has no NGN rate")]
    MissingCurrency,
}

/// Convert a USD amount to NGN at the given rate.
#[must_use]
pub fn convert(usd: Decimal, rate: Decimal) -> Decimal {
    usd * rate
}

/// Format an NGN amount for display: `₦1,234,567`.
///
/// Amounts are rounded to whole Naira and comma-grouped.
#[must_use]
pub fn format_naira(amount: Decimal) -> String {
    let whole = amount.round_dp(0).trunc().to_string();
    let (sign, digits) = whole
        .strip_prefix('-')
        .map_or(("", whole.as_str()), |rest| ("-", rest));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}₦{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_applies_rate() {
        let usd = Decimal::new(2_499, 2); // $24.99
        let rate = Decimal::new(1_600, 0);
        assert_eq!(convert(usd, rate), Decimal::new(3_998_400, 2));
    }

    #[test]
    fn test_format_naira_groups_thousands() {
        assert_eq!(format_naira(Decimal::new(1_234_567, 0)), "₦1,234,567");
        assert_eq!(format_naira(Decimal::new(999, 0)), "₦999");
        assert_eq!(format_naira(Decimal::new(1_000, 0)), "₦1,000");
        assert_eq!(format_naira(Decimal::ZERO), "₦0");
    }

    #[test]
    fn test_format_naira_rounds_to_whole() {
        assert_eq!(format_naira(Decimal::new(39_984_49, 2)), "₦39,984");
        assert_eq!(format_naira(Decimal::new(39_984_51, 2)), "₦39,985");
    }

    #[test]
    fn test_fallback_rate_is_positive() {
        assert!(FALLBACK_RATE > Decimal::ZERO);
        assert_eq!(FALLBACK_RATE, Decimal::new(1_600, 0));
    }
}
