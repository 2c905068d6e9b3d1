//! Holds the last fetched rate table and the derived list of selectable codes.

use api::client::ExchangeApi;
use api::compat::with_timeout;
use api::messages::RatesResponse;
use api::rate_table::{known_codes, RateTable};
use api::ApiError;
use std::time::Duration;

pub const FALLBACK_STATUS: &str = "Rates timeout/unavailable · Fallback";

/// What a refresh ended up with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RefreshOutcome {
    pub is_live: bool,
    pub code_count: usize,
    pub is_fallback: bool,
}

/// The context object both comboboxes read their codes from.
///
/// Owned by the widget state; replaced wholesale by [`RateCache::apply`].
#[derive(Clone, Debug, PartialEq)]
pub struct RateCache {
    rates: RateTable,
    codes: Vec<String>,
    source_status: String,
    credit: String,
    credit_line: String,
}

impl RateCache {
    pub fn new(credit: impl Into<String>) -> Self {
        let rates = RateTable::new();
        Self {
            codes: known_codes(&rates),
            rates,
            source_status: String::new(),
            credit: credit.into(),
            credit_line: String::new(),
        }
    }

    /// Sorted, deduplicated; never empty.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.codes
            .binary_search_by(|probe| probe.as_str().cmp(code))
            .is_ok()
    }

    /// Where the current data came from, e.g. `"<attribution> · Live"`.
    pub fn source_status(&self) -> &str {
        &self.source_status
    }

    /// Empty until the first refresh completes.
    pub fn credit_line(&self) -> &str {
        &self.credit_line
    }

    /// Folds the result of a rate fetch into the cache. Failures degrade to
    /// an empty table plus the statically known codes.
    pub fn apply(&mut self, result: Result<RatesResponse, ApiError>) -> RefreshOutcome {
        let outcome = match result {
            Ok(resp) => {
                self.rates = resp.rates;
                self.codes = known_codes(&self.rates);

                let provenance = if resp.live { "Live" } else { "Fallback" };
                self.source_status = format!(
                    "{} · {}",
                    resp.attribution.as_deref().unwrap_or("Rates"),
                    provenance
                );
                dioxus_logger::tracing::info!(
                    "loaded {} rates ({})",
                    self.rates.len(),
                    provenance.to_lowercase()
                );

                RefreshOutcome {
                    is_live: resp.live,
                    code_count: self.codes.len(),
                    is_fallback: !resp.live,
                }
            }
            Err(e) => {
                dioxus_logger::tracing::warn!("rate fetch failed, using static codes: {}", e);
                self.rates = RateTable::new();
                self.codes = known_codes(&self.rates);
                self.source_status = FALLBACK_STATUS.to_string();

                RefreshOutcome {
                    is_live: false,
                    code_count: self.codes.len(),
                    is_fallback: true,
                }
            }
        };

        self.credit_line = self.credit.clone();
        outcome
    }
}

/// Fetches the rate table, giving up after `timeout`.
pub async fn fetch_rates<A: ExchangeApi>(
    api: &A,
    timeout: Duration,
) -> Result<RatesResponse, ApiError> {
    with_timeout(timeout, api.rates()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeExchange;
    use api::config::DEFAULT_RATES_TIMEOUT;

    #[test]
    fn starts_with_static_codes() {
        let cache = RateCache::new("©");
        assert!(cache.contains_code("USD"));
        assert_eq!(cache.credit_line(), "");
    }

    #[tokio::test]
    async fn live_payload_replaces_the_table() {
        let api = FakeExchange::with_rates(&[("USD", 1.0), ("EUR", 0.9), ("BTC", 0.00001)], true)
            .attribution("ExchangeRate-API");
        let mut cache = RateCache::new("© Ziyad");

        let outcome = cache.apply(fetch_rates(&api, DEFAULT_RATES_TIMEOUT).await);

        assert!(outcome.is_live);
        assert!(!outcome.is_fallback);
        assert_eq!(outcome.code_count, cache.codes().len());
        assert!(cache.contains_code("BTC"));
        assert_eq!(cache.rates.get("EUR"), Some(0.9));
        assert_eq!(cache.source_status(), "ExchangeRate-API · Live");
        assert_eq!(cache.credit_line(), "© Ziyad");
    }

    #[tokio::test]
    async fn non_live_payload_is_marked_fallback() {
        let api = FakeExchange::with_rates(&[("USD", 1.0)], false);
        let mut cache = RateCache::new("©");

        let outcome = cache.apply(fetch_rates(&api, DEFAULT_RATES_TIMEOUT).await);

        assert!(!outcome.is_live);
        assert!(outcome.is_fallback);
        assert_eq!(cache.source_status(), "Rates · Fallback");
    }

    #[tokio::test]
    async fn failure_keeps_static_codes_selectable() {
        let api = FakeExchange::failing(ApiError::Rejected {
            status: 500,
            message: None,
        });
        let mut cache = RateCache::new("©");
        cache.apply(Ok(RatesResponse {
            rates: [("BTC", 0.00001)].into_iter().collect(),
            live: true,
            ..Default::default()
        }));

        let outcome = cache.apply(fetch_rates(&api, DEFAULT_RATES_TIMEOUT).await);

        assert!(outcome.is_fallback);
        assert!(!outcome.is_live);
        assert!(cache.rates.is_empty());
        assert!(!cache.contains_code("BTC"));
        assert!(cache.contains_code("USD"));
        assert!(outcome.code_count > 0);
        assert_eq!(cache.source_status(), FALLBACK_STATUS);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_after_six_seconds_falls_back() {
        let api = FakeExchange::with_rates(&[("USD", 1.0)], true)
            .delayed(std::time::Duration::from_secs(30));
        let mut cache = RateCache::new("©");

        let started = tokio::time::Instant::now();
        let outcome = cache.apply(fetch_rates(&api, DEFAULT_RATES_TIMEOUT).await);

        assert!(started.elapsed() >= DEFAULT_RATES_TIMEOUT);
        assert!(started.elapsed() < std::time::Duration::from_secs(30));
        assert!(outcome.is_fallback);
        assert_eq!(cache.source_status(), FALLBACK_STATUS);
        assert!(cache.contains_code("USD"));
    }
}
