//! Provides the exchange-rate table and the derived list of selectable codes.

use crate::currency::{normalize_code, static_codes};
use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Rates of each currency relative to the (implicit) base currency.
///
/// The table is only ever replaced as a whole; there is no partial update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable(BTreeMap<String, f64>);

impl RateTable {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, code: &str) -> Option<f64> {
        self.0.get(code).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Currency codes present in the table, in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(c, r)| (c.into(), r)).collect())
    }
}

/// Builds the sorted, deduplicated union of the table's codes and every
/// statically known code. Never empty, even for an empty table.
pub fn known_codes(rates: &RateTable) -> Vec<String> {
    rates
        .codes()
        .map(normalize_code)
        .filter(|code| !code.is_empty())
        .chain(static_codes().map(str::to_string))
        .sorted()
        .dedup()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CURRENCY_REGIONS;

    #[test]
    fn empty_table_still_yields_static_codes() {
        let codes = known_codes(&RateTable::new());
        assert!(codes.contains(&"USD".to_string()));
        assert!(codes.contains(&"XAU".to_string()));
        assert!(codes.len() >= CURRENCY_REGIONS.len());
    }

    #[test]
    fn union_is_sorted_and_deduplicated() {
        let rates: RateTable = [("USD", 1.0), ("EUR", 0.9), ("BTC", 0.00001), ("eur", 0.9)]
            .into_iter()
            .collect();
        let codes = known_codes(&rates);

        assert!(codes.contains(&"BTC".to_string()));
        assert_eq!(codes.iter().filter(|c| *c == "EUR").count(), 1);
        assert_eq!(codes.iter().filter(|c| *c == "XDR").count(), 1);
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn deserializes_from_a_plain_object() {
        let rates: RateTable = serde_json::from_str(r#"{"USD": 1, "JPY": 134.08}"#).unwrap();
        assert_eq!(rates.get("JPY"), Some(134.08));
        assert_eq!(rates.codes().collect::<Vec<_>>(), vec!["JPY", "USD"]);
    }
}
