//! JSON bodies exchanged with the `/api/rates` and `/api/convert` endpoints.

use crate::rate_table::RateTable;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// Response of `GET /api/rates`. Missing or `null` fields take their
/// defaults, so a bare `{}` decodes as an empty, non-live table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub rates: RateTable,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub attribution: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub live: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /api/convert`. The amount is sent as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub amount: String,
    pub from: String,
    pub to: String,
}

/// Successful response of `POST /api/convert`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub formatted_from: String,
    pub formatted_result: String,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub result: Option<f64>,
}

/// Error body sent alongside a non-2xx status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_response_tolerates_missing_fields() {
        let resp: RatesResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.rates.is_empty());
        assert!(!resp.live);
        assert_eq!(resp.attribution, None);
    }

    #[test]
    fn rates_response_treats_null_as_missing() {
        let resp: RatesResponse =
            serde_json::from_str(r#"{"rates": null, "live": true, "attribution": "X"}"#).unwrap();
        assert!(resp.rates.is_empty());
        assert!(resp.live);
        assert_eq!(resp.attribution.as_deref(), Some("X"));

        let resp: RatesResponse =
            serde_json::from_str(r#"{"rates": {"USD": 1.0}, "live": null}"#).unwrap();
        assert_eq!(resp.rates.get("USD"), Some(1.0));
        assert!(!resp.live);
    }

    #[test]
    fn convert_response_keeps_extra_fields_optional() {
        let resp: ConvertResponse = serde_json::from_str(
            r#"{"formatted_from": "10.00 USD", "formatted_result": "9.40 EUR", "result": 9.4}"#,
        )
        .unwrap();
        assert_eq!(resp.formatted_result, "9.40 EUR");
        assert_eq!(resp.result, Some(9.4));
        assert_eq!(resp.from, None);
    }
}
