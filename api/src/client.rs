//! Defines the trait for the exchange endpoints and its HTTP implementation.

use crate::config::ClientConfig;
use crate::messages::{ConvertRequest, ConvertResponse, ErrorBody, RatesResponse};
use crate::ApiError;
use serde::de::DeserializeOwned;

/// Anything that can serve rate tables and conversions.
///
/// The widget only ever talks to this trait, so tests can swap in a fake.
#[allow(async_fn_in_trait)]
pub trait ExchangeApi {
    /// Fetches the current rate table (`GET /api/rates`).
    async fn rates(&self) -> Result<RatesResponse, ApiError>;

    /// Asks the server to convert an amount (`POST /api/convert`).
    async fn convert(&self, request: &ConvertRequest) -> Result<ConvertResponse, ApiError>;
}

/// Talks to the exchange endpoints over HTTP.
#[derive(Clone, Debug)]
pub struct HttpExchangeApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpExchangeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl PartialEq for HttpExchangeApi {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ExchangeApi for HttpExchangeApi {
    async fn rates(&self) -> Result<RatesResponse, ApiError> {
        let resp = self.client.get(self.endpoint("/api/rates")).send().await?;
        decode(resp).await
    }

    async fn convert(&self, request: &ConvertRequest) -> Result<ConvertResponse, ApiError> {
        let resp = self
            .client
            .post(self.endpoint("/api/convert"))
            .json(request)
            .send()
            .await?;
        decode(resp).await
    }
}

/// Turns a response into either the expected body or an `ApiError`,
/// picking the server's `error` field out of non-2xx bodies.
async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error);
        dioxus_logger::tracing::debug!("exchange endpoint returned {}: {:?}", status, message);
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetches_and_decodes_rates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/rates"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "base": "USD",
                "rates": {"USD": 1, "EUR": 0.94},
                "live": true,
                "attribution": "Exchange rates provided by ExchangeRate-API"
            })))
            .mount(&server)
            .await;

        let api = HttpExchangeApi::new(format!("{}/", server.uri()));
        let resp = api.rates().await.unwrap();

        assert!(resp.live);
        assert_eq!(resp.base.as_deref(), Some("USD"));
        assert_eq!(resp.rates.get("EUR"), Some(0.94));
    }

    #[tokio::test]
    async fn null_rates_decode_as_an_empty_table() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/rates"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"rates": null, "live": null})),
            )
            .mount(&server)
            .await;

        let resp = HttpExchangeApi::new(server.uri()).rates().await.unwrap();

        assert!(resp.rates.is_empty());
        assert!(!resp.live);
    }

    #[tokio::test]
    async fn non_success_rates_are_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/rates"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let err = HttpExchangeApi::new(server.uri()).rates().await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 503,
                message: None
            }
        );
    }

    #[tokio::test]
    async fn garbage_rates_are_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/rates"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = HttpExchangeApi::new(server.uri()).rates().await.unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[tokio::test]
    async fn posts_conversion_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/convert"))
            .and(body_json(json!({"amount": "10", "from": "USD", "to": "EUR"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "from": "USD",
                "to": "EUR",
                "amount": 10.0,
                "result": 9.4,
                "formatted_from": "10.00 USD",
                "formatted_result": "9.40 EUR"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = ConvertRequest {
            amount: "10".into(),
            from: "USD".into(),
            to: "EUR".into(),
        };
        let resp = HttpExchangeApi::new(server.uri()).convert(&request).await.unwrap();
        assert_eq!(resp.formatted_from, "10.00 USD");
        assert_eq!(resp.formatted_result, "9.40 EUR");
    }

    #[tokio::test]
    async fn conversion_error_keeps_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/convert"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"error": "Unsupported currency"})),
            )
            .mount(&server)
            .await;

        let request = ConvertRequest {
            amount: "10".into(),
            from: "USD".into(),
            to: "ZZZ".into(),
        };
        let err = HttpExchangeApi::new(server.uri())
            .convert(&request)
            .await
            .unwrap_err();
        assert_eq!(err.server_message(), Some("Unsupported currency"));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        let err = HttpExchangeApi::new("http://127.0.0.1:9")
            .rates()
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
