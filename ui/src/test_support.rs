//! In-memory stand-ins for the exchange endpoints.

use api::client::ExchangeApi;
use api::messages::{ConvertRequest, ConvertResponse, RatesResponse};
use api::ApiError;
use std::cell::{Cell, RefCell};
use std::time::Duration;

pub struct FakeExchange {
    rates: Result<RatesResponse, ApiError>,
    conversion: Result<ConvertResponse, ApiError>,
    delay: Option<Duration>,
    rate_calls: Cell<usize>,
    convert_calls: Cell<usize>,
    last_request: RefCell<Option<ConvertRequest>>,
}

impl FakeExchange {
    pub fn with_rates(pairs: &[(&str, f64)], live: bool) -> Self {
        Self::new(Ok(RatesResponse {
            rates: pairs.iter().map(|(c, r)| (c.to_string(), *r)).collect(),
            base: Some("USD".into()),
            attribution: None,
            live,
        }))
    }

    pub fn failing(err: ApiError) -> Self {
        Self::new(Err(err))
    }

    fn new(rates: Result<RatesResponse, ApiError>) -> Self {
        Self {
            rates,
            conversion: Ok(ConvertResponse {
                formatted_from: "10.00 USD".into(),
                formatted_result: "9.00 EUR".into(),
                from: Some("USD".into()),
                to: Some("EUR".into()),
                amount: Some(10.0),
                result: Some(9.0),
            }),
            delay: None,
            rate_calls: Cell::new(0),
            convert_calls: Cell::new(0),
            last_request: RefCell::new(None),
        }
    }

    pub fn attribution(mut self, text: &str) -> Self {
        if let Ok(resp) = &mut self.rates {
            resp.attribution = Some(text.to_string());
        }
        self
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn converting_to(mut self, result: Result<ConvertResponse, ApiError>) -> Self {
        self.conversion = result;
        self
    }

    pub fn rate_calls(&self) -> usize {
        self.rate_calls.get()
    }

    pub fn convert_calls(&self) -> usize {
        self.convert_calls.get()
    }

    pub fn last_request(&self) -> Option<ConvertRequest> {
        self.last_request.borrow().clone()
    }
}

impl ExchangeApi for FakeExchange {
    async fn rates(&self) -> Result<RatesResponse, ApiError> {
        self.rate_calls.set(self.rate_calls.get() + 1);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.rates.clone()
    }

    async fn convert(&self, request: &ConvertRequest) -> Result<ConvertResponse, ApiError> {
        self.convert_calls.set(self.convert_calls.get() + 1);
        *self.last_request.borrow_mut() = Some(request.clone());
        self.conversion.clone()
    }
}
