//! Local checks and result text for the convert action.

use crate::combobox::Side;
use crate::rate_cache::RateCache;
use api::amount::{parse_amount, AmountError};
use api::currency::normalize_code;
use api::messages::{ConvertRequest, ConvertResponse};
use api::ApiError;
use thiserror::Error;

pub const CONVERTING: &str = "Converting…";
pub const GENERIC_FAILURE: &str = "Conversion failed";

/// Reasons a conversion is refused before any request goes out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(transparent)]
    Amount(#[from] AmountError),

    #[error("Choose a currency to convert {}", .0.label())]
    MissingCurrency(Side),

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}

/// Builds the request for `POST /api/convert`, or says why not.
///
/// The amount goes out trimmed but otherwise as typed; the endpoint does its
/// own sanitation. Codes are normalized and must be among the known codes.
pub fn validate(
    amount: &str,
    from: &str,
    to: &str,
    cache: &RateCache,
) -> Result<ConvertRequest, ValidationError> {
    parse_amount(amount)?;

    let from = checked_code(from, Side::From, cache)?;
    let to = checked_code(to, Side::To, cache)?;

    Ok(ConvertRequest {
        amount: amount.trim().to_string(),
        from,
        to,
    })
}

fn checked_code(raw: &str, side: Side, cache: &RateCache) -> Result<String, ValidationError> {
    let code = normalize_code(raw);
    if code.is_empty() {
        return Err(ValidationError::MissingCurrency(side));
    }
    if !cache.contains_code(&code) {
        return Err(ValidationError::UnsupportedCurrency(code));
    }
    Ok(code)
}

/// `"<formatted_from> → <formatted_result>"`
pub fn success_text(resp: &ConvertResponse) -> String {
    format!("{} → {}", resp.formatted_from, resp.formatted_result)
}

pub fn failure_text(err: &ApiError) -> String {
    err.server_message().unwrap_or(GENERIC_FAILURE).to_string()
}

/// Secondary status line after a successful refresh or conversion.
pub fn refreshed_line(now: &str, fallback: bool) -> String {
    if fallback {
        format!("Refreshed {now} · Fallback")
    } else {
        format!("Refreshed {now}")
    }
}
