//! Shared currency data and the client for the external exchange-rate endpoints.

pub mod amount;
pub mod client;
pub mod compat;
pub mod config;
pub mod currency;
pub mod error;
pub mod flags;
pub mod messages;
pub mod prefs;
pub mod rate_table;

pub use error::ApiError;
