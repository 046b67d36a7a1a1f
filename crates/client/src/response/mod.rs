//! Response classification and normalization
//!
//! Every API body carries an `s` status discriminator. [`classify`] reads it
//! and nothing else; on `ok` the same bytes are handed to the operation's
//! normalizer:
//! - `candles` - candle series for stocks and indices
//! - `quote` - single quotes and quote series
//! - `options` - expirations, strikes and the option chain
//! - `market` - market status calendar

mod candles;
mod market;
mod options;
mod quote;

pub use candles::normalize_candles;
pub use market::normalize_market_status;
pub use options::{normalize_expirations, normalize_option_chain, normalize_strikes};
pub use quote::{normalize_quote, normalize_quote_history};

use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::errors::MarketDataError;

/// Body status discriminator, `s` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Ok,
    NoData,
    Error,
}

impl ResponseStatus {
    fn parse(value: &str) -> Result<Self, MarketDataError> {
        match value {
            "ok" => Ok(Self::Ok),
            "no_data" => Ok(Self::NoData),
            "error" => Ok(Self::Error),
            other => Err(MarketDataError::UnrecognizedStatus {
                status: other.to_string(),
            }),
        }
    }
}

/// Outcome of classifying one response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// Payload present; the body bytes go to the normalizer unmodified.
    Ok,
    /// The server had nothing for the query. A successful outcome.
    NoData,
    /// The server rejected the query with a message.
    Error { message: String },
}

#[derive(Deserialize)]
struct StatusProbe {
    s: Option<String>,
    errmsg: Option<String>,
}

/// Classify a response body by its `s` discriminator.
///
/// An empty or unparsable body, a body without `s`, or an `error` body
/// without `errmsg` is malformed. A discriminator outside the known set is
/// never treated as success.
pub fn classify(body: &[u8]) -> Result<Envelope, MarketDataError> {
    if body.is_empty() {
        return Err(MarketDataError::MalformedResponse {
            reason: "empty response body".to_string(),
        });
    }
    let probe: StatusProbe =
        serde_json::from_slice(body).map_err(|e| MarketDataError::MalformedResponse {
            reason: format!("invalid JSON: {}", e),
        })?;
    let status = probe.s.ok_or_else(|| MarketDataError::MalformedResponse {
        reason: "missing status field 's'".to_string(),
    })?;

    match ResponseStatus::parse(&status)? {
        ResponseStatus::Ok => Ok(Envelope::Ok),
        ResponseStatus::NoData => Ok(Envelope::NoData),
        ResponseStatus::Error => match probe.errmsg {
            Some(message) => Ok(Envelope::Error { message }),
            None => Err(MarketDataError::MalformedResponse {
                reason: "error status without errmsg".to_string(),
            }),
        },
    }
}

/// Deserialize an already-classified ok body into an operation payload.
pub(crate) fn parse_payload<T: DeserializeOwned>(body: &[u8]) -> Result<T, MarketDataError> {
    serde_json::from_slice(body).map_err(|e| MarketDataError::MalformedResponse {
        reason: format!("unexpected payload shape: {}", e),
    })
}

/// Epoch seconds to UTC, rejecting out-of-range values.
pub(crate) fn timestamp_utc(seconds: i64) -> Result<DateTime<Utc>, MarketDataError> {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or_else(|| MarketDataError::MalformedResponse {
            reason: format!("timestamp {} out of range", seconds),
        })
}

/// Epoch seconds to UTC for a nullable wire column.
pub(crate) fn optional_timestamp(
    seconds: Option<i64>,
) -> Result<Option<DateTime<Utc>>, MarketDataError> {
    seconds.map(timestamp_utc).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ok() {
        let envelope = classify(br#"{"s":"ok","t":[100]}"#).unwrap();
        assert_eq!(envelope, Envelope::Ok);
    }

    #[test]
    fn test_classify_no_data_is_success() {
        let envelope = classify(br#"{"s":"no_data"}"#).unwrap();
        assert_eq!(envelope, Envelope::NoData);
    }

    #[test]
    fn test_classify_error_carries_server_message() {
        let envelope = classify(br#"{"s":"error","errmsg":"bad symbol"}"#).unwrap();
        assert_eq!(
            envelope,
            Envelope::Error {
                message: "bad symbol".to_string()
            }
        );
    }

    #[test]
    fn test_classify_error_without_message_is_malformed() {
        let result = classify(br#"{"s":"error"}"#);
        assert!(matches!(
            result,
            Err(MarketDataError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_classify_unknown_status() {
        let result = classify(br#"{"s":"partial"}"#);
        match result {
            Err(MarketDataError::UnrecognizedStatus { status }) => assert_eq!(status, "partial"),
            other => panic!("expected UnrecognizedStatus, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_empty_body_is_malformed() {
        assert!(matches!(
            classify(b""),
            Err(MarketDataError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_classify_invalid_json_is_malformed() {
        assert!(matches!(
            classify(b"<html>502</html>"),
            Err(MarketDataError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_classify_missing_discriminator_is_malformed() {
        assert!(matches!(
            classify(br#"{"t":[100]}"#),
            Err(MarketDataError::MalformedResponse { .. })
        ));
    }
}
