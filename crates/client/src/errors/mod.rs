//! Error types for the marketdata.app client.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all client operations
//! - [`TransportError`]: Connection-level failures raised by the HTTP transport

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during client operations.
///
/// A server answer of `no_data` is not represented here: operations surface
/// it as a successful `Ok(None)` outcome instead.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The response body was empty, not valid JSON, or structurally
    /// incomplete for the operation that produced it.
    #[error("Malformed response: {reason}")]
    MalformedResponse {
        /// What was wrong with the body
        reason: String,
    },

    /// The `s` status field held a value outside the documented set
    /// {`ok`, `no_data`, `error`}. Never treated as success.
    #[error("Unrecognized response status: {status}")]
    UnrecognizedStatus {
        /// The unexpected discriminator value
        status: String,
    },

    /// The server answered with `s = "error"` and this message.
    /// Not fatal to the process; retrying is the caller's decision.
    #[error("API error: {message}")]
    ServerError {
        /// The server-provided `errmsg`
        message: String,
    },

    /// The local quota gate refused to send the request because the last
    /// observed `remaining` count was zero. The request never left the
    /// process, which distinguishes this from a server-side refusal.
    #[error("Rate limit exhausted")]
    RateLimitDenied {
        /// Unix timestamp at which the quota window resets, if known
        reset: Option<i64>,
    },

    /// The strike price cannot be encoded in the 8-digit OCC strike field.
    /// Raised at option construction time.
    #[error("Invalid strike price: {strike}")]
    InvalidStrikePrice {
        /// The strike that failed to encode
        strike: Decimal,
    },

    /// The option side string was neither a call nor a put spelling.
    /// Raised at option construction time.
    #[error("Invalid option type: {value}")]
    InvalidOptionType {
        /// The string that failed to parse
        value: String,
    },

    /// The server returned a non-success HTTP status and a body that could
    /// not be classified.
    #[error("HTTP error: status {status}")]
    HttpStatus {
        /// The HTTP status code
        status: u16,
    },

    /// A connection-level failure occurred before a response was read.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Connection-level failure between the client and the API host.
///
/// Carries the underlying [`reqwest::Error`] as its source when the
/// production transport produced it; transports built for tests construct
/// it with [`TransportError::new`].
#[derive(Error, Debug)]
#[error("{message}")]
pub struct TransportError {
    /// Description of the failure
    pub message: String,
    /// Underlying cause, when one exists
    #[source]
    pub source: Option<reqwest::Error>,
}

impl TransportError {
    /// A transport error with no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::error::Error;

    #[test]
    fn test_malformed_response_display() {
        let error = MarketDataError::MalformedResponse {
            reason: "empty body".to_string(),
        };
        assert_eq!(format!("{}", error), "Malformed response: empty body");
    }

    #[test]
    fn test_unrecognized_status_display() {
        let error = MarketDataError::UnrecognizedStatus {
            status: "partial".to_string(),
        };
        assert_eq!(format!("{}", error), "Unrecognized response status: partial");
    }

    #[test]
    fn test_server_error_display() {
        let error = MarketDataError::ServerError {
            message: "bad symbol".to_string(),
        };
        assert_eq!(format!("{}", error), "API error: bad symbol");
    }

    #[test]
    fn test_invalid_strike_price_display() {
        let error = MarketDataError::InvalidStrikePrice {
            strike: dec!(-140),
        };
        assert_eq!(format!("{}", error), "Invalid strike price: -140");
    }

    #[test]
    fn test_transport_error_preserves_cause() {
        let transport = TransportError::new("connection refused");
        let error = MarketDataError::from(transport);
        assert_eq!(format!("{}", error), "Transport error: connection refused");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_rate_limit_denied_carries_reset() {
        let error = MarketDataError::RateLimitDenied {
            reset: Some(1_668_790_017),
        };
        assert_eq!(format!("{}", error), "Rate limit exhausted");
        match error {
            MarketDataError::RateLimitDenied { reset } => {
                assert_eq!(reset, Some(1_668_790_017));
            }
            _ => panic!("expected RateLimitDenied"),
        }
    }
}
