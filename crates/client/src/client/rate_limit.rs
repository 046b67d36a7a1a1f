//! Server-reported API quota tracking.

use std::collections::HashMap;
use std::str::FromStr;

const HEADER_LIMIT: &str = "x-api-ratelimit-limit";
const HEADER_CONSUMED: &str = "x-api-ratelimit-consumed";
const HEADER_REMAINING: &str = "x-api-ratelimit-remaining";
const HEADER_RESET: &str = "x-api-ratelimit-reset";

/// Last quota snapshot reported by the API.
///
/// The server is the single source of truth: every response carries
/// `x-api-ratelimit-*` headers and [`observe`](Self::observe) replaces the
/// snapshot wholesale. Nothing is counted locally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimitStatus {
    /// Total requests allowed in the current window.
    pub limit: Option<i64>,
    /// Requests consumed so far in the current window.
    pub consumed: Option<i64>,
    /// Requests left in the current window.
    pub remaining: Option<i64>,
    /// Unix timestamp (seconds) at which the window resets.
    pub reset: Option<i64>,
}

impl RateLimitStatus {
    /// Whether another request may be sent.
    ///
    /// `true` until the server has reported an exhausted quota. An unknown
    /// remaining count (no response observed yet, or headers absent) does
    /// not block.
    pub fn can_proceed(&self) -> bool {
        match self.remaining {
            Some(remaining) => remaining > 0,
            None => true,
        }
    }

    /// Replace the snapshot from a response's headers.
    ///
    /// Header names are matched lowercase. A header that is absent or fails
    /// to parse leaves its field `None` rather than carrying a stale value
    /// forward.
    pub fn observe(&mut self, headers: &HashMap<String, String>) {
        self.limit = parse_header(headers, HEADER_LIMIT);
        self.consumed = parse_header(headers, HEADER_CONSUMED);
        self.remaining = parse_header(headers, HEADER_REMAINING);
        self.reset = parse_header(headers, HEADER_RESET);
    }
}

fn parse_header<T: FromStr>(headers: &HashMap<String, String>, name: &str) -> Option<T> {
    headers.get(name).and_then(|value| value.trim().parse().ok())
}
