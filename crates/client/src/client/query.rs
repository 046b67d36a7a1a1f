//! Request URL assembly.
//!
//! Every request URL is built the same way: the operation's base URL,
//! percent-encoded path segments each followed by `/`, the fixed
//! `format=json&dateformat=timestamp` pair, and then the operation's
//! query parameters in insertion order.

use std::fmt::Display;

use chrono::NaiveDate;
use urlencoding::encode;

/// Query parameters carried by every URL.
const BASE_PARAMS: &str = "format=json&dateformat=timestamp";

/// Insertion-ordered query parameter list.
///
/// Parameters appear in the final URL exactly in the order they were
/// pushed. Absent values are never emitted; an explicit `false` is, so
/// "unset" and "false" stay distinguishable on the wire.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a parameter unconditionally.
    pub fn push(&mut self, key: &str, value: impl Display) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// Append a parameter when the value is present.
    pub fn push_opt(&mut self, key: &str, value: Option<impl Display>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Append a date parameter in `YYYY-MM-DD` form when present.
    pub fn push_opt_date(&mut self, key: &str, value: Option<NaiveDate>) {
        if let Some(date) = value {
            self.push(key, date.format("%Y-%m-%d"));
        }
    }

    /// Append a boolean parameter as the literal `true` or `false` when
    /// present. This is the single place boolean wire form is decided.
    pub fn push_opt_bool(&mut self, key: &str, value: Option<bool>) {
        if let Some(flag) = value {
            self.push(key, if flag { "true" } else { "false" });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Assemble the final request URL.
///
/// `base_url` is expected to end with `/` (the endpoint registry
/// guarantees this for its defaults); a missing trailing slash is
/// repaired rather than producing a malformed path.
pub fn build_url(base_url: &str, segments: &[&str], params: &QueryParams) -> String {
    let mut url = String::from(base_url);
    if !url.ends_with('/') {
        url.push('/');
    }

    for segment in segments {
        url.push_str(&encode(segment));
        url.push('/');
    }

    url.push('?');
    url.push_str(BASE_PARAMS);

    for (key, value) in params.pairs() {
        url.push('&');
        url.push_str(&encode(key));
        url.push('=');
        url.push_str(&encode(value));
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_carries_fixed_params_without_extras() {
        let url = build_url(
            "https://api.marketdata.app/v1/markets/status/",
            &[],
            &QueryParams::new(),
        );
        assert_eq!(
            url,
            "https://api.marketdata.app/v1/markets/status/?format=json&dateformat=timestamp"
        );
    }

    #[test]
    fn test_segments_appended_in_order_with_trailing_slash() {
        let url = build_url(
            "https://api.marketdata.app/v1/stocks/candles/",
            &["D", "AAPL"],
            &QueryParams::new(),
        );
        assert_eq!(
            url,
            "https://api.marketdata.app/v1/stocks/candles/D/AAPL/?format=json&dateformat=timestamp"
        );
    }

    #[test]
    fn test_params_preserve_insertion_order() {
        let mut params = QueryParams::new();
        params.push("country", "US");
        params.push("from", "2023-01-01");
        params.push("countback", 30);

        let url = build_url("https://example.test/v1/candles/", &[], &params);
        assert!(url.ends_with(
            "?format=json&dateformat=timestamp&country=US&from=2023-01-01&countback=30"
        ));
    }

    #[test]
    fn test_absent_params_are_omitted() {
        let mut params = QueryParams::new();
        params.push_opt("exchange", None::<&str>);
        params.push_opt_date("from", None);
        params.push_opt_bool("extended", None);
        assert!(params.is_empty());

        let url = build_url("https://example.test/v1/candles/", &[], &params);
        assert!(!url.contains("exchange"));
        assert!(!url.contains("from"));
        assert!(!url.contains("extended"));
    }

    #[test]
    fn test_explicit_false_is_emitted() {
        let mut params = QueryParams::new();
        params.push_opt_bool("extended", Some(false));
        params.push_opt_bool("adjustsplits", Some(true));

        let url = build_url("https://example.test/v1/candles/", &[], &params);
        assert!(url.contains("extended=false"));
        assert!(url.contains("adjustsplits=true"));
    }

    #[test]
    fn test_date_params_use_iso_form() {
        let mut params = QueryParams::new();
        params.push_opt_date(
            "from",
            Some(NaiveDate::from_ymd_opt(2023, 2, 10).unwrap()),
        );
        assert!(build_url("https://example.test/", &[], &params).contains("from=2023-02-10"));
    }

    #[test]
    fn test_segments_and_values_are_percent_encoded() {
        let mut params = QueryParams::new();
        params.push("exchange", "NEO X");

        let url = build_url("https://example.test/v1/candles/", &["D", "BRK.A/B"], &params);
        assert!(url.contains("/D/BRK.A%2FB/"));
        assert!(url.contains("exchange=NEO%20X"));
    }

    #[test]
    fn test_missing_trailing_slash_is_repaired() {
        let url = build_url("https://example.test/v1/quotes", &["AAPL"], &QueryParams::new());
        assert_eq!(
            url,
            "https://example.test/v1/quotes/AAPL/?format=json&dateformat=timestamp"
        );
    }
}
