use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One quote observation for a stock, index, or option contract.
///
/// The three instrument kinds share this schema; fields the feed does not
/// report for a given kind (greeks for stocks, sizes for indices) stay
/// `None` and are dropped when the row is serialized. Field order is the
/// table column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ask: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ask_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
    #[serde(rename = "52_week_high", skip_serializing_if = "Option::is_none")]
    pub week_52_high: Option<Decimal>,
    #[serde(rename = "52_week_low", skip_serializing_if = "Option::is_none")]
    pub week_52_low: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_interest: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlying_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_the_money: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intrinsic_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extrinsic_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iv: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gamma: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vega: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rho: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_absent_columns_dropped_from_serialized_row() {
        let quote = Quote {
            updated: Utc.timestamp_opt(1672756200, 0).single(),
            symbol: Some("AAPL".to_string()),
            bid: Some(dec!(125.03)),
            ask: Some(dec!(125.05)),
            ..Quote::default()
        };

        let json = serde_json::to_value(&quote).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert!(object.contains_key("bid"));
        // option-only analytics never appear for a stock quote
        assert!(!object.contains_key("delta"));
        assert!(!object.contains_key("open_interest"));
    }

    #[test]
    fn test_52_week_columns_use_table_names() {
        let quote = Quote {
            week_52_high: Some(dec!(198.23)),
            week_52_low: Some(dec!(124.17)),
            ..Quote::default()
        };

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json.get("52_week_high").unwrap().as_f64(), Some(198.23));
        assert_eq!(json.get("52_week_low").unwrap().as_f64(), Some(124.17));
    }
}
