use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::symbol::OptionType;

/// One contract row of an option chain.
///
/// The chain table has a fixed 26-column schema; unlike [`Quote`], absent
/// values serialize as explicit `null` so every row carries every column.
/// Field order is the column order.
///
/// [`Quote`]: crate::models::Quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionChainRow {
    pub updated: Option<DateTime<Utc>>,
    /// OCC symbol of the contract. Always present; it drives the row count
    /// during normalization.
    pub option_symbol: String,
    pub underlying: Option<String>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub option_type: Option<OptionType>,
    pub strike_price: Option<Decimal>,
    pub first_traded_date: Option<DateTime<Utc>>,
    pub dte: Option<i32>,
    pub bid: Option<Decimal>,
    pub bid_size: Option<u64>,
    pub mid: Option<Decimal>,
    pub ask: Option<Decimal>,
    pub ask_size: Option<u64>,
    pub last_price: Option<Decimal>,
    pub open_interest: Option<u64>,
    pub volume: Option<u64>,
    pub in_the_money: Option<bool>,
    pub intrinsic_value: Option<Decimal>,
    // serialized spelling kept for compatibility with existing consumers
    #[serde(rename = "extrnisic_value")]
    pub extrinsic_value: Option<Decimal>,
    pub underlying_price: Option<Decimal>,
    pub iv: Option<f64>,
    pub delta: Option<f64>,
    pub gamma: Option<f64>,
    pub theta: Option<f64>,
    pub vega: Option<f64>,
    pub rho: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bare_row() -> OptionChainRow {
        OptionChainRow {
            updated: None,
            option_symbol: "AAPL230120C00150000".to_string(),
            underlying: Some("AAPL".to_string()),
            expiry_date: None,
            option_type: Some(OptionType::Call),
            strike_price: Some(dec!(150)),
            first_traded_date: None,
            dte: Some(18),
            bid: None,
            bid_size: None,
            mid: None,
            ask: None,
            ask_size: None,
            last_price: None,
            open_interest: None,
            volume: None,
            in_the_money: None,
            intrinsic_value: None,
            extrinsic_value: None,
            underlying_price: None,
            iv: None,
            delta: None,
            gamma: None,
            theta: None,
            vega: None,
            rho: None,
        }
    }

    #[test]
    fn test_row_always_emits_all_26_columns() {
        let json = serde_json::to_value(bare_row()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 26);
        assert!(object.get("bid").unwrap().is_null());
        assert_eq!(object.get("option_type").unwrap(), "call");
    }

    #[test]
    fn test_extrinsic_column_spelling() {
        let mut row = bare_row();
        row.extrinsic_value = Some(dec!(1.25));

        let text = serde_json::to_string(&row).unwrap();
        assert!(text.contains("\"extrnisic_value\":1.25"));
        assert!(!text.contains("\"extrinsic_value\""));
    }

    #[test]
    fn test_columns_serialize_in_table_order() {
        let text = serde_json::to_string(&bare_row()).unwrap();
        let updated = text.find("\"updated\"").unwrap();
        let symbol = text.find("\"option_symbol\"").unwrap();
        let rho = text.find("\"rho\"").unwrap();
        assert!(updated < symbol);
        assert!(symbol < rho);
    }
}
