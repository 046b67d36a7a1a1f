use rust_decimal::Decimal;
use serde::Deserialize;

use super::{optional_timestamp, parse_payload};
use crate::errors::MarketDataError;
use crate::models::Quote;

/// Quote wire shape: per-field parallel arrays with nullable elements. A
/// live quote has single-element arrays; a historical series has one
/// element per trading day. Fields a feed does not report are simply
/// absent. Option quotes carry `optionSymbol` instead of `symbol`, which
/// this schema does not map; their `symbol` column stays empty as it always
/// has in the table output.
#[derive(Deserialize, Default)]
#[serde(default)]
struct QuotePayload {
    updated: Vec<Option<i64>>,
    symbol: Vec<Option<String>>,
    bid: Vec<Option<Decimal>>,
    #[serde(rename = "bidSize")]
    bid_size: Vec<Option<u64>>,
    mid: Vec<Option<Decimal>>,
    ask: Vec<Option<Decimal>>,
    #[serde(rename = "askSize")]
    ask_size: Vec<Option<u64>>,
    last: Vec<Option<Decimal>>,
    volume: Vec<Option<u64>>,
    #[serde(rename = "52weekHigh")]
    week_52_high: Vec<Option<Decimal>>,
    #[serde(rename = "52weekLow")]
    week_52_low: Vec<Option<Decimal>>,
    #[serde(rename = "openInterest")]
    open_interest: Vec<Option<u64>>,
    #[serde(rename = "underlyingPrice")]
    underlying_price: Vec<Option<Decimal>>,
    #[serde(rename = "inTheMoney")]
    in_the_money: Vec<Option<bool>>,
    #[serde(rename = "intrinsicValue")]
    intrinsic_value: Vec<Option<Decimal>>,
    #[serde(rename = "extrinsicValue")]
    extrinsic_value: Vec<Option<Decimal>>,
    iv: Vec<Option<f64>>,
    delta: Vec<Option<f64>>,
    gamma: Vec<Option<f64>>,
    theta: Vec<Option<f64>>,
    vega: Vec<Option<f64>>,
    rho: Vec<Option<f64>>,
}

fn at<T: Clone>(column: &[Option<T>], index: usize) -> Option<T> {
    column.get(index).cloned().flatten()
}

fn rows(payload: &QuotePayload) -> Result<Vec<Quote>, MarketDataError> {
    // `updated` is present in every quote response and drives the row count
    let len = payload.updated.len();
    if len == 0 {
        return Err(MarketDataError::MalformedResponse {
            reason: "quote body has no rows".to_string(),
        });
    }

    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        out.push(Quote {
            updated: optional_timestamp(at(&payload.updated, i))?,
            symbol: at(&payload.symbol, i),
            bid: at(&payload.bid, i),
            bid_size: at(&payload.bid_size, i),
            mid: at(&payload.mid, i),
            ask: at(&payload.ask, i),
            ask_size: at(&payload.ask_size, i),
            last: at(&payload.last, i),
            volume: at(&payload.volume, i),
            week_52_high: at(&payload.week_52_high, i),
            week_52_low: at(&payload.week_52_low, i),
            open_interest: at(&payload.open_interest, i),
            underlying_price: at(&payload.underlying_price, i),
            in_the_money: at(&payload.in_the_money, i),
            intrinsic_value: at(&payload.intrinsic_value, i),
            extrinsic_value: at(&payload.extrinsic_value, i),
            iv: at(&payload.iv, i),
            delta: at(&payload.delta, i),
            gamma: at(&payload.gamma, i),
            theta: at(&payload.theta, i),
            vega: at(&payload.vega, i),
            rho: at(&payload.rho, i),
        });
    }
    Ok(out)
}

/// Normalize a live or single-date quote body. Exactly one row: the first
/// index of every array.
pub fn normalize_quote(body: &[u8]) -> Result<Quote, MarketDataError> {
    let payload: QuotePayload = parse_payload(body)?;
    let mut all = rows(&payload)?;
    Ok(all.swap_remove(0))
}

/// Normalize a quote series body, one row per index.
pub fn normalize_quote_history(body: &[u8]) -> Result<Vec<Quote>, MarketDataError> {
    let payload: QuotePayload = parse_payload(body)?;
    rows(&payload)
}
