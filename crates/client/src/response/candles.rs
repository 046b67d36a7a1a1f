use rust_decimal::Decimal;
use serde::Deserialize;

use super::{parse_payload, timestamp_utc};
use crate::errors::MarketDataError;
use crate::models::Candle;

#[derive(Deserialize)]
struct CandlePayload {
    t: Vec<i64>,
    o: Vec<Decimal>,
    h: Vec<Decimal>,
    l: Vec<Decimal>,
    c: Vec<Decimal>,
    // index feeds carry no volume array at all
    #[serde(default)]
    v: Option<Vec<u64>>,
}

/// Turn a candle body's parallel arrays into rows, one per timestamp.
///
/// `symbol` is stamped into every row from the request; the wire format
/// does not echo it. All required arrays must match the length of `t`.
pub fn normalize_candles(symbol: &str, body: &[u8]) -> Result<Vec<Candle>, MarketDataError> {
    let payload: CandlePayload = parse_payload(body)?;

    let len = payload.t.len();
    let lengths = [
        ("o", payload.o.len()),
        ("h", payload.h.len()),
        ("l", payload.l.len()),
        ("c", payload.c.len()),
        ("v", payload.v.as_ref().map_or(len, Vec::len)),
    ];
    for (name, actual) in lengths {
        if actual != len {
            return Err(MarketDataError::MalformedResponse {
                reason: format!(
                    "candle array '{}' has length {} but 't' has {}",
                    name, actual, len
                ),
            });
        }
    }

    let mut rows = Vec::with_capacity(len);
    for i in 0..len {
        rows.push(Candle {
            symbol: symbol.to_string(),
            date: timestamp_utc(payload.t[i])?,
            close: payload.c[i],
            high: payload.h[i],
            low: payload.l[i],
            open: payload.o[i],
            volume: payload.v.as_ref().map(|v| v[i]),
        });
    }
    Ok(rows)
}
