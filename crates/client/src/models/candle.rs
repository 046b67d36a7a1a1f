use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One OHLCV observation for a fixed time bucket.
///
/// Field order is the table column order. Candle rows always carry the full
/// schema: `volume` is `null` for feeds that do not report it (index
/// candles) rather than being dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Symbol of the requested instrument. The wire format does not echo it
    /// per row, so it is stamped in from the request.
    pub symbol: String,
    /// Bucket timestamp.
    pub date: DateTime<Utc>,
    pub close: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub open: Decimal,
    pub volume: Option<u64>,
}
