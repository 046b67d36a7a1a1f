use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One (expiration, strike) pair from the strikes listing.
///
/// The wire format groups strikes under expiration-date keys; normalization
/// flattens the map into rows, one per strike, preserving source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeRow {
    /// Expiration date as reported, `YYYY-MM-DD`.
    pub expiration: String,
    pub strike_price: Decimal,
}
