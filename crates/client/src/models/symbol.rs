use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

/// Kind of instrument a symbol refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Stock,
    Index,
    Option,
}

/// Call or put side of an option contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Single-letter side marker used inside OCC option symbols.
    pub fn occ_letter(&self) -> char {
        match self {
            Self::Call => 'C',
            Self::Put => 'P',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = MarketDataError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "call" | "c" => Ok(Self::Call),
            "put" | "p" => Ok(Self::Put),
            _ => Err(MarketDataError::InvalidOptionType {
                value: value.to_string(),
            }),
        }
    }
}

/// Build the 21-character OCC symbol for an option contract.
///
/// Layout is `<underlying><YYMMDD><C|P><strike>` where the strike is the
/// price in thousandths of a dollar, rounded half away from zero and
/// zero-padded to eight digits. `AAPL` expiring 2026-01-16, call, strike
/// 150 becomes `AAPL260116C00150000`.
///
/// Returns [`MarketDataError::InvalidStrikePrice`] when the strike is
/// negative or too large for the eight-digit field.
pub fn build_occ_symbol(
    underlying: &str,
    expiration: NaiveDate,
    option_type: OptionType,
    strike: Decimal,
) -> Result<String, MarketDataError> {
    let thousandths = (strike * Decimal::from(1000))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let field = thousandths
        .to_i64()
        .filter(|value| (0..=99_999_999).contains(value))
        .ok_or(MarketDataError::InvalidStrikePrice { strike })?;

    Ok(format!(
        "{}{}{}{:08}",
        underlying,
        expiration.format("%y%m%d"),
        option_type.occ_letter(),
        field
    ))
}
