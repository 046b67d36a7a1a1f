use std::fmt;

use rust_decimal::Decimal;
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::{optional_timestamp, parse_payload};
use crate::errors::MarketDataError;
use crate::models::{OptionChainRow, OptionType, StrikeRow};

#[derive(Deserialize)]
struct ExpirationsPayload {
    expirations: Vec<String>,
}

/// Normalize an expirations body into an ordered list of date strings.
pub fn normalize_expirations(body: &[u8]) -> Result<Vec<String>, MarketDataError> {
    let payload: ExpirationsPayload = parse_payload(body)?;
    Ok(payload.expirations)
}

/// Strikes wire shape: a map from expiration-date keys to strike arrays,
/// alongside the `s`/`updated` bookkeeping fields. Key order matters for
/// row ordering, so this deserializes through a visitor that walks the
/// document instead of collecting into a sorted map.
struct StrikesPayload {
    by_expiration: Vec<(String, Vec<Decimal>)>,
}

impl<'de> Deserialize<'de> for StrikesPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StrikesVisitor;

        impl<'de> Visitor<'de> for StrikesVisitor {
            type Value = StrikesPayload;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of expiration dates to strike arrays")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut by_expiration = Vec::new();
                while let Some(key) = map.next_key::<String>()? {
                    if key == "s" || key == "updated" {
                        map.next_value::<IgnoredAny>()?;
                        continue;
                    }
                    by_expiration.push((key, map.next_value()?));
                }
                Ok(StrikesPayload { by_expiration })
            }
        }

        deserializer.deserialize_map(StrikesVisitor)
    }
}

/// Flatten a strikes body into one row per (expiration, strike) pair.
///
/// Row order is source order: each expiration in document key order, each
/// strike in its array order.
pub fn normalize_strikes(body: &[u8]) -> Result<Vec<StrikeRow>, MarketDataError> {
    let payload: StrikesPayload = parse_payload(body)?;

    let mut rows = Vec::new();
    for (expiration, strikes) in payload.by_expiration {
        for strike_price in strikes {
            rows.push(StrikeRow {
                expiration: expiration.clone(),
                strike_price,
            });
        }
    }
    Ok(rows)
}

/// Chain wire shape: per-column parallel arrays. `optionSymbol` is the one
/// required column and drives the row count; any other column may be absent
/// wholesale, in which case every row gets `None` for it.
#[derive(Deserialize, Default)]
#[serde(default)]
struct ChainPayload {
    #[serde(rename = "optionSymbol")]
    option_symbol: Option<Vec<String>>,
    updated: Option<Vec<Option<i64>>>,
    underlying: Option<Vec<Option<String>>>,
    expiration: Option<Vec<Option<i64>>>,
    side: Option<Vec<Option<String>>>,
    strike: Option<Vec<Option<Decimal>>>,
    #[serde(rename = "firstTraded")]
    first_traded: Option<Vec<Option<i64>>>,
    dte: Option<Vec<Option<i32>>>,
    bid: Option<Vec<Option<Decimal>>>,
    #[serde(rename = "bidSize")]
    bid_size: Option<Vec<Option<u64>>>,
    mid: Option<Vec<Option<Decimal>>>,
    ask: Option<Vec<Option<Decimal>>>,
    #[serde(rename = "askSize")]
    ask_size: Option<Vec<Option<u64>>>,
    last: Option<Vec<Option<Decimal>>>,
    #[serde(rename = "openInterest")]
    open_interest: Option<Vec<Option<u64>>>,
    volume: Option<Vec<Option<u64>>>,
    #[serde(rename = "inTheMoney")]
    in_the_money: Option<Vec<Option<bool>>>,
    #[serde(rename = "intrinsicValue")]
    intrinsic_value: Option<Vec<Option<Decimal>>>,
    #[serde(rename = "extrinsicValue")]
    extrinsic_value: Option<Vec<Option<Decimal>>>,
    #[serde(rename = "underlyingPrice")]
    underlying_price: Option<Vec<Option<Decimal>>>,
    iv: Option<Vec<Option<f64>>>,
    delta: Option<Vec<Option<f64>>>,
    gamma: Option<Vec<Option<f64>>>,
    theta: Option<Vec<Option<f64>>>,
    vega: Option<Vec<Option<f64>>>,
    rho: Option<Vec<Option<f64>>>,
}

fn column<T: Clone>(source: &Option<Vec<Option<T>>>, index: usize) -> Option<T> {
    source
        .as_ref()
        .and_then(|values| values.get(index).cloned().flatten())
}

/// Normalize an option chain body into fixed-schema rows, one per contract.
pub fn normalize_option_chain(body: &[u8]) -> Result<Vec<OptionChainRow>, MarketDataError> {
    let payload: ChainPayload = parse_payload(body)?;

    let symbols = payload
        .option_symbol
        .as_ref()
        .ok_or_else(|| MarketDataError::MalformedResponse {
            reason: "chain body missing 'optionSymbol'".to_string(),
        })?;
    let len = symbols.len();

    let lengths = [
        ("updated", payload.updated.as_ref().map(Vec::len)),
        ("underlying", payload.underlying.as_ref().map(Vec::len)),
        ("expiration", payload.expiration.as_ref().map(Vec::len)),
        ("side", payload.side.as_ref().map(Vec::len)),
        ("strike", payload.strike.as_ref().map(Vec::len)),
        ("firstTraded", payload.first_traded.as_ref().map(Vec::len)),
        ("dte", payload.dte.as_ref().map(Vec::len)),
        ("bid", payload.bid.as_ref().map(Vec::len)),
        ("bidSize", payload.bid_size.as_ref().map(Vec::len)),
        ("mid", payload.mid.as_ref().map(Vec::len)),
        ("ask", payload.ask.as_ref().map(Vec::len)),
        ("askSize", payload.ask_size.as_ref().map(Vec::len)),
        ("last", payload.last.as_ref().map(Vec::len)),
        ("openInterest", payload.open_interest.as_ref().map(Vec::len)),
        ("volume", payload.volume.as_ref().map(Vec::len)),
        ("inTheMoney", payload.in_the_money.as_ref().map(Vec::len)),
        (
            "intrinsicValue",
            payload.intrinsic_value.as_ref().map(Vec::len),
        ),
        (
            "extrinsicValue",
            payload.extrinsic_value.as_ref().map(Vec::len),
        ),
        (
            "underlyingPrice",
            payload.underlying_price.as_ref().map(Vec::len),
        ),
        ("iv", payload.iv.as_ref().map(Vec::len)),
        ("delta", payload.delta.as_ref().map(Vec::len)),
        ("gamma", payload.gamma.as_ref().map(Vec::len)),
        ("theta", payload.theta.as_ref().map(Vec::len)),
        ("vega", payload.vega.as_ref().map(Vec::len)),
        ("rho", payload.rho.as_ref().map(Vec::len)),
    ];
    for (name, actual) in lengths {
        if let Some(actual) = actual {
            if actual != len {
                return Err(MarketDataError::MalformedResponse {
                    reason: format!(
                        "chain array '{}' has length {} but 'optionSymbol' has {}",
                        name, actual, len
                    ),
                });
            }
        }
    }

    let mut rows = Vec::with_capacity(len);
    for i in 0..len {
        let option_type = match column(&payload.side, i) {
            Some(side) => Some(side.parse::<OptionType>().map_err(|_| {
                MarketDataError::MalformedResponse {
                    reason: format!("unknown option side '{}'", side),
                }
            })?),
            None => None,
        };

        rows.push(OptionChainRow {
            updated: optional_timestamp(column(&payload.updated, i))?,
            option_symbol: symbols[i].clone(),
            underlying: column(&payload.underlying, i),
            expiry_date: optional_timestamp(column(&payload.expiration, i))?,
            option_type,
            strike_price: column(&payload.strike, i),
            first_traded_date: optional_timestamp(column(&payload.first_traded, i))?,
            dte: column(&payload.dte, i),
            bid: column(&payload.bid, i),
            bid_size: column(&payload.bid_size, i),
            mid: column(&payload.mid, i),
            ask: column(&payload.ask, i),
            ask_size: column(&payload.ask_size, i),
            last_price: column(&payload.last, i),
            open_interest: column(&payload.open_interest, i),
            volume: column(&payload.volume, i),
            in_the_money: column(&payload.in_the_money, i),
            intrinsic_value: column(&payload.intrinsic_value, i),
            extrinsic_value: column(&payload.extrinsic_value, i),
            underlying_price: column(&payload.underlying_price, i),
            iv: column(&payload.iv, i),
            delta: column(&payload.delta, i),
            gamma: column(&payload.gamma, i),
            theta: column(&payload.theta, i),
            vega: column(&payload.vega, i),
            rho: column(&payload.rho, i),
        });
    }
    Ok(rows)
}
