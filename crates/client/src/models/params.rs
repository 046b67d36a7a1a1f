//! Per-operation request filters.
//!
//! Every field is optional and omitted from the query string when unset;
//! explicit `Some(false)` is sent as a literal `false`. Each struct knows
//! the wire names and emission order of its own parameters.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::client::query::QueryParams;
use crate::models::symbol::OptionType;

/// Filters for stock candle requests.
#[derive(Debug, Clone, Default)]
pub struct StockCandleParams {
    /// Leftmost candle (inclusive).
    pub from: Option<NaiveDate>,
    /// Rightmost candle (exclusive).
    pub to: Option<NaiveDate>,
    /// Number of candles before `to`; alternative to `from`.
    pub countback: Option<u32>,
    /// Exchange acronym or MIC code when the symbol quotes on several.
    pub exchange: Option<String>,
    /// Include extended-hours sessions in intraday candles.
    pub extended: Option<bool>,
    /// Exchange country override; falls back to the instrument's country.
    pub country: Option<String>,
    /// Adjust for splits and reverse splits (wire name `adjustsplits`).
    pub adjust_splits: Option<bool>,
    /// Adjust for dividends (wire name `adjustdividends`).
    pub adjust_dividends: Option<bool>,
}

impl StockCandleParams {
    pub(crate) fn apply(&self, query: &mut QueryParams, default_country: &str) {
        // country is always sent, unlike every other parameter
        query.push("country", self.country.as_deref().unwrap_or(default_country));
        query.push_opt_date("from", self.from);
        query.push_opt_date("to", self.to);
        query.push_opt("countback", self.countback);
        query.push_opt("exchange", self.exchange.as_deref());
        query.push_opt_bool("extended", self.extended);
        query.push_opt_bool("adjustsplits", self.adjust_splits);
        query.push_opt_bool("adjustdividends", self.adjust_dividends);
    }
}

/// Filters for index candle requests.
#[derive(Debug, Clone, Default)]
pub struct IndexCandleParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub countback: Option<u32>,
}

impl IndexCandleParams {
    pub(crate) fn apply(&self, query: &mut QueryParams) {
        query.push_opt_date("from", self.from);
        query.push_opt_date("to", self.to);
        query.push_opt("countback", self.countback);
    }
}

/// Filters for stock and index quote requests.
#[derive(Debug, Clone, Default)]
pub struct QuoteParams {
    /// Include 52-week high/low columns (wire name `52week`).
    pub fifty_two_week: Option<bool>,
}

impl QuoteParams {
    pub(crate) fn apply(&self, query: &mut QueryParams) {
        query.push_opt_bool("52week", self.fifty_two_week);
    }
}

/// Filters for a single option quote.
#[derive(Debug, Clone, Default)]
pub struct OptionQuoteParams {
    /// Historical end-of-day quote from this trading day instead of live.
    pub date: Option<NaiveDate>,
}

impl OptionQuoteParams {
    pub(crate) fn apply(&self, query: &mut QueryParams) {
        query.push_opt_date("date", self.date);
    }
}

/// Date window for an option quote series.
#[derive(Debug, Clone, Default)]
pub struct OptionQuoteHistoryParams {
    /// Oldest quote to return (inclusive).
    pub from: Option<NaiveDate>,
    /// Newest quote to return (exclusive).
    pub to: Option<NaiveDate>,
}

impl OptionQuoteHistoryParams {
    pub(crate) fn apply(&self, query: &mut QueryParams) {
        query.push_opt_date("from", self.from);
        query.push_opt_date("to", self.to);
    }
}

/// Filters for expiration-date listings.
#[derive(Debug, Clone, Default)]
pub struct ExpirationsParams {
    /// Only expirations with this strike.
    pub strike: Option<Decimal>,
    /// Historical listing as of this trading day.
    pub date: Option<NaiveDate>,
}

impl ExpirationsParams {
    pub(crate) fn apply(&self, query: &mut QueryParams) {
        query.push_opt("strike", self.strike);
        query.push_opt_date("date", self.date);
    }
}

/// Filters for strike-price listings.
#[derive(Debug, Clone, Default)]
pub struct StrikesParams {
    /// Only strikes for this expiration date.
    pub expiration: Option<NaiveDate>,
    /// Historical listing as of this trading day.
    pub date: Option<NaiveDate>,
}

impl StrikesParams {
    pub(crate) fn apply(&self, query: &mut QueryParams) {
        query.push_opt_date("expiration", self.expiration);
        query.push_opt_date("date", self.date);
    }
}

/// Strike position relative to the underlying price (wire name `range`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moneyness {
    InTheMoney,
    OutOfTheMoney,
    All,
}

impl Moneyness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InTheMoney => "itm",
            Self::OutOfTheMoney => "otm",
            Self::All => "all",
        }
    }
}

impl fmt::Display for Moneyness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Filters for option chain requests.
#[derive(Debug, Clone, Default)]
pub struct OptionChainParams {
    /// Historical chain as of this trading day instead of live.
    pub date: Option<NaiveDate>,
    /// Only contracts expiring on this date.
    pub expiration: Option<NaiveDate>,
    /// Expiration window start when selecting several expirations.
    pub from: Option<NaiveDate>,
    /// Expiration window end.
    pub to: Option<NaiveDate>,
    /// Only contracts expiring in this calendar month (1-12).
    pub month: Option<u32>,
    /// Only contracts expiring in this year.
    pub year: Option<u32>,
    /// Include weekly expirations.
    pub weekly: Option<bool>,
    /// Include monthly expirations.
    pub monthly: Option<bool>,
    /// Include quarterly expirations.
    pub quarterly: Option<bool>,
    /// Only contracts with this many days to expiry.
    pub dte: Option<u32>,
    /// Single strike closest to this delta.
    pub delta: Option<Decimal>,
    /// Calls only or puts only.
    pub side: Option<OptionType>,
    /// Strike position filter (wire name `range`).
    pub moneyness: Option<Moneyness>,
    /// Only contracts with this strike price.
    pub strike: Option<Decimal>,
    /// Cap on the number of strikes per side (wire name `strikeLimit`).
    pub strike_limit: Option<u32>,
    /// Minimum open interest (wire name `minOpenInterest`).
    pub min_open_interest: Option<u64>,
    /// Minimum volume (wire name `minVolume`).
    pub min_volume: Option<u64>,
    /// Minimum liquidity (wire name `minLiquidity`).
    pub min_liquidity: Option<u64>,
    /// Maximum bid-ask spread in dollars (wire name `maxBidAskSpread`).
    pub max_bid_ask_spread: Option<Decimal>,
    /// Maximum spread as a percentage of the underlying
    /// (wire name `maxBidAskSpreadPct`).
    pub max_bid_ask_spread_pct: Option<Decimal>,
}

impl OptionChainParams {
    pub(crate) fn apply(&self, query: &mut QueryParams) {
        query.push_opt_date("date", self.date);
        query.push_opt_date("expiration", self.expiration);
        query.push_opt_date("from", self.from);
        query.push_opt_date("to", self.to);
        query.push_opt("month", self.month);
        query.push_opt("year", self.year);
        query.push_opt_bool("weekly", self.weekly);
        query.push_opt_bool("monthly", self.monthly);
        query.push_opt_bool("quarterly", self.quarterly);
        query.push_opt("dte", self.dte);
        query.push_opt("delta", self.delta);
        query.push_opt("side", self.side);
        query.push_opt("range", self.moneyness);
        query.push_opt("strike", self.strike);
        query.push_opt("strikeLimit", self.strike_limit);
        query.push_opt("minOpenInterest", self.min_open_interest);
        query.push_opt("minVolume", self.min_volume);
        query.push_opt("minLiquidity", self.min_liquidity);
        query.push_opt("maxBidAskSpread", self.max_bid_ask_spread);
        query.push_opt("maxBidAskSpreadPct", self.max_bid_ask_spread_pct);
    }
}

/// Filters for market status calendars.
#[derive(Debug, Clone, Default)]
pub struct MarketStatusParams {
    /// Two-letter ISO 3166 country code; `US` when unset.
    pub country: Option<String>,
    /// Status on one specific date.
    pub date: Option<NaiveDate>,
    /// Earliest date (inclusive).
    pub from: Option<NaiveDate>,
    /// Last date (inclusive).
    pub to: Option<NaiveDate>,
    /// Number of dates before `to`; alternative to `from`.
    pub countback: Option<u32>,
}

impl MarketStatusParams {
    pub(crate) fn apply(&self, query: &mut QueryParams) {
        // country is always sent, US assumed when unset
        query.push("country", self.country.as_deref().unwrap_or("US"));
        query.push_opt_date("date", self.date);
        query.push_opt_date("from", self.from);
        query.push_opt_date("to", self.to);
        query.push_opt("countback", self.countback);
    }
}
