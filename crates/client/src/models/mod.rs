//! Market data models
//!
//! This module contains the typed rows and request filters:
//! - `symbol` - SymbolKind/OptionType enums and OCC option symbol derivation
//! - `candle` - OHLCV candle row (Candle)
//! - `quote` - Shared quote row for stocks, indices and options (Quote)
//! - `option_chain` - Fixed 26-column option chain row (OptionChainRow)
//! - `strikes` - Flattened (expiration, strike) row (StrikeRow)
//! - `market_status` - Exchange calendar row (MarketStatusRow)
//! - `params` - Per-operation request filters

mod candle;
mod market_status;
mod option_chain;
mod params;
mod quote;
mod strikes;
mod symbol;

pub use candle::Candle;
pub use market_status::MarketStatusRow;
pub use option_chain::OptionChainRow;
pub use params::{
    ExpirationsParams, IndexCandleParams, MarketStatusParams, Moneyness, OptionChainParams,
    OptionQuoteHistoryParams, OptionQuoteParams, QuoteParams, StockCandleParams, StrikesParams,
};
pub use quote::Quote;
pub use strikes::StrikeRow;
pub use symbol::{build_occ_symbol, OptionType, SymbolKind};
