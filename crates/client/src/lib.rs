//! Marketdata Client Crate
//!
//! This crate is a typed client for the marketdata.app market data API.
//!
//! # Overview
//!
//! The client supports:
//! - Three instrument kinds: stocks, indices and option contracts
//! - Candle series, quotes, option expirations/strikes/chains and market
//!   status calendars, normalized into fixed-schema typed rows
//! - Server-authoritative rate-limit tracking shared by every instrument
//!   cloned from one client
//! - Deterministic OCC option symbol derivation
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  Stock / Index / | --> |   QueryParams    |  (filters -> URL)
//! |  OptionContract  |     +------------------+
//! +------------------+              |
//!          |                        v
//!          |               +------------------+
//!          +-------------> |    ApiClient     |  (quota gate, auth, send)
//!                          +------------------+
//!                                   |
//!                                   v
//!                          +------------------+
//!                          |  HttpTransport   |  (reqwest behind a trait)
//!                          +------------------+
//!                                   |
//!                                   v
//!                          +------------------+
//!                          | classify + rows  |  (ok / no_data / error)
//!                          +------------------+
//! ```
//!
//! Every operation resolves to `Result<Option<T>, MarketDataError>`:
//! `Ok(Some(rows))` on data, `Ok(None)` when the server answers `no_data`,
//! and an error for everything else. The server's "nothing matched" is not
//! an error condition.
//!
//! # Example
//!
//! ```no_run
//! use marketdata_client::{ApiClient, Stock, StockCandleParams};
//!
//! # async fn run() -> Result<(), marketdata_client::MarketDataError> {
//! let client = ApiClient::new("your-token");
//! let stock = Stock::new(&client, "AAPL");
//!
//! if let Some(candles) = stock.candles("D", &StockCandleParams::default()).await? {
//!     for candle in candles {
//!         println!("{} {} close {}", candle.symbol, candle.date, candle.close);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Core Types
//!
//! - [`ApiClient`] - shared handle: endpoints, auth token, quota state
//! - [`Stock`], [`Index`], [`OptionContract`] - instrument values
//! - [`Candle`], [`Quote`], [`OptionChainRow`], [`StrikeRow`],
//!   [`MarketStatusRow`] - normalized rows
//! - [`RateLimitStatus`] - last quota snapshot reported by the API
//! - [`MarketDataError`] - everything that can go wrong, one enum

pub mod client;
pub mod errors;
pub mod models;
pub mod response;
pub mod symbols;

#[cfg(test)]
pub(crate) mod testing;

// Re-export the client surface
pub use client::endpoints::{EndpointKind, Endpoints};
pub use client::rate_limit::RateLimitStatus;
pub use client::transport::{HttpTransport, RawResponse, ReqwestTransport};
pub use client::ApiClient;

// Re-export errors
pub use errors::{MarketDataError, TransportError};

// Re-export all public types from models
pub use models::{
    build_occ_symbol, Candle, ExpirationsParams, IndexCandleParams, MarketStatusParams,
    MarketStatusRow, Moneyness, OptionChainParams, OptionChainRow, OptionQuoteHistoryParams,
    OptionQuoteParams, OptionType, Quote, QuoteParams, StockCandleParams, StrikeRow,
    StrikesParams, SymbolKind,
};

// Re-export instrument types
pub use symbols::{Index, Instrument, OptionContract, Stock};
