//! Instrument types
//!
//! The three instrument kinds the API serves, each a thin value holding a
//! cloned [`ApiClient`] handle:
//! - `stock` - equities (Stock)
//! - `index` - indices (Index)
//! - `option` - option contracts with a derived OCC symbol (OptionContract)
//!
//! [`ApiClient`]: crate::client::ApiClient

mod index;
mod option;
mod stock;

pub use index::Index;
pub use option::OptionContract;
pub use stock::Stock;

use crate::models::SymbolKind;

/// Accessors shared by every instrument kind.
pub trait Instrument {
    /// The symbol requests are made with: the ticker for stocks and
    /// indices, the OCC symbol for option contracts.
    fn symbol(&self) -> &str;

    fn kind(&self) -> SymbolKind;

    /// Symbol used by underlying-keyed endpoints (expirations, strikes,
    /// chain). Identical to [`symbol`](Self::symbol) except for option
    /// contracts.
    fn underlying(&self) -> &str {
        self.symbol()
    }
}
