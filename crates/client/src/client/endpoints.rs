//! Operation to base-URL registry.

use std::collections::HashMap;

/// The API operations this client can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    MarketStatus,
    StockCandles,
    StockQuote,
    IndexCandles,
    IndexQuote,
    OptionQuote,
    OptionExpirations,
    OptionStrikes,
    OptionChain,
}

impl EndpointKind {
    pub const ALL: [EndpointKind; 9] = [
        EndpointKind::MarketStatus,
        EndpointKind::StockCandles,
        EndpointKind::StockQuote,
        EndpointKind::IndexCandles,
        EndpointKind::IndexQuote,
        EndpointKind::OptionQuote,
        EndpointKind::OptionExpirations,
        EndpointKind::OptionStrikes,
        EndpointKind::OptionChain,
    ];

    /// Configuration key naming this operation in a `{api_name: base_url}`
    /// override mapping.
    pub fn api_name(&self) -> &'static str {
        match self {
            Self::MarketStatus => "market_status",
            Self::StockCandles => "stock_candles",
            Self::StockQuote => "stock_quote",
            Self::IndexCandles => "index_candles",
            Self::IndexQuote => "index_quote",
            Self::OptionQuote => "option_quote",
            Self::OptionExpirations => "option_expirations",
            Self::OptionStrikes => "option_strikes",
            Self::OptionChain => "option_chain",
        }
    }

    /// Production base URL. All defaults end with `/` so path segments can
    /// be appended directly.
    fn default_url(&self) -> &'static str {
        match self {
            Self::MarketStatus => "https://api.marketdata.app/v1/markets/status/",
            Self::StockCandles => "https://api.marketdata.app/v1/stocks/candles/",
            Self::StockQuote => "https://api.marketdata.app/v1/stocks/quotes/",
            Self::IndexCandles => "https://api.marketdata.app/v1/indices/candles/",
            Self::IndexQuote => "https://api.marketdata.app/v1/indices/quotes/",
            Self::OptionQuote => "https://api.marketdata.app/v1/options/quotes/",
            Self::OptionExpirations => "https://api.marketdata.app/v1/options/expirations/",
            Self::OptionStrikes => "https://api.marketdata.app/v1/options/strikes/",
            Self::OptionChain => "https://api.marketdata.app/v1/options/chain/",
        }
    }
}

/// Read-only mapping from operation to base URL.
///
/// Built once at client construction, either from the production defaults
/// or from a pre-resolved configuration mapping merged over them.
#[derive(Debug, Clone)]
pub struct Endpoints {
    urls: HashMap<EndpointKind, String>,
}

impl Endpoints {
    /// Registry with the production marketdata.app v1 URLs.
    pub fn new() -> Self {
        let urls = EndpointKind::ALL
            .iter()
            .map(|kind| (*kind, kind.default_url().to_string()))
            .collect();
        Self { urls }
    }

    /// Merge a `{api_name: base_url}` mapping over the defaults.
    ///
    /// Keys that do not name a known operation are ignored.
    pub fn from_map(overrides: &HashMap<String, String>) -> Self {
        let mut endpoints = Self::new();
        for kind in EndpointKind::ALL {
            if let Some(url) = overrides.get(kind.api_name()) {
                endpoints.urls.insert(kind, url.clone());
            }
        }
        endpoints
    }

    /// Base URL for the given operation.
    pub fn url(&self, kind: EndpointKind) -> &str {
        self.urls
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_url())
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new()
    }
}
