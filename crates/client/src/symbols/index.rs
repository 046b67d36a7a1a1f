use crate::client::endpoints::EndpointKind;
use crate::client::query::QueryParams;
use crate::client::{ApiClient, Outcome};
use crate::errors::MarketDataError;
use crate::models::{Candle, IndexCandleParams, Quote, QuoteParams, SymbolKind};
use crate::response::{normalize_candles, normalize_quote};

use super::Instrument;

/// A market index such as `SPX`, `DJI` or `VIX`.
#[derive(Clone)]
pub struct Index {
    client: ApiClient,
    symbol: String,
}

impl Index {
    pub fn new(client: &ApiClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
        }
    }

    /// Historical index values at the given resolution. Index feeds report
    /// no volume, so every row's `volume` is `None`.
    pub async fn candles(
        &self,
        resolution: &str,
        params: &IndexCandleParams,
    ) -> Result<Option<Vec<Candle>>, MarketDataError> {
        let mut query = QueryParams::new();
        params.apply(&mut query);

        let segments = [resolution, self.symbol.as_str()];
        match self
            .client
            .request(EndpointKind::IndexCandles, &segments, &query)
            .await?
        {
            Outcome::Payload(body) => Ok(Some(normalize_candles(&self.symbol, &body)?)),
            Outcome::NoData => Ok(None),
        }
    }

    /// Real-time index value quote.
    pub async fn quote(&self, params: &QuoteParams) -> Result<Option<Quote>, MarketDataError> {
        let mut query = QueryParams::new();
        params.apply(&mut query);

        let segments = [self.symbol.as_str()];
        match self
            .client
            .request(EndpointKind::IndexQuote, &segments, &query)
            .await?
        {
            Outcome::Payload(body) => Ok(Some(normalize_quote(&body)?)),
            Outcome::NoData => Ok(None),
        }
    }
}

impl Instrument for Index {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn kind(&self) -> SymbolKind {
        SymbolKind::Index
    }
}
