use crate::client::endpoints::EndpointKind;
use crate::client::query::QueryParams;
use crate::client::{ApiClient, Outcome};
use crate::errors::MarketDataError;
use crate::models::{Candle, Quote, QuoteParams, StockCandleParams, SymbolKind};
use crate::response::{normalize_candles, normalize_quote};

use super::Instrument;

/// An equity instrument.
#[derive(Clone)]
pub struct Stock {
    client: ApiClient,
    symbol: String,
    country: String,
}

impl Stock {
    /// Stock on a US exchange.
    pub fn new(client: &ApiClient, symbol: impl Into<String>) -> Self {
        Self::with_country(client, symbol, "US")
    }

    /// Stock on an exchange in the given two-letter ISO 3166 country.
    pub fn with_country(
        client: &ApiClient,
        symbol: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            country: country.into(),
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Historical price candles at the given resolution (`D`, `5`, `1H`,
    /// `W`, ...). `Ok(None)` when the server reports no data for the
    /// window.
    pub async fn candles(
        &self,
        resolution: &str,
        params: &StockCandleParams,
    ) -> Result<Option<Vec<Candle>>, MarketDataError> {
        let mut query = QueryParams::new();
        params.apply(&mut query, &self.country);

        let segments = [resolution, self.symbol.as_str()];
        match self
            .client
            .request(EndpointKind::StockCandles, &segments, &query)
            .await?
        {
            Outcome::Payload(body) => Ok(Some(normalize_candles(&self.symbol, &body)?)),
            Outcome::NoData => Ok(None),
        }
    }

    /// Real-time quote.
    pub async fn quote(&self, params: &QuoteParams) -> Result<Option<Quote>, MarketDataError> {
        let mut query = QueryParams::new();
        params.apply(&mut query);

        let segments = [self.symbol.as_str()];
        match self
            .client
            .request(EndpointKind::StockQuote, &segments, &query)
            .await?
        {
            Outcome::Payload(body) => Ok(Some(normalize_quote(&body)?)),
            Outcome::NoData => Ok(None),
        }
    }
}

impl Instrument for Stock {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn kind(&self) -> SymbolKind {
        SymbolKind::Stock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedTransport;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn client_with(transport: &ScriptedTransport) -> ApiClient {
        ApiClient::with_transport("TEST_TOKEN", Box::new(transport.clone()))
    }

    #[tokio::test]
    async fn test_candles_url_has_resolution_and_symbol_segments() {
        let transport = ScriptedTransport::new();
        transport.push_json(
            r#"{"s":"ok","t":[100,200],"o":[1.0,1.1],"h":[1.2,1.3],"l":[0.9,1.0],"c":[1.1,1.2],"v":[10,20]}"#,
            &[],
        );
        let client = client_with(&transport);
        let stock = Stock::new(&client, "AAPL");

        let params = StockCandleParams {
            from: NaiveDate::from_ymd_opt(2023, 1, 2),
            to: NaiveDate::from_ymd_opt(2023, 1, 31),
            ..StockCandleParams::default()
        };
        let rows = stock.candles("D", &params).await.unwrap().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].symbol, "AAPL");
        assert_eq!(rows[0].close, dec!(1.1));

        let requests = transport.requests();
        assert_eq!(
            requests[0].url,
            "https://api.marketdata.app/v1/stocks/candles/D/AAPL/?format=json&dateformat=timestamp&country=US&from=2023-01-02&to=2023-01-31"
        );
    }

    #[tokio::test]
    async fn test_quote_uses_symbol_segment_and_52week_param() {
        let transport = ScriptedTransport::new();
        transport.push_json(
            r#"{"s":"ok","symbol":["AAPL"],"bid":[149.07],"ask":[149.08],"52weekHigh":[179.61],"52weekLow":[124.17],"updated":[1663958092]}"#,
            &[],
        );
        let client = client_with(&transport);
        let stock = Stock::new(&client, "AAPL");

        let params = QuoteParams {
            fifty_two_week: Some(true),
        };
        let quote = stock.quote(&params).await.unwrap().unwrap();

        assert_eq!(quote.symbol.as_deref(), Some("AAPL"));
        assert_eq!(quote.week_52_high, Some(dec!(179.61)));

        let requests = transport.requests();
        assert_eq!(
            requests[0].url,
            "https://api.marketdata.app/v1/stocks/quotes/AAPL/?format=json&dateformat=timestamp&52week=true"
        );
    }

    #[tokio::test]
    async fn test_no_data_candles_are_none() {
        let transport = ScriptedTransport::new();
        transport.push_json(r#"{"s":"no_data"}"#, &[]);
        let client = client_with(&transport);
        let stock = Stock::with_country(&client, "SHOP", "CA");

        let result = stock.candles("D", &StockCandleParams::default()).await;
        assert!(matches!(result, Ok(None)));

        // the instrument's country rides along by default
        let requests = transport.requests();
        assert!(requests[0].url.contains("country=CA"));
    }

    #[test]
    fn test_instrument_accessors() {
        let client = ApiClient::with_transport("t", Box::new(ScriptedTransport::new()));
        let stock = Stock::new(&client, "MSFT");

        assert_eq!(stock.symbol(), "MSFT");
        assert_eq!(stock.underlying(), "MSFT");
        assert_eq!(stock.kind(), SymbolKind::Stock);
        assert_eq!(stock.country(), "US");
    }
}
