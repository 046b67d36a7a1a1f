use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::client::endpoints::EndpointKind;
use crate::client::query::QueryParams;
use crate::client::{ApiClient, Outcome};
use crate::errors::MarketDataError;
use crate::models::{
    build_occ_symbol, ExpirationsParams, OptionChainParams, OptionChainRow,
    OptionQuoteHistoryParams, OptionQuoteParams, OptionType, Quote, StrikeRow, StrikesParams,
    SymbolKind,
};
use crate::response::{
    normalize_expirations, normalize_option_chain, normalize_quote, normalize_quote_history,
    normalize_strikes,
};

use super::Instrument;

/// A single option contract, identified by its OCC symbol.
///
/// The symbol is derived from the four contract components at construction
/// and never recomputed; construction fails on a strike the OCC format
/// cannot carry. Quote operations address the contract itself; the
/// expirations, strikes and chain listings are keyed by the underlying.
#[derive(Clone)]
pub struct OptionContract {
    client: ApiClient,
    underlying: String,
    expiration: NaiveDate,
    option_type: OptionType,
    strike: Decimal,
    occ_symbol: String,
}

impl OptionContract {
    pub fn new(
        client: &ApiClient,
        underlying: impl Into<String>,
        expiration: NaiveDate,
        option_type: OptionType,
        strike: Decimal,
    ) -> Result<Self, MarketDataError> {
        let underlying = underlying.into();
        let occ_symbol = build_occ_symbol(&underlying, expiration, option_type, strike)?;
        Ok(Self {
            client: client.clone(),
            underlying,
            expiration,
            option_type,
            strike,
            occ_symbol,
        })
    }

    pub fn occ_symbol(&self) -> &str {
        &self.occ_symbol
    }

    pub fn expiration(&self) -> NaiveDate {
        self.expiration
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    pub fn strike(&self) -> Decimal {
        self.strike
    }

    /// Live quote for this contract, or the end-of-day quote when
    /// [`OptionQuoteParams::date`] is set.
    pub async fn quote(
        &self,
        params: &OptionQuoteParams,
    ) -> Result<Option<Quote>, MarketDataError> {
        let mut query = QueryParams::new();
        params.apply(&mut query);

        let segments = [self.occ_symbol.as_str()];
        match self
            .client
            .request(EndpointKind::OptionQuote, &segments, &query)
            .await?
        {
            Outcome::Payload(body) => Ok(Some(normalize_quote(&body)?)),
            Outcome::NoData => Ok(None),
        }
    }

    /// End-of-day quote series over a date window, one row per trading day.
    pub async fn quote_history(
        &self,
        params: &OptionQuoteHistoryParams,
    ) -> Result<Option<Vec<Quote>>, MarketDataError> {
        let mut query = QueryParams::new();
        params.apply(&mut query);

        let segments = [self.occ_symbol.as_str()];
        match self
            .client
            .request(EndpointKind::OptionQuote, &segments, &query)
            .await?
        {
            Outcome::Payload(body) => Ok(Some(normalize_quote_history(&body)?)),
            Outcome::NoData => Ok(None),
        }
    }

    /// Expiration dates listed for the underlying.
    pub async fn expirations(
        &self,
        params: &ExpirationsParams,
    ) -> Result<Option<Vec<String>>, MarketDataError> {
        let mut query = QueryParams::new();
        params.apply(&mut query);

        let segments = [self.underlying.as_str()];
        match self
            .client
            .request(EndpointKind::OptionExpirations, &segments, &query)
            .await?
        {
            Outcome::Payload(body) => Ok(Some(normalize_expirations(&body)?)),
            Outcome::NoData => Ok(None),
        }
    }

    /// Strike prices listed for the underlying, flattened to one row per
    /// (expiration, strike) pair.
    pub async fn strikes(
        &self,
        params: &StrikesParams,
    ) -> Result<Option<Vec<StrikeRow>>, MarketDataError> {
        let mut query = QueryParams::new();
        params.apply(&mut query);

        let segments = [self.underlying.as_str()];
        match self
            .client
            .request(EndpointKind::OptionStrikes, &segments, &query)
            .await?
        {
            Outcome::Payload(body) => Ok(Some(normalize_strikes(&body)?)),
            Outcome::NoData => Ok(None),
        }
    }

    /// The option chain for the underlying, one fixed-schema row per
    /// contract.
    pub async fn chain(
        &self,
        params: &OptionChainParams,
    ) -> Result<Option<Vec<OptionChainRow>>, MarketDataError> {
        let mut query = QueryParams::new();
        params.apply(&mut query);

        let segments = [self.underlying.as_str()];
        match self
            .client
            .request(EndpointKind::OptionChain, &segments, &query)
            .await?
        {
            Outcome::Payload(body) => Ok(Some(normalize_option_chain(&body)?)),
            Outcome::NoData => Ok(None),
        }
    }
}

impl Instrument for OptionContract {
    fn symbol(&self) -> &str {
        &self.occ_symbol
    }

    fn kind(&self) -> SymbolKind {
        SymbolKind::Option
    }

    fn underlying(&self) -> &str {
        &self.underlying
    }
}
