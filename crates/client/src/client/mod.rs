//! API client and per-call orchestration
//!
//! This module contains the client infrastructure:
//! - `endpoints` - operation to base-URL registry (Endpoints, EndpointKind)
//! - `query` - canonical URL construction (QueryParams, build_url)
//! - `rate_limit` - server-reported quota tracking (RateLimitStatus)
//! - `transport` - HTTP seam (HttpTransport) and reqwest implementation

pub mod endpoints;
pub mod query;
pub mod rate_limit;
pub mod transport;

use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::Mutex;

use crate::errors::MarketDataError;
use crate::models::{MarketStatusParams, MarketStatusRow};
use crate::response::{self, Envelope};

use endpoints::{EndpointKind, Endpoints};
use query::QueryParams;
use rate_limit::RateLimitStatus;
use transport::{HttpTransport, RawResponse, ReqwestTransport};

struct ClientInner {
    token: String,
    endpoints: Endpoints,
    transport: Box<dyn HttpTransport>,
    rate_limit: Mutex<RateLimitStatus>,
}

/// Handle to the marketdata.app API.
///
/// Construct one per process and clone it into every instrument; clones
/// share the transport and the rate-limit view, so one process never spends
/// quota it does not have. All instrument operations funnel through
/// [`request`](Self::request): build the URL, gate on quota, send, observe
/// the new quota, classify the body.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

/// Classified result of one request: a payload to normalize, or the
/// server's explicit "nothing matched".
pub(crate) enum Outcome {
    Payload(Vec<u8>),
    NoData,
}

impl ApiClient {
    /// Client against the production endpoints with the reqwest transport.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_parts(token, Endpoints::new(), Box::new(ReqwestTransport::new()))
    }

    /// Client with overridden base URLs, e.g. from a configuration mapping.
    pub fn with_endpoints(token: impl Into<String>, endpoints: Endpoints) -> Self {
        Self::with_parts(token, endpoints, Box::new(ReqwestTransport::new()))
    }

    /// Client with a caller-supplied transport.
    pub fn with_transport(token: impl Into<String>, transport: Box<dyn HttpTransport>) -> Self {
        Self::with_parts(token, Endpoints::new(), transport)
    }

    pub fn with_parts(
        token: impl Into<String>,
        endpoints: Endpoints,
        transport: Box<dyn HttpTransport>,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                token: token.into(),
                endpoints,
                transport,
                rate_limit: Mutex::new(RateLimitStatus::default()),
            }),
        }
    }

    /// Last quota snapshot observed from the API.
    pub async fn rate_limit_status(&self) -> RateLimitStatus {
        *self.inner.rate_limit.lock().await
    }

    pub(crate) async fn request(
        &self,
        kind: EndpointKind,
        segments: &[&str],
        params: &QueryParams,
    ) -> Result<Outcome, MarketDataError> {
        let url = query::build_url(self.inner.endpoints.url(kind), segments, params);

        // Hold the quota lock across send and observe so two racing calls
        // cannot both spend the last remaining request.
        let mut quota = self.inner.rate_limit.lock().await;
        if !quota.can_proceed() {
            warn!("rate limit exhausted, request not sent: {}", url);
            return Err(MarketDataError::RateLimitDenied { reset: quota.reset });
        }

        debug!("GET {}", url);
        let headers = [(
            "Authorization".to_string(),
            format!("token {}", self.inner.token),
        )];
        let response = self.inner.transport.perform_get(&url, &headers).await?;

        quota.observe(&response.headers);
        debug!(
            "rate limit: limit={:?} consumed={:?} remaining={:?} reset={:?}",
            quota.limit, quota.consumed, quota.remaining, quota.reset
        );
        drop(quota);

        classify_outcome(response)
    }

    /// Past, present or future open/closed status for a stock market, one
    /// row per calendar date. `Ok(None)` when the server reports no data
    /// for the requested window.
    pub async fn market_status(
        &self,
        params: &MarketStatusParams,
    ) -> Result<Option<Vec<MarketStatusRow>>, MarketDataError> {
        let mut query = QueryParams::new();
        params.apply(&mut query);

        match self.request(EndpointKind::MarketStatus, &[], &query).await? {
            Outcome::Payload(body) => Ok(Some(response::normalize_market_status(&body)?)),
            Outcome::NoData => Ok(None),
        }
    }
}

fn classify_outcome(response: RawResponse) -> Result<Outcome, MarketDataError> {
    match response::classify(&response.body) {
        Ok(Envelope::Ok) => Ok(Outcome::Payload(response.body)),
        Ok(Envelope::NoData) => Ok(Outcome::NoData),
        Ok(Envelope::Error { message }) => Err(MarketDataError::ServerError { message }),
        // an unclassifiable body on a failed request reports the HTTP
        // status, not the parse failure
        Err(_) if !response.is_success() => Err(MarketDataError::HttpStatus {
            status: response.status,
        }),
        Err(err) => Err(err),
    }
}
