//! Typed REST client for the NomadPlan backend.
//!
//! Every resource group (destinations, coworking spaces, trips, users,
//! itineraries) goes through one request helper that sets a JSON content
//! type, checks the HTTP status, and decodes the JSON body. A non-success
//! status becomes [`NomadError::Api`]; a transport failure becomes
//! [`NomadError::Network`].
//!
//! ```no_run
//! # async fn demo() -> nomadplan_shared::Result<()> {
//! let config = nomadplan_shared::load_config()?;
//! let client = nomadplan_client::ApiClient::from_config(&config)?;
//! let featured = client.destinations().featured().await?;
//! # Ok(()) }
//! ```

mod payload;
mod resources;

use std::time::Duration;

use nomadplan_shared::{AppConfig, NomadError, Result, validate_base_url};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

pub use payload::{ItineraryPatch, NewItinerary, NewTrip, NewUser, TripPatch, UserPatch};
pub use resources::{CoworkingApi, DestinationsApi, ItinerariesApi, TripsApi, UsersApi};

/// User-Agent string for API requests.
const USER_AGENT: &str = concat!("NomadPlan/", env!("CARGO_PKG_VERSION"));

const JSON: &str = "application/json";

// ---------------------------------------------------------------------------
// Client options
// ---------------------------------------------------------------------------

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Timeout for HTTP requests in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self { timeout_secs: 10 }
    }
}

// ---------------------------------------------------------------------------
// ApiClient
// ---------------------------------------------------------------------------

/// Handle to the REST API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    /// Base URL without a trailing slash; endpoints start with `/`.
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url`.
    pub fn new(base_url: &Url, opts: &ClientOptions) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(opts.timeout_secs))
            .build()
            .map_err(|e| NomadError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from the `[api]` config section.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let url = validate_base_url(config)?;
        let opts = ClientOptions {
            timeout_secs: config.api.timeout_secs,
        };
        Self::new(&url, &opts)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn destinations(&self) -> DestinationsApi<'_> {
        DestinationsApi::new(self)
    }

    pub fn coworking(&self) -> CoworkingApi<'_> {
        CoworkingApi::new(self)
    }

    pub fn trips(&self) -> TripsApi<'_> {
        TripsApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    pub fn itineraries(&self) -> ItinerariesApi<'_> {
        ItinerariesApi::new(self)
    }

    // -----------------------------------------------------------------------
    // Request helpers
    // -----------------------------------------------------------------------

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    fn builder(&self, method: Method, endpoint: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(endpoint))
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
    }

    /// `GET` an endpoint with query parameters and decode the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let request = self.builder(Method::GET, endpoint).query(query);
        let response = self.execute(Method::GET, endpoint, request).await?;
        decode(endpoint, response).await
    }

    /// Send a JSON body and decode the JSON response.
    pub(crate) async fn send<B, T>(&self, method: Method, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)
            .map_err(|e| NomadError::decode(format!("{endpoint}: failed to encode body: {e}")))?;
        let request = self.builder(method.clone(), endpoint).body(payload);
        let response = self.execute(method, endpoint, request).await?;
        decode(endpoint, response).await
    }

    /// `DELETE` an endpoint. Any response body is ignored.
    pub(crate) async fn delete(&self, endpoint: &str) -> Result<()> {
        let request = self.builder(Method::DELETE, endpoint);
        self.execute(Method::DELETE, endpoint, request).await?;
        Ok(())
    }

    #[instrument(skip_all, fields(method = %method, endpoint))]
    async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<Response> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "request failed");
            NomadError::Network(format!("{method} {}: {e}", self.url(endpoint)))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "API returned an error status");
            return Err(NomadError::Api {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        debug!(status = status.as_u16(), "response received");
        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| NomadError::Network(format!("{endpoint}: failed to read body: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| NomadError::decode(format!("{endpoint}: invalid JSON response: {e}")))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub(crate) async fn client_for(server: &wiremock::MockServer) -> ApiClient {
        let url = Url::parse(&format!("{}/api", server.uri())).unwrap();
        ApiClient::new(&url, &ClientOptions::default()).unwrap()
    }

    pub(crate) fn fixture(name: &str) -> String {
        let path = format!("../../../fixtures/json/{name}");
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("missing fixture: {path}"))
    }
}
