use crate::geo::Coordinate;
use async_trait::async_trait;
use strum_macros::Display;

/// Abstract source of walking routes between two coordinates.
///
/// The engine only ever consumes the returned coordinate sequence. Turn
/// metadata a backend might ship alongside it is ignored, guides are always
/// rederived locally.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    /// Fetches a walking route from `origin` to `destination`.
    ///
    /// # Returns
    /// The ordered route coordinates, or a `RoutingError` on failure.
    async fn fetch_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Vec<Coordinate>, RoutingError>;
}

#[derive(Debug, Display)]
pub enum RoutingError {
    InternalServer,
    BadRequest,
    NoConnection,
    EmptyRoute,
    Unknown,
}

impl std::error::Error for RoutingError {}

impl From<reqwest::Error> for RoutingError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() || value.is_connect() {
            RoutingError::NoConnection
        } else if value.is_decode() {
            RoutingError::BadRequest
        } else {
            RoutingError::Unknown
        }
    }
}

/// Response body of the pedestrian route endpoint.
///
/// Extra fields the backend returns (turn hints, street names) are not
/// modeled here on purpose.
#[derive(Debug, serde::Deserialize)]
pub struct RouteResponse {
    path: Vec<Coordinate>,
}

impl RouteResponse {
    pub fn path(&self) -> &[Coordinate] { &self.path }
    pub fn into_path(self) -> Vec<Coordinate> { self.path }
}

/// A thin wrapper around `reqwest::Client` preconfigured with the routing
/// backend's base URL and a fixed request timeout.
#[derive(Debug)]
pub struct RoutingClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL of the routing backend, prepended to all endpoint paths.
    base_url: String,
}

impl RoutingClient {
    /// Constructs a new `RoutingClient` with the given base URL.
    ///
    /// The client has a default request timeout of 5 seconds.
    ///
    /// # Arguments
    /// * `base_url` - The root URL for all requests (e.g. `"http://localhost:8080"`).
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(5))
                .build()
                .unwrap(),
            base_url: String::from(base_url),
        }
    }

    /// Returns the base URL that the client was initialized with.
    pub fn url(&self) -> &str { self.base_url.as_str() }

    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, RoutingError> {
        if response.status().is_success() {
            Ok(response)
        } else if response.status().is_server_error() {
            Err(RoutingError::InternalServer)
        } else if response.status().is_client_error() {
            Err(RoutingError::BadRequest)
        } else {
            Err(RoutingError::Unknown)
        }
    }
}

#[async_trait]
impl RouteProvider for RoutingClient {
    async fn fetch_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Vec<Coordinate>, RoutingError> {
        let response = self
            .client
            .get(format!("{}/routes/pedestrian", self.base_url))
            .query(&[
                ("origin_lat", origin.lat()),
                ("origin_lon", origin.lon()),
                ("dest_lat", destination.lat()),
                ("dest_lon", destination.lon()),
            ])
            .send()
            .await?;
        let response = Self::unwrap_return_code(response).await?;
        let body = response.json::<RouteResponse>().await?;
        if body.path().is_empty() {
            return Err(RoutingError::EmptyRoute);
        }
        Ok(body.into_path())
    }
}
