//! Clients for the upstream geocoding, marine and weather services.

pub mod geocoding;
pub mod marine;
pub mod weather;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::SurfConfig;
use crate::error::{ApiSource, SurfError};

pub use geocoding::GeocodingClient;
pub use marine::MarineClient;
pub use weather::WeatherClient;

/// Builds the HTTP client shared by all upstream clients
pub fn http_client(config: &SurfConfig) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.request_timeout)
        .build()
}

/// Sends the request and deserializes the JSON body into `T`.
///
/// Transport errors and non-success statuses become `UpstreamRequestFailed`;
/// bodies that don't match `T` become `SchemaValidationFailed`.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    source: ApiSource,
    request: RequestBuilder,
) -> Result<T, SurfError> {
    let response = request.send().await.map_err(|e| {
        tracing::warn!("{} request failed: {}", source, e);
        SurfError::upstream(source, e)
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!("{} request returned status {}", source, status);
        return Err(SurfError::upstream(
            source,
            format!("request failed with status: {}", status),
        ));
    }

    let body = response
        .text()
        .await
        .map_err(|e| SurfError::upstream(source, e))?;

    serde_json::from_str::<T>(&body).map_err(|e| SurfError::schema(source, e))
}
