use std::fmt;

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Upstream service a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiSource {
    Geocoding,
    Marine,
    Weather,
}

impl fmt::Display for ApiSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ApiSource::Geocoding => "geocoding",
            ApiSource::Marine => "marine forecast",
            ApiSource::Weather => "weather forecast",
        })
    }
}

#[derive(Debug, Error)]
pub enum SurfError {
    #[error("Could not find location: {query}")]
    LocationNotFound { query: String },

    #[error("Request to {service} service failed: {detail}")]
    UpstreamRequestFailed { service: ApiSource, detail: String },

    #[error("Invalid {service} response: {detail}")]
    SchemaValidationFailed { service: ApiSource, detail: String },

    #[error("Unusable forecast data: {0}")]
    DataShape(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SurfError {
    pub fn upstream(service: ApiSource, detail: impl fmt::Display) -> Self {
        Self::UpstreamRequestFailed {
            service,
            detail: detail.to_string(),
        }
    }

    pub fn schema(service: ApiSource, detail: impl fmt::Display) -> Self {
        Self::SchemaValidationFailed {
            service,
            detail: detail.to_string(),
        }
    }
}

impl From<SurfError> for McpError {
    fn from(err: SurfError) -> Self {
        match err {
            SurfError::LocationNotFound { .. } | SurfError::InvalidInput(_) => {
                McpError::invalid_params(err.to_string(), None)
            }
            _ => McpError::internal_error(err.to_string(), None),
        }
    }
}
