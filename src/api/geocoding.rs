use std::sync::Arc;

use reqwest::Client;

use super::fetch_json;
use crate::error::{ApiSource, SurfError};
use crate::forecast::Location;
use crate::models::NominatimPlace;

/// Forward geocoding through Nominatim's `/search` endpoint
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Arc<Client>,
    base_url: String,
}

impl GeocodingClient {
    pub fn new(client: Arc<Client>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Resolves a free-text place name to its best match
    pub async fn geocode(&self, name: &str) -> Result<Location, SurfError> {
        let url = format!("{}/search", self.base_url);
        tracing::debug!("Geocoding {:?} via {}", name, url);

        let request = self
            .client
            .get(&url)
            .query(&[("q", name), ("format", "json"), ("limit", "1")]);
        let places: Vec<NominatimPlace> = fetch_json(ApiSource::Geocoding, request).await?;

        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| SurfError::LocationNotFound {
                query: name.to_string(),
            })?;

        let coordinate = |field: &str, value: &str| {
            value.trim().parse::<f64>().map_err(|e| {
                SurfError::schema(
                    ApiSource::Geocoding,
                    format!("{} {:?} is not a number: {}", field, value, e),
                )
            })
        };

        let location = Location {
            latitude: coordinate("lat", &place.lat)?,
            longitude: coordinate("lon", &place.lon)?,
            name: place.display_name,
        };
        tracing::info!(
            "Geocoded {:?} to {} ({:.4}, {:.4})",
            name,
            location.name,
            location.latitude,
            location.longitude
        );
        Ok(location)
    }
}
