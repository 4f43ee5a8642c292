use std::sync::Arc;

use reqwest::Client;

use super::fetch_json;
use crate::constants::MARINE_HOURLY_FIELDS;
use crate::error::{ApiSource, SurfError};
use crate::models::MarineResponse;

/// Open-Meteo Marine API client
#[derive(Debug, Clone)]
pub struct MarineClient {
    client: Arc<Client>,
    base_url: String,
    forecast_days: u8,
}

impl MarineClient {
    pub fn new(client: Arc<Client>, base_url: impl Into<String>, forecast_days: u8) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            forecast_days,
        }
    }

    /// Fetches hourly wave, swell and wind-wave series in the location's timezone
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Result<MarineResponse, SurfError> {
        let url = format!("{}/marine", self.base_url);
        tracing::debug!("Fetching marine forecast for {}, {}", latitude, longitude);

        let request = self.client.get(&url).query(&[
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("hourly", MARINE_HOURLY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
            ("forecast_days", self.forecast_days.to_string()),
        ]);

        let marine: MarineResponse = fetch_json(ApiSource::Marine, request).await?;
        marine.validate()?;
        Ok(marine)
    }
}
