use std::sync::Arc;

use reqwest::Client;

use super::fetch_json;
use crate::constants::WEATHER_HOURLY_FIELDS;
use crate::error::{ApiSource, SurfError};
use crate::models::WeatherResponse;

/// Open-Meteo forecast client; wind is requested in knots.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Arc<Client>,
    base_url: String,
    forecast_days: u8,
}

impl WeatherClient {
    pub fn new(client: Arc<Client>, base_url: impl Into<String>, forecast_days: u8) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            forecast_days,
        }
    }

    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Result<WeatherResponse, SurfError> {
        let url = format!("{}/forecast", self.base_url);
        tracing::debug!("Fetching weather forecast for {}, {}", latitude, longitude);

        let request = self.client.get(&url).query(&[
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("hourly", WEATHER_HOURLY_FIELDS.to_string()),
            ("wind_speed_unit", "kn".to_string()),
            ("timezone", "auto".to_string()),
            ("forecast_days", self.forecast_days.to_string()),
        ]);

        let weather: WeatherResponse = fetch_json(ApiSource::Weather, request).await?;
        weather.validate()?;
        Ok(weather)
    }
}
