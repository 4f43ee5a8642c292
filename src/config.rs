use std::time::Duration;

use crate::constants::{
    FORECAST_DAYS, NOMINATIM_API_BASE, OPEN_METEO_API_BASE, OPEN_METEO_MARINE_API_BASE,
    REQUEST_TIMEOUT_SECS, USER_AGENT,
};

pub const GEOCODING_URL_ENV: &str = "SURF_GEOCODING_URL";
pub const MARINE_URL_ENV: &str = "SURF_MARINE_URL";
pub const WEATHER_URL_ENV: &str = "SURF_WEATHER_URL";

/// Settings handed to the upstream API clients
#[derive(Debug, Clone, PartialEq)]
pub struct SurfConfig {
    pub user_agent: String,
    pub geocoding_url: String,
    pub marine_url: String,
    pub weather_url: String,
    pub request_timeout: Duration,
    pub forecast_days: u8,
}

impl Default for SurfConfig {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            geocoding_url: NOMINATIM_API_BASE.to_string(),
            marine_url: OPEN_METEO_MARINE_API_BASE.to_string(),
            weather_url: OPEN_METEO_API_BASE.to_string(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            forecast_days: FORECAST_DAYS,
        }
    }
}

impl SurfConfig {
    /// Defaults with the upstream endpoints optionally overridden from the environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let endpoint = |key: &str| {
            lookup(key)
                .map(|value| value.trim().trim_end_matches('/').to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(url) = endpoint(GEOCODING_URL_ENV) {
            config.geocoding_url = url;
        }
        if let Some(url) = endpoint(MARINE_URL_ENV) {
            config.marine_url = url;
        }
        if let Some(url) = endpoint(WEATHER_URL_ENV) {
            config.weather_url = url;
        }
        config
    }

    /// Points all three upstream services at one base URL
    pub fn with_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            geocoding_url: base_url.clone(),
            marine_url: base_url.clone(),
            weather_url: base_url,
            ..Self::default()
        }
    }
}
