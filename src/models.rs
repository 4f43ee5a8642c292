use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ApiSource, SurfError};

/// Timestamp layout of Open-Meteo hourly series when `timezone=auto` is requested
pub const OPEN_METEO_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

// ============================================================================
// Open-Meteo Marine API Models
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct MarineResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub utc_offset_seconds: i32,
    pub hourly: MarineHourly,
}

/// Hourly marine series. Open-Meteo reports missing values as `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct MarineHourly {
    pub time: Vec<String>,
    pub wave_height: Vec<Option<f64>>,
    pub wave_direction: Vec<Option<f64>>,
    #[serde(rename = "swell_wave_height")]
    pub swell_height: Vec<Option<f64>>,
    #[serde(rename = "swell_wave_direction")]
    pub swell_direction: Vec<Option<f64>>,
    #[serde(rename = "swell_wave_period")]
    pub swell_period: Vec<Option<f64>>,
    pub wind_wave_height: Vec<Option<f64>>,
    pub wind_wave_direction: Vec<Option<f64>>,
}

impl MarineHourly {
    fn series(&self) -> [(&'static str, usize); 7] {
        [
            ("wave_height", self.wave_height.len()),
            ("wave_direction", self.wave_direction.len()),
            ("swell_wave_height", self.swell_height.len()),
            ("swell_wave_direction", self.swell_direction.len()),
            ("swell_wave_period", self.swell_period.len()),
            ("wind_wave_height", self.wind_wave_height.len()),
            ("wind_wave_direction", self.wind_wave_direction.len()),
        ]
    }
}

// ============================================================================
// Open-Meteo Forecast API Models
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub utc_offset_seconds: i32,
    pub hourly_units: WeatherHourlyUnits,
    pub hourly: WeatherHourly,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherHourlyUnits {
    #[serde(rename = "temperature_2m")]
    pub temperature: String,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherHourly {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m")]
    pub temperature: Vec<Option<f64>>,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: Vec<Option<f64>>,
    #[serde(rename = "wind_direction_10m")]
    pub wind_direction: Vec<Option<f64>>,
    #[serde(rename = "wind_gusts_10m")]
    pub wind_gusts: Vec<Option<f64>>,
}

impl WeatherHourly {
    fn series(&self) -> [(&'static str, usize); 4] {
        [
            ("temperature_2m", self.temperature.len()),
            ("wind_speed_10m", self.wind_speed.len()),
            ("wind_direction_10m", self.wind_direction.len()),
            ("wind_gusts_10m", self.wind_gusts.len()),
        ]
    }
}

// ============================================================================
// Nominatim Models
// ============================================================================

/// One `/search` hit. Nominatim encodes coordinates as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetSurfForecastRequest {
    #[schemars(description = "Name of the city or surf spot, e.g. \"Biarritz\", \"San Diego\" or \"Livorno\"")]
    pub city_name: String,
}

// ============================================================================
// Validation
// ============================================================================

/// Checks that every series has one value per timestamp and that each
/// timestamp parses, failing with the offending field name.
pub(crate) fn check_series(
    time: &[String],
    series: &[(&'static str, usize)],
) -> Result<Vec<NaiveDateTime>, String> {
    for (name, len) in series {
        if *len != time.len() {
            return Err(format!(
                "hourly.{} has {} values but hourly.time has {}",
                name,
                len,
                time.len()
            ));
        }
    }

    time.iter()
        .map(|t| {
            NaiveDateTime::parse_from_str(t, OPEN_METEO_TIME_FORMAT)
                .map_err(|e| format!("hourly.time entry {:?} is not a timestamp: {}", t, e))
        })
        .collect()
}

impl MarineResponse {
    pub(crate) fn timestamps(&self) -> Result<Vec<NaiveDateTime>, String> {
        check_series(&self.hourly.time, &self.hourly.series())
    }

    pub fn validate(&self) -> Result<(), SurfError> {
        self.timestamps()
            .map(|_| ())
            .map_err(|detail| SurfError::schema(ApiSource::Marine, detail))
    }
}

impl WeatherResponse {
    pub(crate) fn timestamps(&self) -> Result<Vec<NaiveDateTime>, String> {
        check_series(&self.hourly.time, &self.hourly.series())
    }

    pub fn validate(&self) -> Result<(), SurfError> {
        if self.hourly_units.wind_speed != "kn" {
            return Err(SurfError::schema(
                ApiSource::Weather,
                format!(
                    "expected wind speed in knots, got {:?}",
                    self.hourly_units.wind_speed
                ),
            ));
        }
        self.timestamps()
            .map(|_| ())
            .map_err(|detail| SurfError::schema(ApiSource::Weather, detail))
    }
}
