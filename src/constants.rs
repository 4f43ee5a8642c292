/// User agent string for HTTP requests. Nominatim rejects anonymous clients.
pub const USER_AGENT: &str = concat!("mcp-surf-forecast/", env!("CARGO_PKG_VERSION"));

/// Nominatim (OpenStreetMap) geocoding base URL
pub const NOMINATIM_API_BASE: &str = "https://nominatim.openstreetmap.org";

/// Open-Meteo Marine API base URL
pub const OPEN_METEO_MARINE_API_BASE: &str = "https://marine-api.open-meteo.com/v1";

/// Open-Meteo API base URL
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Forecast horizon requested from both Open-Meteo services
pub const FORECAST_DAYS: u8 = 7;

/// Number of days listed in the rendered report
pub const REPORT_DAYS: usize = 5;

/// Hourly marine variables, in the order the marine model expects them
pub const MARINE_HOURLY_FIELDS: &str = "wave_height,wave_direction,swell_wave_height,swell_wave_direction,swell_wave_period,wind_wave_height,wind_wave_direction";

pub const WEATHER_HOURLY_FIELDS: &str =
    "temperature_2m,wind_speed_10m,wind_direction_10m,wind_gusts_10m";
