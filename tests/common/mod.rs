//! Shared upstream payloads for the integration tests.

#![allow(dead_code)]

use chrono::{Duration, NaiveDate, Utc};
use serde_json::{json, Value};

/// Hourly timestamps covering today and tomorrow (UTC), in Open-Meteo layout
pub fn two_days_of_hours() -> Vec<String> {
    let today: NaiveDate = Utc::now().date_naive();
    let start = today.and_hms_opt(0, 0, 0).unwrap();
    (0..48)
        .map(|h| (start + Duration::hours(h)).format("%Y-%m-%dT%H:%M").to_string())
        .collect()
}

pub fn nominatim_biarritz() -> Value {
    json!([{
        "place_id": 123456,
        "lat": "43.4832523",
        "lon": "-1.5592776",
        "display_name": "Biarritz, Bayonne, Pyrénées-Atlantiques, Nouvelle-Aquitaine, France métropolitaine, France",
        "type": "administrative",
        "importance": 0.68
    }])
}

/// 1.5m swell at 10s from the west for every hour
pub fn marine_payload(times: &[String]) -> Value {
    let n = times.len();
    json!({
        "latitude": 43.5,
        "longitude": -1.5833,
        "generationtime_ms": 0.3,
        "utc_offset_seconds": 0,
        "timezone": "GMT",
        "timezone_abbreviation": "GMT",
        "hourly_units": {
            "time": "iso8601",
            "wave_height": "m",
            "swell_wave_height": "m",
            "swell_wave_period": "s"
        },
        "hourly": {
            "time": times,
            "wave_height": vec![1.7; n],
            "wave_direction": vec![272.0; n],
            "swell_wave_height": vec![1.5; n],
            "swell_wave_direction": vec![270.0; n],
            "swell_wave_period": vec![10.0; n],
            "wind_wave_height": vec![0.3; n],
            "wind_wave_direction": vec![95.0; n]
        }
    })
}

/// 12kt wind from the east for every hour
pub fn weather_payload(times: &[String]) -> Value {
    let n = times.len();
    json!({
        "latitude": 43.48,
        "longitude": -1.56,
        "generationtime_ms": 0.1,
        "utc_offset_seconds": 0,
        "timezone": "GMT",
        "timezone_abbreviation": "GMT",
        "elevation": 40.0,
        "hourly_units": {
            "time": "iso8601",
            "temperature_2m": "°C",
            "wind_speed_10m": "kn",
            "wind_direction_10m": "°",
            "wind_gusts_10m": "kn"
        },
        "hourly": {
            "time": times,
            "temperature_2m": vec![17.5; n],
            "wind_speed_10m": vec![12.0; n],
            "wind_direction_10m": vec![90.0; n],
            "wind_gusts_10m": vec![16.0; n]
        }
    })
}
