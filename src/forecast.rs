//! Merges the marine and weather series into a [`SurfForecast`].

use std::collections::{BTreeMap, HashMap};

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use crate::error::SurfError;
use crate::models::{MarineResponse, WeatherResponse};
use crate::quality::{assess, SurfConditions, SurfQuality, WindRelation};

/// Geocoded place the forecast was built for
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

/// Directions are bearings the waves or wind come from, in degrees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyMarineSample {
    pub timestamp: NaiveDateTime,
    pub wave_height: f64,
    pub wave_direction: f64,
    pub swell_height: f64,
    pub swell_direction: f64,
    pub swell_period: f64,
    pub wind_wave_height: f64,
    pub wind_wave_direction: f64,
}

/// Wind speeds and gusts are in knots, temperature in degrees Celsius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyWeatherSample {
    pub timestamp: NaiveDateTime,
    pub air_temperature: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub wind_gust: f64,
}

/// One hour present in both the marine and the weather series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyConditions {
    pub timestamp: NaiveDateTime,
    pub marine: HourlyMarineSample,
    pub weather: HourlyWeatherSample,
    pub wind_relation: WindRelation,
    pub quality: SurfQuality,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub max_temperature: f64,
    pub min_temperature: f64,
    pub max_wind_speed: f64,
    /// Direction of the day's strongest wind, earliest hour on ties
    pub dominant_wind_direction: f64,
    pub max_gust: f64,
    pub max_wave_height: f64,
    pub max_swell_height: f64,
    pub swell_period: f64,
    pub dominant_swell_direction: f64,
    /// Best hourly rating of the day
    pub quality: SurfQuality,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfForecast {
    pub location: Location,
    pub timezone: String,
    /// Local wall-clock time at the location
    pub generated_at: NaiveDateTime,
    pub hourly: Vec<HourlyConditions>,
    pub daily: Vec<DailySummary>,
    pub current: Option<HourlyConditions>,
}

impl SurfForecast {
    /// Builds the forecast as of the current local time at the location
    pub fn build(
        marine: &MarineResponse,
        weather: &WeatherResponse,
        location_name: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<SurfForecast, SurfError> {
        let offset = FixedOffset::east_opt(weather.utc_offset_seconds).ok_or_else(|| {
            SurfError::DataShape(format!(
                "utc_offset_seconds {} is out of range",
                weather.utc_offset_seconds
            ))
        })?;
        let now = Utc::now().with_timezone(&offset).naive_local();
        Self::build_at(marine, weather, location_name, latitude, longitude, now)
    }

    /// Same as [`SurfForecast::build`] with an explicit local generation time
    pub fn build_at(
        marine: &MarineResponse,
        weather: &WeatherResponse,
        location_name: &str,
        latitude: f64,
        longitude: f64,
        generated_at: NaiveDateTime,
    ) -> Result<SurfForecast, SurfError> {
        let marine_samples = marine_samples(marine)?;
        let weather_samples = weather_samples(weather)?;

        let mut by_time: HashMap<NaiveDateTime, HourlyWeatherSample> =
            HashMap::with_capacity(weather_samples.len());
        for sample in weather_samples {
            by_time.entry(sample.timestamp).or_insert(sample);
        }

        let mut hourly: Vec<HourlyConditions> = marine_samples
            .into_iter()
            .filter_map(|m| by_time.remove(&m.timestamp).map(|w| merge(m, w)))
            .collect();
        hourly.sort_by_key(|h| h.timestamp);

        tracing::debug!(
            "Merged {} hourly entries for {}",
            hourly.len(),
            location_name
        );

        let daily = summarize_days(&hourly);
        let current = hourly
            .iter()
            .rev()
            .find(|h| h.timestamp <= generated_at)
            .or_else(|| hourly.first())
            .cloned();

        Ok(SurfForecast {
            location: Location {
                latitude,
                longitude,
                name: location_name.to_string(),
            },
            timezone: weather.timezone.clone(),
            generated_at,
            hourly,
            daily,
            current,
        })
    }
}

fn merge(marine: HourlyMarineSample, weather: HourlyWeatherSample) -> HourlyConditions {
    let wind_relation = WindRelation::between(weather.wind_direction, marine.swell_direction);
    let quality = assess(&SurfConditions {
        swell_height: marine.swell_height,
        swell_period: marine.swell_period,
        wind_speed: weather.wind_speed,
        wind: wind_relation,
    });

    HourlyConditions {
        timestamp: marine.timestamp,
        marine,
        weather,
        wind_relation,
        quality,
    }
}

/// Hours with a null in any field are treated as absent from the series
fn marine_samples(marine: &MarineResponse) -> Result<Vec<HourlyMarineSample>, SurfError> {
    let timestamps = marine
        .timestamps()
        .map_err(|detail| SurfError::DataShape(format!("marine {}", detail)))?;
    let h = &marine.hourly;

    Ok(timestamps
        .into_iter()
        .enumerate()
        .filter_map(|(i, timestamp)| {
            Some(HourlyMarineSample {
                timestamp,
                wave_height: h.wave_height[i]?,
                wave_direction: h.wave_direction[i]?,
                swell_height: h.swell_height[i]?,
                swell_direction: h.swell_direction[i]?,
                swell_period: h.swell_period[i]?,
                wind_wave_height: h.wind_wave_height[i]?,
                wind_wave_direction: h.wind_wave_direction[i]?,
            })
        })
        .collect())
}

fn weather_samples(weather: &WeatherResponse) -> Result<Vec<HourlyWeatherSample>, SurfError> {
    let timestamps = weather
        .timestamps()
        .map_err(|detail| SurfError::DataShape(format!("weather {}", detail)))?;
    let h = &weather.hourly;

    Ok(timestamps
        .into_iter()
        .enumerate()
        .filter_map(|(i, timestamp)| {
            Some(HourlyWeatherSample {
                timestamp,
                air_temperature: h.temperature[i]?,
                wind_speed: h.wind_speed[i]?,
                wind_direction: h.wind_direction[i]?,
                wind_gust: h.wind_gusts[i]?,
            })
        })
        .collect())
}

/// Expects `hourly` sorted by timestamp.
fn summarize_days(hourly: &[HourlyConditions]) -> Vec<DailySummary> {
    let mut days: BTreeMap<NaiveDate, Vec<&HourlyConditions>> = BTreeMap::new();
    for entry in hourly {
        days.entry(entry.timestamp.date()).or_default().push(entry);
    }

    days.into_iter()
        .filter_map(|(date, entries)| summarize_day(date, &entries))
        .collect()
}

fn summarize_day(date: NaiveDate, entries: &[&HourlyConditions]) -> Option<DailySummary> {
    let first = entries.first()?;

    // Strictly greater keeps the earliest sample on ties.
    let mut windiest = first;
    let mut biggest_swell = first;
    for entry in entries {
        if entry.weather.wind_speed > windiest.weather.wind_speed {
            windiest = entry;
        }
        if entry.marine.swell_height > biggest_swell.marine.swell_height {
            biggest_swell = entry;
        }
    }

    let fold_max = |f: fn(&HourlyConditions) -> f64| {
        entries.iter().map(|e| f(e)).fold(f64::NEG_INFINITY, f64::max)
    };

    Some(DailySummary {
        date,
        max_temperature: fold_max(|e| e.weather.air_temperature),
        min_temperature: entries
            .iter()
            .map(|e| e.weather.air_temperature)
            .fold(f64::INFINITY, f64::min),
        max_wind_speed: windiest.weather.wind_speed,
        dominant_wind_direction: windiest.weather.wind_direction,
        max_gust: fold_max(|e| e.weather.wind_gust),
        max_wave_height: fold_max(|e| e.marine.wave_height),
        max_swell_height: biggest_swell.marine.swell_height,
        swell_period: biggest_swell.marine.swell_period,
        dominant_swell_direction: biggest_swell.marine.swell_direction,
        quality: entries.iter().map(|e| e.quality).max()?,
    })
}
