//! MCP server that turns a city name into a surf forecast written for
//! language models.
//!
//! A single tool, `get_surf_forecast`, geocodes the name with Nominatim,
//! pulls hourly marine and weather series from Open-Meteo, merges them into a
//! [`SurfForecast`] and renders it with [`SurfForecast::to_llm_context`].

pub mod api;
pub mod config;
pub mod constants;
pub mod direction;
pub mod error;
pub mod forecast;
pub mod formatters;
pub mod models;
pub mod quality;
pub mod service;

pub use config::SurfConfig;
pub use direction::CompassPoint;
pub use error::{ApiSource, SurfError};
pub use forecast::{DailySummary, HourlyConditions, Location, SurfForecast};
pub use quality::{SurfQuality, WindRelation};
pub use service::SurfForecastServer;
