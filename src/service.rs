use anyhow::Result;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::api::{http_client, GeocodingClient, MarineClient, WeatherClient};
use crate::config::SurfConfig;
use crate::error::SurfError;
use crate::forecast::SurfForecast;
use crate::models::GetSurfForecastRequest;

/// MCP server exposing the surf forecast tool
#[derive(Clone)]
pub struct SurfForecastServer {
    geocoding: GeocodingClient,
    marine: MarineClient,
    weather: WeatherClient,
    tool_router: ToolRouter<Self>,
}

impl SurfForecastServer {
    /// Creates a server whose upstream clients share one HTTP client
    pub fn new(config: &SurfConfig) -> Result<Self> {
        let client = Arc::new(http_client(config)?);

        Ok(Self {
            geocoding: GeocodingClient::new(client.clone(), config.geocoding_url.as_str()),
            marine: MarineClient::new(client.clone(), config.marine_url.as_str(), config.forecast_days),
            weather: WeatherClient::new(client, config.weather_url.as_str(), config.forecast_days),
            tool_router: Self::tool_router(),
        })
    }

    /// Geocodes the city, fetches both forecasts in sequence and renders the report
    pub async fn surf_report(&self, city_name: &str) -> Result<String, SurfError> {
        let city_name = city_name.trim();
        if city_name.is_empty() {
            return Err(SurfError::InvalidInput("city_name must not be empty".to_string()));
        }

        let location = self.geocoding.geocode(city_name).await?;
        let marine = self.marine.fetch(location.latitude, location.longitude).await?;
        let weather = self.weather.fetch(location.latitude, location.longitude).await?;

        let forecast = SurfForecast::build(
            &marine,
            &weather,
            &location.name,
            location.latitude,
            location.longitude,
        )?;

        Ok(forecast.to_llm_context())
    }
}

#[tool_handler]
impl ServerHandler for SurfForecastServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-surf-forecast".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A surf forecast service powered by Open-Meteo marine and weather data \
                with OpenStreetMap geocoding. Provides current conditions and a 5-day \
                surf outlook for any coastal location worldwide."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl SurfForecastServer {
    /// Gets the surf forecast for a named location
    #[tool(description = "Get the surf forecast for a location by city name (e.g., 'Biarritz', 'San Diego', 'Livorno'). Returns current conditions and a 5-day forecast: wave heights (total, swell, wind waves) with directions, swell period, wind speed and direction in knots with gusts, air temperature, and a surf quality rating. Directions are given as compass points (N, NE, E, ...) with degrees.")]
    async fn get_surf_forecast(
        &self,
        Parameters(request): Parameters<GetSurfForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting surf forecast for: {}", request.city_name);

        let report = self.surf_report(&request.city_name).await.map_err(|e| {
            tracing::warn!("Surf forecast for {:?} failed: {}", request.city_name, e);
            McpError::from(e)
        })?;

        Ok(CallToolResult::success(vec![Content::text(report)]))
    }
}
