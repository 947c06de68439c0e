use rmcp::{
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, Error as McpError, ServerHandler,
};
use serde_json::Value;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::fetch::Fetcher;
use crate::models::GeocodingResponse;
use crate::params::{
    validate_coordinates, validate_location_name, GetCurrentWeatherParams, GetForecastParams,
    GetLocationParams, DEFAULT_FORECAST_DAYS,
};
use crate::query::{CurrentWeatherQuery, ForecastQuery, LocationSearchQuery};

const CURRENT_WEATHER_UNAVAILABLE: &str =
    "Unable to fetch current weather data for this location.";
const FORECAST_UNAVAILABLE: &str = "Unable to fetch forecast data for this location.";
const LOCATION_SEARCH_UNAVAILABLE: &str = "Unable to search for locations.";
const NO_LOCATIONS_FOUND: &str = "No locations found matching your search query.";

#[derive(Clone)]
pub struct WeatherServer {
    config: ServerConfig,
    fetcher: Arc<Fetcher>,
}

impl WeatherServer {
    pub fn new(config: ServerConfig) -> Result<Self, anyhow::Error> {
        let fetcher = Fetcher::new(config.timeout)?;

        Ok(Self {
            config,
            fetcher: Arc::new(fetcher),
        })
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.weather_api_base)
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.geocoding_api_base)
    }

    /// Ok carries the caller-facing payload text, Err the fixed error
    /// string. Neither variant crosses the MCP boundary as a fault.
    async fn current_weather_reply(&self, latitude: f64, longitude: f64) -> Result<String, String> {
        validate_coordinates(latitude, longitude).map_err(|e| e.to_string())?;

        let query = CurrentWeatherQuery::new(latitude, longitude);
        match self
            .fetcher
            .fetch_json(&self.forecast_url(), &query.query_pairs())
            .await
        {
            Some(data) => Ok(pretty(&data)),
            None => Err(CURRENT_WEATHER_UNAVAILABLE.to_string()),
        }
    }

    async fn forecast_reply(
        &self,
        latitude: f64,
        longitude: f64,
        days: Option<i64>,
    ) -> Result<String, String> {
        validate_coordinates(latitude, longitude).map_err(|e| e.to_string())?;

        let query = ForecastQuery::new(latitude, longitude, days.unwrap_or(DEFAULT_FORECAST_DAYS));
        match self
            .fetcher
            .fetch_json(&self.forecast_url(), &query.query_pairs())
            .await
        {
            Some(data) => Ok(pretty(&data)),
            None => Err(FORECAST_UNAVAILABLE.to_string()),
        }
    }

    async fn location_reply(&self, name: &str) -> Result<String, String> {
        let name = validate_location_name(name).map_err(|e| e.to_string())?;

        let query = LocationSearchQuery::new(name);
        let Some(data) = self
            .fetcher
            .fetch_json(&self.search_url(), &query.query_pairs())
            .await
        else {
            return Err(LOCATION_SEARCH_UNAVAILABLE.to_string());
        };

        let parsed: GeocodingResponse = serde_json::from_value(data).map_err(|e| {
            tracing::error!("Unexpected geocoding response shape: {}", e);
            LOCATION_SEARCH_UNAVAILABLE.to_string()
        })?;

        if parsed.results.is_empty() {
            return Ok(NO_LOCATIONS_FOUND.to_string());
        }

        serde_json::to_string_pretty(&parsed.results)
            .map_err(|_| LOCATION_SEARCH_UNAVAILABLE.to_string())
    }
}

#[tool(tool_box)]
impl WeatherServer {
    #[tool(
        name = "get_current_weather",
        description = "Get current weather conditions for a specific location. Returns real-time data including temperature, humidity, precipitation, wind, pressure and cloud cover."
    )]
    async fn get_current_weather(
        &self,
        #[tool(aggr)] params: GetCurrentWeatherParams,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            latitude = %params.latitude,
            longitude = %params.longitude,
            "Getting current weather"
        );

        Ok(reply_to_result(
            self.current_weather_reply(params.latitude, params.longitude)
                .await,
        ))
    }

    #[tool(
        name = "get_forecast",
        description = "Get a daily weather forecast for a specific location. Returns up to 16 days of temperature, precipitation and wind aggregates. Out-of-range day counts are clamped to 1-16."
    )]
    async fn get_forecast(
        &self,
        #[tool(aggr)] params: GetForecastParams,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            latitude = %params.latitude,
            longitude = %params.longitude,
            days = ?params.days,
            "Getting forecast"
        );

        Ok(reply_to_result(
            self.forecast_reply(params.latitude, params.longitude, params.days)
                .await,
        ))
    }

    #[tool(
        name = "get_location",
        description = "Search for locations by name to get their coordinates and administrative metadata. Returns a list of candidate matches."
    )]
    async fn get_location(
        &self,
        #[tool(aggr)] params: GetLocationParams,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(name = %params.name, "Searching locations");

        Ok(reply_to_result(self.location_reply(&params.name).await))
    }
}

#[tool(tool_box)]
impl ServerHandler for WeatherServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "This server provides weather and geocoding tools backed by the Open-Meteo API.\n\
                Available tools:\n\
                - 'get_current_weather': current conditions for a location. \
                Requires 'latitude' and 'longitude'.\n\
                - 'get_forecast': daily forecast for a location. \
                Requires 'latitude' and 'longitude'; optional 'days' (1-16, defaults to 7, \
                out-of-range values are clamped).\n\
                - 'get_location': search locations by name to resolve coordinates. \
                Requires a non-empty 'name'.\n\n\
                Coordinates must be valid: latitude between -90 and 90, longitude between \
                -180 and 180. All data is provided by Open-Meteo (https://open-meteo.com/) \
                and is free to use."
                    .to_string(),
            ),
        }
    }
}

fn reply_to_result(reply: Result<String, String>) -> CallToolResult {
    match reply {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(message) => CallToolResult::error(vec![Content::text(message)]),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
