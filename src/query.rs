//! Typed outbound queries, one per tool. Each struct enumerates the exact
//! provider fields it requests and renders to the key/value pairs handed to
//! the HTTP client.

use crate::params::clamp_days;

/// Current-condition fields requested from the forecast endpoint.
pub const CURRENT_WEATHER_FIELDS: [&str; 15] = [
    "temperature_2m",
    "relative_humidity_2m",
    "apparent_temperature",
    "is_day",
    "precipitation",
    "rain",
    "showers",
    "snowfall",
    "weather_code",
    "cloud_cover",
    "pressure_msl",
    "surface_pressure",
    "wind_speed_10m",
    "wind_direction_10m",
    "wind_gusts_10m",
];

/// Daily aggregate fields requested from the forecast endpoint.
pub const DAILY_FORECAST_FIELDS: [&str; 5] = [
    "temperature_2m_max",
    "temperature_2m_min",
    "precipitation_sum",
    "wind_speed_10m_max",
    "weather_code",
];

/// Candidate matches requested per geocoding search.
pub const LOCATION_RESULT_COUNT: u8 = 5;

#[derive(Debug, Clone, Copy)]
pub struct CurrentWeatherQuery {
    latitude: f64,
    longitude: f64,
}

impl CurrentWeatherQuery {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", self.latitude.to_string()),
            ("longitude", self.longitude.to_string()),
            ("current", CURRENT_WEATHER_FIELDS.join(",")),
        ]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ForecastQuery {
    latitude: f64,
    longitude: f64,
    days: u8,
}

impl ForecastQuery {
    /// The requested day count is clamped here, so the bound is already
    /// applied on the query a caller can inspect before it is sent.
    pub fn new(latitude: f64, longitude: f64, days: i64) -> Self {
        Self {
            latitude,
            longitude,
            days: clamp_days(days),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", self.latitude.to_string()),
            ("longitude", self.longitude.to_string()),
            ("daily", DAILY_FORECAST_FIELDS.join(",")),
            ("forecast_days", self.days.to_string()),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct LocationSearchQuery {
    name: String,
}

impl LocationSearchQuery {
    /// Expects a name already validated by
    /// [`crate::params::validate_location_name`].
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("count", LOCATION_RESULT_COUNT.to_string()),
            ("language", "en".to_string()),
            ("format", "json".to_string()),
        ]
    }
}
