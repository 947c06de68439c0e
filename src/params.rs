use rmcp::schemars;
use thiserror::Error;

pub const MIN_FORECAST_DAYS: i64 = 1;
pub const MAX_FORECAST_DAYS: i64 = 16;
pub const DEFAULT_FORECAST_DAYS: i64 = 7;

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetCurrentWeatherParams {
    #[schemars(description = "Latitude coordinate (-90 to 90)")]
    pub latitude: f64,
    #[schemars(description = "Longitude coordinate (-180 to 180)")]
    pub longitude: f64,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetForecastParams {
    #[schemars(description = "Latitude coordinate (-90 to 90)")]
    pub latitude: f64,
    #[schemars(description = "Longitude coordinate (-180 to 180)")]
    pub longitude: f64,
    #[schemars(description = "Number of forecast days (1-16, default: 7)")]
    pub days: Option<i64>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetLocationParams {
    #[schemars(description = "Name of the city or location to search for")]
    pub name: String,
}

/// Caller input rejected before any network I/O. The `Display` text is the
/// exact string returned to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Location name cannot be empty.")]
    EmptyLocationName,
    #[error("Invalid latitude: {0}. Latitude must be between -90 and 90.")]
    LatitudeOutOfRange(f64),
    #[error("Invalid longitude: {0}. Longitude must be between -180 and 180.")]
    LongitudeOutOfRange(f64),
}

/// Clamps a requested forecast day count into the provider's supported
/// range. Out-of-range values are corrected, not rejected.
pub fn clamp_days(requested: i64) -> u8 {
    requested.clamp(MIN_FORECAST_DAYS, MAX_FORECAST_DAYS) as u8
}

/// Trims the location name and rejects it when nothing remains.
pub fn validate_location_name(name: &str) -> Result<&str, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyLocationName);
    }
    Ok(trimmed)
}

/// Latitude is checked before longitude, so a request with both out of
/// range reports the latitude.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ValidationError::LatitudeOutOfRange(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ValidationError::LongitudeOutOfRange(longitude));
    }
    Ok(())
}
