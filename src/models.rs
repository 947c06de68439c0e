use serde::{Deserialize, Serialize};

/// Geocoding response envelope. The provider omits `results` entirely when
/// nothing matches, so it defaults to empty.
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Vec<LocationMatch>,
}

/// One geocoding candidate, reduced to the fields callers act on:
/// coordinates plus administrative metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationMatch {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_provider_candidate_and_ignores_extra_fields() {
        let payload = serde_json::json!({
            "results": [{
                "id": 2950159,
                "name": "Berlin",
                "latitude": 52.52437,
                "longitude": 13.41053,
                "elevation": 74.0,
                "country": "Germany",
                "country_code": "DE",
                "admin1": "Land Berlin",
                "timezone": "Europe/Berlin",
                "population": 3426354u64
            }]
        });

        let parsed: GeocodingResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(parsed.results.len(), 1);
        let m = &parsed.results[0];
        assert_eq!(m.name, "Berlin");
        assert_eq!(m.admin1.as_deref(), Some("Land Berlin"));
        assert_eq!(m.population, Some(3426354));
    }

    #[test]
    fn missing_results_key_means_no_matches() {
        let parsed: GeocodingResponse =
            serde_json::from_value(serde_json::json!({"generationtime_ms": 0.5})).unwrap();
        assert!(parsed.results.is_empty());
    }

    #[test]
    fn absent_metadata_is_not_serialized() {
        let m = LocationMatch {
            name: "Atlantis".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            country: None,
            country_code: None,
            admin1: None,
            timezone: None,
            population: None,
        };
        let json = serde_json::to_string(&m).unwrap();
        assert!(!json.contains("country"));
        assert!(!json.contains("population"));
    }
}
