//! Place resolution via the open-meteo geocoding API
//!
//! Maps a destination name to coordinates. The API requires no key. Any
//! failure (transport error, zero results, malformed payload) resolves to
//! `None`; the caller treats that as "location not found" and never retries.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::config::GeocodingConfig;
use crate::models::Location;

/// Resolves a place name to geographic coordinates
pub trait ResolvePlace {
    /// Best-match location for `name`, or `None` on any failure
    fn resolve(&self, name: &str) -> Option<Location>;
}

/// Geocoding client backed by the open-meteo search endpoint
pub struct GeocodingClient {
    client: Client,
    base_url: String,
}

impl GeocodingClient {
    /// Create a new geocoding client
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("TripCraft/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Query the geocoding API for `name`, best match first
    fn geocode(&self, name: &str) -> Result<Vec<Location>> {
        let url = format!(
            "{}/search?name={}&count=1&language=en&format=json",
            self.base_url,
            urlencoding::encode(name)
        );
        debug!("Geocoding request URL: {}", url);

        let response = self.client.get(&url).send()?.error_for_status()?;

        let geocoding_response: openmeteo::GeocodingResponse = response
            .json()
            .with_context(|| "Failed to parse open-meteo geocoding response")?;

        Ok(geocoding_response
            .results
            .unwrap_or_default()
            .into_iter()
            .map(Location::from)
            .collect())
    }
}

impl ResolvePlace for GeocodingClient {
    fn resolve(&self, name: &str) -> Option<Location> {
        match self.geocode(name) {
            Ok(results) if !results.is_empty() => {
                let location = results.into_iter().next()?;
                debug!(
                    "Resolved '{}' to {} ({})",
                    name,
                    location.name,
                    location.format_coordinates()
                );
                Some(location)
            }
            Ok(_) => {
                debug!("No geocoding results for '{}'", name);
                None
            }
            Err(e) => {
                warn!("Geocoding failed for '{}': {}", name, e);
                None
            }
        }
    }
}

/// open-meteo geocoding response structures
mod openmeteo {
    use serde::Deserialize;

    use crate::models::Location;

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub results: Option<Vec<GeocodingResult>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResult {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
        pub country: Option<String>,
    }

    impl From<GeocodingResult> for Location {
        fn from(result: GeocodingResult) -> Self {
            Location {
                latitude: result.latitude,
                longitude: result.longitude,
                name: result.name,
                country: result.country,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocoding_result_conversion() {
        let json = r#"{"results":[{"name":"Paris","latitude":48.85341,"longitude":2.3488,"country":"France"}]}"#;
        let response: openmeteo::GeocodingResponse = serde_json::from_str(json).unwrap();
        let locations: Vec<Location> = response
            .results
            .unwrap()
            .into_iter()
            .map(Location::from)
            .collect();

        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].name, "Paris");
        assert_eq!(locations[0].country.as_deref(), Some("France"));
    }

    #[test]
    fn test_empty_results_payload() {
        let json = r#"{"generationtime_ms":0.5}"#;
        let response: openmeteo::GeocodingResponse = serde_json::from_str(json).unwrap();
        assert!(response.results.is_none());
    }
}
