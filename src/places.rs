//! Point-of-interest queries against the Overpass API
//!
//! Fetches named places of a given category within a fixed radius of a
//! resolved location. Failures are absorbed here: the returned list then
//! contains a single failure-marker [`Place`] carrying a human-readable
//! message, which the itinerary assembler converts into an error signal.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::{debug, info, warn};

use crate::config::OverpassConfig;
use crate::models::{Location, Place};

/// Marker message when the Overpass query yielded no places
pub const NO_PLACES_FOUND: &str = "No matching places found.";

/// Marker message when the Overpass call itself failed
pub const FETCH_FAILED: &str = "Could not retrieve data.";

/// Name substituted for OSM nodes without a name tag
const UNNAMED_LOCATION: &str = "Unnamed Location";

/// Category of points of interest, mapped to an OSM tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceCategory {
    /// Tourist attractions (tourism=attraction)
    Attraction,
    /// Hotels (tourism=hotel)
    Hotel,
    /// Restaurants (amenity=restaurant)
    Restaurant,
}

impl PlaceCategory {
    /// OSM key/value pair for this category
    #[must_use]
    pub fn osm_tag(self) -> (&'static str, &'static str) {
        match self {
            PlaceCategory::Attraction => ("tourism", "attraction"),
            PlaceCategory::Hotel => ("tourism", "hotel"),
            PlaceCategory::Restaurant => ("amenity", "restaurant"),
        }
    }
}

/// Fetches points of interest around a location
pub trait FetchPlaces {
    /// Places of `category` near `location`, in provider order, or a
    /// single-element list with a failure marker
    fn fetch(&self, location: &Location, category: PlaceCategory) -> Vec<Place>;
}

/// Overpass API client
pub struct OverpassClient {
    client: Client,
    base_url: String,
    radius_meters: u32,
    result_limit: u32,
}

impl OverpassClient {
    /// Create a new Overpass client
    pub fn new(config: &OverpassConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("TripCraft/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            radius_meters: config.radius_meters,
            result_limit: config.result_limit,
        })
    }

    /// Build the Overpass QL query for a category around coordinates
    fn build_query(&self, location: &Location, category: PlaceCategory) -> String {
        let (key, value) = category.osm_tag();
        format!(
            "[out:json];\nnode[\"{key}\"=\"{value}\"](around:{radius}, {lat}, {lon});\nout center {limit};",
            radius = self.radius_meters,
            lat = location.latitude,
            lon = location.longitude,
            limit = self.result_limit,
        )
    }

    /// Run the query, propagating transport and decode errors
    fn query(&self, location: &Location, category: PlaceCategory) -> Result<Vec<Place>> {
        let query = self.build_query(location, category);
        debug!("Overpass query:\n{}", query);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("data", query.as_str())])
            .send()?
            .error_for_status()?;

        let overpass_response: overpass::QueryResponse = response
            .json()
            .with_context(|| "Failed to parse Overpass response")?;

        Ok(overpass_response
            .elements
            .into_iter()
            .map(|element| {
                Place::new(
                    element
                        .tags
                        .and_then(|tags| tags.name)
                        .unwrap_or_else(|| UNNAMED_LOCATION.to_string()),
                )
            })
            .collect())
    }
}

impl FetchPlaces for OverpassClient {
    fn fetch(&self, location: &Location, category: PlaceCategory) -> Vec<Place> {
        info!(
            "Fetching {:?} places within {}m of {}",
            category, self.radius_meters, location.name
        );

        match self.query(location, category) {
            Ok(places) if !places.is_empty() => {
                info!("Found {} {:?} places", places.len(), category);
                places
            }
            Ok(_) => {
                debug!("Overpass returned no {:?} places near {}", category, location.name);
                vec![Place::failure_marker(NO_PLACES_FOUND)]
            }
            Err(e) => {
                warn!("Overpass request failed: {}", e);
                vec![Place::failure_marker(FETCH_FAILED)]
            }
        }
    }
}

/// Overpass API response structures
mod overpass {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct QueryResponse {
        #[serde(default)]
        pub elements: Vec<Element>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Element {
        pub tags: Option<Tags>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Tags {
        pub name: Option<String>,
    }
}
