//! Trip planning service
//!
//! Orchestrates the blocking pipeline: extract travel details from free
//! text, resolve the destination, fetch points of interest, assemble the
//! day-bucketed itinerary, and optionally enrich it with generated
//! descriptions. Collaborators sit behind trait seams so the whole chain
//! can be exercised without network access.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{DefaultsConfig, TripCraftConfig};
use crate::describe::{DescribePlace, OpenRouterClient};
use crate::error::TripCraftError;
use crate::extractor;
use crate::geocoding::{GeocodingClient, ResolvePlace};
use crate::itinerary;
use crate::models::{Itinerary, Place, TravelDetails};
use crate::places::{FetchPlaces, OverpassClient, PlaceCategory};

/// Sentinel shown when the destination cannot be resolved to coordinates
pub const LOCATION_NOT_FOUND: &str = "Location not found. Try another city.";

/// Upper bound on the trip length, matching the config limit for
/// `defaults.default_days`
pub const MAX_TRIP_DAYS: u32 = 30;

/// Complete result of one planning run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlan {
    /// Details extracted from the request text
    pub details: TravelDetails,
    /// Hotels near the destination, trimmed for display
    pub hotels: Vec<Place>,
    /// Restaurants near the destination, trimmed for display
    pub restaurants: Vec<Place>,
    /// Day-bucketed itinerary
    pub itinerary: Itinerary,
}

/// Trip planning service holding its collaborators and defaults
pub struct TripPlanner {
    resolver: Box<dyn ResolvePlace>,
    places: Box<dyn FetchPlaces>,
    describer: Option<Box<dyn DescribePlace>>,
    defaults: DefaultsConfig,
}

impl TripPlanner {
    /// Build a planner with live HTTP collaborators from configuration
    pub fn from_config(config: &TripCraftConfig) -> Result<Self> {
        let describer = OpenRouterClient::from_config(&config.description)?
            .map(|client| Box::new(client) as Box<dyn DescribePlace>);

        Ok(Self {
            resolver: Box::new(GeocodingClient::new(&config.geocoding)?),
            places: Box::new(OverpassClient::new(&config.overpass)?),
            describer,
            defaults: config.defaults.clone(),
        })
    }

    /// Build a planner from explicit collaborators (test seam)
    pub fn with_collaborators(
        resolver: Box<dyn ResolvePlace>,
        places: Box<dyn FetchPlaces>,
        describer: Option<Box<dyn DescribePlace>>,
        defaults: DefaultsConfig,
    ) -> Self {
        Self {
            resolver,
            places,
            describer,
            defaults,
        }
    }

    /// Plan a trip from a free-text request.
    ///
    /// Runs the whole sequential chain; every collaborator failure either
    /// degrades to a visible placeholder or surfaces as a single
    /// user-facing error. Nothing is retried.
    pub fn plan(&self, request: &str) -> crate::Result<TripPlan> {
        if request.trim().is_empty() {
            return Err(TripCraftError::validation(
                "Please enter a travel description.",
            ));
        }

        let details = extractor::extract(request);

        let destination = details.destination.clone().ok_or_else(|| {
            TripCraftError::validation("Please provide a valid destination.")
        })?;

        let days = match details.days.or(self.defaults.default_days) {
            Some(days) => days,
            None => {
                return Err(TripCraftError::validation(
                    "Please provide the number of days for your trip.",
                ))
            }
        };

        // The extracted value bypasses config validation, so bound it here
        if days == 0 || days > MAX_TRIP_DAYS {
            return Err(TripCraftError::validation(format!(
                "Trip length must be between 1 and {MAX_TRIP_DAYS} days."
            )));
        }

        info!("Planning {}-day trip to {}", days, destination);

        let Some(location) = self.resolver.resolve(&destination) else {
            debug!("Destination '{}' did not resolve", destination);
            return Err(TripCraftError::unavailable(LOCATION_NOT_FOUND));
        };

        let attractions = self.places.fetch(&location, PlaceCategory::Attraction);
        let mut plan_days = itinerary::assemble(&attractions, days)?;

        if let Some(describer) = &self.describer {
            itinerary::enrich(&mut plan_days, describer.as_ref());
        }

        // Hotel and restaurant listings are display-only; failure markers
        // pass through so the presentation layer can show them verbatim.
        let mut hotels = self.places.fetch(&location, PlaceCategory::Hotel);
        hotels.truncate(self.defaults.listing_limit);

        let mut restaurants = self.places.fetch(&location, PlaceCategory::Restaurant);
        restaurants.truncate(self.defaults.listing_limit);

        Ok(TripPlan {
            details,
            hotels,
            restaurants,
            itinerary: plan_days,
        })
    }
}
