//! `TripCraft` - Free-text travel request planning
//!
//! This library turns a free-text travel request into a day-bucketed
//! itinerary: it extracts structured details, resolves the destination to
//! coordinates, queries a map-data service for points of interest, and
//! optionally enriches each stop with a generated description.

pub mod config;
pub mod describe;
pub mod error;
pub mod extractor;
pub mod geocoding;
pub mod itinerary;
pub mod models;
pub mod places;
pub mod planner;

// Re-export core types for public API
pub use config::TripCraftConfig;
pub use describe::{DescribePlace, OpenRouterClient, DESCRIPTION_FALLBACK};
pub use error::TripCraftError;
pub use extractor::extract;
pub use geocoding::{GeocodingClient, ResolvePlace};
pub use models::{DayPlan, Itinerary, ItinerarySlot, Location, Place, TravelDetails};
pub use places::{FetchPlaces, OverpassClient, PlaceCategory};
pub use planner::{TripPlan, TripPlanner, LOCATION_NOT_FOUND};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripCraftError>;
