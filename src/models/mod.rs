//! Data models for the `TripCraft` planning pipeline

pub mod itinerary;
pub mod location;
pub mod place;
pub mod travel_details;

pub use itinerary::{DayPlan, Itinerary, ItinerarySlot};
pub use location::Location;
pub use place::Place;
pub use travel_details::TravelDetails;
