//! Day-bucketed itinerary model

use serde::{Deserialize, Serialize};

use super::Place;

/// Number of slots every day carries, padded if necessary
pub const PLACES_PER_DAY: usize = 3;

/// Placeholder shown when the attraction list runs out before the last day
pub const NO_MORE_ATTRACTIONS: &str = "No more attractions found.";

/// Fixed note attached to placeholder slots
pub const REST_NOTE: &str = "Enjoy a relaxing break or revisit your favorite spots.";

/// One slot of a day plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItinerarySlot {
    /// A real attraction to visit
    Visit(Place),
    /// Tail padding once the source list is exhausted
    Placeholder,
}

impl ItinerarySlot {
    /// Display title for this slot
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            ItinerarySlot::Visit(place) => &place.name,
            ItinerarySlot::Placeholder => NO_MORE_ATTRACTIONS,
        }
    }

    /// Display note for this slot, falling back to the rest note
    #[must_use]
    pub fn note(&self) -> &str {
        match self {
            ItinerarySlot::Visit(place) => place.description.as_deref().unwrap_or(""),
            ItinerarySlot::Placeholder => REST_NOTE,
        }
    }
}

/// Plan for a single day, always [`PLACES_PER_DAY`] slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-indexed label ("Day 1", "Day 2", ...)
    pub label: String,
    /// Exactly [`PLACES_PER_DAY`] entries, placeholders only at the tail
    pub slots: Vec<ItinerarySlot>,
}

/// Ordered multi-day itinerary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    /// One plan per requested day, in order
    pub days: Vec<DayPlan>,
}

impl Itinerary {
    /// Number of planned days
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Iterate over all visit slots across days, in itinerary order
    pub fn visits(&self) -> impl Iterator<Item = &Place> {
        self.days.iter().flat_map(|day| {
            day.slots.iter().filter_map(|slot| match slot {
                ItinerarySlot::Visit(place) => Some(place),
                ItinerarySlot::Placeholder => None,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_titles() {
        let visit = ItinerarySlot::Visit(Place::new("Louvre"));
        assert_eq!(visit.title(), "Louvre");
        assert_eq!(ItinerarySlot::Placeholder.title(), NO_MORE_ATTRACTIONS);
        assert_eq!(ItinerarySlot::Placeholder.note(), REST_NOTE);
    }

    #[test]
    fn test_visits_skip_placeholders() {
        let itinerary = Itinerary {
            days: vec![DayPlan {
                label: "Day 1".to_string(),
                slots: vec![
                    ItinerarySlot::Visit(Place::new("Louvre")),
                    ItinerarySlot::Placeholder,
                    ItinerarySlot::Placeholder,
                ],
            }],
        };
        let names: Vec<&str> = itinerary.visits().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Louvre"]);
    }
}
