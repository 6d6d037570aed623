//! Itinerary assembly
//!
//! Partitions a flat list of attractions into fixed-size daily buckets and
//! optionally annotates each visit with a generated description.

use tracing::{debug, info};

use crate::describe::DescribePlace;
use crate::error::TripCraftError;
use crate::models::itinerary::{DayPlan, Itinerary, ItinerarySlot, PLACES_PER_DAY};
use crate::models::Place;

/// Assemble a day-bucketed itinerary from an ordered attraction list.
///
/// The list is truncated to `day_count * 3` entries and chunked
/// sequentially, in input order, one chunk per day. Days past the end of
/// the list are padded with placeholder slots; padding only ever appears at
/// the tail of the itinerary.
///
/// The only error path: when the list's first element is a failure marker
/// propagated from the point-of-interest fetcher, the marker's message is
/// returned as the error instead of a partial itinerary.
pub fn assemble(places: &[Place], day_count: u32) -> Result<Itinerary, TripCraftError> {
    if let Some(first) = places.first() {
        if first.is_failure() {
            debug!("Attraction list starts with failure marker: {}", first.name);
            return Err(TripCraftError::unavailable(first.name.clone()));
        }
    }

    let limit = day_count as usize * PLACES_PER_DAY;
    let selected = &places[..places.len().min(limit)];

    let mut days = Vec::with_capacity(day_count as usize);
    for day in 1..=day_count as usize {
        let start = (day - 1) * PLACES_PER_DAY;
        let mut slots: Vec<ItinerarySlot> = selected
            .iter()
            .skip(start)
            .take(PLACES_PER_DAY)
            .cloned()
            .map(ItinerarySlot::Visit)
            .collect();

        while slots.len() < PLACES_PER_DAY {
            slots.push(ItinerarySlot::Placeholder);
        }

        days.push(DayPlan {
            label: format!("Day {day}"),
            slots,
        });
    }

    info!(
        "Assembled {}-day itinerary from {} attractions",
        day_count,
        selected.len()
    );
    Ok(Itinerary { days })
}

/// Attach generated descriptions to every visit slot.
///
/// Placeholder slots keep their fixed rest note. Decoration only: bucket
/// membership and ordering are never changed.
pub fn enrich(itinerary: &mut Itinerary, describer: &dyn DescribePlace) {
    for day in &mut itinerary.days {
        for slot in &mut day.slots {
            if let ItinerarySlot::Visit(place) = slot {
                place.description = Some(describer.describe(&place.name));
            }
        }
    }
}
