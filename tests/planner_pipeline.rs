//! End-to-end planner tests with stubbed collaborators
//!
//! Exercises the full chain (extract -> resolve -> fetch -> assemble ->
//! enrich) without network access.

use tripcraft::config::DefaultsConfig;
use tripcraft::models::itinerary::NO_MORE_ATTRACTIONS;
use tripcraft::{
    DescribePlace, FetchPlaces, ItinerarySlot, Location, Place, PlaceCategory, ResolvePlace,
    TripCraftError, TripPlanner, LOCATION_NOT_FOUND,
};

struct FixedResolver {
    known: Option<Location>,
}

impl ResolvePlace for FixedResolver {
    fn resolve(&self, _name: &str) -> Option<Location> {
        self.known.clone()
    }
}

struct FixedFetcher {
    attractions: Vec<&'static str>,
    hotels: Vec<&'static str>,
    restaurants: Vec<&'static str>,
}

impl FetchPlaces for FixedFetcher {
    fn fetch(&self, _location: &Location, category: PlaceCategory) -> Vec<Place> {
        let names = match category {
            PlaceCategory::Attraction => &self.attractions,
            PlaceCategory::Hotel => &self.hotels,
            PlaceCategory::Restaurant => &self.restaurants,
        };
        names.iter().map(|name| Place::new(*name)).collect()
    }
}

struct CannedDescriber;

impl DescribePlace for CannedDescriber {
    fn describe(&self, place: &str) -> String {
        format!("{place} is worth a visit.")
    }
}

fn paris() -> Location {
    Location::with_country(48.8566, 2.3522, "Paris".to_string(), "France".to_string())
}

fn paris_planner() -> TripPlanner {
    TripPlanner::with_collaborators(
        Box::new(FixedResolver {
            known: Some(paris()),
        }),
        Box::new(FixedFetcher {
            attractions: vec!["Eiffel Tower", "Louvre", "Notre Dame", "Arc de Triomphe"],
            hotels: vec!["Hotel Lutetia", "Le Meurice"],
            restaurants: vec!["Le Procope", "Septime"],
        }),
        Some(Box::new(CannedDescriber)),
        DefaultsConfig::default(),
    )
}

fn slot_titles(slots: &[ItinerarySlot]) -> Vec<&str> {
    slots.iter().map(ItinerarySlot::title).collect()
}

#[test]
fn boston_to_paris_scenario() {
    let plan = paris_planner()
        .plan("Plan a trip from Boston to Paris for 3 days with a budget of 2000 for leisure travel")
        .expect("planning should succeed");

    assert_eq!(plan.details.starting_city.as_deref(), Some("Boston"));
    assert_eq!(plan.details.destination.as_deref(), Some("Paris"));
    assert_eq!(plan.details.days, Some(3));
    assert_eq!(plan.details.budget.as_deref(), Some("2000"));
    assert_eq!(plan.details.purpose.as_deref(), Some("leisure"));

    // 4 attractions over 3 days: padding only at the tail
    assert_eq!(plan.itinerary.day_count(), 3);
    assert_eq!(
        slot_titles(&plan.itinerary.days[0].slots),
        vec!["Eiffel Tower", "Louvre", "Notre Dame"]
    );
    assert_eq!(
        slot_titles(&plan.itinerary.days[1].slots),
        vec!["Arc de Triomphe", NO_MORE_ATTRACTIONS, NO_MORE_ATTRACTIONS]
    );
    assert_eq!(
        slot_titles(&plan.itinerary.days[2].slots),
        vec![NO_MORE_ATTRACTIONS, NO_MORE_ATTRACTIONS, NO_MORE_ATTRACTIONS]
    );
}

#[test]
fn enrichment_decorates_every_visit() {
    let plan = paris_planner()
        .plan("a 2 day trip to Paris")
        .expect("planning should succeed");

    for place in plan.itinerary.visits() {
        assert_eq!(
            place.description.as_deref(),
            Some(format!("{} is worth a visit.", place.name).as_str())
        );
    }
}

#[test]
fn listings_are_trimmed_to_display_limit() {
    let planner = TripPlanner::with_collaborators(
        Box::new(FixedResolver {
            known: Some(paris()),
        }),
        Box::new(FixedFetcher {
            attractions: vec!["Eiffel Tower"],
            hotels: vec!["H1", "H2", "H3", "H4", "H5", "H6", "H7"],
            restaurants: vec!["R1"],
        }),
        None,
        DefaultsConfig::default(),
    );

    let plan = planner.plan("a 1 day trip to Paris").unwrap();
    assert_eq!(plan.hotels.len(), 5);
    assert_eq!(plan.restaurants.len(), 1);
}

#[test]
fn unknown_destination_reports_location_not_found() {
    let planner = TripPlanner::with_collaborators(
        Box::new(FixedResolver { known: None }),
        Box::new(FixedFetcher {
            attractions: vec!["never fetched"],
            hotels: vec![],
            restaurants: vec![],
        }),
        None,
        DefaultsConfig::default(),
    );

    let err = planner.plan("a 3 day trip to Atlantis").unwrap_err();
    assert!(matches!(err, TripCraftError::Unavailable { .. }));
    assert_eq!(err.to_string(), LOCATION_NOT_FOUND);
}

#[test]
fn huge_day_count_is_rejected_before_assembly() {
    let err = paris_planner()
        .plan("a 4294967295 day trip to Paris")
        .unwrap_err();
    assert!(matches!(err, TripCraftError::Validation { .. }));
}

#[test]
fn blank_request_is_rejected() {
    let err = paris_planner().plan("").unwrap_err();
    assert!(matches!(err, TripCraftError::Validation { .. }));
    assert!(err.user_message().contains("travel description"));
}
