//! Free-text travel detail extraction
//!
//! This module turns a single free-text travel request into a structured
//! [`TravelDetails`] record. One case-insensitive pattern is applied per
//! field, in the declared order below; each pattern either matches the first
//! occurrence in the text or leaves its field absent. Fields never read each
//! other, so overlapping keywords (e.g. "prefer" feeding both preferences
//! and accommodation) simply populate both fields.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::TravelDetails;

/// Compiled field patterns, built once per process
struct FieldPatterns {
    starting_city: Regex,
    destination: Regex,
    days: Regex,
    budget: Regex,
    purpose: Regex,
    preferences: Regex,
    dietary: Regex,
    accommodation: Regex,
}

static PATTERNS: LazyLock<FieldPatterns> = LazyLock::new(|| FieldPatterns {
    // City name between "from" and "to"
    starting_city: Regex::new(r"(?i)\bfrom\s+([A-Za-z][A-Za-z\s]*?)\s+to\b").unwrap(),
    // Name after "to"/"in", up to a stop word, punctuation, or end of input
    destination: Regex::new(
        r"(?i)\b(?:to|in)\s+([A-Za-z][A-Za-z\s]*?)(?:\s+(?:for|with|and|a|the)\b|[.,!?]|$)",
    )
    .unwrap(),
    // First integer followed by "day"/"days"/"-day"
    days: Regex::new(r"(?i)\b(\d+)\s*-?\s*days?\b").unwrap(),
    budget: Regex::new(r"(?i)\bbudget of\s+(\d+)").unwrap(),
    purpose: Regex::new(r"(?i)\bfor\s+([A-Za-z][A-Za-z\s]*?)\s+travel\b").unwrap(),
    preferences: Regex::new(r"(?i)\bprefer\s+([A-Za-z][A-Za-z,\s]*)").unwrap(),
    dietary: Regex::new(r"(?i)\b(?:love|want to try)\s+([A-Za-z][A-Za-z,\s]*?)\s+(?:food|cuisine)\b")
        .unwrap(),
    accommodation: Regex::new(
        r"(?i)\b(?:want a|looking for|prefer)\s+([A-Za-z][A-Za-z,\s]*?)\s+stay\b",
    )
    .unwrap(),
});

/// First capture group of `pattern` in `text`, trimmed, or `None`
fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extract structured travel details from a free-text request.
///
/// Never fails: unparseable input yields a record with all fields absent.
#[must_use]
pub fn extract(text: &str) -> TravelDetails {
    let details = TravelDetails {
        starting_city: capture(&PATTERNS.starting_city, text),
        destination: capture(&PATTERNS.destination, text),
        // Parse failure (e.g. overflow) leaves the field absent, never an error
        days: capture(&PATTERNS.days, text).and_then(|raw| raw.parse::<u32>().ok()),
        budget: capture(&PATTERNS.budget, text),
        purpose: capture(&PATTERNS.purpose, text),
        preferences: capture(&PATTERNS.preferences, text),
        dietary: capture(&PATTERNS.dietary, text),
        accommodation: capture(&PATTERNS.accommodation, text),
    };

    debug!("Extracted travel details: {:?}", details);
    details
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_full_request() {
        let details = extract(
            "Plan a trip from Boston to Paris for 3 days with a budget of 2000 for leisure travel",
        );
        assert_eq!(details.starting_city.as_deref(), Some("Boston"));
        assert_eq!(details.destination.as_deref(), Some("Paris"));
        assert_eq!(details.days, Some(3));
        assert_eq!(details.budget.as_deref(), Some("2000"));
        assert_eq!(details.purpose.as_deref(), Some("leisure"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("completely unrelated text")]
    fn test_no_match_leaves_all_absent(#[case] input: &str) {
        assert!(extract(input).is_empty());
    }

    #[rstest]
    #[case("a 3 day trip", Some(3))]
    #[case("a 3-day trip", Some(3))]
    #[case("stay for 14 days", Some(14))]
    #[case("no duration mentioned", None)]
    #[case("a 99999999999999999999 day trip", None)] // overflow stays absent
    fn test_day_extraction(#[case] input: &str, #[case] expected: Option<u32>) {
        assert_eq!(extract(input).days, expected);
    }

    #[test]
    fn test_days_is_numeric_not_string() {
        let details = extract("I want a 5 day holiday");
        assert_eq!(details.days, Some(5));
    }

    #[rstest]
    #[case("a trip to Paris", "Paris")]
    #[case("a trip to Paris for fun", "Paris")]
    #[case("a week in Rome with friends", "Rome")]
    #[case("fly to Los Angeles and relax", "Los Angeles")]
    #[case("go to Tokyo.", "Tokyo")]
    fn test_destination_stops_at_clause_boundary(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(extract(input).destination.as_deref(), Some(expected));
    }

    #[test]
    fn test_from_to_pair() {
        let details = extract("from New York to London");
        assert_eq!(details.starting_city.as_deref(), Some("New York"));
        assert_eq!(details.destination.as_deref(), Some("London"));
    }

    #[test]
    fn test_case_insensitive() {
        let details = extract("FROM Boston TO Paris FOR 2 DAYS");
        assert_eq!(details.starting_city.as_deref(), Some("Boston"));
        assert_eq!(details.destination.as_deref(), Some("Paris"));
        assert_eq!(details.days, Some(2));
    }

    #[test]
    fn test_dietary_and_accommodation() {
        let details = extract("I love Italian food and I want a luxury stay");
        assert_eq!(details.dietary.as_deref(), Some("Italian"));
        assert_eq!(details.accommodation.as_deref(), Some("luxury"));
    }

    #[test]
    fn test_want_to_try_cuisine() {
        let details = extract("I want to try Japanese cuisine");
        assert_eq!(details.dietary.as_deref(), Some("Japanese"));
    }

    #[test]
    fn test_prefer_feeds_both_preferences_and_accommodation() {
        // Overlapping keywords are not disambiguated: both patterns fire
        let details = extract("I prefer a quiet boutique stay");
        assert!(details.preferences.is_some());
        assert_eq!(details.accommodation.as_deref(), Some("a quiet boutique"));
    }

    #[test]
    fn test_fields_are_independent() {
        let details = extract("budget of 1500");
        assert_eq!(details.budget.as_deref(), Some("1500"));
        assert!(details.destination.is_none());
        assert!(details.days.is_none());
    }
}
