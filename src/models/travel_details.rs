//! Structured travel request extracted from free text

use serde::{Deserialize, Serialize};

/// Travel attributes recognised in a free-text request.
///
/// Every field is optional: a pattern that does not match leaves its field
/// absent, which is the only "missing data" signal the extractor produces.
/// Built once per submission and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelDetails {
    /// City the trip starts from
    pub starting_city: Option<String>,
    /// Destination city or region
    pub destination: Option<String>,
    /// Trip length in days
    pub days: Option<u32>,
    /// Stated budget, kept verbatim as entered
    pub budget: Option<String>,
    /// Purpose of travel (leisure, business, ...)
    pub purpose: Option<String>,
    /// Free-form preferences
    pub preferences: Option<String>,
    /// Dietary interests
    pub dietary: Option<String>,
    /// Accommodation style
    pub accommodation: Option<String>,
}

impl TravelDetails {
    /// True when no field was extracted at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.starting_city.is_none()
            && self.destination.is_none()
            && self.days.is_none()
            && self.budget.is_none()
            && self.purpose.is_none()
            && self.preferences.is_none()
            && self.dietary.is_none()
            && self.accommodation.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(TravelDetails::default().is_empty());
    }

    #[test]
    fn test_single_field_not_empty() {
        let details = TravelDetails {
            destination: Some("Paris".to_string()),
            ..TravelDetails::default()
        };
        assert!(!details.is_empty());
    }
}
