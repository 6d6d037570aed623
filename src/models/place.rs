//! Point-of-interest model returned by the map-data provider

use serde::{Deserialize, Serialize};

/// A named point of interest.
///
/// The map-data provider never raises on failure; instead it returns a list
/// whose single element is a failure marker carrying a human-readable
/// message. Downstream code checks [`Place::is_failure`] rather than
/// matching on an error type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    /// Display name, or the failure message for a marker entry
    pub name: String,
    /// Optional short description added by the enrichment step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Marks a provider failure propagated as data
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    failure: bool,
}

impl Place {
    /// Create a regular place with no description
    #[must_use]
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            description: None,
            failure: false,
        }
    }

    /// Create a failure marker carrying a provider message
    #[must_use]
    pub fn failure_marker<S: Into<String>>(message: S) -> Self {
        Self {
            name: message.into(),
            description: None,
            failure: true,
        }
    }

    /// True when this entry signals a provider failure instead of data
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_place() {
        let place = Place::new("Eiffel Tower");
        assert_eq!(place.name, "Eiffel Tower");
        assert!(!place.is_failure());
        assert!(place.description.is_none());
    }

    #[test]
    fn test_failure_marker() {
        let marker = Place::failure_marker("No matching places found.");
        assert!(marker.is_failure());
        assert_eq!(marker.name, "No matching places found.");
    }
}
