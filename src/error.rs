//! Error types and handling for the `TripCraft` application

use thiserror::Error;

/// Main error type for the `TripCraft` application.
///
/// Transport failures never surface here: the HTTP collaborators absorb
/// them into sentinel values, so the taxonomy only covers configuration,
/// input validation, and sentinel propagation.
#[derive(Error, Debug)]
pub enum TripCraftError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// A collaborator signalled failure through its sentinel message; the
    /// display is the message itself so it can be shown verbatim
    #[error("{message}")]
    Unavailable { message: String },
}

impl TripCraftError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new unavailable-data error from a sentinel message
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripCraftError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            TripCraftError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripCraftError::Unavailable { message } => message.clone(),
        }
    }
}
