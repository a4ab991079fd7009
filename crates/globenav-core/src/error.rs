//! Error types for globenav.

use thiserror::Error;

/// The main error type for globenav operations.
#[derive(Error, Debug)]
pub enum GlobeNavError {
    /// A configured rectangle failed validation.
    #[error("invalid reset target: {0}")]
    InvalidTarget(#[from] RectangleError),

    /// The map context could not perform a transition.
    #[error("transition to {target} failed: {reason}")]
    TransitionFailed {
        /// Which kind of target was being framed.
        target: &'static str,
        /// Collaborator-supplied description of the failure.
        reason: String,
    },

    /// JSON configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Reasons a geographic rectangle is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RectangleError {
    /// One of the bounds is NaN or infinite.
    #[error("rectangle bounds must be finite")]
    NonFinite,

    /// A longitude bound lies outside [-PI, PI].
    #[error("longitude {0} is outside [-PI, PI]")]
    LongitudeOutOfRange(f64),

    /// A latitude bound lies outside [-PI/2, PI/2].
    #[error("latitude {0} is outside [-PI/2, PI/2]")]
    LatitudeOutOfRange(f64),

    /// West is not strictly less than east.
    #[error("west {west} must be less than east {east}")]
    WestNotBeforeEast { west: f64, east: f64 },

    /// South is not strictly less than north.
    #[error("south {south} must be less than north {north}")]
    SouthNotBeforeNorth { south: f64, north: f64 },
}

/// A specialized Result type for globenav operations.
pub type Result<T> = std::result::Result<T, GlobeNavError>;
