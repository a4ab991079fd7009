//! Camera orientation and flight destinations.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::geodesy::Rectangle;

/// Heading applied by a reset when no orientation is configured.
pub const DEFAULT_RESET_HEADING_DEGREES: f64 = 5.729_578;

/// Camera orientation as heading, pitch and roll in radians.
///
/// Unset angles are left for the camera to choose (usually looking straight down
/// with no roll).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Orientation {
    /// Rotation about the local up axis, clockwise from north.
    pub heading: Option<f64>,
    /// Rotation about the local east axis.
    pub pitch: Option<f64>,
    /// Rotation about the view direction.
    pub roll: Option<f64>,
}

impl Orientation {
    /// Creates a fully specified orientation.
    pub const fn new(heading: f64, pitch: f64, roll: f64) -> Self {
        Self {
            heading: Some(heading),
            pitch: Some(pitch),
            roll: Some(roll),
        }
    }

    /// Creates an orientation that only fixes the heading.
    pub const fn from_heading(heading: f64) -> Self {
        Self {
            heading: Some(heading),
            pitch: None,
            roll: None,
        }
    }

    /// The orientation used by a reset when none is configured (a heading of about 0.1 rad).
    pub fn reset_default() -> Self {
        Self::from_heading(DEFAULT_RESET_HEADING_DEGREES.to_radians())
    }
}

/// Where a flight ends: a Cartesian position or a rectangle to frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Destination {
    /// Earth-fixed position in metres.
    Cartesian(DVec3),
    /// Geographic rectangle to fit in view.
    Rectangle(Rectangle),
}

impl From<DVec3> for Destination {
    fn from(position: DVec3) -> Self {
        Destination::Cartesian(position)
    }
}

impl From<Rectangle> for Destination {
    fn from(rectangle: Rectangle) -> Self {
        Destination::Rectangle(rectangle)
    }
}
