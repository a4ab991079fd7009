//! Flight requests and their frame-by-frame interpolation.

use std::f64::consts::{PI, TAU};
use std::fmt;

use globenav_core::{CompletionCallback, Destination, Orientation};

use crate::camera::CameraPose;

/// A request to animate the camera to a destination.
#[derive(Clone)]
pub struct FlightRequest {
    /// Where the flight ends.
    pub destination: Destination,
    /// Orientation on arrival. Unset angles use the camera defaults.
    pub orientation: Option<Orientation>,
    /// Duration in seconds. Zero or less jumps immediately.
    pub duration: f64,
    /// Invoked once when the flight arrives. Dropped if the flight is superseded.
    pub complete: Option<CompletionCallback>,
}

impl FlightRequest {
    /// Creates a request with no orientation, no callback and the given duration.
    pub fn new(destination: impl Into<Destination>, duration: f64) -> Self {
        Self {
            destination: destination.into(),
            orientation: None,
            duration,
            complete: None,
        }
    }

    /// Sets the arrival orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Sets the completion callback.
    #[must_use]
    pub fn with_complete(mut self, complete: Option<CompletionCallback>) -> Self {
        self.complete = complete;
        self
    }
}

impl fmt::Debug for FlightRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlightRequest")
            .field("destination", &self.destination)
            .field("orientation", &self.orientation)
            .field("duration", &self.duration)
            .field("complete", &self.complete.is_some())
            .finish()
    }
}

/// An in-progress camera flight.
pub struct Flight {
    from: CameraPose,
    to: CameraPose,
    duration: f64,
    elapsed: f64,
    complete: Option<CompletionCallback>,
}

impl Flight {
    /// Starts a flight between two poses.
    pub fn new(
        from: CameraPose,
        to: CameraPose,
        duration: f64,
        complete: Option<CompletionCallback>,
    ) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            complete,
        }
    }

    /// The pose the flight ends at.
    pub fn target(&self) -> CameraPose {
        self.to
    }

    /// Fraction of the flight completed, in [0, 1].
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Whether the flight has reached its target.
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Advances the flight by `dt` seconds and returns the interpolated pose.
    pub fn advance(&mut self, dt: f64) -> CameraPose {
        self.elapsed += dt.max(0.0);
        self.pose()
    }

    /// Interpolated pose at the current progress.
    pub fn pose(&self) -> CameraPose {
        let t = self.progress();
        if t >= 1.0 {
            return self.to;
        }
        // Smoothstep easing
        let eased = t * t * (3.0 - 2.0 * t);

        // Interpolate the radius separately so the path arcs over the surface
        // instead of cutting through the ellipsoid.
        let from_radius = self.from.position.length();
        let to_radius = self.to.position.length();
        let radius = from_radius + (to_radius - from_radius) * eased;
        let chord = self.from.position.lerp(self.to.position, eased);
        let position = chord
            .try_normalize()
            .map_or(chord, |direction| direction * radius);

        CameraPose {
            position,
            heading: lerp_angle(self.from.heading, self.to.heading, eased),
            pitch: self.from.pitch + (self.to.pitch - self.from.pitch) * eased,
            roll: lerp_angle(self.from.roll, self.to.roll, eased),
        }
    }

    /// Takes the completion callback, leaving none behind.
    pub(crate) fn take_complete(&mut self) -> Option<CompletionCallback> {
        self.complete.take()
    }
}

impl fmt::Debug for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flight")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .finish_non_exhaustive()
    }
}

/// Interpolates along the shorter way around the circle.
fn lerp_angle(from: f64, to: f64, t: f64) -> f64 {
    let mut delta = (to - from) % TAU;
    if delta > PI {
        delta -= TAU;
    } else if delta < -PI {
        delta += TAU;
    }
    from + delta * t
}
