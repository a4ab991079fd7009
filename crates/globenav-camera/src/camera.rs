//! Camera pose, framing and flight management.

use std::f64::consts::FRAC_PI_2;

use glam::DVec3;
use globenav_core::{
    BoundingSphere, Cartographic, CompletionCallback, Destination, Ellipsoid, Orientation,
    Rectangle, DEFAULT_VIEW_RECTANGLE,
};

use crate::flight::{Flight, FlightRequest};

/// Vertical field of view in radians (60 degrees).
pub const DEFAULT_FOV: f64 = std::f64::consts::FRAC_PI_3;

/// Where the camera is and which way it looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Earth-fixed position in metres.
    pub position: DVec3,
    /// Heading in radians, clockwise from north.
    pub heading: f64,
    /// Pitch in radians; -PI/2 looks straight down.
    pub pitch: f64,
    /// Roll in radians.
    pub roll: f64,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            heading: 0.0,
            pitch: -FRAC_PI_2,
            roll: 0.0,
        }
    }
}

impl CameraPose {
    /// A top-down pose at the given position.
    pub fn looking_down(position: DVec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Returns this pose with the set angles of `orientation` applied.
    #[must_use]
    pub fn oriented(mut self, orientation: Option<Orientation>) -> Self {
        if let Some(orientation) = orientation {
            if let Some(heading) = orientation.heading {
                self.heading = heading;
            }
            if let Some(pitch) = orientation.pitch {
                self.pitch = pitch;
            }
            if let Some(roll) = orientation.roll {
                self.roll = roll;
            }
        }
        self
    }
}

/// A camera orbiting a reference ellipsoid.
#[derive(Debug)]
pub struct Camera {
    pose: CameraPose,
    ellipsoid: Ellipsoid,
    /// Vertical field of view in radians.
    pub fov: f64,
    flight: Option<Flight>,
}

impl Camera {
    /// Creates a camera at the home view of the given ellipsoid.
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        let mut camera = Self {
            pose: CameraPose::default(),
            ellipsoid,
            fov: DEFAULT_FOV,
            flight: None,
        };
        camera.pose = camera.home_pose();
        camera
    }

    /// Current pose.
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Current position.
    pub fn position(&self) -> DVec3 {
        self.pose.position
    }

    /// Current position as longitude, latitude and height.
    pub fn position_cartographic(&self) -> Option<Cartographic> {
        self.ellipsoid.cartesian_to_cartographic(self.pose.position)
    }

    /// Reference ellipsoid.
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Moves the camera instantly. Any flight in progress is cancelled.
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.cancel_flight();
        self.pose = pose;
    }

    /// The pose used by [`Camera::fly_home`].
    pub fn home_pose(&self) -> CameraPose {
        self.frame_rectangle(&DEFAULT_VIEW_RECTANGLE)
    }

    /// A top-down pose high enough to fit the rectangle in view.
    pub fn frame_rectangle(&self, rectangle: &Rectangle) -> CameraPose {
        let mut center = rectangle.center();
        let extent = (rectangle.width() * center.latitude.cos()).max(rectangle.height());
        let half_fov_tan = (self.fov * 0.5).tan();
        center.height = extent.max(1e-6) * self.ellipsoid.maximum_radius() * 0.5 / half_fov_tan;
        CameraPose::looking_down(self.ellipsoid.cartographic_to_cartesian(&center))
    }

    /// A top-down pose that fits the sphere in view.
    pub fn frame_sphere(&self, sphere: &BoundingSphere) -> CameraPose {
        let up = sphere.center.try_normalize().unwrap_or(DVec3::Z);
        let distance = sphere.radius.max(1.0) / (self.fov * 0.5).sin();
        CameraPose::looking_down(sphere.center + up * distance)
    }

    /// Resolves a destination and orientation into a target pose.
    pub fn pose_for(
        &self,
        destination: &Destination,
        orientation: Option<Orientation>,
    ) -> CameraPose {
        let pose = match destination {
            Destination::Cartesian(position) => CameraPose::looking_down(*position),
            Destination::Rectangle(rectangle) => self.frame_rectangle(rectangle),
        };
        pose.oriented(orientation)
    }

    /// Starts a flight. The previous flight, if any, is abandoned without
    /// invoking its callback.
    pub fn fly_to(&mut self, request: FlightRequest) {
        let target = self.pose_for(&request.destination, request.orientation);
        self.start_flight(target, request.duration, request.complete);
    }

    /// Flies to the home view.
    pub fn fly_home(&mut self, duration: f64) {
        let target = self.home_pose();
        self.start_flight(target, duration, None);
    }

    /// Flies to frame a bounding sphere.
    pub fn fly_to_sphere(&mut self, sphere: &BoundingSphere, duration: f64) {
        let target = self.frame_sphere(sphere);
        self.start_flight(target, duration, None);
    }

    /// Whether a flight is in progress.
    pub fn is_flying(&self) -> bool {
        self.flight.is_some()
    }

    /// Target of the flight in progress.
    pub fn flight_target(&self) -> Option<CameraPose> {
        self.flight.as_ref().map(Flight::target)
    }

    /// Abandons the flight in progress. Its callback is not invoked.
    pub fn cancel_flight(&mut self) {
        if self.flight.take().is_some() {
            log::debug!("camera flight cancelled");
        }
    }

    /// Advances the flight in progress by `dt` seconds.
    ///
    /// Returns true if a flight arrived during this update, after running its
    /// completion callback.
    pub fn update(&mut self, dt: f64) -> bool {
        let Some(flight) = self.flight.as_mut() else {
            return false;
        };
        self.pose = flight.advance(dt);
        if !flight.is_finished() {
            return false;
        }
        let complete = flight.take_complete();
        self.flight = None;
        log::debug!("camera flight arrived");
        if let Some(complete) = complete {
            complete();
        }
        true
    }

    fn start_flight(
        &mut self,
        target: CameraPose,
        duration: f64,
        complete: Option<CompletionCallback>,
    ) {
        if self.flight.is_some() {
            log::debug!("camera flight superseded by a new request");
        }
        self.flight = Some(Flight::new(self.pose, target, duration, complete));
        if duration <= 0.0 {
            self.update(0.0);
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Ellipsoid::WGS84)
    }
}
