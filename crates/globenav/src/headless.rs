//! Headless map context.
//!
//! [`HeadlessMap`] implements [`MapContext`] on top of a simulated [`Camera`]
//! without any rendering. It records every camera request it receives, which
//! makes it useful for integration tests, scripted tours, and embedding the
//! controls in tools that drive their own renderer.

use std::sync::{Arc, Weak};

use globenav_camera::{Camera, FlightRequest};
use globenav_core::{
    Destination, Ellipsoid, GlobeNavError, ObjectHandle, Orientation, Result, SceneObject,
};

use crate::context::MapContext;

/// Duration the headless map uses for zoom-to-object flights.
pub const ZOOM_DURATION: f64 = 2.0;

/// A camera request received by a [`HeadlessMap`].
#[derive(Debug, Clone, PartialEq)]
pub enum CameraCall {
    /// `fly_to` with the request's payload.
    FlyTo {
        destination: Destination,
        orientation: Option<Orientation>,
        duration: f64,
        has_complete: bool,
    },
    /// `fly_home`.
    FlyHome { duration: f64 },
    /// A successful `zoom_to`.
    ZoomTo { id: String },
    /// `set_tracked_entity`, with the entity id or `None` when cleared.
    TrackedEntity { id: Option<String> },
}

/// A map context backed by a simulated camera.
pub struct HeadlessMap {
    camera: Camera,
    camera_input_enabled: bool,
    fly_home_supported: bool,
    tracked: Option<Weak<dyn SceneObject>>,
    calls: Vec<CameraCall>,
}

impl HeadlessMap {
    /// Creates a map on the WGS84 ellipsoid with the camera at home.
    pub fn new() -> Self {
        Self::with_ellipsoid(Ellipsoid::WGS84)
    }

    /// Creates a map on a custom ellipsoid.
    pub fn with_ellipsoid(ellipsoid: Ellipsoid) -> Self {
        Self {
            camera: Camera::new(ellipsoid),
            camera_input_enabled: true,
            fly_home_supported: true,
            tracked: None,
            calls: Vec::new(),
        }
    }

    /// Sets whether the map offers a home flight.
    #[must_use]
    pub fn with_fly_home(mut self, supported: bool) -> Self {
        self.fly_home_supported = supported;
        self
    }

    /// Enables or disables screen-space camera input.
    pub fn set_camera_input_enabled(&mut self, enabled: bool) {
        self.camera_input_enabled = enabled;
    }

    /// The simulated camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access to the simulated camera.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Every camera request received so far, oldest first.
    pub fn calls(&self) -> &[CameraCall] {
        &self.calls
    }

    /// Number of `fly_to` and `fly_home` requests received.
    pub fn flight_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, CameraCall::FlyTo { .. } | CameraCall::FlyHome { .. }))
            .count()
    }

    /// Forgets recorded requests.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Runs the camera flight (and its completion callback on arrival). While no
    /// flight is running the camera follows the tracked entity.
    pub fn tick(&mut self, dt: f64) {
        self.camera.update(dt);
        if !self.camera.is_flying() {
            self.follow_tracked();
        }
    }

    fn follow_tracked(&mut self) {
        let sphere = self
            .tracked
            .as_ref()
            .and_then(Weak::upgrade)
            .and_then(|entity| entity.bounding_sphere());
        if let Some(sphere) = sphere {
            let pose = self.camera.frame_sphere(&sphere);
            self.camera.set_pose(pose);
        }
    }
}

impl Default for HeadlessMap {
    fn default() -> Self {
        Self::new()
    }
}

impl MapContext for HeadlessMap {
    fn camera_input_enabled(&self) -> bool {
        self.camera_input_enabled
    }

    fn tracked_entity(&self) -> Option<ObjectHandle> {
        self.tracked.as_ref().and_then(Weak::upgrade)
    }

    fn set_tracked_entity(&mut self, entity: Option<ObjectHandle>) {
        self.calls.push(CameraCall::TrackedEntity {
            id: entity.as_ref().map(|entity| entity.id().to_string()),
        });
        self.tracked = entity.as_ref().map(Arc::downgrade);
        if self.tracked.is_some() {
            // Assigning a tracked entity re-locks the camera onto it.
            self.camera.cancel_flight();
            self.follow_tracked();
        }
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        self.camera.ellipsoid()
    }

    fn fly_to(&mut self, request: FlightRequest) {
        self.calls.push(CameraCall::FlyTo {
            destination: request.destination,
            orientation: request.orientation,
            duration: request.duration,
            has_complete: request.complete.is_some(),
        });
        self.camera.fly_to(request);
    }

    fn fly_home(&mut self, duration: f64) -> bool {
        if !self.fly_home_supported {
            return false;
        }
        self.calls.push(CameraCall::FlyHome { duration });
        self.camera.fly_home(duration);
        true
    }

    fn zoom_to(&mut self, object: &ObjectHandle) -> Result<()> {
        let sphere = object
            .bounding_sphere()
            .ok_or_else(|| GlobeNavError::TransitionFailed {
                target: if object.is_tileset() { "tileset" } else { "entity" },
                reason: format!("'{}' has no bounds", object.id()),
            })?;
        self.calls.push(CameraCall::ZoomTo {
            id: object.id().to_string(),
        });
        self.camera.fly_to_sphere(&sphere, ZOOM_DURATION);
        Ok(())
    }
}
