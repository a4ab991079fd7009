//! Capabilities a navigation control needs from the embedding map.

use globenav_camera::FlightRequest;
use globenav_core::{Ellipsoid, ObjectHandle, Result};

/// The narrow view of a map viewer that navigation controls operate on.
///
/// Implemented by the embedding application (or by [`crate::HeadlessMap`] in
/// tests). All methods are called from the control's thread.
pub trait MapContext {
    /// Whether screen-space camera input is currently accepted.
    fn camera_input_enabled(&self) -> bool;

    /// The entity the camera currently follows, if it is still alive.
    fn tracked_entity(&self) -> Option<ObjectHandle>;

    /// Sets or clears the followed entity.
    fn set_tracked_entity(&mut self, entity: Option<ObjectHandle>);

    /// Ellipsoid used to convert geodetic positions.
    fn ellipsoid(&self) -> &Ellipsoid;

    /// Starts an animated flight.
    fn fly_to(&mut self, request: FlightRequest);

    /// Flies to the library home view.
    ///
    /// Returns false if the map has no home affordance, in which case nothing
    /// happened and the caller should pick its own fallback.
    fn fly_home(&mut self, _duration: f64) -> bool {
        false
    }

    /// Frames a tileset or entity, choosing duration and framing itself.
    fn zoom_to(&mut self, object: &ObjectHandle) -> Result<()>;
}

impl<M: MapContext + ?Sized> MapContext for &mut M {
    fn camera_input_enabled(&self) -> bool {
        (**self).camera_input_enabled()
    }

    fn tracked_entity(&self) -> Option<ObjectHandle> {
        (**self).tracked_entity()
    }

    fn set_tracked_entity(&mut self, entity: Option<ObjectHandle>) {
        (**self).set_tracked_entity(entity);
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        (**self).ellipsoid()
    }

    fn fly_to(&mut self, request: FlightRequest) {
        (**self).fly_to(request);
    }

    fn fly_home(&mut self, duration: f64) -> bool {
        (**self).fly_home(duration)
    }

    fn zoom_to(&mut self, object: &ObjectHandle) -> Result<()> {
        (**self).zoom_to(object)
    }
}
