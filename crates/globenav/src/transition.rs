//! Turning a resolved reset target into camera requests.

use globenav_camera::FlightRequest;
use globenav_core::{
    ObjectHandle, Orientation, ResetTarget, TargetKind, TransitionConfig, DEFAULT_VIEW_RECTANGLE,
};

use crate::context::MapContext;

/// Duration of the map's own home flight.
pub const HOME_FLIGHT_DURATION: f64 = 1.0;

/// What a reset ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The gate was closed; nothing happened.
    Skipped,
    /// The tracked entity was cleared and re-assigned.
    Retracked,
    /// A flight was requested for the given target.
    Flight(TargetKind),
    /// A zoom-to-object was requested for the given target.
    Zoom(TargetKind),
    /// The map's home flight was requested.
    Home,
    /// No home affordance; a flight to the default extent was requested.
    DefaultExtent,
    /// The configured view was malformed and rejected.
    Rejected,
    /// The map failed to frame the given target.
    Failed(TargetKind),
}

impl ResetOutcome {
    /// Whether the reset asked the map to move the camera.
    pub fn moved_camera(self) -> bool {
        matches!(
            self,
            ResetOutcome::Retracked
                | ResetOutcome::Flight(_)
                | ResetOutcome::Zoom(_)
                | ResetOutcome::Home
                | ResetOutcome::DefaultExtent
        )
    }
}

/// Issues camera transitions for resolved reset targets.
pub struct CameraTransitionController<'a, M: MapContext + ?Sized> {
    context: &'a mut M,
}

impl<'a, M: MapContext + ?Sized> CameraTransitionController<'a, M> {
    /// Creates a controller that drives the given map.
    pub fn new(context: &'a mut M) -> Self {
        Self { context }
    }

    /// Clears the tracked entity and immediately sets it again, forcing the map
    /// to re-lock the camera onto the entity's current position.
    pub fn reassert_tracking(&mut self, entity: ObjectHandle) -> ResetOutcome {
        log::debug!("re-asserting tracking of '{}'", entity.id());
        self.context.set_tracked_entity(None);
        self.context.set_tracked_entity(Some(entity));
        ResetOutcome::Retracked
    }

    /// Requests the transition for `target`.
    ///
    /// `orientation` applies to point and rectangle flights; explicit views carry
    /// their own. The completion callback is only attached to rectangle and
    /// explicit-view flights. Zoom failures are logged and reported as
    /// [`ResetOutcome::Failed`].
    pub fn transition(
        &mut self,
        target: ResetTarget,
        orientation: Orientation,
        config: &TransitionConfig,
    ) -> ResetOutcome {
        let kind = target.kind();
        let duration = config.duration_seconds;

        match target {
            ResetTarget::GeodeticPoint(point) => {
                let destination = self.context.ellipsoid().cartographic_to_cartesian(&point);
                self.context.fly_to(
                    FlightRequest::new(destination, duration).with_orientation(orientation),
                );
                ResetOutcome::Flight(kind)
            }
            ResetTarget::BoundingRegion(rectangle) => {
                self.context.fly_to(
                    FlightRequest::new(rectangle, duration)
                        .with_orientation(orientation)
                        .with_complete(config.on_complete.clone()),
                );
                ResetOutcome::Flight(kind)
            }
            ResetTarget::ObjectReference(object) | ResetTarget::NamedEntityReference(object) => {
                match self.context.zoom_to(&object) {
                    Ok(()) => ResetOutcome::Zoom(kind),
                    Err(err) => {
                        log::warn!(
                            "default reset view {kind} '{}' is invalid: {err}",
                            object.id()
                        );
                        ResetOutcome::Failed(kind)
                    }
                }
            }
            ResetTarget::ExplicitView {
                destination,
                orientation,
            } => {
                self.context.fly_to(
                    FlightRequest::new(destination, duration)
                        .with_orientation(orientation)
                        .with_complete(config.on_complete.clone()),
                );
                ResetOutcome::Flight(kind)
            }
            ResetTarget::None => {
                if self.context.fly_home(HOME_FLIGHT_DURATION) {
                    ResetOutcome::Home
                } else {
                    self.context
                        .fly_to(FlightRequest::new(DEFAULT_VIEW_RECTANGLE, duration));
                    ResetOutcome::DefaultExtent
                }
            }
        }
    }
}
