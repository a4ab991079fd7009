//! globenav: navigation controls for globe map viewers.
//!
//! The main control is [`ResetViewControl`], the "reset view" button of a map
//! toolbar. Activating it either re-centres the camera on the tracked entity or
//! flies to the configured default view: a point, a rectangle, a tileset, an
//! entity, or an explicit destination and orientation. With nothing configured
//! it falls back to the map's home view.
//!
//! # Quick Start
//!
//! ```
//! use globenav::*;
//!
//! init_logging();
//!
//! let options = ResetViewOptions::default()
//!     .with_default_view(DefaultView::point(Cartographic::from_degrees(10.0, 20.0, 0.0)))
//!     .with_duration(2.0);
//! let mut control = ResetViewControl::new(HeadlessMap::new(), options);
//!
//! assert_eq!(
//!     control.reset_view(),
//!     ResetOutcome::Flight(TargetKind::GeodeticPoint)
//! );
//! control.context_mut().tick(2.0);
//! ```
//!
//! # Architecture
//!
//! - [`MapContext`] is the narrow capability interface to the embedding viewer
//!   (camera flights, tracking, zoom-to-object, input state).
//! - [`InputGate`] decides whether a control may act.
//! - [`resolve`] classifies the configured default view into a [`ResetTarget`].
//! - [`CameraTransitionController`] turns a target into camera requests.
//! - [`ResetViewControl`] ties them together behind [`NavigationControl`].

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod context;
mod control;
mod gate;
mod headless;
mod transition;

pub use context::MapContext;
pub use control::{NavigationControl, ResetViewControl};
pub use gate::InputGate;
pub use headless::{CameraCall, HeadlessMap, ZOOM_DURATION};
pub use transition::{CameraTransitionController, ResetOutcome, HOME_FLIGHT_DURATION};

// Re-export core types
pub use globenav_core::{
    resolve, same_object, BoundingSphere, Cartographic, CompletionCallback, ControlPhase,
    ControlState, DefaultView, Destination, Ellipsoid, Entity, GlobeNavError, ObjectHandle,
    Orientation, Rectangle, RectangleError, ResetTarget, ResetViewOptions, Result, SceneObject,
    TargetKind, Tileset, TransitionConfig, DEFAULT_DURATION_SECONDS, DEFAULT_VIEW_RECTANGLE,
    DVec3,
};

// Re-export camera types
pub use globenav_camera::{Camera, CameraPose, FlightRequest};

/// Initializes `env_logger` so control diagnostics reach stderr.
///
/// Safe to call more than once; later calls are ignored. Filter with `RUST_LOG`
/// (for example `RUST_LOG=globenav=debug`).
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::info!("globenav logging initialized");
    }
}
