//! Core abstractions for globenav.
//!
//! This crate provides the data model shared by the navigation controls:
//! - Geodesy: [`Ellipsoid`], [`Cartographic`] and [`Rectangle`]
//! - Camera view descriptions: [`Orientation`] and [`Destination`]
//! - Opaque scene objects (tilesets, entities) behind [`ObjectHandle`]
//! - [`ResetTarget`] and the [`resolve`] classification of a configured default view
//! - Reset options and the per-control [`ControlState`]

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// west/south/east/north and heading/pitch/roll read better than longer names
#![allow(clippy::similar_names)]

pub mod error;
pub mod geodesy;
pub mod object;
pub mod options;
pub mod orientation;
pub mod state;
pub mod target;

pub use error::{GlobeNavError, RectangleError, Result};
pub use geodesy::{Cartographic, Ellipsoid, Rectangle, DEFAULT_VIEW_RECTANGLE};
pub use object::{same_object, BoundingSphere, Entity, ObjectHandle, SceneObject, Tileset};
pub use options::{CompletionCallback, ResetViewOptions, TransitionConfig, DEFAULT_DURATION_SECONDS};
pub use orientation::{Destination, Orientation, DEFAULT_RESET_HEADING_DEGREES};
pub use state::{ControlPhase, ControlState};
pub use target::{resolve, DefaultView, ResetTarget, TargetKind};

// Re-export glam types for convenience
pub use glam::DVec3;
