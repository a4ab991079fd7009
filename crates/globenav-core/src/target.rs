//! Classification of a configured default view into a [`ResetTarget`].
//!
//! A [`DefaultView`] is loosely typed: it may come from JSON with any subset of
//! fields set, and may additionally carry a scene-object handle. Several shapes
//! can be present at once, so [`resolve`] checks them in a fixed precedence:
//! point, rectangle, tiled dataset, trackable entity, explicit destination and
//! orientation pair, and finally nothing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GlobeNavError, Result};
use crate::geodesy::{Cartographic, Rectangle};
use crate::object::ObjectHandle;
use crate::orientation::{Destination, Orientation};

/// A loosely-typed description of the view a reset should return to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefaultView {
    /// Point longitude in radians.
    pub longitude: Option<f64>,
    /// Point latitude in radians.
    pub latitude: Option<f64>,
    /// Point height in metres (0 when absent).
    pub height: Option<f64>,

    /// Rectangle western bound in radians.
    pub west: Option<f64>,
    /// Rectangle southern bound in radians.
    pub south: Option<f64>,
    /// Rectangle eastern bound in radians.
    pub east: Option<f64>,
    /// Rectangle northern bound in radians.
    pub north: Option<f64>,

    /// Precomputed flight destination.
    pub destination: Option<Destination>,
    /// Orientation paired with `destination`.
    pub orientation: Option<Orientation>,

    /// Tileset or entity to frame. Only settable from code.
    #[serde(skip)]
    pub object: Option<ObjectHandle>,
}

impl DefaultView {
    /// A single surface location.
    pub fn point(cartographic: Cartographic) -> Self {
        Self {
            longitude: Some(cartographic.longitude),
            latitude: Some(cartographic.latitude),
            height: Some(cartographic.height),
            ..Self::default()
        }
    }

    /// A geographic rectangle.
    pub fn rectangle(rectangle: Rectangle) -> Self {
        Self {
            west: Some(rectangle.west),
            south: Some(rectangle.south),
            east: Some(rectangle.east),
            north: Some(rectangle.north),
            ..Self::default()
        }
    }

    /// A tileset or entity handle.
    pub fn object(object: ObjectHandle) -> Self {
        Self {
            object: Some(object),
            ..Self::default()
        }
    }

    /// A precomputed destination and orientation.
    pub fn explicit(destination: impl Into<Destination>, orientation: Orientation) -> Self {
        Self {
            destination: Some(destination.into()),
            orientation: Some(orientation),
            ..Self::default()
        }
    }

    fn as_point(&self) -> Option<Cartographic> {
        Some(Cartographic::new(
            self.longitude?,
            self.latitude?,
            self.height.unwrap_or(0.0),
        ))
    }

    fn as_rectangle(&self) -> Option<Rectangle> {
        Some(Rectangle::new(self.west?, self.south?, self.east?, self.north?))
    }
}

/// The view a reset resolves to.
#[derive(Debug, Clone)]
pub enum ResetTarget {
    /// Fly to a single surface location.
    GeodeticPoint(Cartographic),
    /// Fly to frame a validated rectangle.
    BoundingRegion(Rectangle),
    /// Zoom to a tiled dataset.
    ObjectReference(ObjectHandle),
    /// Zoom to a trackable entity.
    NamedEntityReference(ObjectHandle),
    /// Fly to a precomputed destination with its orientation.
    ExplicitView {
        destination: Destination,
        orientation: Orientation,
    },
    /// Nothing usable was configured; go home.
    None,
}

impl ResetTarget {
    /// Returns the kind of this target, without its payload.
    pub fn kind(&self) -> TargetKind {
        match self {
            ResetTarget::GeodeticPoint(_) => TargetKind::GeodeticPoint,
            ResetTarget::BoundingRegion(_) => TargetKind::BoundingRegion,
            ResetTarget::ObjectReference(_) => TargetKind::ObjectReference,
            ResetTarget::NamedEntityReference(_) => TargetKind::NamedEntityReference,
            ResetTarget::ExplicitView { .. } => TargetKind::ExplicitView,
            ResetTarget::None => TargetKind::None,
        }
    }
}

/// Payload-free discriminant of [`ResetTarget`], used in logs and outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    GeodeticPoint,
    BoundingRegion,
    ObjectReference,
    NamedEntityReference,
    ExplicitView,
    None,
}

impl TargetKind {
    /// Returns display name.
    pub fn name(self) -> &'static str {
        match self {
            TargetKind::GeodeticPoint => "point",
            TargetKind::BoundingRegion => "rectangle",
            TargetKind::ObjectReference => "tileset",
            TargetKind::NamedEntityReference => "entity",
            TargetKind::ExplicitView => "explicit view",
            TargetKind::None => "home",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies a configured default view.
///
/// First match wins: point, rectangle, tileset, entity, explicit pair, none.
/// Only a rectangle that fails [`Rectangle::validate`] is an error; any other
/// unrecognized shape resolves to [`ResetTarget::None`]. Tracking is not
/// considered here; callers check for a tracked entity before resolving.
pub fn resolve(view: Option<&DefaultView>) -> Result<ResetTarget> {
    let Some(view) = view else {
        return Ok(ResetTarget::None);
    };

    if let Some(point) = view.as_point() {
        return Ok(ResetTarget::GeodeticPoint(point));
    }

    if let Some(rectangle) = view.as_rectangle() {
        rectangle.validate().map_err(|err| {
            log::debug!("rejecting configured rectangle {rectangle:?}: {err}");
            GlobeNavError::InvalidTarget(err)
        })?;
        return Ok(ResetTarget::BoundingRegion(rectangle));
    }

    if let Some(object) = &view.object {
        if object.is_tileset() {
            return Ok(ResetTarget::ObjectReference(object.clone()));
        }
        if object.is_trackable() {
            return Ok(ResetTarget::NamedEntityReference(object.clone()));
        }
    }

    if let (Some(destination), Some(orientation)) = (view.destination, view.orientation) {
        return Ok(ResetTarget::ExplicitView {
            destination,
            orientation,
        });
    }

    Ok(ResetTarget::None)
}
