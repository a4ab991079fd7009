//! Opaque scene objects the camera can frame or track.
//!
//! Controls never look inside these objects. They only ask which capability
//! markers an object exposes (tiled dataset, trackable entity) and hand the
//! handle back to the map context.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use glam::DVec3;

/// Sphere enclosing an object, in Earth-fixed coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// Sphere centre in metres.
    pub center: DVec3,
    /// Sphere radius in metres.
    pub radius: f64,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub const fn new(center: DVec3, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// A renderable or movable object living in the map scene.
pub trait SceneObject: fmt::Debug + Send + Sync {
    /// Returns an identifier for diagnostics.
    fn id(&self) -> &str;

    /// Whether this object is a massive tiled dataset.
    fn is_tileset(&self) -> bool {
        false
    }

    /// Whether this object is an entity the camera can track.
    fn is_trackable(&self) -> bool {
        false
    }

    /// Returns the current bounds of the object.
    ///
    /// Returns `None` while the object has no known extent (not loaded yet,
    /// destroyed, or without a position).
    fn bounding_sphere(&self) -> Option<BoundingSphere>;
}

/// Shared handle to a scene object.
pub type ObjectHandle = Arc<dyn SceneObject>;

/// Returns true if both handles point at the same object.
pub fn same_object(a: &ObjectHandle, b: &ObjectHandle) -> bool {
    Arc::as_ptr(a).cast::<()>() == Arc::as_ptr(b).cast::<()>()
}

/// A movable, trackable map entity.
#[derive(Debug)]
pub struct Entity {
    id: String,
    position: RwLock<Option<DVec3>>,
    radius: f64,
}

impl Entity {
    /// Creates an entity at the given Earth-fixed position.
    pub fn new(id: impl Into<String>, position: DVec3) -> Self {
        Self {
            id: id.into(),
            position: RwLock::new(Some(position)),
            radius: 1.0,
        }
    }

    /// Creates an entity with no position yet.
    pub fn unplaced(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position: RwLock::new(None),
            radius: 1.0,
        }
    }

    /// Sets the framing radius used when zooming to this entity.
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius.max(0.0);
        self
    }

    /// Wraps the entity in a shared handle.
    pub fn into_handle(self) -> ObjectHandle {
        Arc::new(self)
    }

    /// Current position, if the entity has one.
    pub fn position(&self) -> Option<DVec3> {
        self.position.read().ok().and_then(|position| *position)
    }

    /// Moves the entity.
    pub fn set_position(&self, position: DVec3) {
        if let Ok(mut guard) = self.position.write() {
            *guard = Some(position);
        }
    }
}

impl SceneObject for Entity {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_trackable(&self) -> bool {
        true
    }

    fn bounding_sphere(&self) -> Option<BoundingSphere> {
        self.position()
            .map(|center| BoundingSphere::new(center, self.radius))
    }
}

/// A massive tiled 3D dataset.
#[derive(Debug)]
pub struct Tileset {
    id: String,
    bounds: Option<BoundingSphere>,
    destroyed: AtomicBool,
}

impl Tileset {
    /// Creates a loaded tileset with known bounds.
    pub fn new(id: impl Into<String>, bounds: BoundingSphere) -> Self {
        Self {
            id: id.into(),
            bounds: Some(bounds),
            destroyed: AtomicBool::new(false),
        }
    }

    /// Creates a tileset whose root has not loaded yet.
    pub fn pending(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bounds: None,
            destroyed: AtomicBool::new(false),
        }
    }

    /// Wraps the tileset in a shared handle.
    pub fn into_handle(self) -> ObjectHandle {
        Arc::new(self)
    }

    /// Releases the tileset. Its bounds are no longer available afterwards.
    pub fn destroy(&self) {
        self.destroyed.store(true, Ordering::Release);
    }

    /// Whether [`Tileset::destroy`] has been called.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::Acquire)
    }
}

impl SceneObject for Tileset {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_tileset(&self) -> bool {
        true
    }

    fn bounding_sphere(&self) -> Option<BoundingSphere> {
        if self.is_destroyed() {
            None
        } else {
            self.bounds
        }
    }
}
