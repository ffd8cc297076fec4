//! GameObject: a transform, an activity flag and a handle to shared visuals
//!
//! Ship and pickups may point at the same geometry/texture entry in the
//! [`RenderResources`](crate::render::RenderResources) table, but each object
//! owns its transform outright.

use crate::foundation::math::{Mat4, Vec2};
use crate::render::ResourceKey;
use crate::scene::Transform;

/// A single object on the playfield
#[derive(Debug, Clone, PartialEq)]
pub struct GameObject {
    transform: Transform,

    /// Inactive objects are neither drawn nor tested for collision
    is_active: bool,

    resource: ResourceKey,
}

impl GameObject {
    /// Create an active object at its spawn position and scale
    pub fn new(resource: ResourceKey, position: Vec2, scale: Vec2) -> Self {
        Self {
            transform: Transform::new(position, scale),
            is_active: true,
            resource,
        }
    }

    /// Read access to the transform
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutable access to the transform
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Current world position
    pub fn position(&self) -> Vec2 {
        self.transform.position()
    }

    /// Current scale
    pub fn scale(&self) -> Vec2 {
        self.transform.scale()
    }

    /// Handle of the shared geometry/texture used to draw this object
    pub fn resource(&self) -> ResourceKey {
        self.resource
    }

    /// Whether the object currently takes part in the game
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Set the activity flag; nothing else changes
    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    /// Composite transformation matrix built from the latest transform state
    pub fn transformation_matrix(&self) -> Mat4 {
        self.transform.composite()
    }

    /// Put the object back at its spawn state and reactivate it
    pub fn reset_all_state_to_default(&mut self) {
        self.transform.reset_to_spawn();
        self.set_active(true);
    }
}
