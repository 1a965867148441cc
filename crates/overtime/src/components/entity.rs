use glam::{Quat, Vec3};
use crate::api::types::EntityId;

/// Scene entity with a 3D transform.
/// Motion tasks refer to it by `EntityId` only and never own it.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// Position in world space.
    pub pos: Vec3,
    /// Orientation.
    pub rotation: Quat,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Entity {
    /// Create a new entity with the given ID at the origin, unrotated, unit scale.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            pos: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }
}
