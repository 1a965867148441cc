//! Transform surface the motion scheduler reads from and writes to.
//!
//! The scheduler never touches entities directly. Anything that can look up
//! an entity's scale/position/rotation by `EntityId` can host motion tasks:
//! the bundled `Scene`, or a bridge onto an external engine.

use glam::{Quat, Vec3};
use crate::api::types::EntityId;

/// Get/set access to per-entity transform properties.
///
/// Getters return `None` for unknown entities. Setters return whether the
/// entity existed; writes to unknown entities are dropped.
pub trait TransformSurface {
    fn scale(&self, id: EntityId) -> Option<Vec3>;
    fn set_scale(&mut self, id: EntityId, scale: Vec3) -> bool;

    fn position(&self, id: EntityId) -> Option<Vec3>;
    fn set_position(&mut self, id: EntityId, pos: Vec3) -> bool;

    fn rotation(&self, id: EntityId) -> Option<Quat>;
    fn set_rotation(&mut self, id: EntityId, rotation: Quat) -> bool;
}
