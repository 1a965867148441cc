use glam::{Quat, Vec3};
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::core::surface::TransformSurface;

/// Simple entity storage using a flat Vec.
/// Designed for small-to-medium entity counts (hundreds, not millions).
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(256),
        }
    }

    /// Create a scene with a specific entity capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove an entity by ID. Returns the removed entity if found.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        if let Some(idx) = self.entities.iter().position(|e| e.id == id) {
            Some(self.entities.swap_remove(idx))
        } else {
            None
        }
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn write(&mut self, id: EntityId, f: impl FnOnce(&mut Entity)) -> bool {
        match self.get_mut(id) {
            Some(entity) => {
                f(entity);
                true
            }
            None => false,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformSurface for Scene {
    fn scale(&self, id: EntityId) -> Option<Vec3> {
        self.get(id).map(|e| e.scale)
    }

    fn set_scale(&mut self, id: EntityId, scale: Vec3) -> bool {
        self.write(id, |e| e.scale = scale)
    }

    fn position(&self, id: EntityId) -> Option<Vec3> {
        self.get(id).map(|e| e.pos)
    }

    fn set_position(&mut self, id: EntityId, pos: Vec3) -> bool {
        self.write(id, |e| e.pos = pos)
    }

    fn rotation(&self, id: EntityId) -> Option<Quat> {
        self.get(id).map(|e| e.rotation)
    }

    fn set_rotation(&mut self, id: EntityId, rotation: Quat) -> bool {
        self.write(id, |e| e.rotation = rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id).with_pos(Vec3::new(10.0, 20.0, 30.0)));
        let e = scene.get(id).unwrap();
        assert_eq!(e.pos, Vec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn despawn_removes_entity() {
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id));
        assert_eq!(scene.len(), 1);
        scene.despawn(id);
        assert_eq!(scene.len(), 0);
    }

    #[test]
    fn surface_reads_and_writes_transform() {
        let mut scene = Scene::new();
        let id = EntityId(4);
        let tilt = Quat::from_rotation_x(0.5);
        scene.spawn(Entity::new(id).with_scale(Vec3::splat(2.0)).with_rotation(tilt));

        assert_eq!(scene.scale(id), Some(Vec3::splat(2.0)));
        assert_eq!(scene.rotation(id), Some(tilt));
        assert!(scene.set_position(id, Vec3::X));
        assert!(scene.set_rotation(id, Quat::from_rotation_y(1.0)));
        assert_eq!(scene.position(id), Some(Vec3::X));
        assert_eq!(scene.rotation(id), Some(Quat::from_rotation_y(1.0)));
    }

    #[test]
    fn surface_ignores_unknown_entity() {
        let mut scene = Scene::new();
        assert_eq!(scene.position(EntityId(9)), None);
        assert!(!scene.set_scale(EntityId(9), Vec3::ONE));
    }
}
