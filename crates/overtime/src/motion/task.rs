use glam::{Quat, Vec3};
use crate::api::types::{EntityId, MotionCategory, MotionId};
use crate::core::surface::TransformSurface;
use super::interp::{progress, MotionPath, MotionValue};

/// Requested end state of a motion. The variant picks the category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionTarget {
    Scale(Vec3),
    Move(Vec3),
    Rotate(Quat),
}

impl MotionTarget {
    pub fn category(&self) -> MotionCategory {
        match self {
            MotionTarget::Scale(_) => MotionCategory::Scale,
            MotionTarget::Move(_) => MotionCategory::Move,
            MotionTarget::Rotate(_) => MotionCategory::Rotate,
        }
    }

    /// Build the path from the owner's current value to this target.
    /// Falls back to the target itself if the surface has no such entity.
    pub(crate) fn path_from<S: TransformSurface + ?Sized>(
        &self,
        surface: &S,
        owner: EntityId,
    ) -> MotionPath {
        match *self {
            MotionTarget::Scale(to) => MotionPath::Vector {
                from: surface.scale(owner).unwrap_or_else(|| missing_owner(owner, to)),
                to,
            },
            MotionTarget::Move(to) => MotionPath::Vector {
                from: surface.position(owner).unwrap_or_else(|| missing_owner(owner, to)),
                to,
            },
            MotionTarget::Rotate(to) => MotionPath::Rotation {
                from: surface.rotation(owner).unwrap_or_else(|| missing_owner(owner, to)),
                to,
            },
        }
    }
}

fn missing_owner<T>(owner: EntityId, fallback: T) -> T {
    log::warn!("motion started on unknown entity {:?}; starting at target", owner);
    fallback
}

/// One in-flight animation. Immutable after creation.
#[derive(Debug, Clone)]
pub struct MotionTask {
    pub id: MotionId,
    /// Entity being animated. Not owned.
    pub owner: EntityId,
    pub category: MotionCategory,
    pub path: MotionPath,
    /// Clock time at creation (ms).
    pub start_ms: f64,
    /// `start_ms + duration_ms`.
    pub end_ms: f64,
    /// Requested length; zero or negative completes on the next tick.
    pub duration_ms: f64,
}

impl MotionTask {
    pub(crate) fn new(
        id: MotionId,
        owner: EntityId,
        category: MotionCategory,
        path: MotionPath,
        start_ms: f64,
        duration_ms: f64,
    ) -> Self {
        Self {
            id,
            owner,
            category,
            path,
            start_ms,
            end_ms: start_ms + duration_ms,
            duration_ms,
        }
    }

    /// Whether the task is finished at `now_ms`.
    pub fn is_complete_at(&self, now_ms: f64) -> bool {
        now_ms >= self.end_ms
    }

    /// Normalized progress [0, 1] at `now_ms`.
    pub fn progress_at(&self, now_ms: f64) -> f32 {
        progress(self.start_ms, self.duration_ms, now_ms)
    }

    /// Value to write at `now_ms`: interpolated while running, exactly the
    /// end value once complete.
    pub fn value_at(&self, now_ms: f64) -> MotionValue {
        if self.is_complete_at(now_ms) {
            self.path.end()
        } else {
            self.path.sample(self.progress_at(now_ms))
        }
    }

    /// Write `value` to the owner's property for this task's category.
    /// Returns false if the owner no longer exists.
    pub(crate) fn apply<S: TransformSurface + ?Sized>(&self, surface: &mut S, value: MotionValue) -> bool {
        match (self.category, value) {
            (MotionCategory::Scale, MotionValue::Vector(v)) => surface.set_scale(self.owner, v),
            (MotionCategory::Move, MotionValue::Vector(v)) => surface.set_position(self.owner, v),
            (MotionCategory::Rotate, MotionValue::Rotation(q)) => surface.set_rotation(self.owner, q),
            // Unreachable through MotionTarget; the value kind is fixed per category.
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;
    use crate::core::scene::Scene;

    #[test]
    fn target_picks_category() {
        assert_eq!(MotionTarget::Scale(Vec3::ONE).category(), MotionCategory::Scale);
        assert_eq!(MotionTarget::Move(Vec3::ONE).category(), MotionCategory::Move);
        assert_eq!(MotionTarget::Rotate(Quat::IDENTITY).category(), MotionCategory::Rotate);
    }

    #[test]
    fn path_starts_from_current_value() {
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id).with_pos(Vec3::new(1.0, 2.0, 3.0)));

        let path = MotionTarget::Move(Vec3::ZERO).path_from(&scene, id);
        assert_eq!(path.start(), MotionValue::Vector(Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn path_for_missing_owner_starts_at_target() {
        let scene = Scene::new();
        let path = MotionTarget::Scale(Vec3::splat(3.0)).path_from(&scene, EntityId(5));
        assert_eq!(path.start(), MotionValue::Vector(Vec3::splat(3.0)));
    }

    #[test]
    fn value_snaps_to_end_after_deadline() {
        let task = MotionTask::new(
            MotionId(1),
            EntityId(1),
            MotionCategory::Move,
            MotionPath::Vector { from: Vec3::ZERO, to: Vec3::new(0.3, 0.0, 0.0) },
            0.0,
            1000.0,
        );
        assert!(!task.is_complete_at(999.0));
        assert!(task.is_complete_at(1000.0));
        assert_eq!(task.value_at(5_000.0), MotionValue::Vector(Vec3::new(0.3, 0.0, 0.0)));
    }
}
