// motion/scheduler.rs
//
// Motion scheduler — owns the three category registries, the id counter and
// the clock. Entities are reached only through a TransformSurface.
//
// Usage:
//   let mut motion = MotionScheduler::new(SchedulerConfig::default());
//   let id = motion.move_to(&scene, entity_id, Vec3::new(10.0, 0.0, 0.0), 1000.0);
//   motion.tick(dt, &mut scene);  // once per frame
//   motion.cancel_move(id);

use glam::{Quat, Vec3};
use crate::api::config::SchedulerConfig;
use crate::api::types::{CancelTarget, EntityId, MotionCategory, MotionId};
use crate::core::surface::TransformSurface;
use crate::core::time::MotionClock;
use super::registry::MotionRegistry;
use super::task::{MotionTarget, MotionTask};

/// Scale/move/rotate scheduler. One per world, owned by whoever drives frames.
#[derive(Debug)]
pub struct MotionScheduler {
    pub(super) scaling: MotionRegistry,
    pub(super) moving: MotionRegistry,
    pub(super) rotating: MotionRegistry,
    pub(super) clock: MotionClock,
    next_id: u64,
    /// Ids of tasks that completed naturally, to be polled.
    pub(super) completed: Vec<MotionId>,
}

impl MotionScheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self::with_clock(MotionClock::new(config.clock), &config)
    }

    /// Create a scheduler with an explicit clock (e.g. a host-provided wall source).
    pub fn with_clock(clock: MotionClock, config: &SchedulerConfig) -> Self {
        Self {
            scaling: MotionRegistry::with_capacity(config.registry_capacity),
            moving: MotionRegistry::with_capacity(config.registry_capacity),
            rotating: MotionRegistry::with_capacity(config.registry_capacity),
            clock,
            next_id: 0,
            completed: Vec::new(),
        }
    }

    pub fn clock(&self) -> &MotionClock {
        &self.clock
    }

    pub(super) fn registry(&self, category: MotionCategory) -> &MotionRegistry {
        match category {
            MotionCategory::Scale => &self.scaling,
            MotionCategory::Move => &self.moving,
            MotionCategory::Rotate => &self.rotating,
        }
    }

    pub(super) fn registry_mut(&mut self, category: MotionCategory) -> &mut MotionRegistry {
        match category {
            MotionCategory::Scale => &mut self.scaling,
            MotionCategory::Move => &mut self.moving,
            MotionCategory::Rotate => &mut self.rotating,
        }
    }

    // -- Starting --

    /// Start a motion on `owner`, replacing any motion of the same category.
    ///
    /// The motion begins at the owner's current value, so restarting mid-flight
    /// continues from wherever the entity is now. A `duration_ms` of zero or
    /// less snaps to the target on the next tick.
    pub fn start<S: TransformSurface + ?Sized>(
        &mut self,
        surface: &S,
        owner: EntityId,
        target: MotionTarget,
        duration_ms: f64,
    ) -> MotionId {
        let category = target.category();
        self.cancel(owner, category);

        let path = target.path_from(surface, owner);

        self.next_id += 1;
        let id = MotionId(self.next_id);

        let now = self.clock.now_ms();
        self.registry_mut(category)
            .add(MotionTask::new(id, owner, category, path, now, duration_ms));

        log::debug!(
            "{} {:?} started on {:?} for {}ms",
            category.name(),
            id,
            owner,
            duration_ms
        );
        id
    }

    /// Scale `owner` to `scale` over `duration_ms`.
    pub fn scale_to<S: TransformSurface + ?Sized>(
        &mut self,
        surface: &S,
        owner: EntityId,
        scale: Vec3,
        duration_ms: f64,
    ) -> MotionId {
        self.start(surface, owner, MotionTarget::Scale(scale), duration_ms)
    }

    /// Move `owner` to `pos` over `duration_ms`.
    pub fn move_to<S: TransformSurface + ?Sized>(
        &mut self,
        surface: &S,
        owner: EntityId,
        pos: Vec3,
        duration_ms: f64,
    ) -> MotionId {
        self.start(surface, owner, MotionTarget::Move(pos), duration_ms)
    }

    /// Rotate `owner` to `rotation` over `duration_ms`.
    pub fn rotate_to<S: TransformSurface + ?Sized>(
        &mut self,
        surface: &S,
        owner: EntityId,
        rotation: Quat,
        duration_ms: f64,
    ) -> MotionId {
        self.start(surface, owner, MotionTarget::Rotate(rotation), duration_ms)
    }

    // -- Cancelling --

    /// Remove the task matching `target` from one category.
    ///
    /// The entity keeps whatever value was last written. Unknown ids/owners
    /// are a no-op. Returns whether a task was removed.
    pub fn cancel(&mut self, target: impl Into<CancelTarget>, category: MotionCategory) -> bool {
        let target = target.into();
        let registry = self.registry_mut(category);
        let index = registry.rposition(|t| match target {
            CancelTarget::Id(id) => t.id == id,
            CancelTarget::Owner(owner) => t.owner == owner,
        });

        match index.and_then(|i| registry.remove_at(i)) {
            Some(task) => {
                log::debug!("{} {:?} cancelled on {:?}", category.name(), task.id, task.owner);
                true
            }
            None => false,
        }
    }

    pub fn cancel_scale(&mut self, target: impl Into<CancelTarget>) -> bool {
        self.cancel(target, MotionCategory::Scale)
    }

    pub fn cancel_move(&mut self, target: impl Into<CancelTarget>) -> bool {
        self.cancel(target, MotionCategory::Move)
    }

    pub fn cancel_rotate(&mut self, target: impl Into<CancelTarget>) -> bool {
        self.cancel(target, MotionCategory::Rotate)
    }

    /// Drop every task of `owner` in all categories (e.g. on despawn).
    /// Returns the number of tasks removed.
    pub fn remove_owner(&mut self, owner: EntityId) -> usize {
        MotionCategory::ALL
            .iter()
            .map(|&c| self.registry_mut(c).remove_where(|t| t.owner == owner))
            .sum()
    }

    // -- Queries --

    /// All in-flight tasks of one category, in sweep order.
    pub fn tasks(&self, category: MotionCategory) -> &[MotionTask] {
        self.registry(category).all()
    }

    /// Look up a task by id in any category.
    pub fn get(&self, id: MotionId) -> Option<&MotionTask> {
        MotionCategory::ALL
            .iter()
            .find_map(|&c| self.registry(c).iter().find(|t| t.id == id))
    }

    /// Whether `owner` has an in-flight task in `category`.
    pub fn is_animating(&self, owner: EntityId, category: MotionCategory) -> bool {
        self.registry(category).iter().any(|t| t.owner == owner)
    }

    /// Number of completion ids waiting for `drain_completed`.
    pub fn pending_completed(&self) -> usize {
        self.completed.len()
    }

    /// Drain ids of tasks that completed naturally since the last drain.
    pub fn drain_completed(&mut self) -> impl Iterator<Item = MotionId> + '_ {
        self.completed.drain(..)
    }

    /// Number of in-flight tasks across all categories.
    pub fn len(&self) -> usize {
        self.scaling.len() + self.moving.len() + self.rotating.len()
    }

    /// Whether no task is in flight.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all tasks and pending completion events. The id counter keeps going.
    pub fn clear(&mut self) {
        self.scaling.clear();
        self.moving.clear();
        self.rotating.clear();
        self.completed.clear();
    }
}

impl Default for MotionScheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}
