/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Handle to a motion task, returned by `MotionScheduler::start`.
///
/// Issued from one counter shared by every category, so ids are strictly
/// increasing and never collide between scale, move and rotate tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MotionId(pub u64);

/// Which transform channel a motion task animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionCategory {
    /// Animate Entity.scale
    Scale,
    /// Animate Entity.pos
    Move,
    /// Animate Entity.rotation
    Rotate,
}

impl MotionCategory {
    /// Fixed sweep order used by the tick driver.
    pub const ALL: [MotionCategory; 3] = [
        MotionCategory::Scale,
        MotionCategory::Move,
        MotionCategory::Rotate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MotionCategory::Scale => "scale",
            MotionCategory::Move => "move",
            MotionCategory::Rotate => "rotate",
        }
    }
}

/// What a cancel call matches against: the task id or the owning entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelTarget {
    Id(MotionId),
    Owner(EntityId),
}

impl From<MotionId> for CancelTarget {
    fn from(id: MotionId) -> Self {
        CancelTarget::Id(id)
    }
}

impl From<EntityId> for CancelTarget {
    fn from(owner: EntityId) -> Self {
        CancelTarget::Owner(owner)
    }
}
