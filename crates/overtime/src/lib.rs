pub mod api;
pub mod core;
pub mod components;
pub mod motion;

// Re-export key types at crate root for convenience
pub use api::config::{ClockMode, SchedulerConfig};
pub use api::types::{CancelTarget, EntityId, MotionCategory, MotionId};
pub use components::entity::Entity;
pub use core::scene::Scene;
pub use core::surface::TransformSurface;
pub use core::time::MotionClock;
pub use motion::{
    MotionScheduler, MotionRegistry, MotionTask, MotionTarget,
    MotionPath, MotionValue, lerp_vec3,
};
