// motion/mod.rs
//
// Motion-over-time: scale/move/rotate entities toward a target over a
// duration, one task per entity per category.
//
// The scheduler is decoupled from Entity/Scene — it reads and writes through
// the TransformSurface trait.

pub mod driver;
pub mod interp;
pub mod registry;
pub mod scheduler;
pub mod task;

pub use interp::{lerp_vec3, MotionPath, MotionValue};
pub use registry::MotionRegistry;
pub use scheduler::MotionScheduler;
pub use task::{MotionTarget, MotionTask};
