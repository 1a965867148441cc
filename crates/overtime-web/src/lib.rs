pub mod runner;

pub use runner::MotionRunner;

use std::cell::RefCell;
use glam::Vec3;
use overtime::{EntityId, MotionCategory, MotionId, SchedulerConfig};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<MotionRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut MotionRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Motion runner not initialized. Call overtime_init() first.");
        f(runner)
    })
}

// Ids cross the boundary as f64 to stay plain JS numbers.
fn motion_id(id: MotionId) -> f64 {
    id.0 as f64
}

fn from_js_id(id: f64) -> MotionId {
    MotionId(id as u64)
}

/// Create the runner. `config_json` may be empty for defaults.
#[wasm_bindgen]
pub fn overtime_init(config_json: &str) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = if config_json.trim().is_empty() {
        SchedulerConfig::default()
    } else {
        SchedulerConfig::from_json(config_json).unwrap_or_else(|err| {
            log::error!("invalid motion config ({}); using defaults", err);
            SchedulerConfig::default()
        })
    };

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(MotionRunner::new(config));
    });
    log::info!("overtime: initialized");
}

/// Subscribe to frames. Only the first caller gets `true` and should drive
/// `overtime_frame` from its requestAnimationFrame loop.
#[wasm_bindgen]
pub fn overtime_attach() -> bool {
    with_runner(|r| r.attach())
}

#[wasm_bindgen]
pub fn overtime_frame(dt: f32) -> u32 {
    with_runner(|r| r.frame(dt) as u32)
}

/// Ids of motions that completed during the last frame. Clears the buffer.
#[wasm_bindgen]
pub fn overtime_drain_completed() -> Vec<f64> {
    with_runner(|r| r.drain_completed().into_iter().map(motion_id).collect())
}

// ---- Entities ----

#[wasm_bindgen]
pub fn overtime_spawn(x: f32, y: f32, z: f32) -> u32 {
    with_runner(|r| r.spawn(Vec3::new(x, y, z)).0)
}

#[wasm_bindgen]
pub fn overtime_despawn(entity: u32) -> bool {
    with_runner(|r| r.despawn(EntityId(entity)))
}

// ---- Motions ----

#[wasm_bindgen]
pub fn overtime_scale_to(entity: u32, x: f32, y: f32, z: f32, duration_ms: f64) -> f64 {
    with_runner(|r| motion_id(r.scale_to(EntityId(entity), Vec3::new(x, y, z), duration_ms)))
}

#[wasm_bindgen]
pub fn overtime_move_to(entity: u32, x: f32, y: f32, z: f32, duration_ms: f64) -> f64 {
    with_runner(|r| motion_id(r.move_to(EntityId(entity), Vec3::new(x, y, z), duration_ms)))
}

/// Returns 0 (never a valid id) if the quaternion cannot be normalized.
#[wasm_bindgen]
pub fn overtime_rotate_to(entity: u32, x: f32, y: f32, z: f32, w: f32, duration_ms: f64) -> f64 {
    with_runner(|r| {
        r.rotate_to_xyzw(EntityId(entity), [x, y, z, w], duration_ms)
            .map_or(0.0, motion_id)
    })
}

#[wasm_bindgen]
pub fn overtime_cancel_scale(id: f64) -> bool {
    with_runner(|r| r.cancel(from_js_id(id), MotionCategory::Scale))
}

#[wasm_bindgen]
pub fn overtime_cancel_move(id: f64) -> bool {
    with_runner(|r| r.cancel(from_js_id(id), MotionCategory::Move))
}

#[wasm_bindgen]
pub fn overtime_cancel_rotate(id: f64) -> bool {
    with_runner(|r| r.cancel(from_js_id(id), MotionCategory::Rotate))
}

#[wasm_bindgen]
pub fn overtime_cancel_scale_owner(entity: u32) -> bool {
    with_runner(|r| r.cancel(EntityId(entity), MotionCategory::Scale))
}

#[wasm_bindgen]
pub fn overtime_cancel_move_owner(entity: u32) -> bool {
    with_runner(|r| r.cancel(EntityId(entity), MotionCategory::Move))
}

#[wasm_bindgen]
pub fn overtime_cancel_rotate_owner(entity: u32) -> bool {
    with_runner(|r| r.cancel(EntityId(entity), MotionCategory::Rotate))
}

// ---- Transform accessors ----

#[wasm_bindgen]
pub fn overtime_position_x(entity: u32) -> f32 {
    with_runner(|r| r.position(EntityId(entity)).x)
}

#[wasm_bindgen]
pub fn overtime_position_y(entity: u32) -> f32 {
    with_runner(|r| r.position(EntityId(entity)).y)
}

#[wasm_bindgen]
pub fn overtime_position_z(entity: u32) -> f32 {
    with_runner(|r| r.position(EntityId(entity)).z)
}

/// Scale as a flat [x, y, z] array.
#[wasm_bindgen]
pub fn overtime_scale(entity: u32) -> Vec<f32> {
    with_runner(|r| r.scale(EntityId(entity)).to_array().to_vec())
}

/// Rotation as a flat [x, y, z, w] array.
#[wasm_bindgen]
pub fn overtime_rotation(entity: u32) -> Vec<f32> {
    with_runner(|r| r.rotation(EntityId(entity)).to_array().to_vec())
}

#[wasm_bindgen]
pub fn overtime_active_count() -> u32 {
    with_runner(|r| r.active_count())
}
