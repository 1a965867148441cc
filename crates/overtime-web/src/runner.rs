use glam::{Quat, Vec3, Vec4};
use overtime::{
    CancelTarget, ClockMode, Entity, EntityId, MotionCategory, MotionClock, MotionId,
    MotionScheduler, Scene, SchedulerConfig,
};

#[cfg(target_arch = "wasm32")]
fn host_now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn host_now_ms() -> f64 {
    overtime::core::time::system_now_ms()
}

/// Hosts one scene and one motion scheduler for the browser frame loop.
///
/// The lib exports free functions over a `thread_local!` MotionRunner,
/// because wasm-bindgen cannot export generic state directly.
/// Only the first `attach()` subscribes to frames; later attaches are no-ops
/// so the scheduler is swept once per frame no matter how many hosts exist.
pub struct MotionRunner {
    scene: Scene,
    motion: MotionScheduler,
    config: SchedulerConfig,
    subscribed: bool,
    next_entity: u32,
    /// Ids of motions that completed during the last frame.
    completed: Vec<MotionId>,
}

impl MotionRunner {
    pub fn new(config: SchedulerConfig) -> Self {
        let clock = match config.clock {
            ClockMode::Wall => MotionClock::wall_with(host_now_ms),
            ClockMode::Frame => MotionClock::new(ClockMode::Frame),
        };

        Self {
            scene: Scene::with_capacity(config.scene_capacity),
            motion: MotionScheduler::with_clock(clock, &config),
            config,
            subscribed: false,
            next_entity: 1,
            completed: Vec::new(),
        }
    }

    /// Subscribe to the host frame signal. Returns true only for the first
    /// call; the caller that gets `true` is the one that drives `frame()`.
    pub fn attach(&mut self) -> bool {
        if self.subscribed {
            log::debug!("motion runner already attached; ignoring");
            return false;
        }
        self.subscribed = true;
        log::info!("motion runner attached ({:?} clock)", self.config.clock);
        true
    }

    pub fn is_attached(&self) -> bool {
        self.subscribed
    }

    /// Run one frame. Does nothing until attached.
    /// Returns the number of motions that completed.
    pub fn frame(&mut self, dt: f32) -> usize {
        if !self.subscribed {
            return 0;
        }
        let count = self.motion.tick(dt, &mut self.scene);

        // Only the latest frame's completions are kept.
        self.completed.clear();
        self.completed.extend(self.motion.drain_completed());
        count
    }

    /// Motions that completed during the last frame.
    pub fn completed(&self) -> &[MotionId] {
        &self.completed
    }

    /// Take the last frame's completions, leaving the buffer empty.
    pub fn drain_completed(&mut self) -> Vec<MotionId> {
        std::mem::take(&mut self.completed)
    }

    // ---- Entities ----

    /// Spawn an entity at `pos`. Returns its id.
    pub fn spawn(&mut self, pos: Vec3) -> EntityId {
        let id = EntityId(self.next_entity);
        self.next_entity += 1;
        self.scene.spawn(Entity::new(id).with_pos(pos));
        id
    }

    /// Despawn an entity and drop its motions.
    pub fn despawn(&mut self, id: EntityId) -> bool {
        self.motion.remove_owner(id);
        self.scene.despawn(id).is_some()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn motion(&self) -> &MotionScheduler {
        &self.motion
    }

    // ---- Motions ----

    pub fn scale_to(&mut self, id: EntityId, scale: Vec3, duration_ms: f64) -> MotionId {
        self.motion.scale_to(&self.scene, id, scale, duration_ms)
    }

    pub fn move_to(&mut self, id: EntityId, pos: Vec3, duration_ms: f64) -> MotionId {
        self.motion.move_to(&self.scene, id, pos, duration_ms)
    }

    pub fn rotate_to(&mut self, id: EntityId, rotation: Quat, duration_ms: f64) -> MotionId {
        self.motion.rotate_to(&self.scene, id, rotation, duration_ms)
    }

    /// Rotate to a raw `[x, y, z, w]` quaternion from JS.
    /// Zero-length or non-finite input is rejected and nothing starts.
    pub fn rotate_to_xyzw(
        &mut self,
        id: EntityId,
        xyzw: [f32; 4],
        duration_ms: f64,
    ) -> Option<MotionId> {
        match Vec4::from_array(xyzw).try_normalize() {
            Some(v) => Some(self.rotate_to(id, Quat::from_vec4(v), duration_ms)),
            None => {
                log::warn!("ignoring invalid rotation {:?} for {:?}", xyzw, id);
                None
            }
        }
    }

    pub fn cancel(&mut self, target: impl Into<CancelTarget>, category: MotionCategory) -> bool {
        self.motion.cancel(target, category)
    }

    // ---- Accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn position(&self, id: EntityId) -> Vec3 {
        self.scene.get(id).map(|e| e.pos).unwrap_or(Vec3::ZERO)
    }

    pub fn scale(&self, id: EntityId) -> Vec3 {
        self.scene.get(id).map(|e| e.scale).unwrap_or(Vec3::ZERO)
    }

    pub fn rotation(&self, id: EntityId) -> Quat {
        self.scene.get(id).map(|e| e.rotation).unwrap_or(Quat::IDENTITY)
    }

    pub fn active_count(&self) -> u32 {
        self.motion.len() as u32
    }
}

impl Default for MotionRunner {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}
