// motion/driver.rs
//
// Per-frame sweep: advances every task against the clock, writes values to
// the surface and retires finished tasks.

use crate::api::types::{MotionCategory, MotionId};
use crate::core::surface::TransformSurface;
use super::scheduler::MotionScheduler;

impl MotionScheduler {
    /// Advance the clock by one frame and sweep all categories.
    ///
    /// `dt` (seconds) only moves a frame clock; the wall clock reads the
    /// current time itself. Call exactly once per frame.
    /// Returns the number of tasks that completed this tick.
    pub fn tick<S: TransformSurface + ?Sized>(&mut self, dt: f32, surface: &mut S) -> usize {
        self.clock.advance(dt);
        let now = self.clock.now_ms();
        self.tick_at(now, surface)
    }

    /// Sweep all categories against an explicit timestamp (ms).
    /// Order is scale, then move, then rotate.
    pub fn tick_at<S: TransformSurface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> usize {
        let mut count = 0;
        for category in MotionCategory::ALL {
            count += self.sweep(category, now_ms, surface);
        }
        count
    }

    fn sweep<S: TransformSurface + ?Sized>(
        &mut self,
        category: MotionCategory,
        now_ms: f64,
        surface: &mut S,
    ) -> usize {
        let mut finished: Vec<MotionId> = Vec::new();

        for task in self.registry(category).iter() {
            if now_ms < task.end_ms {
                let value = task.path.sample(task.progress_at(now_ms));
                task.apply(surface, value);
            } else {
                // Exact end value, even if frames were skipped.
                task.apply(surface, task.path.end());
                finished.push(task.id);
            }
        }

        if finished.is_empty() {
            return 0;
        }

        // `finished` is in registry order, so one pass with a cursor removes them.
        let mut next = finished.iter().peekable();
        self.registry_mut(category).remove_where(|t| {
            if next.peek() == Some(&&t.id) {
                next.next();
                true
            } else {
                false
            }
        });
        for id in &finished {
            log::trace!("{} {:?} complete", category.name(), id);
        }

        let count = finished.len();
        self.completed.extend(finished);
        count
    }
}
