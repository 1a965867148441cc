// motion/interp.rs
//
// Interpolation between a task's start and end values.
// No dependencies on Entity/Scene — just math.

use glam::{Quat, Vec3};

/// A sampled transform value: a vector (scale, position) or a rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionValue {
    Vector(Vec3),
    Rotation(Quat),
}

/// Start and end of a motion, tagged by value kind at creation time so the
/// per-frame path never inspects types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionPath {
    /// Linear interpolation between two vectors.
    Vector { from: Vec3, to: Vec3 },
    /// Spherical-linear interpolation between two rotations.
    Rotation { from: Quat, to: Quat },
}

impl MotionPath {
    /// Value at normalized progress `t`. `t` is clamped to [0, 1].
    #[inline]
    pub fn sample(&self, t: f32) -> MotionValue {
        let t = t.clamp(0.0, 1.0);
        match *self {
            MotionPath::Vector { from, to } => MotionValue::Vector(lerp_vec3(from, to, t)),
            MotionPath::Rotation { from, to } => MotionValue::Rotation(from.slerp(to, t)),
        }
    }

    /// The exact end value, without going through interpolation.
    #[inline]
    pub fn end(&self) -> MotionValue {
        match *self {
            MotionPath::Vector { to, .. } => MotionValue::Vector(to),
            MotionPath::Rotation { to, .. } => MotionValue::Rotation(to),
        }
    }

    /// The start value.
    #[inline]
    pub fn start(&self) -> MotionValue {
        match *self {
            MotionPath::Vector { from, .. } => MotionValue::Vector(from),
            MotionPath::Rotation { from, .. } => MotionValue::Rotation(from),
        }
    }
}

/// Linearly interpolate between two Vec3 values.
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Normalized progress of a motion at `now_ms`.
///
/// Nonpositive durations are always complete.
#[inline]
pub fn progress(start_ms: f64, duration_ms: f64, now_ms: f64) -> f32 {
    if duration_ms <= 0.0 {
        1.0
    } else {
        ((now_ms - start_ms) / duration_ms).clamp(0.0, 1.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn vector_midpoint() {
        let path = MotionPath::Vector { from: Vec3::ZERO, to: Vec3::new(10.0, 0.0, -4.0) };
        match path.sample(0.5) {
            MotionValue::Vector(v) => assert!((v - Vec3::new(5.0, 0.0, -2.0)).length() < 1e-5),
            other => panic!("Expected vector, got {:?}", other),
        }
    }

    #[test]
    fn rotation_midpoint_is_half_angle() {
        let path = MotionPath::Rotation {
            from: Quat::IDENTITY,
            to: Quat::from_rotation_z(FRAC_PI_2),
        };
        match path.sample(0.5) {
            MotionValue::Rotation(q) => {
                assert!(q.angle_between(Quat::from_rotation_z(FRAC_PI_2 / 2.0)) < 1e-4)
            }
            other => panic!("Expected rotation, got {:?}", other),
        }
    }

    #[test]
    fn sample_clamps_overshoot() {
        let path = MotionPath::Vector { from: Vec3::ZERO, to: Vec3::ONE };
        assert_eq!(path.sample(3.0), MotionValue::Vector(Vec3::ONE));
        assert_eq!(path.sample(-1.0), MotionValue::Vector(Vec3::ZERO));
    }

    #[test]
    fn progress_handles_nonpositive_duration() {
        assert_eq!(progress(100.0, 0.0, 100.0), 1.0);
        assert_eq!(progress(100.0, -50.0, 0.0), 1.0);
    }

    #[test]
    fn progress_is_monotonic() {
        let mut last = 0.0;
        for step in 0..=20 {
            let p = progress(1_000.0, 400.0, 1_000.0 + step as f64 * 20.0);
            assert!(p >= last, "progress went backwards at step {}", step);
            last = p;
        }
        assert_eq!(last, 1.0);
    }
}
