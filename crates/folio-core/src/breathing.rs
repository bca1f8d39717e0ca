use std::f64::consts::TAU;

use glam::Vec3;

use crate::constants::shape_center_vec3;
use crate::particles::{bounding_box, ParticleSet};
use crate::shapes::Shape;

/// Idle pulsation: scales the resting positions radially around a
/// per-shape center with a slow sine.
#[derive(Clone, Debug, PartialEq)]
pub struct Breathing {
    pub amplitude: f32,
    pub frequency: f32,
    phase_origin: f64,
}

impl Breathing {
    pub fn new(amplitude: f32, frequency: f32) -> Self {
        Self {
            amplitude,
            frequency,
            phase_origin: 0.0,
        }
    }

    /// Radial scale at time `now` (seconds on the same clock as [`reset`](Self::reset)).
    /// Phase math runs in f64: `now` may be days of uptime.
    #[inline]
    pub fn factor(&self, now: f64) -> f32 {
        let phase = TAU * f64::from(self.frequency) * (now - self.phase_origin);
        1.0 + self.amplitude * phase.sin() as f32
    }

    /// Restart the cycle at `now`, where the factor is exactly 1.
    pub fn reset(&mut self, now: f64) {
        self.phase_origin = now;
    }

    /// Write breathing-adjusted positions from the resting positions.
    pub fn apply(&self, particles: &mut ParticleSet, shape: Option<Shape>, now: f64) {
        let k = self.factor(now);
        let (positions, base) = particles.breathing_parts();
        if k == 1.0 {
            positions.copy_from_slice(base);
            return;
        }
        let center = shape_center(shape, base);
        for (p, b) in positions.iter_mut().zip(base) {
            *p = center + (*b - center) * k;
        }
    }
}

/// Breathing center for `shape`, or the bounding-box center of `points`
/// when the shape is unknown.
pub fn shape_center(shape: Option<Shape>, points: &[Vec3]) -> Vec3 {
    match shape {
        Some(shape) => shape_center_vec3(shape.index()),
        None => bounding_box(points)
            .map(|(lo, hi)| (lo + hi) * 0.5)
            .unwrap_or(Vec3::ZERO),
    }
}
