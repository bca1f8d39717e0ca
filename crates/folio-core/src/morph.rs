//! Time-based interpolation of the particle set from one shape to another.

use crate::error::{VisualError, VisualResult};
use crate::particles::ParticleSet;
use crate::shapes::{Shape, ShapeTable};

/// Quadratic ease-in-out on `[0, 1]`. Inputs outside the range are clamped.
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let eased = if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    };
    eased.clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MorphPhase {
    Idle,
    Morphing,
}

/// Bookkeeping for the morph in flight (or the last one, when inactive).
#[derive(Clone, Debug, PartialEq)]
pub struct MorphState {
    pub active: bool,
    pub elapsed: f32,
    pub duration: f32,
    pub from: Shape,
    pub to: Shape,
}

/// Outcome of one morph frame. `progress` is the eased ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphTick {
    pub progress: f32,
    pub done: bool,
}

impl MorphTick {
    pub fn idle() -> Self {
        Self {
            progress: 0.0,
            done: false,
        }
    }
}

pub struct MorphEngine {
    state: MorphState,
}

impl MorphEngine {
    pub fn new(duration: f32) -> Self {
        Self {
            state: MorphState {
                active: false,
                elapsed: 0.0,
                duration,
                from: Shape::Education,
                to: Shape::Education,
            },
        }
    }

    #[inline]
    pub fn state(&self) -> &MorphState {
        &self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn phase(&self) -> MorphPhase {
        if self.state.active {
            MorphPhase::Morphing
        } else {
            MorphPhase::Idle
        }
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.state.duration
    }

    /// Takes effect on the next tick, including for a morph in flight.
    pub fn set_duration(&mut self, duration: f32) {
        self.state.duration = duration;
    }

    /// Start morphing from the particles' current positions towards `to`.
    /// Returns `false` and leaves everything untouched while a morph is active.
    pub fn begin(&mut self, particles: &mut ParticleSet, from: Shape, to: Shape) -> bool {
        if self.state.active {
            log::trace!("morph {from} -> {to} rejected: already morphing");
            return false;
        }
        particles.capture_start();
        self.state.active = true;
        self.state.elapsed = 0.0;
        self.state.from = from;
        self.state.to = to;
        log::debug!("morph {from} -> {to} over {:.2}s", self.state.duration);
        true
    }

    /// Advance the morph by `dt` seconds.
    ///
    /// Any error aborts the morph before a single position is written.
    pub fn tick(
        &mut self,
        dt: f32,
        particles: &mut ParticleSet,
        table: &ShapeTable,
    ) -> VisualResult<MorphTick> {
        if !self.state.active {
            return Ok(MorphTick::idle());
        }

        let duration = self.state.duration;
        if !duration.is_finite() || duration <= 0.0 {
            self.abort();
            return Err(VisualError::Configuration(format!(
                "morph duration must be positive, got {duration}"
            )));
        }

        let target = match table.target(self.state.to, particles.len()) {
            Ok(target) => target,
            Err(e) => {
                self.abort();
                return Err(e);
            }
        };

        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.state.elapsed += dt;
        let clamped = (self.state.elapsed / duration).clamp(0.0, 1.0);

        if clamped >= 1.0 {
            // Snap to the generated target rather than the eased value.
            particles.snap_to(target);
            self.state.active = false;
            log::debug!("morph {} -> {} complete", self.state.from, self.state.to);
            return Ok(MorphTick {
                progress: 1.0,
                done: true,
            });
        }

        let eased = ease_in_out_quad(clamped);
        let (positions, start) = particles.interpolation_parts();
        for ((p, s), t) in positions.iter_mut().zip(start).zip(target) {
            *p = s.lerp(*t, eased);
        }
        Ok(MorphTick {
            progress: eased,
            done: false,
        })
    }

    fn abort(&mut self) {
        log::warn!("morph {} -> {} aborted", self.state.from, self.state.to);
        self.state.active = false;
        self.state.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_fixed_points() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert_eq!(ease_in_out_quad(-3.0), 0.0);
        assert_eq!(ease_in_out_quad(7.0), 1.0);
    }

    #[test]
    fn idle_engine_ticks_are_noops() {
        let mut engine = MorphEngine::new(1.0);
        let mut particles = ParticleSet::new(8, 1).unwrap();
        let before = particles.positions().to_vec();
        let t = engine.tick(0.5, &mut particles, &ShapeTable::new()).unwrap();
        assert_eq!(t, MorphTick::idle());
        assert_eq!(particles.positions(), &before[..]);
        assert_eq!(engine.phase(), MorphPhase::Idle);
    }
}
