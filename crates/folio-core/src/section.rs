//! Section controller: the single owner of everything the frame loop mutates.

use glam::{Vec2, Vec3};
use smallvec::SmallVec;

use crate::breathing::Breathing;
use crate::color::recolor;
use crate::config::FolioConfig;
use crate::error::VisualResult;
use crate::input::Navigation;
use crate::morph::{MorphEngine, MorphTick};
use crate::particles::ParticleSet;
use crate::shapes::{generate_all, Shape, ShapeTable};

/// Notifications for the text/UI layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisualEvent {
    /// The current section index changed; fired as soon as a morph starts.
    SectionChanged(usize),
    /// A morph finished and the shape at this index is at rest.
    ShapeSettled(usize),
}

pub type VisualEvents = SmallVec<[VisualEvent; 2]>;

pub struct VisualizationState {
    particles: ParticleSet,
    shapes: ShapeTable,
    morph: MorphEngine,
    breathing: Breathing,
    current: Shape,
    clock: f64,
    since_change: f32,
    auto_advance: bool,
    auto_advance_secs: f32,
    rotation_speed: f32,
    rotation: Vec2,
    target_rotation: Vec2,
    pending: VisualEvents,
}

impl VisualizationState {
    /// Seed the particle set, generate every shape and rest on Education.
    pub fn new(config: &FolioConfig) -> VisualResult<Self> {
        config.validate()?;
        let particles = ParticleSet::new(config.particle_count, config.seed)?;
        let shapes = generate_all(particles.len(), particles.random_factors())?;
        let mut state = Self::with_parts(config, particles, shapes);
        state.set_shape(Shape::Education)?;
        log::info!(
            "visualization ready: {} particles, morph {:.1}s",
            state.particles.len(),
            config.morph_duration_secs
        );
        Ok(state)
    }

    /// Assemble a state from prepared parts without touching positions.
    pub fn with_parts(config: &FolioConfig, particles: ParticleSet, shapes: ShapeTable) -> Self {
        Self {
            particles,
            shapes,
            morph: MorphEngine::new(config.morph_duration_secs),
            breathing: Breathing::new(config.breathing_amplitude, config.breathing_frequency_hz),
            current: Shape::Education,
            clock: 0.0,
            since_change: 0.0,
            auto_advance: config.auto_advance,
            auto_advance_secs: config.auto_advance_secs,
            rotation_speed: config.rotation_speed,
            rotation: Vec2::ZERO,
            target_rotation: Vec2::ZERO,
            pending: VisualEvents::new(),
        }
    }

    /// Place the particles on `shape` immediately. Returns `Ok(false)` while
    /// a morph is running.
    pub fn set_shape(&mut self, shape: Shape) -> VisualResult<bool> {
        if self.morph.is_active() {
            return Ok(false);
        }
        let target = self.shapes.target(shape, self.particles.len())?;
        self.particles.snap_to(target);
        recolor(&mut self.particles);
        self.breathing.reset(self.clock);
        if self.current != shape {
            self.pending.push(VisualEvent::SectionChanged(shape.index()));
        }
        self.current = shape;
        Ok(true)
    }

    /// Start morphing to section `index` (wrapped). Dropped while morphing
    /// or when already there.
    pub fn go_to(&mut self, index: usize) -> bool {
        let target = Shape::from_index(index);
        if self.morph.is_active() || target == self.current {
            log::trace!("go_to {target} ignored");
            return false;
        }
        // Positions already carry the breathing offset while idle.
        if !self.morph.begin(&mut self.particles, self.current, target) {
            return false;
        }
        log::debug!("section {} -> {}", self.current, target);
        self.current = target;
        self.since_change = 0.0;
        self.pending.push(VisualEvent::SectionChanged(target.index()));
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current.next().index())
    }

    pub fn previous(&mut self) -> bool {
        self.go_to(self.current.previous().index())
    }

    /// Input-driven navigation; also restarts the auto-advance countdown.
    pub fn navigate(&mut self, nav: Navigation) -> bool {
        self.since_change = 0.0;
        match nav {
            Navigation::Next => self.next(),
            Navigation::Previous => self.previous(),
        }
    }

    pub fn toggle_auto_advance(&mut self) -> bool {
        self.auto_advance = !self.auto_advance;
        self.since_change = 0.0;
        log::debug!("auto-advance {}", if self.auto_advance { "on" } else { "off" });
        self.auto_advance
    }

    #[inline]
    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    /// Rotation `(pitch, yaw)` the shape should turn towards.
    pub fn set_target_rotation(&mut self, target: Vec2) {
        if target.is_finite() {
            self.target_rotation = target;
        }
    }

    #[inline]
    pub fn target_rotation(&self) -> Vec2 {
        self.target_rotation
    }

    /// Smoothed rotation `(pitch, yaw)` for the model matrix.
    #[inline]
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    #[inline]
    pub fn current_shape(&self) -> Shape {
        self.current
    }

    #[inline]
    pub fn current_section(&self) -> usize {
        self.current.index()
    }

    #[inline]
    pub fn is_morphing(&self) -> bool {
        self.morph.is_active()
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        self.particles.positions()
    }

    #[inline]
    pub fn colors(&self) -> &[Vec3] {
        self.particles.colors()
    }

    #[inline]
    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    #[inline]
    pub fn shapes(&self) -> &ShapeTable {
        &self.shapes
    }

    /// Mutable table access for hosts that swap in precomputed layouts.
    #[inline]
    pub fn shapes_mut(&mut self) -> &mut ShapeTable {
        &mut self.shapes
    }

    #[inline]
    pub fn breathing_mut(&mut self) -> &mut Breathing {
        &mut self.breathing
    }

    pub fn set_morph_duration(&mut self, secs: f32) {
        self.morph.set_duration(secs);
    }

    /// Seconds of simulated time seen so far.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.clock
    }

    /// Advance one frame.
    ///
    /// Events are appended to `out_events` before any error is returned, so a
    /// failed morph still reports the section change it caused. A failed morph
    /// leaves the buffers as they were and moves `current` back to where the
    /// morph started.
    pub fn tick(&mut self, dt: f32, out_events: &mut VisualEvents) -> VisualResult<MorphTick> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.clock += f64::from(dt);
        self.since_change += dt;

        if self.auto_advance && !self.morph.is_active() && self.since_change > self.auto_advance_secs
        {
            self.since_change = 0.0;
            self.next();
        }
        out_events.extend(self.pending.drain(..));

        if self.morph.is_active() {
            let step = match self.morph.tick(dt, &mut self.particles, &self.shapes) {
                Ok(step) => step,
                Err(e) => {
                    let from = self.morph.state().from;
                    log::error!("morph to {} failed: {e}", self.current);
                    if self.current != from {
                        self.current = from;
                        out_events.push(VisualEvent::SectionChanged(from.index()));
                    }
                    return Err(e);
                }
            };
            recolor(&mut self.particles);
            if step.done {
                self.breathing.reset(self.clock);
                out_events.push(VisualEvent::ShapeSettled(self.current.index()));
            }
            return Ok(step);
        }

        self.breathing
            .apply(&mut self.particles, Some(self.current), self.clock);

        let blend = (self.rotation_speed * dt).min(1.0);
        self.rotation += (self.target_rotation - self.rotation) * blend;

        Ok(MorphTick::idle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> FolioConfig {
        FolioConfig {
            particle_count: 64,
            morph_duration_secs: 1.0,
            auto_advance: false,
            ..FolioConfig::default()
        }
    }

    #[test]
    fn starts_on_education_at_rest() {
        let state = VisualizationState::new(&small_config()).unwrap();
        assert_eq!(state.current_shape(), Shape::Education);
        assert!(!state.is_morphing());
        let education = state.shapes().get(Shape::Education).unwrap();
        assert_eq!(state.positions(), education);
    }

    #[test]
    fn go_to_current_is_noop() {
        let mut state = VisualizationState::new(&small_config()).unwrap();
        assert!(!state.go_to(0));
        assert!(!state.is_morphing());
    }

    #[test]
    fn rotation_eases_towards_target_only_when_idle() {
        let mut state = VisualizationState::new(&small_config()).unwrap();
        let mut events = VisualEvents::new();
        state.set_target_rotation(Vec2::new(0.4, -0.8));
        state.tick(0.25, &mut events).unwrap();
        let r = state.rotation();
        assert!((r.x - 0.2).abs() < 1e-6);
        assert!((r.y + 0.4).abs() < 1e-6);

        assert!(state.next());
        state.tick(0.25, &mut events).unwrap();
        assert_eq!(state.rotation(), r);
    }
}
