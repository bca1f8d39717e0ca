use glam::Vec3;
use rand::prelude::*;

use crate::constants::INITIAL_SCATTER;
use crate::error::{VisualError, VisualResult};

/// Fixed-size particle buffers shared by the morph engine, the breathing
/// modulator and the color mapper.
///
/// The random factor of every particle is drawn once at construction and
/// never changes afterwards: every shape generator keys off the same factor,
/// so a particle keeps belonging to the "same" sub-structure across shapes.
#[derive(Clone, Debug)]
pub struct ParticleSet {
    positions: Vec<Vec3>,
    base_positions: Vec<Vec3>,
    start_positions: Vec<Vec3>,
    colors: Vec<Vec3>,
    random_factors: Vec<f32>,
}

impl ParticleSet {
    /// Scatter `count` particles through a cube around the origin and assign
    /// their random factors from a seeded RNG.
    pub fn new(count: usize, seed: u64) -> VisualResult<Self> {
        if count == 0 {
            return Err(VisualError::Configuration(
                "particle count must be positive".into(),
            ));
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let mut positions = Vec::with_capacity(count);
        let mut random_factors = Vec::with_capacity(count);
        for _ in 0..count {
            let p = Vec3::new(
                rng.gen::<f32>() - 0.5,
                rng.gen::<f32>() - 0.5,
                rng.gen::<f32>() - 0.5,
            ) * INITIAL_SCATTER;
            positions.push(p);
            random_factors.push(rng.gen::<f32>());
        }
        Ok(Self::from_parts(positions, random_factors))
    }

    /// Build a set from explicit random factors, with every particle parked
    /// at the origin. Factors must lie in `[0, 1)`.
    pub fn with_random_factors(random_factors: Vec<f32>) -> VisualResult<Self> {
        if random_factors.is_empty() {
            return Err(VisualError::Configuration(
                "particle count must be positive".into(),
            ));
        }
        if let Some((i, r)) = random_factors
            .iter()
            .enumerate()
            .find(|(_, r)| !(0.0..1.0).contains(*r))
        {
            return Err(VisualError::Configuration(format!(
                "random factor {i} is {r}, expected a value in [0, 1)"
            )));
        }
        let positions = vec![Vec3::ZERO; random_factors.len()];
        Ok(Self::from_parts(positions, random_factors))
    }

    fn from_parts(positions: Vec<Vec3>, random_factors: Vec<f32>) -> Self {
        let n = positions.len();
        Self {
            base_positions: positions.clone(),
            start_positions: positions.clone(),
            colors: vec![Vec3::ONE; n],
            positions,
            random_factors,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Direct write access for hosts that place particles themselves.
    /// The slice cannot change length, so the set stays N particles wide.
    #[inline]
    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    #[inline]
    pub fn base_positions(&self) -> &[Vec3] {
        &self.base_positions
    }

    #[inline]
    pub fn start_positions(&self) -> &[Vec3] {
        &self.start_positions
    }

    #[inline]
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    #[inline]
    pub fn random_factors(&self) -> &[f32] {
        &self.random_factors
    }

    /// Overwrite positions and resting positions with `target`.
    /// Caller guarantees `target.len() == self.len()`.
    pub(crate) fn snap_to(&mut self, target: &[Vec3]) {
        self.positions.copy_from_slice(target);
        self.base_positions.copy_from_slice(target);
    }

    pub(crate) fn capture_start(&mut self) {
        self.start_positions.copy_from_slice(&self.positions);
    }

    pub(crate) fn interpolation_parts(&mut self) -> (&mut [Vec3], &[Vec3]) {
        (&mut self.positions, &self.start_positions)
    }

    pub(crate) fn breathing_parts(&mut self) -> (&mut [Vec3], &[Vec3]) {
        (&mut self.positions, &self.base_positions)
    }

    pub(crate) fn color_parts(&mut self) -> (&[Vec3], &mut [Vec3]) {
        (&self.positions, &mut self.colors)
    }
}

/// Axis-aligned bounds of a point set, `None` when empty.
pub fn bounding_box(points: &[Vec3]) -> Option<(Vec3, Vec3)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sets_are_reproducible() {
        let a = ParticleSet::new(64, 7).unwrap();
        let b = ParticleSet::new(64, 7).unwrap();
        assert_eq!(a.random_factors(), b.random_factors());
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn initial_scatter_stays_inside_cube() {
        let set = ParticleSet::new(500, 3).unwrap();
        let half = INITIAL_SCATTER * 0.5;
        for p in set.positions() {
            assert!(p.abs().max_element() <= half);
        }
        for r in set.random_factors() {
            assert!((0.0..1.0).contains(r));
        }
    }

    #[test]
    fn rejects_out_of_range_factors() {
        assert!(ParticleSet::with_random_factors(vec![0.2, 1.0]).is_err());
        assert!(ParticleSet::with_random_factors(vec![]).is_err());
        assert!(ParticleSet::new(0, 1).is_err());
    }

    #[test]
    fn bounding_box_covers_points() {
        let pts = [Vec3::new(-1.0, 2.0, 0.0), Vec3::new(3.0, -2.0, 1.0)];
        let (lo, hi) = bounding_box(&pts).unwrap();
        assert_eq!(lo, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(hi, Vec3::new(3.0, 2.0, 1.0));
        assert!(bounding_box(&[]).is_none());
    }
}
