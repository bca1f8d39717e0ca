//! Deterministic point layouts for the four resume sections.
//!
//! Every generator is a pure function of `(particle index, random factors)`;
//! the particle count is the length of the factor slice. Secondary
//! randomness re-reads the same factor array through [`random_at`] with a
//! per-use salt, so outputs can be pinned exactly in tests:
//!
//! | shape      | salts                                         |
//! |------------|-----------------------------------------------|
//! | Education  | none                                          |
//! | Skills     | none                                          |
//! | Projects   | 7 (theta), 11 (phi), 13 (arc t), 17 (noise), 19 (arc start) |
//! | Experience | 23 (timeline x), 31 (phi), 41 (theta)         |

use std::f32::consts::{PI, TAU};
use std::fmt;

use glam::Vec3;

use crate::constants::*;
use crate::error::{VisualError, VisualResult};

/// The four resume sections, in navigation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Education,
    Skills,
    Projects,
    Experience,
}

/// Target position of particle `i` given the full random factor array.
pub type ShapeFn = fn(usize, &[f32]) -> Vec3;

impl Shape {
    pub const COUNT: usize = 4;
    pub const ALL: [Shape; Shape::COUNT] = [
        Shape::Education,
        Shape::Skills,
        Shape::Projects,
        Shape::Experience,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wraps out-of-range indices.
    #[inline]
    pub fn from_index(index: usize) -> Shape {
        Shape::ALL[index % Shape::COUNT]
    }

    pub fn name(self) -> &'static str {
        match self {
            Shape::Education => "Education",
            Shape::Skills => "Skills",
            Shape::Projects => "Projects",
            Shape::Experience => "Experience",
        }
    }

    #[inline]
    pub fn next(self) -> Shape {
        Shape::from_index(self.index() + 1)
    }

    #[inline]
    pub fn previous(self) -> Shape {
        Shape::from_index(self.index() + Shape::COUNT - 1)
    }

    pub fn generator(self) -> ShapeFn {
        match self {
            Shape::Education => education_point,
            Shape::Skills => skills_point,
            Shape::Projects => projects_point,
            Shape::Experience => experience_point,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Secondary random value for particle `index`: `R[(index * salt) mod N]`.
#[inline]
pub fn random_at(random_factors: &[f32], index: usize, salt: usize) -> f32 {
    if random_factors.is_empty() {
        return 0.0;
    }
    random_factors[index.wrapping_mul(salt) % random_factors.len()]
}

/// Generate `particle_count` points for `shape`.
pub fn generate(
    shape: Shape,
    particle_count: usize,
    random_factors: &[f32],
) -> VisualResult<Vec<Vec3>> {
    if particle_count == 0 {
        return Err(VisualError::Configuration(
            "particle count must be positive".into(),
        ));
    }
    if random_factors.len() != particle_count {
        return Err(VisualError::Configuration(format!(
            "expected {particle_count} random factors, got {}",
            random_factors.len()
        )));
    }
    let point = shape.generator();
    Ok((0..particle_count)
        .map(|i| point(i, random_factors))
        .collect())
}

/// Generate every shape once, at start-up.
pub fn generate_all(particle_count: usize, random_factors: &[f32]) -> VisualResult<ShapeTable> {
    let mut table = ShapeTable::new();
    for shape in Shape::ALL {
        table.set(shape, generate(shape, particle_count, random_factors)?);
    }
    log::debug!("generated {} shapes x {particle_count} points", Shape::COUNT);
    Ok(table)
}

/// View points as a flat `x, y, z, x, y, z, ...` array.
#[inline]
pub fn as_flat(points: &[Vec3]) -> &[f32] {
    bytemuck::cast_slice(points)
}

/// Fixed table of generated positions, indexed by [`Shape`].
#[derive(Clone, Debug, Default)]
pub struct ShapeTable {
    entries: [Option<Vec<Vec3>>; Shape::COUNT],
}

impl ShapeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, shape: Shape) -> Option<&[Vec3]> {
        self.entries[shape.index()].as_deref()
    }

    pub fn set(&mut self, shape: Shape, positions: Vec<Vec3>) {
        self.entries[shape.index()] = Some(positions);
    }

    pub fn clear(&mut self, shape: Shape) -> Option<Vec<Vec3>> {
        self.entries[shape.index()].take()
    }

    /// Positions for `shape`, checked against the particle count.
    pub fn target(&self, shape: Shape, expected: usize) -> VisualResult<&[Vec3]> {
        let target = self.get(shape).ok_or(VisualError::MissingShape { shape })?;
        if target.len() != expected {
            return Err(VisualError::SizeMismatch {
                shape,
                expected,
                actual: target.len(),
            });
        }
        Ok(target)
    }
}

#[inline]
fn sphere_dir(phi: f32, theta: f32) -> Vec3 {
    Vec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos())
}

/// Uniform polar angle from a value in [0, 1).
#[inline]
fn polar_from_unit(u: f32) -> f32 {
    (1.0 - 2.0 * u).clamp(-1.0, 1.0).acos()
}

#[inline]
fn category(r: f32, count: usize) -> usize {
    ((r * count as f32) as usize).min(count - 1)
}

/// Two overlapping golden-angle spheres, one per degree.
pub fn education_point(i: usize, random_factors: &[f32]) -> Vec3 {
    let n = random_factors.len() as f32;
    let split = n * EDUCATION_SPLIT;
    let k = i as f32 + 0.5;

    let phi = polar_from_unit((k % split) / split);
    // Golden-angle step; reduce in f64 so large indices keep their precision.
    let golden = std::f64::consts::PI * (1.0 + 5f64.sqrt());
    let theta = ((golden * k as f64) % std::f64::consts::TAU) as f32;

    let dir = sphere_dir(phi, theta);
    let perturbation = (random_factors[i] - 0.5) * EDUCATION_PERTURBATION;
    let mut p = dir * (EDUCATION_RADIUS + perturbation);

    if (i as f32) >= split {
        p.x *= EDUCATION_SECOND_SCALE;
        p.y *= EDUCATION_SECOND_SCALE;
        p.z += EDUCATION_SECOND_Z_OFFSET;
    }
    p
}

/// Three widening spirals, one per skill category.
pub fn skills_point(i: usize, random_factors: &[f32]) -> Vec3 {
    let n = random_factors.len() as f32;
    let r = random_factors[i];
    let c = category(r, SKILLS_CATEGORIES);

    let third = n / SKILLS_CATEGORIES as f32;
    let t = (i as f32 % third) / third * SKILLS_TURNS;
    let radius = SKILLS_BASE_RADIUS + t * SKILLS_RADIUS_GROWTH;
    let angle = t + c as f32 * TAU / SKILLS_CATEGORIES as f32;

    let noise = (r - 0.5) * SKILLS_NOISE;
    Vec3::new(
        radius * angle.cos() + noise,
        t * SKILLS_RISE - c as f32 * SKILLS_CATEGORY_DROP,
        radius * angle.sin() + noise,
    )
}

/// Four project clusters joined by arcs between neighbouring anchors.
///
/// Connector particles pick their starting anchor from `random_at(.., 19)`, so
/// arcs span all three neighbouring pairs. The JavaScript original derived the
/// pair from the connector's own factor, which above the threshold always
/// selected the last pair.
pub fn projects_point(i: usize, random_factors: &[f32]) -> Vec3 {
    let r = random_factors[i];

    if r > PROJECT_CONNECTOR_THRESHOLD {
        let from = category(random_at(random_factors, i, 19), PROJECT_ANCHORS.len() - 1);
        let a = project_anchor(from);
        let b = project_anchor(from + 1);

        let t = random_at(random_factors, i, 13);
        let mut p = a.lerp(b, t);
        p.y += (t * PI).sin() * PROJECT_ARC_LIFT;

        let noise = (random_at(random_factors, i, 17) - 0.5) * PROJECT_CONNECTOR_NOISE;
        p.x += noise;
        p.z += noise;
        p
    } else {
        let anchor = project_anchor(category(r, PROJECT_ANCHORS.len()));
        let phi = polar_from_unit(random_at(random_factors, i, 11));
        let theta = TAU * random_at(random_factors, i, 7);
        anchor + sphere_dir(phi, theta) * (PROJECT_CLUSTER_RADIUS * PROJECT_CLUSTER_SQUASH)
    }
}

/// Three job clusters over a wavy timeline; earlier jobs are larger.
pub fn experience_point(i: usize, random_factors: &[f32]) -> Vec3 {
    let r = random_factors[i];

    if r > EXPERIENCE_TIMELINE_THRESHOLD {
        let x = (random_at(random_factors, i, 23) - 0.5) * EXPERIENCE_TIMELINE_LENGTH;
        let y = (x * EXPERIENCE_WAVE_FREQ).sin() * EXPERIENCE_WAVE_AMP;
        return Vec3::new(x, y, EXPERIENCE_TIMELINE_Z);
    }

    let job = category(r, 3);
    let center = -EXPERIENCE_JOB_SPACING + job as f32 * EXPERIENCE_JOB_SPACING;
    let size = EXPERIENCE_JOB_BASE_SIZE + (3 - job) as f32 * EXPERIENCE_JOB_SIZE_STEP;

    let phi = polar_from_unit(random_at(random_factors, i, 31));
    let theta = TAU * random_at(random_factors, i, 41);
    let dir = sphere_dir(phi, theta);

    Vec3::new(
        (center + size * dir.x * EXPERIENCE_SQUASH) * EXPERIENCE_X_STRETCH,
        size * EXPERIENCE_HEIGHT_FACTOR * dir.y,
        size * dir.z * EXPERIENCE_SQUASH * EXPERIENCE_Z_FLATTEN,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_at_wraps_index() {
        let r = [0.1, 0.2, 0.3, 0.4, 0.5];
        assert_eq!(random_at(&r, 3, 7), r[(3 * 7) % 5]);
        assert_eq!(random_at(&r, usize::MAX, 41), r[usize::MAX.wrapping_mul(41) % 5]);
        assert_eq!(random_at(&[], 3, 7), 0.0);
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Shape::from_index(4), Shape::Education);
        assert_eq!(Shape::Education.previous(), Shape::Experience);
        assert_eq!(Shape::Experience.next(), Shape::Education);
    }
}
