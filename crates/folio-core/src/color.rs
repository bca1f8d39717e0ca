use glam::Vec3;

use crate::constants::{HUE_MAX, HUE_SPAN, LIGHTNESS, MIN_X_RANGE, SATURATION};
use crate::particles::ParticleSet;

/// HSL to RGB, all components in `[0, 1]`. Hue wraps.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return Vec3::splat(l);
    }
    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Vec3::new(
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    )
}

#[inline]
fn hue_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

/// Hue for an X coordinate inside `[min_x, min_x + range]`.
#[inline]
pub fn hue_for_x(x: f32, min_x: f32, range: f32) -> f32 {
    let ratio = ((x - min_x) / range.max(MIN_X_RANGE)).clamp(0.0, 1.0);
    HUE_MAX - ratio * HUE_SPAN
}

/// Color every point by where its X falls in the current X extent.
pub fn map_colors(positions: &[Vec3], colors: &mut [Vec3]) {
    let (min_x, max_x) = positions
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.x), hi.max(p.x))
        });
    if !min_x.is_finite() || !max_x.is_finite() {
        return;
    }
    let range = (max_x - min_x).max(MIN_X_RANGE);
    for (c, p) in colors.iter_mut().zip(positions) {
        *c = hsl_to_rgb(hue_for_x(p.x, min_x, range), SATURATION, LIGHTNESS);
    }
}

pub fn recolor(particles: &mut ParticleSet) {
    let (positions, colors) = particles.color_parts();
    map_colors(positions, colors);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn hsl_primaries() {
        assert!(close(hsl_to_rgb(0.0, 1.0, 0.5), Vec3::new(1.0, 0.0, 0.0)));
        assert!(close(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), Vec3::new(0.0, 1.0, 0.0)));
        assert!(close(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), Vec3::new(0.0, 0.0, 1.0)));
        assert!(close(hsl_to_rgb(0.3, 0.0, 0.25), Vec3::splat(0.25)));
    }

    #[test]
    fn degenerate_extent_does_not_divide_by_zero() {
        let positions = vec![Vec3::new(2.0, 0.0, 0.0); 3];
        let mut colors = vec![Vec3::ZERO; 3];
        map_colors(&positions, &mut colors);
        let expected = hsl_to_rgb(HUE_MAX, SATURATION, LIGHTNESS);
        for c in &colors {
            assert!(c.is_finite());
            assert!(close(*c, expected));
        }
    }
}
