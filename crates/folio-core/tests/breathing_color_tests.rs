// Host-side tests for idle breathing and the X-to-hue color mapping.

use folio_core::*;
use glam::Vec3;

#[test]
fn zero_amplitude_is_identity_at_any_time() {
    let mut particles = ParticleSet::with_random_factors(vec![0.5; 8]).unwrap();
    let base = particles.base_positions().to_vec();
    let breathing = Breathing::new(0.0, 0.25);
    for now in [0.0, 0.3, 1.0, 17.25, 1e6] {
        breathing.apply(&mut particles, Some(Shape::Skills), now);
        assert_eq!(particles.positions(), &base[..]);
    }
}

#[test]
fn breathing_scales_about_the_shape_center() {
    let mut particles = ParticleSet::with_random_factors(vec![0.5; 3]).unwrap();
    let breathing = Breathing::new(0.5, 0.25);
    // sin(2pi * 0.25 * 1.0) == 1, so the factor is 1.5.
    assert!((breathing.factor(1.0) - 1.5).abs() < 1e-6);
    breathing.apply(&mut particles, Some(Shape::Education), 1.0);
    let center = shape_center_vec3(Shape::Education.index());
    let expected = center + (Vec3::ZERO - center) * breathing.factor(1.0);
    for p in particles.positions() {
        assert!((*p - expected).abs().max_element() < 1e-6);
    }
}

#[test]
fn reset_restarts_at_rest() {
    let mut breathing = Breathing::new(0.03, 0.25);
    breathing.reset(12.5);
    assert_eq!(breathing.factor(12.5), 1.0);
}

#[test]
fn unknown_shape_breathes_about_bounding_box_center() {
    let points = [Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 4.0, 2.0)];
    assert_eq!(shape_center(None, &points), Vec3::new(1.0, 2.0, 2.0));
    assert_eq!(shape_center(None, &[]), Vec3::ZERO);
    assert_eq!(
        shape_center(Some(Shape::Projects), &points),
        Vec3::new(0.0, 0.0, 0.5)
    );
}

#[test]
fn hue_runs_from_purple_to_green_along_x() {
    let positions = [
        Vec3::new(-2.0, 0.0, 0.0),
        Vec3::new(0.0, 5.0, 0.0),
        Vec3::new(2.0, -1.0, 3.0),
    ];
    let mut colors = [Vec3::ZERO; 3];
    map_colors(&positions, &mut colors);
    let expect = |hue: f32| hsl_to_rgb(hue, SATURATION, LIGHTNESS);
    assert!((colors[0] - expect(0.75)).abs().max_element() < 1e-5);
    assert!((colors[1] - expect(0.6)).abs().max_element() < 1e-5);
    assert!((colors[2] - expect(0.45)).abs().max_element() < 1e-5);
}

#[test]
fn hue_for_x_clamps_and_floors_range() {
    assert_eq!(hue_for_x(-10.0, 0.0, 1.0), HUE_MAX);
    assert!((hue_for_x(10.0, 0.0, 1.0) - (HUE_MAX - HUE_SPAN)).abs() < 1e-6);
    assert!(hue_for_x(0.0, 0.0, 0.0).is_finite());
}

#[test]
fn colors_ignore_uniform_breathing_scale() {
    let r: Vec<f32> = (0..200).map(|i| (i as f32 * 0.618_034).fract()).collect();
    let rest = generate(Shape::Skills, r.len(), &r).unwrap();
    let center = shape_center_vec3(Shape::Skills.index());
    let scaled: Vec<Vec3> = rest.iter().map(|p| center + (*p - center) * 1.03).collect();
    let mut a = vec![Vec3::ZERO; rest.len()];
    let mut b = vec![Vec3::ZERO; rest.len()];
    map_colors(&rest, &mut a);
    map_colors(&scaled, &mut b);
    for (x, y) in a.iter().zip(&b) {
        assert!((*x - *y).abs().max_element() < 1e-4);
    }
}
