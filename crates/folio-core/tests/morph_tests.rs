// Host-side tests for the morph engine and its easing curve.

use folio_core::*;
use glam::Vec3;

fn four_at_origin() -> ParticleSet {
    ParticleSet::with_random_factors(vec![0.1, 0.2, 0.3, 0.4]).unwrap()
}

fn table_with(shape: Shape, points: Vec<Vec3>) -> ShapeTable {
    let mut table = ShapeTable::new();
    table.set(shape, points);
    table
}

#[test]
fn easing_is_monotonic_with_fixed_points() {
    assert_eq!(ease_in_out_quad(0.0), 0.0);
    assert_eq!(ease_in_out_quad(0.5), 0.5);
    assert_eq!(ease_in_out_quad(1.0), 1.0);
    let mut prev = 0.0;
    for step in 0..=1000 {
        let e = ease_in_out_quad(step as f32 / 1000.0);
        assert!(e >= prev, "eased value dropped at step {step}");
        assert!((0.0..=1.0).contains(&e));
        prev = e;
    }
}

#[test]
fn four_particle_scenario_follows_eased_curve() {
    let mut particles = four_at_origin();
    let table = table_with(Shape::Skills, vec![Vec3::ONE; 4]);
    let mut engine = MorphEngine::new(1.0);
    assert!(engine.begin(&mut particles, Shape::Education, Shape::Skills));

    let expected = [0.125, 0.5, 0.875, 1.0];
    for (i, want) in expected.iter().enumerate() {
        let tick = engine.tick(0.25, &mut particles, &table).unwrap();
        assert!((tick.progress - want).abs() < 1e-6, "tick {i}: {}", tick.progress);
        assert_eq!(tick.done, i == 3);
        for p in particles.positions() {
            assert!((*p - Vec3::splat(*want)).abs().max_element() < 1e-6);
        }
    }
    assert_eq!(particles.positions(), &[Vec3::ONE; 4]);
    assert_eq!(particles.base_positions(), &[Vec3::ONE; 4]);
    assert_eq!(engine.phase(), MorphPhase::Idle);
}

#[test]
fn zero_elapsed_stays_at_start() {
    let mut particles = four_at_origin();
    particles.positions_mut()[2] = Vec3::new(0.3, -0.2, 0.9);
    let start = particles.positions().to_vec();
    let table = table_with(Shape::Projects, vec![Vec3::splat(5.0); 4]);
    let mut engine = MorphEngine::new(2.0);
    engine.begin(&mut particles, Shape::Education, Shape::Projects);
    let tick = engine.tick(0.0, &mut particles, &table).unwrap();
    assert_eq!(tick.progress, 0.0);
    assert!(!tick.done);
    assert_eq!(particles.positions(), &start[..]);
}

#[test]
fn overshoot_snaps_bit_exact_to_target() {
    let r = [0.11, 0.52, 0.93, 0.34, 0.75];
    let target = generate(Shape::Experience, r.len(), &r).unwrap();
    let mut particles = ParticleSet::with_random_factors(r.to_vec()).unwrap();
    let table = table_with(Shape::Experience, target.clone());
    let mut engine = MorphEngine::new(0.3);
    engine.begin(&mut particles, Shape::Education, Shape::Experience);
    engine.tick(0.1, &mut particles, &table).unwrap();
    let tick = engine.tick(5.0, &mut particles, &table).unwrap();
    assert!(tick.done);
    assert_eq!(tick.progress, 1.0);
    assert_eq!(particles.positions(), &target[..]);
}

#[test]
fn begin_while_morphing_is_rejected() {
    let mut particles = four_at_origin();
    let table = table_with(Shape::Skills, vec![Vec3::ONE; 4]);
    let mut engine = MorphEngine::new(1.0);
    assert!(engine.begin(&mut particles, Shape::Education, Shape::Skills));
    engine.tick(0.25, &mut particles, &table).unwrap();

    let state_before = engine.state().clone();
    let start_before = particles.start_positions().to_vec();
    assert!(!engine.begin(&mut particles, Shape::Skills, Shape::Projects));
    assert_eq!(engine.state(), &state_before);
    assert_eq!(particles.start_positions(), &start_before[..]);
}

#[test]
fn size_mismatch_aborts_without_writing() {
    let mut particles = four_at_origin();
    particles.positions_mut()[0] = Vec3::new(0.5, 0.5, 0.5);
    let before = particles.positions().to_vec();
    let table = table_with(Shape::Skills, vec![Vec3::ONE; 3]);
    let mut engine = MorphEngine::new(1.0);
    engine.begin(&mut particles, Shape::Education, Shape::Skills);

    let err = engine.tick(0.5, &mut particles, &table).unwrap_err();
    assert!(err.is_data());
    assert_eq!(
        err,
        VisualError::SizeMismatch {
            shape: Shape::Skills,
            expected: 4,
            actual: 3
        }
    );
    assert_eq!(particles.positions(), &before[..]);
    assert!(!engine.is_active());
}

#[test]
fn missing_target_is_a_data_error() {
    let mut particles = four_at_origin();
    let mut engine = MorphEngine::new(1.0);
    engine.begin(&mut particles, Shape::Education, Shape::Projects);
    let err = engine
        .tick(0.5, &mut particles, &ShapeTable::new())
        .unwrap_err();
    assert_eq!(err, VisualError::MissingShape { shape: Shape::Projects });
    assert!(!engine.is_active());
}

#[test]
fn non_positive_duration_is_a_configuration_error() {
    for duration in [0.0, -1.0, f32::NAN] {
        let mut particles = four_at_origin();
        let before = particles.positions().to_vec();
        let table = table_with(Shape::Skills, vec![Vec3::ONE; 4]);
        let mut engine = MorphEngine::new(duration);
        engine.begin(&mut particles, Shape::Education, Shape::Skills);
        let err = engine.tick(0.1, &mut particles, &table).unwrap_err();
        assert!(err.is_configuration(), "duration {duration}");
        assert!(!engine.is_active());
        assert_eq!(particles.positions(), &before[..]);
    }
}

#[test]
fn negative_dt_does_not_rewind() {
    let mut particles = four_at_origin();
    let table = table_with(Shape::Skills, vec![Vec3::ONE; 4]);
    let mut engine = MorphEngine::new(1.0);
    engine.begin(&mut particles, Shape::Education, Shape::Skills);
    engine.tick(0.5, &mut particles, &table).unwrap();
    let tick = engine.tick(-0.4, &mut particles, &table).unwrap();
    assert_eq!(tick.progress, 0.5);
    assert_eq!(engine.state().elapsed, 0.5);
}
