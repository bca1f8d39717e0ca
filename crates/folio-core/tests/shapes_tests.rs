// Host-side tests for the procedural shape generators.

use std::f32::consts::{PI, TAU};

use folio_core::*;
use glam::Vec3;

fn factors(n: usize, seed: u64) -> Vec<f32> {
    ParticleSet::new(n, seed).unwrap().random_factors().to_vec()
}

fn close(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().max_element() <= eps
}

#[test]
fn every_shape_yields_three_floats_per_particle() {
    for n in [1usize, 2, 3, 7, 64, 1000] {
        let r = factors(n, 5);
        for shape in Shape::ALL {
            let points = generate(shape, n, &r).unwrap();
            assert_eq!(as_flat(&points).len(), 3 * n, "{shape} with n={n}");
            assert!(points.iter().all(|p| p.is_finite()), "{shape} with n={n}");
        }
    }
}

#[test]
fn generation_is_deterministic() {
    let r = factors(2048, 99);
    for shape in Shape::ALL {
        let a = generate(shape, r.len(), &r).unwrap();
        let b = generate(shape, r.len(), &r).unwrap();
        assert_eq!(a, b, "{shape} differs between calls");
    }
}

#[test]
fn invalid_inputs_are_configuration_errors() {
    let err = generate(Shape::Skills, 0, &[]).unwrap_err();
    assert!(err.is_configuration());
    let err = generate(Shape::Skills, 4, &[0.1, 0.2]).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn generate_all_fills_table() {
    let r = factors(300, 1);
    let table = generate_all(r.len(), &r).unwrap();
    for shape in Shape::ALL {
        assert_eq!(table.target(shape, 300).unwrap().len(), 300);
    }
}

#[test]
fn education_points_sit_on_two_spheres() {
    let n = 1000;
    let r = factors(n, 3);
    let points = generate(Shape::Education, n, &r).unwrap();
    let split = (n as f32 * EDUCATION_SPLIT) as usize;
    for p in &points[..split] {
        let radius = p.length();
        assert!((1.45..=1.55).contains(&radius), "radius {radius}");
    }
    for p in &points[split..] {
        // Undo the second sphere's offset; x/y are squashed so the radius shrinks.
        let q = *p - Vec3::new(0.0, 0.0, EDUCATION_SECOND_Z_OFFSET);
        assert!(q.length() <= 1.55);
    }
}

#[test]
fn skills_follow_category_spiral() {
    let r = [0.1, 0.5, 0.9, 0.2, 0.6, 0.95];
    let points = generate(Shape::Skills, r.len(), &r).unwrap();
    // i = 4: third = 2, t = (4 % 2) / 2 * 6pi = 0, category 1.
    let p = points[4];
    let noise = (0.6 - 0.5) * SKILLS_NOISE;
    let angle = TAU / 3.0;
    let expected = Vec3::new(
        SKILLS_BASE_RADIUS * angle.cos() + noise,
        -SKILLS_CATEGORY_DROP,
        SKILLS_BASE_RADIUS * angle.sin() + noise,
    );
    assert!(close(p, expected, 1e-6), "{p} vs {expected}");
}

#[test]
fn project_connector_uses_documented_salts() {
    let r = [0.1, 0.95, 0.3, 0.6, 0.2, 0.45, 0.8];
    let p = projects_point(1, &r);
    // salt 19 -> r[5] = 0.45 -> arc from anchor 1 to anchor 2
    // salt 13 -> r[6] = 0.8 (arc t), salt 17 -> r[3] = 0.6 (noise)
    let t = 0.8;
    let mut expected = project_anchor(1).lerp(project_anchor(2), t);
    expected.y += (t * PI).sin() * PROJECT_ARC_LIFT;
    let noise = (0.6 - 0.5) * PROJECT_CONNECTOR_NOISE;
    expected.x += noise;
    expected.z += noise;
    assert!(close(p, expected, 1e-6), "{p} vs {expected}");
}

#[test]
fn project_clusters_stay_near_their_anchor() {
    let n = 4000;
    let r = factors(n, 11);
    let points = generate(Shape::Projects, n, &r).unwrap();
    let radius = PROJECT_CLUSTER_RADIUS * PROJECT_CLUSTER_SQUASH;
    let mut clustered = 0;
    for (p, f) in points.iter().zip(&r) {
        if *f <= PROJECT_CONNECTOR_THRESHOLD {
            let anchor = project_anchor((*f * 4.0) as usize);
            assert!((p.distance(anchor) - radius).abs() < 1e-4);
            clustered += 1;
        }
    }
    // Roughly 85% of particles cluster.
    assert!(clustered > n * 3 / 4 && clustered < n * 19 / 20);
}

#[test]
fn experience_timeline_uses_documented_salt() {
    let r = [0.1, 0.95, 0.3, 0.6, 0.2, 0.45, 0.8];
    let p = experience_point(1, &r);
    // salt 23 -> r[2] = 0.3
    let x = (0.3 - 0.5) * EXPERIENCE_TIMELINE_LENGTH;
    let expected = Vec3::new(
        x,
        (x * EXPERIENCE_WAVE_FREQ).sin() * EXPERIENCE_WAVE_AMP,
        EXPERIENCE_TIMELINE_Z,
    );
    assert!(close(p, expected, 1e-6), "{p} vs {expected}");
}

#[test]
fn experience_job_clusters_shrink_with_recency() {
    let n = 6000;
    let r = factors(n, 21);
    let points = generate(Shape::Experience, n, &r).unwrap();
    let mut extent = [0.0f32; 3];
    for (p, f) in points.iter().zip(&r) {
        if *f > EXPERIENCE_TIMELINE_THRESHOLD {
            assert_eq!(p.z, EXPERIENCE_TIMELINE_Z);
            continue;
        }
        let job = ((*f * 3.0) as usize).min(2);
        extent[job] = extent[job].max(p.y.abs());
    }
    assert!(extent[0] > extent[1] && extent[1] > extent[2], "{extent:?}");
}

#[test]
fn generators_never_index_out_of_bounds_for_tiny_sets() {
    let r = [0.99, 0.95];
    for shape in Shape::ALL {
        let points = generate(shape, 2, &r).unwrap();
        assert_eq!(points.len(), 2);
    }
}
