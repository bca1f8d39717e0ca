// Host-side tests for configuration defaults, profiles and overrides.

use std::collections::HashMap;

use folio_core::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_documented_values() {
    let cfg = FolioConfig::default();
    assert_eq!(cfg.particle_count, 15_000);
    assert_eq!(cfg.morph_duration_secs, 2.0);
    assert_eq!(cfg.auto_advance_secs, 15.0);
    assert_eq!(cfg.rotation_speed, 2.0);
    assert!(cfg.auto_advance);
    assert!(cfg.breathing_amplitude > 0.0 && cfg.breathing_frequency_hz > 0.0);
}

#[test]
fn overrides_are_applied() {
    let cfg = FolioConfig::default()
        .with_overrides(lookup(&[
            ("particles", "2000"),
            ("morph_secs", " 0.75 "),
            ("auto", "off"),
            ("seed", "7"),
            ("breath_amplitude", "0"),
        ]))
        .unwrap();
    assert_eq!(cfg.particle_count, 2000);
    assert_eq!(cfg.morph_duration_secs, 0.75);
    assert!(!cfg.auto_advance);
    assert_eq!(cfg.seed, 7);
    assert_eq!(cfg.breathing_amplitude, 0.0);
}

#[test]
fn no_overrides_keeps_defaults() {
    let cfg = FolioConfig::default().with_overrides(|_| None).unwrap();
    assert_eq!(cfg, FolioConfig::default());
}

#[test]
fn bad_values_are_configuration_errors() {
    for (key, value) in [
        ("particles", "lots"),
        ("particles", "0"),
        ("morph_secs", "0"),
        ("morph_secs", "-2"),
        ("auto", "maybe"),
        ("breath_amplitude", "1.5"),
        ("auto_secs", "NaN"),
    ] {
        let err = FolioConfig::default()
            .with_overrides(lookup(&[(key, value)]))
            .unwrap_err();
        assert!(err.is_configuration(), "{key}={value}");
    }
}

#[test]
fn mobile_profile_keeps_smaller_counts() {
    let cfg = FolioConfig {
        particle_count: 5000,
        ..FolioConfig::default()
    }
    .mobile_profile();
    assert_eq!(cfg.particle_count, 5000);
    assert_eq!(cfg.point_size, MOBILE_POINT_SIZE);
    assert_eq!(cfg.camera_z, MOBILE_CAMERA_Z);
}
