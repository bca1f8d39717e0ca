use std::str::FromStr;

use crate::constants::*;
use crate::error::{VisualError, VisualResult};

/// Runtime knobs for the visualization. Frontends start from `Default`,
/// optionally apply the small-screen profile, then layer overrides from
/// their environment (process env on native, URL query on web).
#[derive(Clone, Debug, PartialEq)]
pub struct FolioConfig {
    /// Number of particles. Default: 15000.
    pub particle_count: usize,
    /// Seconds per morph. Default: 2.0.
    pub morph_duration_secs: f32,
    /// Relative radial swing while idle. Default: 0.03.
    pub breathing_amplitude: f32,
    /// Breaths per second. Default: 0.25.
    pub breathing_frequency_hz: f32,
    /// Advance to the next section on a timer. Default: on.
    pub auto_advance: bool,
    /// Seconds between automatic advances. Default: 15.
    pub auto_advance_secs: f32,
    /// How fast the shape turns toward the pointer/tilt target.
    pub rotation_speed: f32,
    /// Seed for the particle random factors.
    pub seed: u64,
    /// World-space sprite size.
    pub point_size: f32,
    pub camera_z: f32,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            morph_duration_secs: MORPH_DURATION_SEC,
            breathing_amplitude: BREATHING_AMPLITUDE,
            breathing_frequency_hz: BREATHING_FREQUENCY_HZ,
            auto_advance: true,
            auto_advance_secs: AUTO_ADVANCE_INTERVAL_SEC,
            rotation_speed: ROTATION_SPEED,
            seed: DEFAULT_SEED,
            point_size: POINT_SIZE,
            camera_z: CAMERA_Z,
        }
    }
}

/// Override keys understood by [`FolioConfig::with_overrides`].
pub const CONFIG_KEYS: [&str; 8] = [
    "particles",
    "morph_secs",
    "breath_amplitude",
    "breath_hz",
    "auto",
    "auto_secs",
    "rotation_speed",
    "seed",
];

impl FolioConfig {
    /// Fewer, larger particles and a slightly farther camera for narrow screens.
    pub fn mobile_profile(mut self) -> Self {
        self.particle_count = self.particle_count.min(MOBILE_PARTICLE_COUNT);
        self.point_size = MOBILE_POINT_SIZE;
        self.camera_z = MOBILE_CAMERA_Z;
        self
    }

    /// Apply overrides from `lookup`, keyed by [`CONFIG_KEYS`].
    pub fn with_overrides<F>(mut self, lookup: F) -> VisualResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        for key in CONFIG_KEYS {
            let Some(raw) = lookup(key) else { continue };
            let raw = raw.trim();
            match key {
                "particles" => self.particle_count = parse(key, raw)?,
                "morph_secs" => self.morph_duration_secs = parse(key, raw)?,
                "breath_amplitude" => self.breathing_amplitude = parse(key, raw)?,
                "breath_hz" => self.breathing_frequency_hz = parse(key, raw)?,
                "auto" => self.auto_advance = parse_flag(key, raw)?,
                "auto_secs" => self.auto_advance_secs = parse(key, raw)?,
                "rotation_speed" => self.rotation_speed = parse(key, raw)?,
                "seed" => self.seed = parse(key, raw)?,
                _ => {}
            }
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> VisualResult<()> {
        if self.particle_count == 0 {
            return Err(VisualError::Configuration(
                "particle_count must be positive".into(),
            ));
        }
        positive("morph_duration_secs", self.morph_duration_secs)?;
        positive("auto_advance_secs", self.auto_advance_secs)?;
        positive("point_size", self.point_size)?;
        positive("camera_z", self.camera_z)?;
        if !(0.0..1.0).contains(&self.breathing_amplitude) {
            return Err(VisualError::Configuration(format!(
                "breathing_amplitude must be in [0, 1), got {}",
                self.breathing_amplitude
            )));
        }
        non_negative("breathing_frequency_hz", self.breathing_frequency_hz)?;
        non_negative("rotation_speed", self.rotation_speed)?;
        Ok(())
    }
}

fn positive(name: &str, v: f32) -> VisualResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(VisualError::Configuration(format!(
            "{name} must be positive, got {v}"
        )))
    }
}

fn non_negative(name: &str, v: f32) -> VisualResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(VisualError::Configuration(format!(
            "{name} must be non-negative, got {v}"
        )))
    }
}

fn parse<T: FromStr>(key: &str, raw: &str) -> VisualResult<T> {
    raw.parse()
        .map_err(|_| VisualError::Configuration(format!("cannot parse {key}={raw:?}")))
}

fn parse_flag(key: &str, raw: &str) -> VisualResult<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(VisualError::Configuration(format!(
            "cannot parse {key}={raw:?} as a flag"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(FolioConfig::default().validate().is_ok());
    }

    #[test]
    fn mobile_profile_caps_particles() {
        let cfg = FolioConfig::default().mobile_profile();
        assert_eq!(cfg.particle_count, MOBILE_PARTICLE_COUNT);
        assert_eq!(cfg.camera_z, MOBILE_CAMERA_Z);
    }
}
