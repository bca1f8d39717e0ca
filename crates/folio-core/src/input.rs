//! Platform-neutral input helpers. Frontends translate raw DOM/winit events
//! into these calls and forward the results to `VisualizationState`.

use glam::{Vec2, Vec3};

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Navigate(Navigation),
    ToggleAutoAdvance,
}

/// Map a DOM-style key name (`KeyboardEvent.key`) to an action.
#[inline]
pub fn nav_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowRight" | "ArrowDown" | "j" | "l" => Some(KeyAction::Navigate(Navigation::Next)),
        "ArrowLeft" | "ArrowUp" | "k" | "h" => Some(KeyAction::Navigate(Navigation::Previous)),
        " " => Some(KeyAction::ToggleAutoAdvance),
        _ => None,
    }
}

/// Client pixel coordinates to normalized device coordinates (y up).
#[inline]
pub fn client_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new((x / w) * 2.0 - 1.0, -(y / h) * 2.0 + 1.0)
}

/// Target rotation `(pitch, yaw)` for a pointer at `ndc`.
/// Horizontal motion turns the shape about Y, vertical about X (inverted).
#[inline]
pub fn pointer_to_rotation(ndc: Vec2) -> Vec2 {
    Vec2::new(-ndc.y * MAX_POINTER_PITCH, ndc.x * MAX_POINTER_YAW)
}

/// Target rotation `(pitch, yaw)` from device orientation angles in degrees.
/// `beta` is front-back tilt, `gamma` left-right tilt.
pub fn orientation_to_rotation(beta: f32, gamma: f32) -> Vec2 {
    let tilt = |deg: f32| -(deg.clamp(-TILT_RANGE_DEG, TILT_RANGE_DEG) / TILT_RANGE_DEG) * MAX_TILT_ANGLE;
    Vec2::new(tilt(beta - TILT_BETA_REST_DEG), tilt(gamma))
}

#[inline]
pub fn is_compact_width(width_px: f32) -> bool {
    width_px <= MOBILE_MAX_WIDTH_PX
}

/// Detects shakes from successive accelerometer samples (gravity included).
#[derive(Clone, Debug)]
pub struct ShakeDetector {
    pub threshold: f32,
    pub min_interval_ms: f64,
    last_accel: Option<Vec3>,
    last_shake_ms: Option<f64>,
}

impl Default for ShakeDetector {
    fn default() -> Self {
        Self::new(SHAKE_THRESHOLD, SHAKE_MIN_INTERVAL_MS)
    }
}

impl ShakeDetector {
    pub fn new(threshold: f32, min_interval_ms: f64) -> Self {
        Self {
            threshold,
            min_interval_ms,
            last_accel: None,
            last_shake_ms: None,
        }
    }

    /// Feed one sample; returns true when it completes a shake.
    pub fn update(&mut self, accel: Vec3, now_ms: f64) -> bool {
        let Some(prev) = self.last_accel.replace(accel) else {
            return false;
        };
        let change = (accel - prev).abs();
        if change.x + change.y + change.z <= self.threshold {
            return false;
        }
        match self.last_shake_ms {
            Some(t) if now_ms - t <= self.min_interval_ms => false,
            _ => {
                self.last_shake_ms = Some(now_ms);
                true
            }
        }
    }
}

/// Horizontal swipe recognizer for touch navigation.
#[derive(Clone, Debug)]
pub struct SwipeTracker {
    pub threshold_px: f32,
    start: Option<Vec2>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self {
            threshold_px: SWIPE_THRESHOLD_PX,
            start: None,
        }
    }
}

impl SwipeTracker {
    pub fn begin(&mut self, at: Vec2) {
        self.start = Some(at);
    }

    /// Returns a navigation once the gesture is a clear horizontal swipe.
    /// Swiping left (finger moving toward -x) goes to the next section.
    pub fn moved(&mut self, at: Vec2) -> Option<Navigation> {
        let start = self.start?;
        let d = start - at;
        if d.x.abs() > d.y.abs() && d.x.abs() > self.threshold_px {
            self.start = None;
            return Some(if d.x > 0.0 {
                Navigation::Next
            } else {
                Navigation::Previous
            });
        }
        None
    }

    pub fn end(&mut self) {
        self.start = None;
    }

    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
