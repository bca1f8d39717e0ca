use glam::Vec3;

// Shared tuning constants used by both web and native frontends.

// Particle system
pub const PARTICLE_COUNT: usize = 15_000;
pub const MOBILE_PARTICLE_COUNT: usize = 10_000; // cap applied by the small-screen profile
pub const INITIAL_SCATTER: f32 = 5.0; // edge of the start-up cube, centered on the origin
pub const DEFAULT_SEED: u64 = 42;

// Timing
pub const MORPH_DURATION_SEC: f32 = 2.0;
pub const AUTO_ADVANCE_INTERVAL_SEC: f32 = 15.0;
pub const ROTATION_SPEED: f32 = 2.0; // fraction of remaining rotation closed per second
pub const MAX_FRAME_DT_SEC: f32 = 0.25; // frontends cap dt so a stalled tab does not skip a whole morph

// Breathing
pub const BREATHING_AMPLITUDE: f32 = 0.03;
pub const BREATHING_FREQUENCY_HZ: f32 = 0.25;

// Color mapping (HSL). Hue runs from HUE_MAX at min X down to HUE_MAX - HUE_SPAN at max X.
pub const HUE_MAX: f32 = 0.75;
pub const HUE_SPAN: f32 = 0.3;
pub const SATURATION: f32 = 0.8;
pub const LIGHTNESS: f32 = 0.5;
pub const MIN_X_RANGE: f32 = 0.001;

// Education: two golden-angle spheres
pub const EDUCATION_RADIUS: f32 = 1.5;
pub const EDUCATION_SPLIT: f32 = 0.6; // share of particles in the first sphere
pub const EDUCATION_SECOND_SCALE: f32 = 0.7;
pub const EDUCATION_SECOND_Z_OFFSET: f32 = -1.5;
pub const EDUCATION_PERTURBATION: f32 = 0.1;

// Skills: three phase-offset spirals
pub const SKILLS_CATEGORIES: usize = 3;
pub const SKILLS_TURNS: f32 = 6.0 * std::f32::consts::PI;
pub const SKILLS_BASE_RADIUS: f32 = 0.8;
pub const SKILLS_RADIUS_GROWTH: f32 = 0.05;
pub const SKILLS_RISE: f32 = 0.1;
pub const SKILLS_CATEGORY_DROP: f32 = 0.5;
pub const SKILLS_NOISE: f32 = 0.1;

// Projects: four anchored clusters plus connector arcs
pub const PROJECT_ANCHORS: [[f32; 3]; 4] = [
    [-1.2, 0.8, 0.5],
    [1.2, 0.8, 0.5],
    [-1.2, -0.8, 0.5],
    [1.2, -0.8, 0.5],
];
pub const PROJECT_CONNECTOR_THRESHOLD: f32 = 0.85;
pub const PROJECT_CLUSTER_RADIUS: f32 = 0.4;
pub const PROJECT_CLUSTER_SQUASH: f32 = 0.6;
pub const PROJECT_ARC_LIFT: f32 = 0.5;
pub const PROJECT_CONNECTOR_NOISE: f32 = 0.2;

// Experience: three job clusters on a wavy timeline
pub const EXPERIENCE_TIMELINE_THRESHOLD: f32 = 0.9;
pub const EXPERIENCE_TIMELINE_LENGTH: f32 = 3.0;
pub const EXPERIENCE_TIMELINE_Z: f32 = -0.5;
pub const EXPERIENCE_WAVE_FREQ: f32 = 4.0;
pub const EXPERIENCE_WAVE_AMP: f32 = 0.05;
pub const EXPERIENCE_JOB_SPACING: f32 = 1.5;
pub const EXPERIENCE_JOB_BASE_SIZE: f32 = 0.4;
pub const EXPERIENCE_JOB_SIZE_STEP: f32 = 0.15;
pub const EXPERIENCE_HEIGHT_FACTOR: f32 = 1.8;
pub const EXPERIENCE_SQUASH: f32 = 0.6;
pub const EXPERIENCE_X_STRETCH: f32 = 1.2;
pub const EXPERIENCE_Z_FLATTEN: f32 = 0.8;

// Breathing centers, in Shape order
pub const SHAPE_CENTERS: [[f32; 3]; 4] = [
    [0.0, -0.75, 0.0], // Education: between the two spheres
    [0.0, -0.5, 0.0],  // Skills: spiral axis
    [0.0, 0.0, 0.5],   // Projects: anchor plane
    [0.0, 0.0, 0.0],   // Experience: timeline
];

// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_Z: f32 = 2.8;
pub const MOBILE_CAMERA_Z: f32 = 3.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Point sprites
pub const POINT_SIZE: f32 = 0.02;
pub const MOBILE_POINT_SIZE: f32 = 0.03;
pub const POINT_OPACITY: f32 = 0.8;

// Input
pub const MAX_POINTER_YAW: f32 = std::f32::consts::PI * 0.5;
pub const MAX_POINTER_PITCH: f32 = std::f32::consts::PI * 0.3;
pub const MAX_TILT_ANGLE: f32 = std::f32::consts::PI * 0.3;
pub const TILT_RANGE_DEG: f32 = 45.0;
pub const TILT_BETA_REST_DEG: f32 = 45.0; // phone held at a comfortable reading angle
pub const SHAKE_THRESHOLD: f32 = 15.0;
pub const SHAKE_MIN_INTERVAL_MS: f64 = 1000.0;
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;
pub const MOBILE_MAX_WIDTH_PX: f32 = 768.0;

#[inline]
pub fn shape_center_vec3(index: usize) -> Vec3 {
    Vec3::from(SHAPE_CENTERS[index % SHAPE_CENTERS.len()])
}

#[inline]
pub fn project_anchor(index: usize) -> Vec3 {
    Vec3::from(PROJECT_ANCHORS[index.min(PROJECT_ANCHORS.len() - 1)])
}
