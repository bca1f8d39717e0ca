//! Parameters for the animated lava-lamp backdrop drawn behind the particles.

use glam::Vec3;

/// Split a `0xRRGGBB` literal into linear-ish `[0, 1]` channels.
#[inline]
pub fn hex_rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

pub const BACKGROUND_BASE: u32 = 0x05_05_10; // near-black
pub const BACKGROUND_TEAL: u32 = 0x00_33_33;
pub const BACKGROUND_PURPLE: u32 = 0x33_00_33;
pub const BACKGROUND_SPEED: f32 = 0.5;
pub const BLOB_SCALE: f32 = 1.5;
pub const MOBILE_BLOB_SCALE: f32 = 1.2;
pub const GLITCH_INTENSITY: f32 = 0.03;
pub const NOISE_SCALE: f32 = 2.0;
pub const NOISE_INTENSITY: f32 = 0.2;

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundParams {
    pub base: Vec3,
    pub blob_a: Vec3,
    pub blob_b: Vec3,
    /// Multiplier applied to wall time before it reaches the shader.
    pub speed: f32,
    pub blob_scale: f32,
    pub noise_scale: f32,
    pub noise_intensity: f32,
    pub glitch: f32,
}

impl Default for BackgroundParams {
    fn default() -> Self {
        Self {
            base: hex_rgb(BACKGROUND_BASE),
            blob_a: hex_rgb(BACKGROUND_TEAL),
            blob_b: hex_rgb(BACKGROUND_PURPLE),
            speed: BACKGROUND_SPEED,
            blob_scale: BLOB_SCALE,
            noise_scale: NOISE_SCALE,
            noise_intensity: NOISE_INTENSITY,
            glitch: GLITCH_INTENSITY,
        }
    }
}

impl BackgroundParams {
    /// Smaller blobs for phone-sized screens.
    pub fn compact(mut self) -> Self {
        self.blob_scale = MOBILE_BLOB_SCALE;
        self
    }

    /// Pack for the uniform buffer at `elapsed_secs` of wall time.
    pub fn uniforms(&self, width: u32, height: u32, elapsed_secs: f32) -> BackgroundUniforms {
        BackgroundUniforms {
            resolution: [width.max(1) as f32, height.max(1) as f32],
            time: elapsed_secs * self.speed,
            blob_scale: self.blob_scale,
            color_base: self.base.extend(1.0).to_array(),
            color_a: self.blob_a.extend(1.0).to_array(),
            color_b: self.blob_b.extend(1.0).to_array(),
            noise_scale: self.noise_scale,
            noise_intensity: self.noise_intensity,
            glitch: self.glitch,
            _pad: 0.0,
        }
    }
}

/// Mirrors `BgUniforms` in `shaders/background.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BackgroundUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub blob_scale: f32,
    pub color_base: [f32; 4],
    pub color_a: [f32; 4],
    pub color_b: [f32; 4],
    pub noise_scale: f32,
    pub noise_intensity: f32,
    pub glitch: f32,
    pub _pad: f32,
}
