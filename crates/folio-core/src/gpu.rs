//! Plain-old-data layouts shared by the wgpu renderers.

use glam::{Mat4, Vec3};

/// Two triangles covering a unit quad centered on the origin.
pub const QUAD_VERTICES: [f32; 12] = [
    -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
];

/// One billboard per particle. Mirrors `InstanceIn` in `shaders/particles.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub pos: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

/// Mirrors `SceneUniforms` in `shaders/particles.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
}

impl SceneUniforms {
    pub fn new(view: Mat4, proj: Mat4, model: Mat4) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
        }
    }
}

/// Rebuild `out` from the current frame. `out` keeps its allocation between frames.
pub fn pack_instances(
    positions: &[Vec3],
    colors: &[Vec3],
    size: f32,
    opacity: f32,
    out: &mut Vec<ParticleInstance>,
) {
    out.clear();
    out.extend(positions.iter().zip(colors).map(|(p, c)| ParticleInstance {
        pos: p.to_array(),
        size,
        color: c.extend(opacity).to_array(),
    }));
}
