use crate::camera::Camera;
use crate::constants::DOT_SIZE;
use glam::{Mat4, Quat};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    // x: sprite half-size, y: aspect, zw: unused
    pub params: [f32; 4],
}

impl PointUniforms {
    pub fn new(camera: &Camera, rotation: Quat) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            model: Mat4::from_quat(rotation).to_cols_array_2d(),
            params: [DOT_SIZE, camera.aspect, 0.0, 0.0],
        }
    }
}

// Two triangles, expanded per instance in the shader
pub const SPRITE_CORNERS: [f32; 12] = [
    -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0,
];

pub const BACKGROUND: [f64; 3] = [0.01, 0.01, 0.03];
