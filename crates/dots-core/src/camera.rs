//! Camera description and screen-to-ray helpers.
//!
//! These types avoid referencing platform-specific APIs and are shared by the
//! web and native frontends, which build their view-projection uniforms from
//! the same `Camera` the pointer resolver unprojects through.

use crate::constants::CAMERA_Z;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// World-space ray. `dir` need not be normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Anything that can turn a normalized device coordinate into a world ray.
pub trait RayCaster {
    fn position(&self) -> Vec3;
    fn ray_from_ndc(&self, ndc: Vec2) -> Ray;
}

/// Pixel dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Map a pixel coordinate (origin top-left, y down) to NDC (y up).
    #[inline]
    pub fn to_ndc(&self, px: Vec2) -> Vec2 {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        Vec2::new((px.x / w) * 2.0 - 1.0, -(px.y / h) * 2.0 + 1.0)
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Fixed look-at used by both frontends: on +Z, facing the sphere centre.
    pub fn looking_at_origin(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: std::f32::consts::FRAC_PI_4,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl RayCaster for Camera {
    fn position(&self) -> Vec3 {
        self.eye
    }

    fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            dir: (far - self.eye).normalize(),
        }
    }
}
