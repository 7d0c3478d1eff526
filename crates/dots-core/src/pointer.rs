use crate::camera::{Ray, RayCaster, Viewport};
use crate::constants::FALLBACK_RAY_DISTANCE;
use glam::{Vec2, Vec3};

// Positions in surface pixels; `scale` is surface pixels per logical pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorSample {
    pub current: Option<Vec2>,
    pub previous: Option<Vec2>,
    pub scale: f32,
}

impl Default for CursorSample {
    fn default() -> Self {
        Self {
            current: None,
            previous: None,
            scale: 1.0,
        }
    }
}

impl CursorSample {
    pub fn at(current: Vec2) -> Self {
        Self {
            current: Some(current),
            ..Self::default()
        }
    }

    pub fn moving(previous: Vec2, current: Vec2) -> Self {
        Self {
            current: Some(current),
            previous: Some(previous),
            ..Self::default()
        }
    }

    pub fn with_scale(self, scale: f32) -> Self {
        Self {
            scale: sanitize_scale(scale),
            ..self
        }
    }

    /// Logical pixels moved since the previous sample.
    pub fn speed(&self) -> f32 {
        match (self.current, self.previous) {
            (Some(c), Some(p)) => c.distance(p) / sanitize_scale(self.scale),
            _ => 0.0,
        }
    }
}

#[inline]
fn sanitize_scale(scale: f32) -> f32 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

// take() once per frame; what it consumed becomes the next previous sample.
#[derive(Clone, Copy, Debug)]
pub struct PointerLatch {
    latest: Option<Vec2>,
    consumed: Option<Vec2>,
    scale: f32,
}

impl Default for PointerLatch {
    fn default() -> Self {
        Self {
            latest: None,
            consumed: None,
            scale: 1.0,
        }
    }
}

impl PointerLatch {
    pub fn set(&mut self, px: Vec2) {
        self.latest = Some(px);
    }

    /// Surface pixels per logical pixel (devicePixelRatio, winit scale factor).
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = sanitize_scale(scale);
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn clear(&mut self) {
        self.latest = None;
    }

    pub fn latest(&self) -> Option<Vec2> {
        self.latest
    }

    pub fn take(&mut self) -> CursorSample {
        let sample = CursorSample {
            current: self.latest,
            previous: self.consumed,
            scale: self.scale,
        };
        self.consumed = self.latest;
        sample
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolverConfig {
    pub fallback_distance: f32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fallback_distance: FALLBACK_RAY_DISTANCE,
        }
    }
}

// Nearer root, even when behind the ray origin
pub fn intersect_sphere(ray: &Ray, radius: f32) -> Option<Vec3> {
    let a = ray.dir.dot(ray.dir);
    if a <= f32::EPSILON {
        return None;
    }
    let b = 2.0 * ray.origin.dot(ray.dir);
    let c = ray.origin.dot(ray.origin) - radius * radius;
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }
    let t = (-b - disc.sqrt()) / (2.0 * a);
    Some(ray.at(t))
}

#[derive(Clone, Copy, Debug)]
pub struct PointerResolver {
    radius: f32,
    config: ResolverConfig,
}

impl PointerResolver {
    pub fn new(radius: f32, config: ResolverConfig) -> Self {
        Self { radius, config }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    // On a miss: `radius` from the camera along the pointer direction.
    pub fn resolve<C: RayCaster + ?Sized>(&self, px: Vec2, viewport: Viewport, camera: &C) -> Vec3 {
        let ndc = viewport.to_ndc(px);
        let ray = camera.ray_from_ndc(ndc);
        intersect_sphere(&ray, self.radius).unwrap_or_else(|| self.fallback(&ray, camera.position()))
    }

    fn fallback(&self, ray: &Ray, camera_pos: Vec3) -> Vec3 {
        let unit = ray.dir.normalize_or_zero();
        let projected = ray.origin + unit * self.config.fallback_distance;
        let mut dir = (projected - camera_pos).normalize_or_zero();
        if dir == Vec3::ZERO {
            dir = unit;
        }
        camera_pos + dir * self.radius
    }
}
