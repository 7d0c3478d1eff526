use dots_core::{SphereConfig, COMPACT_VIEWPORT_MAX_CSS_WIDTH};
use glam::Vec2;
use web_sys as web;

/// Keyboard shortcuts understood by the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleMorph,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "m" | "M" => Some(KeyAction::ToggleMorph),
        _ => None,
    }
}

/// Narrow screens get the lighter field.
#[inline]
pub fn config_for_css_width(css_width: f64) -> SphereConfig {
    if css_width < COMPACT_VIEWPORT_MAX_CSS_WIDTH {
        SphereConfig::compact()
    } else {
        SphereConfig::default()
    }
}

/// Maps a client-space point into canvas backing pixels.
///
/// `rect_origin`/`rect_size` are the canvas bounding rect in CSS pixels and
/// `backing` is the canvas width/height attribute.
#[inline]
pub fn client_to_canvas_px(client: Vec2, rect_origin: Vec2, rect_size: Vec2, backing: Vec2) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    (client - rect_origin) / rect_size * backing
}

/// Canvas backing pixels per CSS pixel (the effective devicePixelRatio).
#[inline]
pub fn backing_scale(rect_size: Vec2, backing: Vec2) -> f32 {
    if rect_size.x <= 0.0 || backing.x <= 0.0 {
        return 1.0;
    }
    backing.x / rect_size.x
}

/// Pointer position in backing pixels plus the scale back to CSS pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> (Vec2, f32) {
    let rect = canvas.get_bounding_client_rect();
    let rect_size = Vec2::new(rect.width() as f32, rect.height() as f32);
    let backing = Vec2::new(canvas.width() as f32, canvas.height() as f32);
    let px = client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        rect_size,
        backing,
    );
    (px, backing_scale(rect_size, backing))
}
