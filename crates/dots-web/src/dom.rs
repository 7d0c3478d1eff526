use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Keeps the canvas backing store in step with its CSS size.
pub fn add_resize_listener(window: &web::Window, canvas: &web::HtmlCanvasElement) -> anyhow::Result<()> {
    let canvas = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(move || sync_canvas_backing_size(&canvas)) as Box<dyn FnMut()>
    );
    window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    closure.forget();
    Ok(())
}

#[inline]
pub fn checkbox(document: &web::Document, element_id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

#[inline]
pub fn css_width(window: &web::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(UNKNOWN_CSS_WIDTH)
}

// Treated as a desktop-sized viewport when the width is unavailable.
const UNKNOWN_CSS_WIDTH: f64 = 1024.0;
