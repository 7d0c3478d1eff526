#![cfg(target_arch = "wasm32")]
use dots_core::{PointerLatch, SphereSimulation};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dots-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Canvas internal pixel size tracks CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    dom::add_resize_listener(&window, &canvas)?;

    let css_width = dom::css_width(&window);
    let config = input::config_for_css_width(css_width);
    log::info!("[init] css width {} -> {} dots", css_width, config.dot_count);

    let sim = SphereSimulation::new(config)?;
    let buffers = sim.geometry();
    let sim = Rc::new(RefCell::new(sim));
    let latch = Rc::new(RefCell::new(PointerLatch::default()));

    events::wire_pointer(&canvas, &latch)?;
    events::wire_morph_toggle(&document, &sim)?;
    events::wire_keys(&window, &sim)?;

    // Leak a canvas clone to satisfy the 'static lifetime of the surface
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    let gpu = render::GpuState::new(leaked_canvas, config.dot_count).await?;

    frame::start_loop(frame::FrameContext {
        sim,
        latch,
        buffers,
        canvas,
        gpu,
        started: Instant::now(),
    });
    Ok(())
}
