use crate::render;
use dots_core::{
    Camera, FrameInput, PointUniforms, PointerLatch, RenderBuffers, SphereSimulation, Viewport,
    AUTO_ROTATE_RAD_PER_SEC,
};
use glam::Quat;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub sim: Rc<RefCell<SphereSimulation>>,
    pub latch: Rc<RefCell<PointerLatch>>,
    pub buffers: RenderBuffers,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'a>,

    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed();
        let w = self.canvas.width();
        let h = self.canvas.height();
        // Keep WebGPU surface sized to canvas backing size
        self.gpu.resize_if_needed(w, h);

        let viewport = Viewport::new(w.max(1) as f32, h.max(1) as f32);
        let camera = Camera::looking_at_origin(viewport.aspect());
        let rotation = Quat::from_rotation_y(elapsed.as_secs_f32() * AUTO_ROTATE_RAD_PER_SEC);
        let cursor = self.latch.borrow_mut().take();

        self.sim.borrow_mut().step(
            &FrameInput {
                time_ms: elapsed.as_secs_f64() * 1000.0,
                cursor,
                rotation,
                camera: &camera,
                viewport,
            },
            &mut self.buffers,
        );
        if self.buffers.take_dirty() {
            self.gpu.upload(&self.buffers);
        }
        if let Err(e) = self.gpu.render(&PointUniforms::new(&camera, rotation)) {
            log::error!("render error: {:?}", e);
        }
    }
}

/// Drives `frame` from requestAnimationFrame until the page goes away.
pub fn start_loop(ctx: FrameContext<'static>) {
    let ctx = Rc::new(RefCell::new(ctx));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
