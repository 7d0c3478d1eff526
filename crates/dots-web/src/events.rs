use crate::dom;
use crate::input::{self, KeyAction};
use dots_core::{PointerLatch, SphereSimulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const MORPH_TOGGLE_ID: &str = "morph-toggle";

/// Pointer movement over the canvas feeds the latch; leaving clears it.
pub fn wire_pointer(canvas: &web::HtmlCanvasElement, latch: &Rc<RefCell<PointerLatch>>) -> anyhow::Result<()> {
    {
        let latch = latch.clone();
        let canvas_move = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let (px, scale) = input::pointer_canvas_px(&ev, &canvas_move);
            let mut latch = latch.borrow_mut();
            latch.set_scale(scale);
            latch.set(px);
        }) as Box<dyn FnMut(_)>);
        canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        closure.forget();
    }
    {
        let latch = latch.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            latch.borrow_mut().clear();
        }) as Box<dyn FnMut(_)>);
        canvas
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        closure.forget();
    }
    Ok(())
}

/// The optional `#morph-toggle` checkbox mirrors the morph state.
pub fn wire_morph_toggle(document: &web::Document, sim: &Rc<RefCell<SphereSimulation>>) -> anyhow::Result<()> {
    let Some(el) = dom::checkbox(document, MORPH_TOGGLE_ID) else {
        log::info!("[ui] no #{} element; morph toggle is keyboard-only", MORPH_TOGGLE_ID);
        return Ok(());
    };
    el.set_checked(sim.borrow().morph().enabled());
    let sim = sim.clone();
    let el_change = el.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        sim.borrow_mut().set_morph_enabled(el_change.checked());
    }) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    closure.forget();
    Ok(())
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, sim: &Rc<RefCell<SphereSimulation>>) {
    if ev.repeat() {
        return;
    }
    match input::key_action(&ev.key()) {
        Some(KeyAction::ToggleMorph) => {
            let enabled = {
                let mut sim = sim.borrow_mut();
                sim.toggle_morph();
                sim.morph().enabled()
            };
            if let Some(el) = dom::window_document().and_then(|d| dom::checkbox(&d, MORPH_TOGGLE_ID)) {
                el.set_checked(enabled);
            }
        }
        None => {}
    }
}

pub fn wire_keys(window: &web::Window, sim: &Rc<RefCell<SphereSimulation>>) -> anyhow::Result<()> {
    let sim = sim.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &sim);
    }) as Box<dyn FnMut(_)>);
    window
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    closure.forget();
    Ok(())
}
