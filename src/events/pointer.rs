use crate::input::{self, DragState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;
use wish_tree_core::OrbitCamera;

#[derive(Clone)]
pub struct OrbitWiring {
    canvas: web::HtmlCanvasElement,
    orbit: Rc<RefCell<OrbitCamera>>,
    drag: Rc<RefCell<DragState>>,
}

/// Drag to orbit and wheel to zoom on the scene canvas.
pub fn wire_orbit_controls(canvas: &web::HtmlCanvasElement, orbit: Rc<RefCell<OrbitCamera>>) {
    let w = OrbitWiring {
        canvas: canvas.clone(),
        orbit,
        drag: Rc::new(RefCell::new(DragState::default())),
    };
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn listen<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    name: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &OrbitWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointerdown", move |ev: web::PointerEvent| {
        w2.drag
            .borrow_mut()
            .begin(ev.pointer_id(), ev.client_x() as f32, ev.client_y() as f32);
        _ = w2.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointermove(w: &OrbitWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointermove", move |ev: web::PointerEvent| {
        let delta =
            w2.drag
                .borrow_mut()
                .move_to(ev.pointer_id(), ev.client_x() as f32, ev.client_y() as f32);
        if let Some((dx, dy)) = delta {
            let height = w2.canvas.client_height() as f32;
            w2.orbit.borrow_mut().drag(dx, dy, height);
        }
    });
}

fn wire_pointerup(w: &OrbitWiring) {
    for name in ["pointerup", "pointercancel"] {
        let w2 = w.clone();
        listen(&w.canvas, name, move |ev: web::PointerEvent| {
            if w2.drag.borrow_mut().end(ev.pointer_id()) {
                _ = w2.canvas.release_pointer_capture(ev.pointer_id());
            }
        });
    }
}

fn wire_wheel(w: &OrbitWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "wheel", move |ev: web::WheelEvent| {
        w2.orbit.borrow_mut().zoom(input::wheel_notch(ev.delta_y()));
        ev.prevent_default();
    });
}
