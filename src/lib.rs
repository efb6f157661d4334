#![cfg(target_arch = "wasm32")]
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;
use wish_tree_core::{OrbitCamera, TreeSimulation};

mod constants;
mod dom;
mod events;
mod frame;
mod hand;
mod input;
mod overlay;
mod render;
mod scene;
mod view;

use constants::*;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_page_buttons(document: &web::Document, sim: &Rc<RefCell<TreeSimulation>>) {
    let (doc_send, sim_send) = (document.clone(), sim.clone());
    dom::add_click_listener(document, SEND_BUTTON_ID, move || {
        events::submit_wish(&doc_send, &sim_send);
    });

    let (doc_again, sim_again) = (document.clone(), sim.clone());
    dom::add_click_listener(document, PLAY_AGAIN_ID, move || {
        events::play_again(&doc_again, &sim_again);
    });

    let doc_camera = document.clone();
    dom::add_click_listener(document, CAMERA_BUTTON_ID, move || {
        spawn_local(hand::start_camera(doc_camera.clone()));
    });
}

// A pending transmission must not complete after the page is gone.
fn wire_pagehide(sim: &Rc<RefCell<TreeSimulation>>) {
    let sim = sim.clone();
    let closure = Closure::wrap(Box::new(move || {
        sim.borrow_mut().controller.cancel();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wish-tree starting");

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
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let sim = Rc::new(RefCell::new(TreeSimulation::from_rng(
        &mut StdRng::from_entropy(),
    )));
    let orbit = Rc::new(RefCell::new(OrbitCamera::default()));
    log::info!("[tree] layout ready, mode {}", sim.borrow().mode().label());

    wire_page_buttons(&document, &sim);
    wire_pagehide(&sim);
    events::wire_global_keydown(document.clone(), sim.clone());
    events::wire_orbit_controls(&canvas, orbit.clone());

    // The scene still reacts to the page without a GPU; it just draws nothing.
    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim,
        orbit,
        mailbox: hand::mailbox(),
        document,
        canvas,
        gpu,
        events: Vec::new(),
        tracking: view::TrackingWatch::default(),
        last_instant: Instant::now(),
        shown: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
