use crate::hand;
use crate::overlay;
use crate::render;
use crate::scene::SceneUniforms;
use crate::view::{self, TrackingWatch, ViewState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use wish_tree_core::{ControllerEvent, Mode, OrbitCamera, SignalMailbox, TreeSimulation};

pub struct FrameContext<'a> {
    pub sim: Rc<RefCell<TreeSimulation>>,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub mailbox: SignalMailbox,

    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub events: Vec<ControllerEvent>,
    pub tracking: TrackingWatch,
    pub last_instant: Instant,
    /// What the overlay currently shows; `None` until the first frame.
    pub shown: Option<ViewState>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();

        let streaming = hand::sensor().borrow().status().is_streaming();
        let stalled = self
            .tracking
            .observe(streaming, self.mailbox.publish_count());
        if stalled {
            // a dead tracker must not keep steering with its last frame
            self.mailbox.clear();
        }

        let signal = self.mailbox.latest();
        self.events.clear();
        let mut sim = self.sim.borrow_mut();
        sim.step(dt, signal, &mut self.events);
        for ev in &self.events {
            match ev {
                ControllerEvent::TransmitStarted => overlay::release_wish_focus(&self.document),
                ControllerEvent::ResultReady => {
                    log::info!("[wish] result shown after {:.1}s", sim.elapsed().as_secs_f32());
                }
                ControllerEvent::ModeChanged { .. } => {}
            }
        }

        let eye;
        let view_proj;
        {
            let mut orbit = self.orbit.borrow_mut();
            orbit.auto_rotate = sim.mode() == Mode::Dispersed;
            orbit.update(dt_sec);
            let w = self.canvas.width().max(1) as f32;
            let h = self.canvas.height().max(1) as f32;
            let cam = orbit.camera(w / h);
            eye = cam.eye;
            view_proj = cam.view_projection();
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            sim.commit(g);
            let scene = SceneUniforms::new(view_proj, eye, sim.elapsed().as_secs_f32());
            match g.render(dt_sec, &scene) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }

        let next = {
            let sensor = hand::sensor();
            let sensor = sensor.borrow();
            let wish = overlay::wish_text(&self.document);
            ViewState::derive(&sim.controller, sensor.status(), &wish)
                .with_tracking_stalled(stalled)
        };
        if self.shown.as_ref() != Some(&next) {
            overlay::apply(&self.document, self.shown.as_ref(), &next);
            self.shown = Some(next);
        }
        let (left, top) = view::hand_cursor_percent(signal);
        overlay::move_hand_cursor(&self.document, left, top);
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
