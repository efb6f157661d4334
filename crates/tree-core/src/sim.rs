use crate::gesture::GestureSignal;
use crate::layout::TreeLayout;
use crate::mode::{ControllerEvent, Mode, ModeController, SubmitRejected};
use crate::particles::{FrameParams, ParticleSystem, RenderSink};
use rand::Rng;
use std::time::Duration;

/// Per-frame driver tying the mode controller to the particle engine.
///
/// The render loop calls [`TreeSimulation::step`] once per display refresh
/// with the newest gesture signal, then [`TreeSimulation::commit`] to push the
/// instance buffers to the renderer.
pub struct TreeSimulation {
    pub controller: ModeController,
    pub particles: ParticleSystem,
    elapsed: Duration,
}

impl TreeSimulation {
    pub fn new(layout: TreeLayout) -> Self {
        Self {
            controller: ModeController::new(),
            particles: ParticleSystem::new(layout),
            elapsed: Duration::ZERO,
        }
    }

    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(TreeLayout::generate(rng))
    }

    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn step(
        &mut self,
        dt: Duration,
        signal: Option<GestureSignal>,
        out_events: &mut Vec<ControllerEvent>,
    ) {
        self.elapsed += dt;
        self.controller.tick(dt, signal, out_events);
        self.particles.update(&FrameParams {
            mode: self.controller.mode(),
            rotation: self.controller.rotation(),
            elapsed: self.elapsed.as_secs_f32(),
            dt: dt.as_secs_f32(),
        });
    }

    pub fn submit_wish(&mut self, wish: &str) -> Result<(), SubmitRejected> {
        self.controller.submit_wish(wish)
    }

    pub fn dismiss_result(&mut self) {
        self.controller.dismiss_result();
    }

    pub fn commit<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> usize {
        self.particles.commit(sink)
    }
}
