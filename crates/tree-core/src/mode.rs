//! Process-wide mode state machine.
//!
//! The controller is the single owner of the tree mode, the hand-driven
//! rotation accumulator and the wish-transmission lock. It is advanced once per
//! render frame with the frame's `dt` and the newest gesture signal.

use crate::constants::{ROTATION_SMOOTHING, TRANSMIT_DURATION};
use crate::gesture::GestureSignal;
use std::f32::consts::TAU;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Particles gathered into the tree silhouette.
    Assembled,
    /// Particles scattered into a cloud.
    Dispersed,
    /// Timed, non-interruptible wish animation.
    Transmitting,
}

impl Mode {
    /// Whether particles steer toward their assembled targets.
    #[inline]
    pub fn is_tree_shaped(self) -> bool {
        matches!(self, Mode::Assembled | Mode::Transmitting)
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Assembled => "assembled",
            Mode::Dispersed => "dispersed",
            Mode::Transmitting => "transmitting",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerEvent {
    ModeChanged { from: Mode, to: Mode },
    /// Fired on the first tick after an accepted wish.
    TransmitStarted,
    /// Fired once per completed transmission.
    ResultReady,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a wish is already being transmitted")]
    Locked,
    #[error("the previous result is still on screen")]
    ResultShowing,
    #[error("wish text is empty")]
    EmptyWish,
}

/// Deferred mode exit owned by the controller.
///
/// It is advanced by the render loop rather than by an external timer, so it
/// cannot outlive the controller that holds it.
#[derive(Clone, Copy, Debug)]
struct TransmitTask {
    remaining: Duration,
}

impl TransmitTask {
    fn new(duration: Duration) -> Self {
        Self {
            remaining: duration,
        }
    }

    /// Returns true once the deadline has been reached.
    fn advance(&mut self, dt: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(dt);
        self.remaining.is_zero()
    }
}

#[derive(Debug)]
pub struct ModeController {
    mode: Mode,
    rotation: f32,
    locked: bool,
    result_visible: bool,
    transmit: Option<TransmitTask>,
    start_pending: bool,
    reported_mode: Mode,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeController {
    pub fn new() -> Self {
        Self {
            mode: Mode::Dispersed,
            rotation: 0.0,
            locked: false,
            result_visible: false,
            transmit: None,
            start_pending: false,
            reported_mode: Mode::Dispersed,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// True while a transmission is running.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// True between the end of a transmission and [`Self::dismiss_result`].
    pub fn is_result_visible(&self) -> bool {
        self.result_visible
    }

    pub fn accepts_gestures(&self) -> bool {
        !self.locked && !self.result_visible
    }

    /// Time left until the running transmission ends.
    pub fn transmit_remaining(&self) -> Option<Duration> {
        self.transmit.map(|t| t.remaining)
    }

    pub fn can_submit(&self, wish: &str) -> bool {
        self.check_submit(wish).is_ok()
    }

    fn check_submit(&self, wish: &str) -> Result<(), SubmitRejected> {
        if self.locked {
            return Err(SubmitRejected::Locked);
        }
        if self.result_visible {
            return Err(SubmitRejected::ResultShowing);
        }
        if wish.trim().is_empty() {
            return Err(SubmitRejected::EmptyWish);
        }
        Ok(())
    }

    /// Start the transmission sequence. The text is only validated, never kept.
    pub fn submit_wish(&mut self, wish: &str) -> Result<(), SubmitRejected> {
        if let Err(reason) = self.check_submit(wish) {
            log::debug!("[wish] submit ignored: {}", reason);
            return Err(reason);
        }
        self.mode = Mode::Transmitting;
        self.locked = true;
        self.transmit = Some(TransmitTask::new(TRANSMIT_DURATION));
        self.start_pending = true;
        log::info!(
            "[wish] transmitting for {:.1}s",
            TRANSMIT_DURATION.as_secs_f32()
        );
        Ok(())
    }

    /// Close the result display and return to the scattered cloud.
    pub fn dismiss_result(&mut self) {
        if self.locked || !self.result_visible {
            return;
        }
        self.result_visible = false;
        self.mode = Mode::Dispersed;
    }

    /// Drop any pending transmission without firing its completion.
    pub fn cancel(&mut self) {
        if self.transmit.take().is_some() {
            log::info!("[wish] transmission canceled");
        }
        self.start_pending = false;
        self.locked = false;
        if self.mode == Mode::Transmitting {
            self.mode = Mode::Dispersed;
        }
    }

    /// Advance one render frame.
    pub fn tick(
        &mut self,
        dt: Duration,
        signal: Option<GestureSignal>,
        events: &mut Vec<ControllerEvent>,
    ) {
        if std::mem::take(&mut self.start_pending) {
            events.push(ControllerEvent::TransmitStarted);
        }
        if let Some(task) = self.transmit.as_mut() {
            if task.advance(dt) {
                self.transmit = None;
                self.mode = Mode::Dispersed;
                self.locked = false;
                self.result_visible = true;
                events.push(ControllerEvent::ResultReady);
                log::info!("[wish] transmission complete");
            }
        }

        if self.accepts_gestures() {
            if let Some(signal) = signal {
                self.apply_gesture(&signal);
            }
        }

        if self.mode != self.reported_mode {
            log::info!(
                "[mode] {} -> {}",
                self.reported_mode.label(),
                self.mode.label()
            );
            events.push(ControllerEvent::ModeChanged {
                from: self.reported_mode,
                to: self.mode,
            });
            self.reported_mode = self.mode;
        }
    }

    fn apply_gesture(&mut self, signal: &GestureSignal) {
        if signal.is_pinching {
            self.mode = Mode::Assembled;
        } else if signal.is_open {
            self.mode = Mode::Dispersed;
        }
        let target = (signal.x - 0.5) * TAU;
        self.rotation += (target - self.rotation) * ROTATION_SMOOTHING;
    }
}
