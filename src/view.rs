use wish_tree_core::{GestureSignal, Mode, ModeController, SensorStatus, TRACKING_STALL_FRAMES};

pub const TRACKING_STALLED_LABEL: &str = "Hand tracking stalled";

/// Everything the page shows, derived once per frame. The overlay only
/// touches the DOM when this changes.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub mode: Mode,
    pub transmitting: bool,
    pub result_visible: bool,
    pub send_enabled: bool,
    pub input_enabled: bool,
    pub sensor_label: &'static str,
    pub camera_button_visible: bool,
    pub spinner_visible: bool,
    pub tracking_stalled: bool,
}

impl ViewState {
    pub fn derive(controller: &ModeController, sensor: &SensorStatus, wish: &str) -> Self {
        Self {
            mode: controller.mode(),
            transmitting: controller.is_locked(),
            result_visible: controller.is_result_visible(),
            send_enabled: controller.can_submit(wish),
            input_enabled: !controller.is_locked(),
            sensor_label: sensor.label(),
            camera_button_visible: sensor.can_start(),
            spinner_visible: matches!(sensor, SensorStatus::Requesting),
            tracking_stalled: false,
        }
    }

    pub fn with_tracking_stalled(mut self, stalled: bool) -> Self {
        self.tracking_stalled = stalled;
        if stalled {
            self.sensor_label = TRACKING_STALLED_LABEL;
        }
        self
    }

    pub fn status_text(&self) -> &'static str {
        if self.transmitting {
            "Status: Transmitting"
        } else {
            "Status: Connected"
        }
    }

    pub fn send_label(&self) -> &'static str {
        if self.transmitting {
            "Sending..."
        } else {
            "Send"
        }
    }

    /// CSS class for the status indicator dot.
    pub fn dot_class(&self) -> &'static str {
        match self.mode {
            Mode::Transmitting => "dot transmitting",
            Mode::Assembled => "dot assembled",
            Mode::Dispersed => "dot idle",
        }
    }

    pub fn mode_label(&self) -> &'static str {
        match self.mode {
            Mode::Assembled => "Tree",
            Mode::Dispersed => "Explode",
            Mode::Transmitting => "Sending",
        }
    }
}

/// Position of the hand cursor over the camera preview, in percent.
/// Centered when no hand is visible.
#[inline]
pub fn hand_cursor_percent(signal: Option<GestureSignal>) -> (f32, f32) {
    let (x, y) = signal.map_or((0.5, 0.5), |s| (s.x, s.y));
    (x.clamp(0.0, 1.0) * 100.0, y.clamp(0.0, 1.0) * 100.0)
}

/// Watches the mailbox publish count while the sensor is streaming. The
/// landmark loop publishes every camera frame, hand or not, so a count that
/// stops moving means the tracker has died.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrackingWatch {
    last_count: u64,
    idle_frames: u32,
}

impl TrackingWatch {
    /// Call once per render frame. Returns true while tracking is stalled.
    pub fn observe(&mut self, streaming: bool, publish_count: u64) -> bool {
        if !streaming || publish_count != self.last_count {
            self.last_count = publish_count;
            self.idle_frames = 0;
            return false;
        }
        self.idle_frames = self.idle_frames.saturating_add(1);
        self.idle_frames >= TRACKING_STALL_FRAMES
    }
}
