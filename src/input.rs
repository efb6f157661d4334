/// Pointer drag tracking for the orbit camera, in CSS pixels.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last_x: f32,
    pub last_y: f32,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, x: f32, y: f32) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last_x = x;
        self.last_y = y;
    }

    /// Movement since the previous event for the captured pointer.
    pub fn move_to(&mut self, pointer_id: i32, x: f32, y: f32) -> Option<(f32, f32)> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) -> bool {
        let was = self.active && pointer_id == self.pointer_id;
        if was {
            self.active = false;
        }
        was
    }
}

/// One zoom notch per wheel event, whatever the delta mode.
#[inline]
pub fn wheel_notch(delta_y: f64) -> f32 {
    if delta_y > 0.0 {
        1.0
    } else if delta_y < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    SubmitWish,
    ToggleHelp,
    DismissResult,
}

/// Map a `KeyboardEvent.key` to a page action. `typing` is true while the
/// wish input has focus, so letters go to the input instead.
pub fn key_action(key: &str, typing: bool) -> Option<KeyAction> {
    match key {
        "Enter" if typing => Some(KeyAction::SubmitWish),
        "h" | "H" if !typing => Some(KeyAction::ToggleHelp),
        "Escape" => Some(KeyAction::DismissResult),
        _ => None,
    }
}
