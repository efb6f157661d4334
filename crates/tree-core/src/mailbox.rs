use crate::gesture::GestureSignal;
use std::cell::Cell;
use std::rc::Rc;

/// Single-slot hand-off for the latest gesture signal.
///
/// The camera callback chain publishes at its own cadence and the render loop
/// reads whatever is newest. Nothing queues: a publish overwrites the slot and
/// a read never consumes it. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct SignalMailbox {
    slot: Rc<Cell<Option<GestureSignal>>>,
    publishes: Rc<Cell<u64>>,
}

impl SignalMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` means no hand was detected in the newest camera frame.
    pub fn publish(&self, signal: Option<GestureSignal>) {
        self.slot.set(signal);
        self.publishes.set(self.publishes.get().wrapping_add(1));
    }

    pub fn latest(&self) -> Option<GestureSignal> {
        self.slot.get()
    }

    /// Number of frames published so far; lets the UI tell a live tracker from
    /// a stalled one.
    pub fn publish_count(&self) -> u64 {
        self.publishes.get()
    }

    /// Drop the held signal without counting a publish.
    pub fn clear(&self) {
        self.slot.set(None);
    }
}
