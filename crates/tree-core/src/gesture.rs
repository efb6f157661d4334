//! Hand-landmark gesture classification.
//!
//! The landmark detector runs outside of Rust and hands us 21 points in
//! normalized image coordinates (origin top-left, x/y in \[0, 1\]). This module
//! reduces one such snapshot to a [`GestureSignal`]: a pinch flag, an
//! open-hand flag and a hand-center position. It keeps no state between
//! frames; smoothing happens downstream in the mode controller.

use crate::constants::PINCH_THRESHOLD;
use thiserror::Error;

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Image-plane distance; depth is ignored.
    #[inline]
    pub fn planar_distance(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LandmarkError {
    #[error("unsupported landmark stride {0} (expected 2 or 3)")]
    UnsupportedStride(usize),
    #[error("expected {expected} values for 21 landmarks, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("landmark {0} has a non-finite coordinate")]
    NonFinite(usize),
}

/// One detected hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLandmarks {
    pub points: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Parse the flat `[x0, y0, (z0,) x1, y1, ...]` layout sent by the page.
    pub fn from_flat(values: &[f32], stride: usize) -> Result<Self, LandmarkError> {
        if stride != 2 && stride != 3 {
            return Err(LandmarkError::UnsupportedStride(stride));
        }
        let expected = LANDMARK_COUNT * stride;
        if values.len() != expected {
            return Err(LandmarkError::WrongLength {
                expected,
                actual: values.len(),
            });
        }
        let mut points = [Landmark::default(); LANDMARK_COUNT];
        for (i, chunk) in values.chunks_exact(stride).enumerate() {
            if chunk.iter().any(|v| !v.is_finite()) {
                return Err(LandmarkError::NonFinite(i));
            }
            points[i] = Landmark {
                x: chunk[0],
                y: chunk[1],
                z: if stride == 3 { chunk[2] } else { 0.0 },
            };
        }
        Ok(Self { points })
    }

    #[inline]
    pub fn get(&self, index: usize) -> &Landmark {
        &self.points[index]
    }
}

/// Discrete intent plus hand position, recomputed every camera frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSignal {
    /// Mirrored horizontal hand position, 0 = left edge of the user's view.
    pub x: f32,
    pub y: f32,
    pub is_pinching: bool,
    pub is_open: bool,
}

impl GestureSignal {
    pub const fn pinch(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            is_pinching: true,
            is_open: false,
        }
    }

    pub const fn open(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            is_pinching: false,
            is_open: true,
        }
    }

    pub const fn neutral(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            is_pinching: false,
            is_open: false,
        }
    }
}

/// Classify a single landmark snapshot.
///
/// The open-hand test only compares two fingertips against wrist height, so it
/// assumes an upright hand in front of a fixed camera.
pub fn classify(hand: &HandLandmarks) -> GestureSignal {
    let wrist = hand.get(WRIST);
    let is_pinching = hand.get(THUMB_TIP).planar_distance(hand.get(INDEX_TIP)) < PINCH_THRESHOLD;
    let is_open =
        hand.get(MIDDLE_TIP).y < wrist.y && hand.get(RING_TIP).y < wrist.y && !is_pinching;
    let center = hand.get(MIDDLE_MCP);
    GestureSignal {
        x: 1.0 - center.x,
        y: center.y,
        is_pinching,
        is_open,
    }
}

/// Classify the first hand of a detector result, if any.
pub fn classify_frame(hand: Option<&HandLandmarks>) -> Option<GestureSignal> {
    hand.map(classify)
}
