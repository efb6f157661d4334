//! Camera types shared with the web frontend.
//!
//! These avoid platform APIs. The frontend feeds pointer drags and wheel
//! steps into [`OrbitCamera`] and reads back a [`Camera`] to build matrices.

use crate::constants::*;
use glam::{Mat4, Vec3};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// Orbit around the origin: drag to rotate, wheel to zoom, no panning.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    /// Angle around +Y, 0 looks down -Z from +Z.
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub auto_rotate: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: CAMERA_DISTANCE,
            auto_rotate: false,
        }
    }
}

impl OrbitCamera {
    /// Rotate by a pointer drag measured in pixels. A drag the height of the
    /// viewport turns a full circle.
    pub fn drag(&mut self, dx_px: f32, dy_px: f32, viewport_height_px: f32) {
        let h = viewport_height_px.max(1.0);
        self.yaw -= TAU * dx_px / h;
        self.pitch = (self.pitch + TAU * dy_px / h).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// One wheel notch; positive `delta` moves away from the tree.
    pub fn zoom(&mut self, delta: f32) {
        if delta > 0.0 {
            self.distance /= CAMERA_ZOOM_STEP;
        } else if delta < 0.0 {
            self.distance *= CAMERA_ZOOM_STEP;
        }
        self.distance = self
            .distance
            .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    /// Advance auto-rotation; speed 1.0 is one turn per minute.
    pub fn update(&mut self, dt_sec: f32) {
        if self.auto_rotate {
            self.yaw += TAU / 60.0 * CAMERA_AUTO_ROTATE_SPEED * dt_sec;
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(sy * cp, sp, cy * cp) * self.distance
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }
}
