//! GPU-facing scene data: lights, per-group materials and the tree's float
//! motion. Pure math so it can be tested on the host.

use crate::constants::*;
use glam::{Mat4, Quat, Vec3};
use wish_tree_core::GroupMaterial;

/// sRGB to linear, per channel.
#[inline]
pub fn srgb_to_linear(c: [f32; 3]) -> [f32; 3] {
    c.map(|v| {
        if v <= 0.04045 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    })
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightPacked {
    /// xyz position; w = 0 for point lights, cos of the inner cone for the spot
    pub position: [f32; 4],
    /// linear rgb, w = intensity
    pub color: [f32; 4],
}

impl LightPacked {
    fn point(pos: [f32; 3], srgb: [f32; 3], intensity: f32) -> Self {
        let [r, g, b] = srgb_to_linear(srgb);
        Self {
            position: [pos[0], pos[1], pos[2], 0.0],
            color: [r, g, b, intensity * LIGHT_INTENSITY_SCALE],
        }
    }

    fn spot(pos: [f32; 3], intensity: f32) -> Self {
        let inner = SPOT_LIGHT_ANGLE * (1.0 - SPOT_LIGHT_PENUMBRA);
        Self {
            // w must stay positive to mark the spot
            position: [pos[0], pos[1], pos[2], inner.cos().max(1e-4)],
            color: [1.0, 1.0, 1.0, intensity * LIGHT_INTENSITY_SCALE],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    /// linear rgb, w = intensity
    pub ambient: [f32; 4],
    pub lights: [LightPacked; 3],
    /// xyz spot direction, w = cos of the outer cone angle
    pub spot: [f32; 4],
}

impl SceneUniforms {
    pub fn new(view_proj: Mat4, eye: Vec3, elapsed_sec: f32) -> Self {
        let spot_dir = (Vec3::ZERO - Vec3::from_array(SPOT_LIGHT_POS)).normalize();
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: float_model(elapsed_sec).to_cols_array_2d(),
            camera_pos: eye.extend(1.0).to_array(),
            ambient: [1.0, 1.0, 1.0, AMBIENT_INTENSITY],
            lights: [
                LightPacked::point(KEY_LIGHT_POS, KEY_LIGHT_COLOR, KEY_LIGHT_INTENSITY),
                LightPacked::point(FILL_LIGHT_POS, FILL_LIGHT_COLOR, FILL_LIGHT_INTENSITY),
                LightPacked::spot(SPOT_LIGHT_POS, SPOT_LIGHT_INTENSITY),
            ],
            spot: spot_dir.extend(SPOT_LIGHT_ANGLE.cos()).to_array(),
        }
    }
}

/// Slow vertical bob with a slight wobble, applied to the whole tree.
pub fn float_model(elapsed_sec: f32) -> Mat4 {
    let t = elapsed_sec * FLOAT_SPEED;
    let lift = (t * 0.5).sin() * FLOAT_HEIGHT;
    let wobble = Quat::from_euler(
        glam::EulerRot::XYZ,
        (t * 0.25).cos() * FLOAT_TILT,
        (t * 0.25).sin() * FLOAT_TILT,
        (t * 0.25).sin() * FLOAT_TILT,
    );
    Mat4::from_rotation_translation(wobble, Vec3::new(0.0, lift, 0.0))
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    /// linear rgb, w = opacity
    pub color: [f32; 4],
    /// linear rgb, w = intensity
    pub emissive: [f32; 4],
}

impl From<&GroupMaterial> for MaterialUniform {
    fn from(m: &GroupMaterial) -> Self {
        let [r, g, b] = srgb_to_linear(m.color);
        let [er, eg, eb] = srgb_to_linear(m.emissive);
        Self {
            color: [r, g, b, m.opacity],
            emissive: [er, eg, eb, m.emissive_intensity],
        }
    }
}

pub fn clear_color() -> [f64; 3] {
    srgb_to_linear(BACKGROUND_SRGB).map(f64::from)
}
