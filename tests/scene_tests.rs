// Host-side tests for the GPU scene data.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/scene.rs"]
mod scene;

use constants::*;
use glam::{Mat4, Vec3};
use scene::*;
use wish_tree_core::{GroupMaterial, Mode, ParticleGroup};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn uniform_layouts_match_the_shaders() {
    assert_eq!(std::mem::size_of::<LightPacked>(), 32);
    assert_eq!(std::mem::size_of::<SceneUniforms>(), 272);
    assert_eq!(std::mem::size_of::<MaterialUniform>(), 32);
}

#[test]
fn srgb_conversion_endpoints() {
    assert_eq!(srgb_to_linear([0.0, 1.0, 0.04]), [0.0, 1.0, 0.04 / 12.92]);
    let [mid, _, _] = srgb_to_linear([0.5, 0.0, 0.0]);
    assert!(approx(mid, 0.21404), "{}", mid);
}

#[test]
fn spot_light_points_down_at_the_tree() {
    let u = SceneUniforms::new(Mat4::IDENTITY, Vec3::new(0.0, 0.0, 15.0), 0.0);
    assert!(approx(u.spot[1], -1.0));
    assert!(approx(u.spot[3], SPOT_LIGHT_ANGLE.cos()));
    // only the third light is a spot
    assert_eq!(u.lights[0].position[3], 0.0);
    assert_eq!(u.lights[1].position[3], 0.0);
    assert!(u.lights[2].position[3] > u.spot[3]);
    assert_eq!(u.camera_pos, [0.0, 0.0, 15.0, 1.0]);
}

#[test]
fn float_motion_stays_small() {
    for i in 0..200 {
        let t = i as f32 * 0.05;
        let m = float_model(t);
        let lift = m.w_axis.y;
        assert!(lift.abs() <= FLOAT_HEIGHT + 1e-6);
        // rigid: unit vectors stay unit length
        let x = m.transform_vector3(Vec3::X);
        assert!(approx(x.length(), 1.0));
        assert!(x.x > 0.99);
    }
}

#[test]
fn ribbon_material_keeps_its_opacity() {
    let m = GroupMaterial::for_mode(ParticleGroup::Ribbon, Mode::Transmitting);
    let u = MaterialUniform::from(&m);
    assert_eq!(u.color[3], m.opacity);
    assert_eq!(u.emissive[3], m.emissive_intensity);
    assert_eq!(u.emissive[0], srgb_to_linear(m.emissive)[0]);
}

#[test]
fn clear_color_is_dark() {
    let c = clear_color();
    assert!(c.iter().all(|v| *v < 0.01));
}
