//! Per-frame particle interpolation.
//!
//! Every frame each particle picks a target (its assembled or dispersed
//! layout position, or a live spiral for the ribbon while a wish is being
//! transmitted), eases its current position toward it and writes the derived
//! transform into its group's instance buffer. Buffers are sized once at
//! construction and rewritten in place.

use crate::constants::*;
use crate::layout::{GroupLayout, ParticleGroup, TreeLayout};
use crate::mode::Mode;
use glam::Vec3;
use std::f32::consts::TAU;

/// Per-instance record consumed by the renderer.
///
/// `rotation` holds XYZ Euler angles in radians.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub scale: f32,
    pub rotation: [f32; 3],
    pub _pad: f32,
}

/// Group-wide surface parameters, re-derived from the mode each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupMaterial {
    pub color: [f32; 3],
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub opacity: f32,
}

impl GroupMaterial {
    pub fn for_mode(group: ParticleGroup, mode: Mode) -> Self {
        let pick = |(idle, transmitting): (f32, f32)| {
            if mode == Mode::Transmitting {
                transmitting
            } else {
                idle
            }
        };
        match group {
            ParticleGroup::Leaf => Self {
                color: LEAF_COLOR,
                emissive: LEAF_EMISSIVE,
                emissive_intensity: pick(LEAF_EMISSIVE_INTENSITY),
                opacity: 1.0,
            },
            ParticleGroup::Ornament => Self {
                color: ORNAMENT_COLOR,
                emissive: ORNAMENT_EMISSIVE,
                emissive_intensity: pick(ORNAMENT_EMISSIVE_INTENSITY),
                opacity: 1.0,
            },
            ParticleGroup::Ribbon => Self {
                color: RIBBON_COLOR,
                emissive: if mode == Mode::Transmitting {
                    RIBBON_EMISSIVE_TRANSMIT
                } else {
                    RIBBON_EMISSIVE_IDLE
                },
                emissive_intensity: pick(RIBBON_EMISSIVE_INTENSITY),
                opacity: RIBBON_OPACITY,
            },
        }
    }
}

/// Consumer of committed instance buffers (the GPU renderer in the web build).
pub trait RenderSink {
    fn upload_group(
        &mut self,
        group: ParticleGroup,
        instances: &[ParticleInstance],
        material: &GroupMaterial,
    );
}

/// Inputs shared by every particle for one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameParams {
    pub mode: Mode,
    /// Hand-driven yaw from the mode controller.
    pub rotation: f32,
    /// Seconds since the simulation started.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub dt: f32,
}

/// Fraction of the remaining distance covered this frame.
///
/// Clamped so a long stall snaps to the target instead of overshooting.
#[inline]
pub fn smoothing_factor(mode: Mode, dt: f32) -> f32 {
    let rate = if mode == Mode::Transmitting {
        TRANSMIT_LERP_RATE
    } else {
        IDLE_LERP_RATE
    };
    (rate * dt).clamp(0.0, 1.0)
}

/// Target of ribbon particle `index` of `count` while transmitting: a rising,
/// rotating funnel that wraps every `SPIRAL_WRAP_HEIGHT` units.
#[inline]
pub fn spiral_target(index: usize, count: usize, elapsed: f32) -> Vec3 {
    let t = index as f32 / count as f32;
    let angle = t * TAU * RIBBON_TURNS + elapsed * SPIRAL_SPEED;
    let rise = (t * TREE_HEIGHT - TREE_HEIGHT * 0.5) + elapsed * SPIRAL_UPWARD_SPEED;
    // `%` keeps the sign of the dividend, matching the rest of the animation
    let y = rise % SPIRAL_WRAP_HEIGHT - SPIRAL_WRAP_HEIGHT * 0.5;
    let radius = ((SPIRAL_TOP - y) * SPIRAL_FLARE).max(SPIRAL_MIN_RADIUS);
    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}

/// Low-amplitude idle sway; the phase is keyed on the particle index.
#[inline]
pub fn sway(base: Vec3, index: usize, elapsed: f32) -> Vec3 {
    let phase = elapsed + index as f32;
    Vec3::new(
        base.x + phase.sin() * SWAY_AMPLITUDE,
        base.y,
        base.z + phase.cos() * SWAY_AMPLITUDE,
    )
}

#[inline]
pub fn particle_scale(group: ParticleGroup, mode: Mode) -> f32 {
    let base = group.base_scale();
    let mut s = if mode.is_tree_shaped() {
        base
    } else {
        base * DISPERSED_SCALE_FACTOR
    };
    if mode == Mode::Transmitting && group == ParticleGroup::Ribbon {
        s *= TRANSMIT_RIBBON_SCALE_BOOST;
    }
    s
}

/// Structure-of-arrays storage for one group.
#[derive(Debug)]
pub struct GroupState {
    group: ParticleGroup,
    assembled: Vec<Vec3>,
    dispersed: Vec<Vec3>,
    current: Vec<Vec3>,
    instances: Vec<ParticleInstance>,
    material: GroupMaterial,
    dirty: bool,
}

impl GroupState {
    pub fn new(layout: GroupLayout) -> Self {
        let GroupLayout {
            group,
            assembled,
            dispersed,
        } = layout;
        debug_assert_eq!(assembled.len(), dispersed.len());
        let current = dispersed.clone();
        let scale = particle_scale(group, Mode::Dispersed);
        let instances = current
            .iter()
            .map(|p| ParticleInstance {
                position: p.to_array(),
                scale,
                rotation: [p.x * TILT_PER_UNIT, p.y * TILT_PER_UNIT, p.z * TILT_PER_UNIT],
                _pad: 0.0,
            })
            .collect();
        Self {
            group,
            assembled,
            dispersed,
            current,
            instances,
            material: GroupMaterial::for_mode(group, Mode::Dispersed),
            dirty: true,
        }
    }

    pub fn group(&self) -> ParticleGroup {
        self.group
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn assembled(&self) -> &[Vec3] {
        &self.assembled
    }

    pub fn dispersed(&self) -> &[Vec3] {
        &self.dispersed
    }

    pub fn current(&self) -> &[Vec3] {
        &self.current
    }

    pub fn instances(&self) -> &[ParticleInstance] {
        &self.instances
    }

    pub fn material(&self) -> &GroupMaterial {
        &self.material
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn update(&mut self, frame: &FrameParams) {
        let tree = frame.mode.is_tree_shaped();
        let spiral = frame.mode == Mode::Transmitting && self.group == ParticleGroup::Ribbon;
        let factor = smoothing_factor(frame.mode, frame.dt);
        let scale = particle_scale(self.group, frame.mode);
        let spin = if spiral {
            frame.elapsed * TRANSMIT_RIBBON_SPIN
        } else {
            0.0
        };
        let targets = if tree {
            &self.assembled
        } else {
            &self.dispersed
        };
        let count = self.current.len();

        for i in 0..count {
            let target = if spiral {
                spiral_target(i, count, frame.elapsed)
            } else if tree {
                sway(targets[i], i, frame.elapsed)
            } else {
                targets[i]
            };
            let p = self.current[i].lerp(target, factor);
            self.current[i] = p;
            self.instances[i] = ParticleInstance {
                position: p.to_array(),
                scale,
                rotation: [
                    p.x * TILT_PER_UNIT,
                    p.y * TILT_PER_UNIT + frame.rotation + spin,
                    p.z * TILT_PER_UNIT,
                ],
                _pad: 0.0,
            };
        }

        self.material = GroupMaterial::for_mode(self.group, frame.mode);
        self.dirty = true;
    }
}

/// All three particle groups.
#[derive(Debug)]
pub struct ParticleSystem {
    groups: [GroupState; 3],
}

impl ParticleSystem {
    pub fn new(layout: TreeLayout) -> Self {
        Self {
            groups: layout.groups.map(GroupState::new),
        }
    }

    pub fn group(&self, group: ParticleGroup) -> &GroupState {
        &self.groups[group.index()]
    }

    pub fn groups(&self) -> &[GroupState; 3] {
        &self.groups
    }

    pub fn total_len(&self) -> usize {
        self.groups.iter().map(GroupState::len).sum()
    }

    /// Advance every particle by one frame.
    pub fn update(&mut self, frame: &FrameParams) {
        for g in &mut self.groups {
            g.update(frame);
        }
    }

    /// Hand every dirty group to the sink once, then clear the flags.
    /// Returns the number of groups uploaded.
    pub fn commit<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> usize {
        let mut uploaded = 0;
        for g in &mut self.groups {
            if g.dirty {
                sink.upload_group(g.group, &g.instances, &g.material);
                g.dirty = false;
                uploaded += 1;
            }
        }
        uploaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothing_factor_uses_mode_rate_and_clamps() {
        assert!((smoothing_factor(Mode::Assembled, 0.1) - 0.3).abs() < 1e-6);
        assert!((smoothing_factor(Mode::Transmitting, 0.1) - 0.5).abs() < 1e-6);
        assert_eq!(smoothing_factor(Mode::Dispersed, 2.0), 1.0);
        assert_eq!(smoothing_factor(Mode::Dispersed, -1.0), 0.0);
    }

    #[test]
    fn spiral_starts_at_ribbon_base() {
        // index 0 at t=0: angle 0, y = -4 % 12 - 6 = -10, radius (4+10)*0.4
        let p = spiral_target(0, 1000, 0.0);
        assert!((p.y + 10.0).abs() < 1e-5);
        assert!((p.x - 5.6).abs() < 1e-4);
        assert!(p.z.abs() < 1e-5);
    }

    #[test]
    fn spiral_radius_never_collapses() {
        for i in (0..1000).step_by(37) {
            for step in 0..50 {
                let p = spiral_target(i, 1000, step as f32 * 0.137);
                let r = (p.x * p.x + p.z * p.z).sqrt();
                assert!(r >= SPIRAL_MIN_RADIUS - 1e-5);
                assert!(p.y < SPIRAL_WRAP_HEIGHT * 0.5);
            }
        }
    }

    #[test]
    fn ribbon_grows_while_transmitting() {
        let idle = particle_scale(ParticleGroup::Ribbon, Mode::Assembled);
        let tx = particle_scale(ParticleGroup::Ribbon, Mode::Transmitting);
        assert!((tx / idle - TRANSMIT_RIBBON_SCALE_BOOST).abs() < 1e-6);
        let leaf_tx = particle_scale(ParticleGroup::Leaf, Mode::Transmitting);
        assert_eq!(leaf_tx, LEAF_SCALE);
    }

    #[test]
    fn instance_record_is_32_bytes() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 32);
    }
}
