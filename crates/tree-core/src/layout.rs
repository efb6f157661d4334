//! Static target layouts for the three particle groups.
//!
//! Each group gets an assembled (tree) layout and a dispersed (cloud) layout,
//! generated once at startup. Random placement draws from a caller-provided
//! [`Rng`] so tests can pin a seed.

use crate::constants::*;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleGroup {
    Leaf,
    Ornament,
    Ribbon,
}

impl ParticleGroup {
    pub const ALL: [ParticleGroup; 3] = [
        ParticleGroup::Leaf,
        ParticleGroup::Ornament,
        ParticleGroup::Ribbon,
    ];

    pub const fn count(self) -> usize {
        match self {
            ParticleGroup::Leaf => LEAF_COUNT,
            ParticleGroup::Ornament => ORNAMENT_COUNT,
            ParticleGroup::Ribbon => RIBBON_COUNT,
        }
    }

    pub const fn base_scale(self) -> f32 {
        match self {
            ParticleGroup::Leaf => LEAF_SCALE,
            ParticleGroup::Ornament => ORNAMENT_SCALE,
            ParticleGroup::Ribbon => RIBBON_SCALE,
        }
    }

    /// Half-extent of the dispersed cube.
    pub const fn scatter(self) -> f32 {
        match self {
            ParticleGroup::Leaf => LEAF_SCATTER,
            ParticleGroup::Ornament => ORNAMENT_SCATTER,
            ParticleGroup::Ribbon => RIBBON_SCATTER,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            ParticleGroup::Leaf => "leaf",
            ParticleGroup::Ornament => "ornament",
            ParticleGroup::Ribbon => "ribbon",
        }
    }
}

/// Radius of the tree envelope at height `y`.
///
/// A linear taper from the base to the apex with `TREE_TIERS` sin² ridges
/// layered on top. Non-negative for `y` in `[-H/2, H/2]`.
#[inline]
pub fn tiered_radius(y: f32) -> f32 {
    let normalized_y = (y + TREE_HEIGHT * 0.5) / TREE_HEIGHT;
    let inv_y = 1.0 - normalized_y;
    let ridge = (normalized_y * PI * TREE_TIERS).sin().powi(2) * TIER_RIDGE_DEPTH * inv_y;
    inv_y * TREE_BASE_RADIUS + ridge
}

#[inline]
fn on_ring(angle: f32, radius: f32, y: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}

/// Position of ribbon particle `index` of `count` on the assembled helix.
#[inline]
pub fn ribbon_helix_point(index: usize, count: usize) -> Vec3 {
    let t = index as f32 / count as f32;
    let angle = t * TAU * RIBBON_TURNS;
    let y = t * TREE_HEIGHT - TREE_HEIGHT * 0.5;
    on_ring(angle, tiered_radius(y) * RIBBON_SURFACE_OFFSET, y)
}

fn leaf_point<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let y = rng.gen::<f32>() * TREE_HEIGHT - TREE_HEIGHT * 0.5;
    let (lo, hi) = LEAF_RADIUS_JITTER;
    // the ridges bulge past the base radius near the bottom tier; clamp so
    // assembled leaf radii stay within [0, R * 1.2]
    let radius = (tiered_radius(y) * rng.gen_range(lo..hi)).min(TREE_BASE_RADIUS * hi);
    let angle = rng.gen::<f32>() * TAU;
    on_ring(angle, radius, y)
}

fn ornament_point<R: Rng + ?Sized>(rng: &mut R, index: usize, count: usize) -> Vec3 {
    if index as f32 > count as f32 * ORNAMENT_APEX_FRACTION {
        let angle = rng.gen::<f32>() * TAU;
        let r = rng.gen::<f32>() * ORNAMENT_APEX_RADIUS;
        let (lo, hi) = ORNAMENT_APEX_Y;
        on_ring(angle, r, rng.gen_range(lo..hi))
    } else {
        let y = rng.gen::<f32>() * TREE_HEIGHT - TREE_HEIGHT * 0.5 + ORNAMENT_Y_SHIFT;
        let radius = tiered_radius(y) * ORNAMENT_SURFACE_OFFSET;
        let angle = rng.gen::<f32>() * TAU;
        on_ring(angle, radius, y)
    }
}

fn scatter_point<R: Rng + ?Sized>(rng: &mut R, half_extent: f32) -> Vec3 {
    let mut axis = || (rng.gen::<f32>() - 0.5) * 2.0 * half_extent;
    Vec3::new(axis(), axis(), axis())
}

/// Assembled and dispersed targets for one group, index-aligned.
#[derive(Clone, Debug)]
pub struct GroupLayout {
    pub group: ParticleGroup,
    pub assembled: Vec<Vec3>,
    pub dispersed: Vec<Vec3>,
}

impl GroupLayout {
    pub fn generate<R: Rng + ?Sized>(group: ParticleGroup, count: usize, rng: &mut R) -> Self {
        let mut assembled = Vec::with_capacity(count);
        let mut dispersed = Vec::with_capacity(count);
        for i in 0..count {
            let tree = match group {
                ParticleGroup::Leaf => leaf_point(rng),
                ParticleGroup::Ornament => ornament_point(rng, i, count),
                ParticleGroup::Ribbon => ribbon_helix_point(i, count),
            };
            assembled.push(tree);
            dispersed.push(scatter_point(rng, group.scatter()));
        }
        Self {
            group,
            assembled,
            dispersed,
        }
    }

    pub fn len(&self) -> usize {
        self.assembled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assembled.is_empty()
    }
}

/// Layouts for all three groups.
#[derive(Clone, Debug)]
pub struct TreeLayout {
    pub groups: [GroupLayout; 3],
}

impl TreeLayout {
    /// Generate every group at its configured size.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let groups = ParticleGroup::ALL.map(|g| GroupLayout::generate(g, g.count(), rng));
        log::info!(
            "[layout] generated {} leaves, {} ornaments, {} ribbon particles",
            groups[0].len(),
            groups[1].len(),
            groups[2].len()
        );
        Self { groups }
    }

    pub fn group(&self, group: ParticleGroup) -> &GroupLayout {
        &self.groups[group.index()]
    }
}
