use std::time::Duration;

// Shared simulation tuning constants. Fixed at build time.

// Particle groups
pub const LEAF_COUNT: usize = 5000;
pub const ORNAMENT_COUNT: usize = 1000;
pub const RIBBON_COUNT: usize = 1000;
pub const TOTAL_COUNT: usize = LEAF_COUNT + ORNAMENT_COUNT + RIBBON_COUNT;

pub const LEAF_SCALE: f32 = 0.14;
pub const ORNAMENT_SCALE: f32 = 0.14;
pub const RIBBON_SCALE: f32 = 0.035;

// Tree silhouette
pub const TREE_HEIGHT: f32 = 8.0;
pub const TREE_BASE_RADIUS: f32 = 3.5;
pub const TREE_TIERS: f32 = 5.0;
pub const TIER_RIDGE_DEPTH: f32 = 0.4; // sin² ridge amplitude relative to the taper

pub const LEAF_RADIUS_JITTER: (f32, f32) = (0.8, 1.2);
pub const ORNAMENT_SURFACE_OFFSET: f32 = 1.05; // ornaments sit just outside the leaves
pub const ORNAMENT_APEX_FRACTION: f32 = 0.95; // indices above this share of the group form the treetop
pub const ORNAMENT_APEX_RADIUS: f32 = 0.3;
pub const ORNAMENT_APEX_Y: (f32, f32) = (4.2, 4.7);
pub const ORNAMENT_Y_SHIFT: f32 = 0.2; // ornament band starts slightly above the trunk
pub const RIBBON_SURFACE_OFFSET: f32 = 1.1;
pub const RIBBON_TURNS: f32 = 4.0;

// Dispersed cloud half-extents
pub const LEAF_SCATTER: f32 = 10.0;
pub const ORNAMENT_SCATTER: f32 = 12.5;
pub const RIBBON_SCATTER: f32 = 7.5;

// Interpolation
pub const IDLE_LERP_RATE: f32 = 3.0;
pub const TRANSMIT_LERP_RATE: f32 = 5.0;
pub const SWAY_AMPLITUDE: f32 = 0.02;
pub const TILT_PER_UNIT: f32 = 0.1; // rotation derived from position
pub const DISPERSED_SCALE_FACTOR: f32 = 0.4;
pub const TRANSMIT_RIBBON_SCALE_BOOST: f32 = 1.5;
pub const TRANSMIT_RIBBON_SPIN: f32 = 10.0;

// Transmission spiral
pub const SPIRAL_SPEED: f32 = 12.0; // radians per second
pub const SPIRAL_UPWARD_SPEED: f32 = 10.0; // units per second
pub const SPIRAL_WRAP_HEIGHT: f32 = 12.0;
pub const SPIRAL_TOP: f32 = 4.0;
pub const SPIRAL_FLARE: f32 = 0.4;
pub const SPIRAL_MIN_RADIUS: f32 = 0.1;

// Gestures
pub const PINCH_THRESHOLD: f32 = 0.05; // normalized image units
pub const ROTATION_SMOOTHING: f32 = 0.1; // per-frame blend toward the hand-derived angle
pub const TRACKING_STALL_FRAMES: u32 = 90; // render frames without a landmark publish

// Wish sequence
pub const TRANSMIT_DURATION: Duration = Duration::from_millis(3200);

// Materials (linear-ish sRGB triples)
pub const LEAF_COLOR: [f32; 3] = [0.655, 0.953, 0.816]; // #A7F3D0
pub const LEAF_EMISSIVE: [f32; 3] = [0.063, 0.725, 0.506]; // #10B981
pub const ORNAMENT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const ORNAMENT_EMISSIVE: [f32; 3] = [0.0, 1.0, 0.0];
pub const RIBBON_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const RIBBON_EMISSIVE_IDLE: [f32; 3] = [0.8, 1.0, 0.8]; // #ccffcc
pub const RIBBON_EMISSIVE_TRANSMIT: [f32; 3] = [0.0, 1.0, 0.255]; // #00ff41
pub const RIBBON_OPACITY: f32 = 0.9;

// (idle, transmitting)
pub const LEAF_EMISSIVE_INTENSITY: (f32, f32) = (0.8, 1.5);
pub const ORNAMENT_EMISSIVE_INTENSITY: (f32, f32) = (0.1, 2.0);
pub const RIBBON_EMISSIVE_INTENSITY: (f32, f32) = (3.0, 10.0);

// Orbit camera
pub const CAMERA_DISTANCE: f32 = 15.0;
pub const CAMERA_MIN_DISTANCE: f32 = 5.0;
pub const CAMERA_MAX_DISTANCE: f32 = 25.0;
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_AUTO_ROTATE_SPEED: f32 = 0.5; // three.js units: one turn per 60s at 1.0
pub const CAMERA_ZOOM_STEP: f32 = 0.95;
