// Render, post-processing and page wiring constants for the web frontend.

// Background (sRGB)
pub const BACKGROUND_SRGB: [f32; 3] = [0.004, 0.020, 0.008]; // #010502

// Lights (sRGB colors, three.js-style intensities)
pub const AMBIENT_INTENSITY: f32 = 0.2;
pub const KEY_LIGHT_POS: [f32; 3] = [10.0, 10.0, 10.0];
pub const KEY_LIGHT_COLOR: [f32; 3] = [0.063, 0.725, 0.506]; // #10B981
pub const KEY_LIGHT_INTENSITY: f32 = 3.0;
pub const FILL_LIGHT_POS: [f32; 3] = [-10.0, -10.0, -10.0];
pub const FILL_LIGHT_COLOR: [f32; 3] = [0.655, 0.953, 0.816]; // #A7F3D0
pub const FILL_LIGHT_INTENSITY: f32 = 1.5;
pub const SPOT_LIGHT_POS: [f32; 3] = [0.0, 10.0, 0.0];
pub const SPOT_LIGHT_INTENSITY: f32 = 6.0;
pub const SPOT_LIGHT_ANGLE: f32 = 0.4; // radians, half-angle of the cone
pub const SPOT_LIGHT_PENUMBRA: f32 = 1.0; // 0 hard edge .. 1 fully soft
pub const LIGHT_INTENSITY_SCALE: f32 = 0.25; // maps scene intensities to the shader's lambert term

// Gentle bob applied to the whole tree
pub const FLOAT_SPEED: f32 = 2.0;
pub const FLOAT_HEIGHT: f32 = 0.1;
pub const FLOAT_TILT: f32 = 0.02; // radians

// Post-processing
pub const BLOOM_THRESHOLD: f32 = 0.2;
pub const BLOOM_SMOOTHING: f32 = 0.025;
pub const BLOOM_STRENGTH: f32 = 2.0;
pub const VIGNETTE_OFFSET: f32 = 0.1;
pub const VIGNETTE_DARKNESS: f32 = 1.2;
pub const NOISE_OPACITY: f32 = 0.06;

// Camera capture
pub const VIDEO_WIDTH: u32 = 640;
pub const VIDEO_HEIGHT: u32 = 480;

// Page element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const WISH_PANEL_ID: &str = "wish-panel";
pub const WISH_INPUT_ID: &str = "wish-input";
pub const SEND_BUTTON_ID: &str = "wish-send";
pub const RESULT_MODAL_ID: &str = "result-modal";
pub const PLAY_AGAIN_ID: &str = "play-again";
pub const STATUS_TEXT_ID: &str = "status-text";
pub const STATUS_DOT_ID: &str = "status-dot";
pub const MODE_LABEL_ID: &str = "mode-label";
pub const HELP_PANEL_ID: &str = "help-panel";
pub const HAND_VIDEO_ID: &str = "hand-video";
pub const HAND_CURSOR_ID: &str = "hand-cursor";
pub const CAMERA_BUTTON_ID: &str = "camera-start";
pub const CAMERA_SPINNER_ID: &str = "camera-spinner";
pub const SENSOR_LABEL_ID: &str = "sensor-label";
