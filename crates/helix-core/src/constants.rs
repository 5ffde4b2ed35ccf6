use glam::Vec3;
use std::f32::consts::PI;

// Shared scene tuning constants used by the core pipeline and the web frontend.

// Helix path
pub const HELIX_RADIUS: f32 = 3.0; // base radius around the skeleton
pub const HELIX_RADIUS_VARIATION: f32 = 0.3; // amplitude of the sin(4πt) perturbation
pub const HELIX_BASE_Y: f32 = 0.0; // vertical centre of the path
pub const HELIX_VERTICAL_SPAN: f32 = 2.5; // total rise from t=0 to t=1
pub const HELIX_TOTAL_SWEEP: f32 = PI * 2.5; // 1.25 turns end to end
pub const HELIX_SCROLL_MULTIPLIER: f32 = 1.5; // helix turns added over the full scroll range

// Prominence score weights
pub const DEPTH_WEIGHT_Z: f32 = 0.7;
pub const DEPTH_WEIGHT_FORWARD: f32 = 1.5;

// Camera orbit
pub const CAMERA_BASE_DISTANCE: f32 = 7.5;
pub const CAMERA_DISTANCE_SWING: f32 = 0.8; // breathing amplitude around the base distance
pub const CAMERA_DEFAULT_DISTANCE: f32 = 8.0; // before the first scroll sample
pub const CAMERA_HEIGHT_SWAY: f32 = 0.8; // vertical drift as the orbit advances
pub const CAMERA_HOME: Vec3 = Vec3::new(0.0, 0.0, 8.0);
pub const CAMERA_FOVY_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Skeleton
pub const SKELETON_SCROLL_TURN: f32 = 0.3; // fraction of π added over the scroll range
pub const SKELETON_IDLE_RATE: f32 = 0.05; // rad/s
pub const SKELETON_BOB_FREQ: f32 = 0.8;
pub const SKELETON_BOB_AMPLITUDE: f32 = 0.15;
pub const SKELETON_PULSE_FREQ: f32 = 0.6;
pub const SKELETON_PULSE_AMPLITUDE: f32 = 0.02;

// Per-frame smoothing factors, expressed at the reference frame rate
pub const REFERENCE_FPS: f32 = 60.0;
pub const CAMERA_SMOOTHING: f32 = 0.05;
pub const SKELETON_BLEND: f32 = 0.1;
pub const TILT_SMOOTHING: f32 = 0.05;
pub const CARD_LERP: f32 = 0.15;
pub const HOVER_TILT_LERP: f32 = 0.2;

// Pointer parallax
pub const POINTER_MAX_TILT: f32 = 0.3; // radians
pub const POINTER_TILT_SCALE: f32 = 0.5;

// Card presentation targets (active, inactive)
pub const CARD_SCALE: (f32, f32) = (1.2, 1.0);
pub const CARD_OPACITY: (f32, f32) = (0.95, 0.25);
pub const CARD_FORWARD_OFFSET: (f32, f32) = (0.8, 0.0);
pub const CARD_EMISSIVE: (f32, f32) = (0.7, 0.08);
pub const CARD_HOVER_SCALE: f32 = 1.05;
pub const CARD_HOVER_OPACITY: f32 = 0.03;
pub const CARD_HOVER_EMISSIVE: f32 = 0.2;
pub const CARD_HOVER_TILT: f32 = 0.08;
pub const CARD_LOOK_Y_FACTOR: f32 = 0.3; // cards look at (0, y * factor, 0)
pub const CARD_ROLL_TILT: f32 = 0.1;
pub const CARD_PITCH_TILT: f32 = 0.05;
pub const CARD_INITIAL_OPACITY: f32 = 0.6;

// Scroll sections
pub const SCROLL_SECTION_HEIGHT_VH: u32 = 100;
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 50.0;

// Particle decoration
pub const PARTICLE_COUNT: usize = 1000;
pub const PARTICLE_BOUND: f32 = 10.0;
pub const PARTICLE_MAX_SPEED: f32 = 0.005;
pub const PARTICLE_SPEED_SCALE: f32 = 10.0;
pub const PARTICLE_SEED: u64 = 0x5EED_CA7A_106;

// Picking
pub const CARD_PICK_RADIUS: f32 = 1.0; // bounding sphere of a 2.5 x 1.4 card
