// Simulation and rendering tuning constants shared by every frontend.

// Pointer interaction
pub const INTERACTION_RADIUS: f32 = 150.0; // repulsion falls to zero at this distance
pub const INTERACTION_STRENGTH: f32 = 0.01; // velocity change at full force

// Motion
pub const RETURN_FORCE: f32 = 0.001; // homing spring constant toward origin
pub const FRICTION: f32 = 0.99; // per-frame velocity retention
pub const BOUNCE_DAMPING: f32 = 0.8; // velocity retained on wall hit

// Life cycle and breathing
pub const AGE_STEP: f32 = 0.5;
pub const MAX_AGE: f32 = 100.0;
pub const OPACITY_MIN: f32 = 0.2;
pub const OPACITY_MAX: f32 = 1.0;
pub const BREATHE_RATE: f32 = 0.1; // radians per unit of age
pub const BREATHE_DEPTH: f32 = 0.3;
pub const BREATHE_BASE: f32 = 0.7; // breathe oscillates in [BASE - DEPTH, BASE + DEPTH]

// Spawning
pub const MIN_RADIUS: f32 = 1.0;

// Connections
pub const LINE_ALPHA_MAX: f32 = 0.5;
pub const POINTER_LINE_ALPHA_MAX: f32 = 0.8;
pub const POINTER_REACH_FACTOR: f32 = 1.5; // pointer lines reach 1.5x the particle threshold
pub const LINE_WIDTH: f32 = 0.5;
pub const POINTER_LINE_WIDTH: f32 = 1.0;
pub const GLOW_RADIUS: f32 = 100.0;

// Configuration limits
pub const MAX_PARTICLE_COUNT: usize = 2000;

// Frame reporting
pub const FRAME_REPORT_INTERVAL_SEC: f32 = 5.0;
