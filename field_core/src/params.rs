use crate::render::Color;

/// Tuning parameters for the flow-field background
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Particles
    pub const PARTICLE_COUNT: usize = 150;
    pub const COARSE_PARTICLE_COUNT: usize = 60; // touch devices get fewer, bigger dots
    pub const PARTICLE_RADIUS: f32 = 2.0;
    pub const COARSE_PARTICLE_RADIUS: f32 = 3.0;
    pub const PARTICLE_COLOR: Color = Color::rgb(0x63, 0x66, 0xf1);
    pub const PARTICLE_ALPHA: f32 = 0.6;

    // Flow field
    pub const NOISE_SCALE: f32 = 0.005;
    pub const NOISE_STRENGTH: f32 = 0.3;
    pub const TIME_INCREMENT: f32 = 0.001;

    // Pointer repulsion
    pub const POINTER_RADIUS: f32 = 120.0;
    pub const POINTER_STRENGTH: f32 = 3.0;

    // Motion
    pub const MAX_SPEED: f32 = 2.0;
    pub const MAX_AGE: f32 = 500.0; // frame-equivalent units
    pub const DAMPING: f32 = 0.98;

    // Trail fade
    pub const FADE_ALPHA: f32 = 0.08;
    pub const BG_LIGHT: Color = Color::rgb(255, 255, 255);
    pub const BG_DARK: Color = Color::rgb(15, 23, 42);
}
