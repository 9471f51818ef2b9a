use crate::render::Color;
use crate::{EngineError, Params};

/// Pointer coarseness of the host device, queried once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    #[default]
    Fine,
    Coarse,
}

/// Engine configuration, read-only for the lifetime of an engine.
#[derive(Debug, Clone)]
pub struct Config {
    pub particle_count: usize,
    pub coarse_particle_count: usize,
    pub particle_radius: f32,
    pub coarse_particle_radius: f32,
    pub particle_color: Color,
    pub particle_alpha: f32,
    pub noise_scale: f32,
    pub noise_strength: f32,
    pub time_increment: f32,
    pub pointer_radius: f32,
    pub pointer_strength: f32,
    pub max_speed: f32,
    pub max_age: f32,
    pub damping: f32,
    pub fade_alpha: f32,
    pub bg_light: Color,
    pub bg_dark: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particle_count: Params::PARTICLE_COUNT,
            coarse_particle_count: Params::COARSE_PARTICLE_COUNT,
            particle_radius: Params::PARTICLE_RADIUS,
            coarse_particle_radius: Params::COARSE_PARTICLE_RADIUS,
            particle_color: Params::PARTICLE_COLOR,
            particle_alpha: Params::PARTICLE_ALPHA,
            noise_scale: Params::NOISE_SCALE,
            noise_strength: Params::NOISE_STRENGTH,
            time_increment: Params::TIME_INCREMENT,
            pointer_radius: Params::POINTER_RADIUS,
            pointer_strength: Params::POINTER_STRENGTH,
            max_speed: Params::MAX_SPEED,
            max_age: Params::MAX_AGE,
            damping: Params::DAMPING,
            fade_alpha: Params::FADE_ALPHA,
            bg_light: Params::BG_LIGHT,
            bg_dark: Params::BG_DARK,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Particle budget for the given device class
    pub fn count_for(&self, device: DeviceClass) -> usize {
        match device {
            DeviceClass::Fine => self.particle_count,
            DeviceClass::Coarse => self.coarse_particle_count,
        }
    }

    /// Dot radius for the given device class
    pub fn radius_for(&self, device: DeviceClass) -> f32 {
        match device {
            DeviceClass::Fine => self.particle_radius,
            DeviceClass::Coarse => self.coarse_particle_radius,
        }
    }

    /// Reject values that would make the simulation meaningless or unsafe
    /// to sample. Runtime inputs are never validated; they are clamped or
    /// wrapped instead.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            return Err(EngineError::config(format!(
                "max_speed must be finite and positive, got {}",
                self.max_speed
            )));
        }
        if !self.pointer_radius.is_finite() || self.pointer_radius < 0.0 {
            return Err(EngineError::config(format!(
                "pointer_radius must be finite and non-negative, got {}",
                self.pointer_radius
            )));
        }
        if !self.noise_scale.is_finite() {
            return Err(EngineError::config(format!(
                "noise_scale must be finite, got {}",
                self.noise_scale
            )));
        }
        if !self.max_age.is_finite() || self.max_age <= 0.0 {
            return Err(EngineError::config(format!(
                "max_age must be finite and positive, got {}",
                self.max_age
            )));
        }
        Ok(())
    }
}
