use glam::Vec2;

use crate::field::{flow_angle, FlowField};
use crate::{Config, Particle};

/// Steer along the noise field: the flow angle at the particle's position
/// becomes an acceleration of fixed magnitude.
pub fn flow_force(particle: &mut Particle, field: &dyn FlowField, t: f32, config: &Config) {
    let angle = flow_angle(field, particle.pos, config.noise_scale, t);
    particle.vel += Vec2::new(angle.cos(), angle.sin()) * config.noise_strength;
}

/// Push the particle away from the pointer. Strength decays linearly to
/// zero at the radius boundary. The squared-distance gate excludes exact
/// overlap, where no direction is defined.
pub fn pointer_force(particle: &mut Particle, pointer: Vec2, config: &Config) {
    let away = particle.pos - pointer;
    let dist_sq = away.length_squared();
    let radius_sq = config.pointer_radius * config.pointer_radius;
    if dist_sq > 0.0 && dist_sq < radius_sq {
        let dist = dist_sq.sqrt();
        let strength = (1.0 - dist / config.pointer_radius) * config.pointer_strength;
        particle.vel += away / dist * strength;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still_particle(x: f32, y: f32) -> Particle {
        Particle {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            age: 0.0,
        }
    }

    #[test]
    fn test_pointer_force_pushes_away_from_pointer() {
        let config = Config::new();
        let mut p = still_particle(110.0, 100.0);
        pointer_force(&mut p, Vec2::new(100.0, 100.0), &config);
        assert!(p.vel.x > 0.0, "should push along +x, got {:?}", p.vel);
        assert_eq!(p.vel.y, 0.0);
    }

    #[test]
    fn test_pointer_force_zero_at_and_beyond_radius() {
        let config = Config::new();
        let pointer = Vec2::new(0.0, 0.0);
        let mut at_radius = still_particle(config.pointer_radius, 0.0);
        pointer_force(&mut at_radius, pointer, &config);
        assert_eq!(at_radius.vel, Vec2::ZERO);

        let mut beyond = still_particle(config.pointer_radius * 2.0, 0.0);
        pointer_force(&mut beyond, pointer, &config);
        assert_eq!(beyond.vel, Vec2::ZERO);
    }

    #[test]
    fn test_pointer_force_zero_at_exact_overlap() {
        let config = Config::new();
        let mut p = still_particle(50.0, 50.0);
        pointer_force(&mut p, Vec2::new(50.0, 50.0), &config);
        assert_eq!(p.vel, Vec2::ZERO);
    }

    #[test]
    fn test_pointer_force_decays_with_distance() {
        let config = Config::new();
        let pointer = Vec2::ZERO;
        let mut near = still_particle(10.0, 0.0);
        let mut far = still_particle(100.0, 0.0);
        pointer_force(&mut near, pointer, &config);
        pointer_force(&mut far, pointer, &config);
        assert!(near.vel.length() > far.vel.length());
    }

    #[test]
    fn test_flow_force_magnitude_is_noise_strength() {
        struct Constant(f64);
        impl FlowField for Constant {
            fn sample(&self, _: f64, _: f64, _: f64) -> f64 {
                self.0
            }
        }
        let config = Config::new();
        let mut p = still_particle(10.0, 10.0);
        flow_force(&mut p, &Constant(0.25), 0.0, &config);
        assert!((p.vel.length() - config.noise_strength).abs() < 1e-5);
    }
}
