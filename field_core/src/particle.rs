use glam::Vec2;
use rand::Rng;

use crate::{FieldRng, Surface};

/// Initial velocity jitter per axis
const SPAWN_SPEED: f32 = 0.25;

/// A single particle in the flow field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub age: f32,
}

impl Particle {
    /// Spawn at a uniformly random position with a small random drift and a
    /// random starting age in [0, max_age), so the population does not
    /// recycle in lockstep.
    pub fn spawn(rng: &mut FieldRng, surface: &Surface, max_age: f32) -> Self {
        let mut particle = Self::fresh(rng, surface);
        particle.age = uniform(rng, max_age);
        particle
    }

    /// Redraw position and velocity in place; age restarts at exactly zero.
    pub fn respawn(&mut self, rng: &mut FieldRng, surface: &Surface) {
        *self = Self::fresh(rng, surface);
    }

    fn fresh(rng: &mut FieldRng, surface: &Surface) -> Self {
        Self {
            pos: Vec2::new(uniform(rng, surface.width), uniform(rng, surface.height)),
            vel: Vec2::new(
                rng.0.gen_range(-SPAWN_SPEED..SPAWN_SPEED),
                rng.0.gen_range(-SPAWN_SPEED..SPAWN_SPEED),
            ),
            age: 0.0,
        }
    }
}

// gen_range panics on an empty range, so a collapsed surface spawns at 0.
fn uniform(rng: &mut FieldRng, limit: f32) -> f32 {
    if limit > 0.0 {
        rng.0.gen_range(0.0..limit)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_inside_surface_with_random_age() {
        let mut rng = FieldRng::new(7);
        let surface = Surface::new(640.0, 480.0);
        for _ in 0..100 {
            let p = Particle::spawn(&mut rng, &surface, 500.0);
            assert!(p.pos.x >= 0.0 && p.pos.x < 640.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 480.0);
            assert!(p.age >= 0.0 && p.age < 500.0);
            assert!(p.vel.x.abs() <= SPAWN_SPEED && p.vel.y.abs() <= SPAWN_SPEED);
        }
    }

    #[test]
    fn test_respawn_resets_age_to_zero() {
        let mut rng = FieldRng::new(7);
        let surface = Surface::new(640.0, 480.0);
        let mut p = Particle::spawn(&mut rng, &surface, 500.0);
        p.age = 501.0;
        p.respawn(&mut rng, &surface);
        assert_eq!(p.age, 0.0);
    }

    #[test]
    fn test_spawn_on_zero_sized_surface_does_not_panic() {
        let mut rng = FieldRng::new(7);
        let surface = Surface::new(0.0, 0.0);
        let p = Particle::spawn(&mut rng, &surface, 500.0);
        assert_eq!(p.pos, Vec2::ZERO);
    }
}
