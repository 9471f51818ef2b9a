use crate::{Config, FieldRng, Particle, Surface};

/// Age by `dt` and recycle once strictly past the configured lifetime.
/// Returns true when the particle was recycled; callers skip the rest of
/// its update for this frame.
pub fn age_and_recycle(
    particle: &mut Particle,
    dt: f32,
    surface: &Surface,
    config: &Config,
    rng: &mut FieldRng,
) -> bool {
    particle.age += dt;
    if particle.age > config.max_age {
        particle.respawn(rng, surface);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (Config, Surface, FieldRng) {
        (Config::new(), Surface::new(640.0, 480.0), FieldRng::new(7))
    }

    #[test]
    fn test_age_at_exact_limit_is_not_recycled() {
        let (config, surface, mut rng) = setup();
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            age: config.max_age - 1.0,
        };
        assert!(!age_and_recycle(&mut p, 1.0, &surface, &config, &mut rng));
        assert_eq!(p.age, config.max_age);
    }

    #[test]
    fn test_age_past_limit_recycles_with_zero_age() {
        let (config, surface, mut rng) = setup();
        let mut p = Particle {
            pos: Vec2::new(1.0, 2.0),
            vel: Vec2::new(0.1, 0.1),
            age: config.max_age,
        };
        assert!(age_and_recycle(&mut p, 0.5, &surface, &config, &mut rng));
        assert_eq!(p.age, 0.0);
    }
}
