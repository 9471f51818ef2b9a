use glam::Vec2;
use noise::{NoiseFn, OpenSimplex};
use std::f32::consts::TAU;

/// A deterministic scalar noise field sampled in space and time.
///
/// Implementations map (x, y, t) to a value in [-1, 1]; identical inputs
/// must produce identical outputs. The engine depends only on this
/// signature, never on a concrete noise library.
pub trait FlowField {
    fn sample(&self, x: f64, y: f64, t: f64) -> f64;
}

/// Simplex noise field backing the production engine
pub struct SimplexField {
    noise: OpenSimplex,
}

impl SimplexField {
    pub fn new(seed: u32) -> Self {
        Self {
            noise: OpenSimplex::new(seed),
        }
    }
}

impl FlowField for SimplexField {
    fn sample(&self, x: f64, y: f64, t: f64) -> f64 {
        self.noise.get([x, y, t])
    }
}

/// Flow direction at a point: the noise sample scaled to a full turn.
/// Negative samples simply wind the other way around the circle.
pub fn flow_angle(field: &dyn FlowField, pos: Vec2, scale: f32, t: f32) -> f32 {
    let value = field.sample((pos.x * scale) as f64, (pos.y * scale) as f64, t as f64);
    value as f32 * TAU
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_samples() {
        let a = SimplexField::new(42);
        let b = SimplexField::new(42);
        for i in 0..50 {
            let x = i as f64 * 0.37;
            let y = i as f64 * 0.91;
            assert_eq!(a.sample(x, y, 0.5), b.sample(x, y, 0.5));
        }
    }

    #[test]
    fn test_samples_stay_in_unit_interval() {
        let field = SimplexField::new(7);
        for i in 0..200 {
            let v = field.sample(i as f64 * 0.13, i as f64 * 0.29, i as f64 * 0.01);
            assert!((-1.0..=1.0).contains(&v), "sample out of range: {v}");
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = SimplexField::new(1);
        let b = SimplexField::new(2);
        let diverged = (0..50).any(|i| {
            let x = 0.5 + i as f64 * 0.31;
            a.sample(x, x, 0.0) != b.sample(x, x, 0.0)
        });
        assert!(diverged);
    }

    #[test]
    fn test_flow_angle_spans_at_most_a_turn_each_way() {
        let field = SimplexField::new(7);
        for i in 0..100 {
            let pos = Vec2::new(i as f32 * 3.7, i as f32 * 1.3);
            let angle = flow_angle(&field, pos, 0.005, 0.1);
            assert!(angle.abs() <= TAU);
        }
    }
}
