use glam::Vec2;

/// Logical pixel dimensions of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// Virtual time used to sample the noise field, advanced each frame by the
/// configured rate scaled by the elapsed delta.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    pub t: f32,
}

impl Clock {
    pub fn advance(&mut self, increment: f32, dt: f32) {
        self.t += increment * dt;
    }
}

/// Last known pointer position in surface coordinates.
///
/// Defaults to a sentinel far outside any plausible surface so an absent
/// pointer exerts no force.
#[derive(Debug, Clone, Copy)]
pub struct PointerState {
    pos: Vec2,
}

impl PointerState {
    pub const AWAY: Vec2 = Vec2::new(-9999.0, -9999.0);

    pub fn new() -> Self {
        Self { pos: Self::AWAY }
    }

    pub fn set(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    pub fn clear(&mut self) {
        self.pos = Self::AWAY;
    }

    /// Snapshot for the frame; the update loop reads this once and never
    /// re-reads mid-computation.
    pub fn get(&self) -> Vec2 {
        self.pos
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Seedable random number generator
pub struct FieldRng(pub rand::rngs::StdRng);

impl FieldRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for FieldRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// What happened during one update pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSummary {
    pub respawned: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_defaults_to_away() {
        let pointer = PointerState::new();
        assert_eq!(pointer.get(), PointerState::AWAY);
    }

    #[test]
    fn test_pointer_set_and_clear() {
        let mut pointer = PointerState::new();
        pointer.set(10.0, 20.0);
        assert_eq!(pointer.get(), Vec2::new(10.0, 20.0));
        pointer.clear();
        assert_eq!(pointer.get(), PointerState::AWAY);
    }

    #[test]
    fn test_clock_advance_scales_by_delta() {
        let mut clock = Clock::default();
        clock.advance(0.001, 2.0);
        assert!((clock.t - 0.002).abs() < 1e-6);
        clock.advance(0.001, 1.0);
        assert!((clock.t - 0.003).abs() < 1e-6);
    }

    #[test]
    fn test_surface_clamps_negative_dimensions() {
        let surface = Surface::new(-10.0, 5.0);
        assert_eq!(surface.width, 0.0);
        assert_eq!(surface.height, 5.0);
    }
}
