use crate::render::{self, Frame, Theme};
use crate::systems::{forces, lifetime, movement};
use crate::{
    Clock, Config, DeviceClass, EngineError, FieldRng, FlowField, Particle, PointerState,
    SimplexField, StepSummary, Surface,
};

/// The flow-field engine: owns every piece of mutable animation state and
/// advances it one frame at a time. Callers hold an instance; there are no
/// process-wide singletons, so independent engines can run side by side and
/// tests can replay fixed seeds.
pub struct Engine {
    config: Config,
    device: DeviceClass,
    surface: Surface,
    particles: Vec<Particle>,
    clock: Clock,
    pointer: PointerState,
    rng: FieldRng,
    field: Box<dyn FlowField>,
    running: bool,
}

impl Engine {
    /// Build an engine over simplex noise, seeding both the noise field and
    /// the particle generator from `seed`.
    pub fn new(
        config: Config,
        surface: Surface,
        device: DeviceClass,
        seed: u64,
    ) -> Result<Self, EngineError> {
        let field = Box::new(SimplexField::new(seed as u32));
        Self::with_field(config, surface, device, seed, field)
    }

    /// Build an engine around any noise primitive.
    pub fn with_field(
        config: Config,
        surface: Surface,
        device: DeviceClass,
        seed: u64,
        field: Box<dyn FlowField>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let mut rng = FieldRng::new(seed);
        let count = config.count_for(device);
        let particles = (0..count)
            .map(|_| Particle::spawn(&mut rng, &surface, config.max_age))
            .collect();
        log::info!(
            "flow field engine: {} particles on {:.0}x{:.0}",
            count,
            surface.width,
            surface.height
        );
        Ok(Self {
            config,
            device,
            surface,
            particles,
            clock: Clock::default(),
            pointer: PointerState::new(),
            rng,
            field,
            running: true,
        })
    }

    /// Advance the simulation by `dt` frame-equivalent units. Particles are
    /// updated in a stable order; the pointer is snapshotted once for the
    /// whole pass. No-op while halted.
    pub fn step(&mut self, dt: f32) -> StepSummary {
        let mut summary = StepSummary::default();
        if !self.running {
            return summary;
        }

        self.clock.advance(self.config.time_increment, dt);
        let pointer = self.pointer.get();

        for particle in &mut self.particles {
            if lifetime::age_and_recycle(particle, dt, &self.surface, &self.config, &mut self.rng)
            {
                summary.respawned += 1;
                continue;
            }
            forces::flow_force(particle, self.field.as_ref(), self.clock.t, &self.config);
            forces::pointer_force(particle, pointer, &self.config);
            movement::clamp_speed(particle, self.config.max_speed);
            movement::integrate(particle);
            movement::wrap(particle, &self.surface);
            movement::damp(particle, self.config.damping);
        }

        summary
    }

    /// Advance and produce this frame's draw commands. A halted engine
    /// yields an empty frame, so no surface mutation can follow a halt.
    pub fn frame(&mut self, dt: f32, theme: Theme) -> Frame {
        if !self.running {
            return Frame::default();
        }
        self.step(dt);
        render::render(&self.particles, &self.config, self.device, theme)
    }

    /// Adopt new surface dimensions and redraw the whole particle set.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface = Surface::new(width, height);
        log::debug!(
            "flow field engine: resize to {:.0}x{:.0}",
            self.surface.width,
            self.surface.height
        );
        let count = self.config.count_for(self.device);
        self.particles = (0..count)
            .map(|_| Particle::spawn(&mut self.rng, &self.surface, self.config.max_age))
            .collect();
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer.set(x, y);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer.clear();
    }

    /// Stop producing frames. Immediate and idempotent.
    pub fn halt(&mut self) {
        self.running = false;
    }

    /// Resume producing frames. Idempotent.
    pub fn resume(&mut self) {
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
