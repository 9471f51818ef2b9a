use glam::Vec2;

use crate::{Config, DeviceClass, Particle};

/// Plain RGB triple; alpha travels separately on each command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Page theme, chosen by the host each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// One drawing operation for the host surface to execute
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Translucent full-surface rectangle. Leaves trails by never fully
    /// clearing the previous frame.
    Fade { color: Color, alpha: f32 },
    /// Filled circle at a particle position
    Dot {
        pos: Vec2,
        radius: f32,
        color: Color,
        alpha: f32,
    },
}

/// Draw commands for one frame, in execution order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

/// Emit the fade pass followed by one dot per particle, in particle order.
pub fn render(
    particles: &[Particle],
    config: &Config,
    device: DeviceClass,
    theme: Theme,
) -> Frame {
    let mut commands = Vec::with_capacity(particles.len() + 1);

    let bg = match theme {
        Theme::Light => config.bg_light,
        Theme::Dark => config.bg_dark,
    };
    commands.push(DrawCommand::Fade {
        color: bg,
        alpha: config.fade_alpha,
    });

    let radius = config.radius_for(device);
    for particle in particles {
        commands.push(DrawCommand::Dot {
            pos: particle.pos,
            radius,
            color: config.particle_color,
            alpha: config.particle_alpha,
        });
    }

    Frame { commands }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldRng, Surface};

    fn particles(n: usize) -> Vec<Particle> {
        let mut rng = FieldRng::new(3);
        let surface = Surface::new(100.0, 100.0);
        (0..n)
            .map(|_| Particle::spawn(&mut rng, &surface, 500.0))
            .collect()
    }

    #[test]
    fn test_fade_comes_first_then_one_dot_per_particle() {
        let config = Config::new();
        let frame = render(&particles(5), &config, DeviceClass::Fine, Theme::Light);
        assert_eq!(frame.commands.len(), 6);
        assert!(matches!(frame.commands[0], DrawCommand::Fade { .. }));
        assert!(frame.commands[1..]
            .iter()
            .all(|c| matches!(c, DrawCommand::Dot { .. })));
    }

    #[test]
    fn test_theme_selects_background() {
        let config = Config::new();
        let light = render(&[], &config, DeviceClass::Fine, Theme::Light);
        let dark = render(&[], &config, DeviceClass::Fine, Theme::Dark);
        assert_eq!(
            light.commands[0],
            DrawCommand::Fade {
                color: config.bg_light,
                alpha: config.fade_alpha
            }
        );
        assert_eq!(
            dark.commands[0],
            DrawCommand::Fade {
                color: config.bg_dark,
                alpha: config.fade_alpha
            }
        );
    }

    #[test]
    fn test_coarse_device_uses_larger_radius() {
        let config = Config::new();
        let frame = render(&particles(1), &config, DeviceClass::Coarse, Theme::Light);
        match frame.commands[1] {
            DrawCommand::Dot { radius, .. } => {
                assert_eq!(radius, config.coarse_particle_radius)
            }
            _ => panic!("expected a dot"),
        }
    }
}
