use crate::{Particle, Surface};

/// Cap speed at `max_speed`, preserving direction.
pub fn clamp_speed(particle: &mut Particle, max_speed: f32) {
    let speed = particle.vel.length();
    if speed > max_speed {
        particle.vel = particle.vel / speed * max_speed;
    }
}

/// Advance position by one frame-equivalent unit of velocity. Forces are
/// applied once per step on the same convention, so neither is scaled by
/// the wall-clock delta here.
pub fn integrate(particle: &mut Particle) {
    particle.pos += particle.vel;
}

/// Toroidal wrap into [0, width) x [0, height). Zero-sized axes are left
/// untouched so a collapsed surface never produces NaN.
pub fn wrap(particle: &mut Particle, surface: &Surface) {
    if surface.width > 0.0 {
        particle.pos.x = wrap_axis(particle.pos.x, surface.width);
    }
    if surface.height > 0.0 {
        particle.pos.y = wrap_axis(particle.pos.y, surface.height);
    }
}

// rem_euclid of a tiny negative value can round up to the limit itself;
// fold that case back to zero to keep the interval half-open.
fn wrap_axis(value: f32, limit: f32) -> f32 {
    let wrapped = value.rem_euclid(limit);
    if wrapped >= limit {
        0.0
    } else {
        wrapped
    }
}

/// Bleed off velocity so repeated forcing cannot grow speed without bound.
pub fn damp(particle: &mut Particle, damping: f32) {
    particle.vel *= damping;
}
