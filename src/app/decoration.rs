//! Ambient floating hearts.
//!
//! The particle set is rolled once, after the first frame has been drawn,
//! and then held for the rest of the session. Particles never touch any
//! other state.

use rand::RngExt;

pub const PARTICLE_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position in percent of the screen width, `0..=100`.
    pub x: f64,
    /// Seconds per rise, `3..=5`.
    pub duration: f64,
    /// Seconds before the first rise, `0..=3`.
    pub delay: f64,
}

/// Where a particle sits at a given instant. All values are fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFrame {
    pub column: f64,
    /// 0 just below the bottom edge, 1 at the top.
    pub rise: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn random<R: RngExt>(rng: &mut R) -> Self {
        Self {
            x: rng.random_range(0.0..=100.0),
            duration: rng.random_range(3.0..=5.0),
            delay: rng.random_range(0.0..=3.0),
        }
    }

    /// Position `elapsed` seconds after mount, looping forever. `None` until
    /// the start delay has passed.
    pub fn frame(&self, elapsed: f64) -> Option<ParticleFrame> {
        if elapsed < self.delay || self.duration <= 0.0 {
            return None;
        }
        let phase = ((elapsed - self.delay) / self.duration).fract();
        // Opacity keyframes 0 -> 1 -> 0 over one rise.
        let opacity = if phase < 0.5 {
            phase * 2.0
        } else {
            (1.0 - phase) * 2.0
        };
        Some(ParticleFrame {
            column: self.x / 100.0,
            rise: ease_in_out(phase),
            opacity,
        })
    }
}

fn ease_in_out(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[derive(Debug, Default)]
pub struct Decorations {
    particles: Vec<Particle>,
    seeded: bool,
}

impl Decorations {
    /// Roll the particle set. Only the first call has any effect; returns
    /// whether this call was the one that seeded.
    pub fn seed<R: RngExt>(&mut self, rng: &mut R) -> bool {
        if self.seeded {
            return false;
        }
        self.particles = (0..PARTICLE_COUNT).map(|_| Particle::random(rng)).collect();
        self.seeded = true;
        true
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
