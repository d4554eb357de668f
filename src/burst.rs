// A single firework: a rocket climbing toward its target height, which then
// bursts into a cloud of fading particles.

use crate::color::Color;
use crate::config::FireworksConfig;
use crate::particle::Particle;
use crate::renderer::Surface;
use crate::utils::random_between;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub enum BurstState {
    Ascending { y: f64, target_y: f64 },
    // Position is frozen once exploded, only the particles move
    Exploded { y: f64, particles: Vec<Particle> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Burst {
    pub x: f64,
    pub color: Color,
    pub state: BurstState,
}

impl Burst {
    pub fn launch(x: f64, y: f64, target_y: f64, color: Color) -> Burst {
        Burst {
            x,
            color,
            state: BurstState::Ascending { y, target_y },
        }
    }

    pub fn y(&self) -> f64 {
        match self.state {
            BurstState::Ascending { y, .. } | BurstState::Exploded { y, .. } => y,
        }
    }

    pub fn is_exploded(&self) -> bool {
        matches!(self.state, BurstState::Exploded { .. })
    }

    pub fn particles(&self) -> &[Particle] {
        match &self.state {
            BurstState::Ascending { .. } => &[],
            BurstState::Exploded { particles, .. } => particles,
        }
    }

    // Exploded with every particle faded away, ready to be dropped by the show.
    pub fn is_done(&self) -> bool {
        match &self.state {
            BurstState::Ascending { .. } => false,
            BurstState::Exploded { particles, .. } => particles.is_empty(),
        }
    }

    pub fn update<R: Rng + ?Sized>(&mut self, config: &FireworksConfig, rng: &mut R) {
        let burst_at = match &mut self.state {
            BurstState::Ascending { y, target_y } => {
                *y -= config.ascent_step;
                if *y <= *target_y {
                    Some(*y)
                } else {
                    None
                }
            }
            BurstState::Exploded { particles, .. } => {
                for particle in particles.iter_mut() {
                    particle.step(config.gravity, config.fade_step);
                }
                particles.retain(|p| !p.is_faded());
                None
            }
        };

        if let Some(y) = burst_at {
            let particles = self.scatter(y, config, rng);
            self.state = BurstState::Exploded { y, particles };
        }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S, config: &FireworksConfig) -> Result<(), S::Error> {
        match &self.state {
            BurstState::Ascending { y, .. } => {
                surface.fill_circle(self.x, *y, config.rocket_radius, &self.color.to_css())
            }
            BurstState::Exploded { particles, .. } => {
                for p in particles {
                    let fill = p.color.to_css_with_alpha(p.alpha);
                    surface.fill_circle(p.pos[0], p.pos[1], p.radius, &fill)?;
                }
                Ok(())
            }
        }
    }

    fn scatter<R: Rng + ?Sized>(&self, y: f64, config: &FireworksConfig, rng: &mut R) -> Vec<Particle> {
        let (min_radius, max_radius) = config.particle_radius;
        (0..config.particles_per_burst)
            .map(|_| {
                let vel = [
                    random_between(rng, -config.max_speed, config.max_speed),
                    random_between(rng, -config.max_speed, config.max_speed),
                ];
                let radius = random_between(rng, min_radius, max_radius);
                Particle::new([self.x, y], vel, radius, self.color)
            })
            .collect()
    }
}
