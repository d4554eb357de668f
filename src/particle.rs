// Simple particle struct to keep track of individual position, velocity, opacity, and color

use crate::color::Color;
use vecmath::{vec2_add, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub alpha: f64,
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            alpha: 1.0,
            radius,
            color,
        }
    }

    pub fn step(&mut self, gravity: f64, fade_step: f64) {
        self.pos = vec2_add(self.pos, self.vel);
        self.vel[1] += gravity;
        self.alpha -= fade_step;
    }

    pub fn is_faded(&self) -> bool {
        self.alpha <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spark() -> Particle {
        Particle::new([100.0, 200.0], [2.0, -1.0], 3.0, Color::from_hue(40))
    }

    #[test]
    fn step_integrates_velocity_then_applies_gravity() {
        let mut p = spark();
        p.step(0.1, 0.02);
        assert_eq!(p.pos, [102.0, 199.0]);
        assert!((p.vel[1] - -0.9).abs() < 1e-12);
        p.step(0.1, 0.02);
        assert!((p.pos[1] - 198.1).abs() < 1e-12);
    }

    #[test]
    fn fades_out_after_fifty_frames() {
        let mut p = spark();
        let mut last_alpha = p.alpha;
        for frame in 1..=50 {
            p.step(0.1, 0.02);
            assert!(p.alpha <= last_alpha);
            last_alpha = p.alpha;
            assert_eq!(p.is_faded(), frame == 50, "frame {}", frame);
        }
    }

    #[test]
    fn barely_visible_particle_is_not_faded() {
        let mut p = spark();
        p.alpha = 5e-10;
        assert!(!p.is_faded());
        p.alpha = 0.0;
        assert!(p.is_faded());
    }
}
