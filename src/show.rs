// A single fireworks session: owns the active bursts and the start timestamp,
// and advances everything one display frame at a time until the show runs out.

use crate::burst::Burst;
use crate::color::Color;
use crate::config::FireworksConfig;
use crate::renderer::Surface;
use crate::utils::random_between;
use rand::Rng;

// What the frame scheduler should do after a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    // Request another animation frame.
    Continue,
    // The show just ended and the surface was cleared. The caller restores the page.
    Finished,
    // The show had already ended, nothing was touched.
    Stopped,
}

pub struct FireworksShow<R> {
    config: FireworksConfig,
    rng: R,
    bursts: Vec<Burst>,
    started_at: f64,
    finished: bool,
}

impl<R: Rng> FireworksShow<R> {
    pub fn new(config: FireworksConfig, rng: R, started_at: f64) -> Self {
        FireworksShow {
            bursts: Vec::with_capacity(config.spawn_threshold + config.spawn_batch),
            config,
            rng,
            started_at,
            finished: false,
        }
    }

    pub fn bursts(&self) -> &[Burst] {
        &self.bursts
    }

    pub fn elapsed(&self, now: f64) -> f64 {
        now - self.started_at
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick<S: Surface>(&mut self, now: f64, surface: &mut S) -> Result<Tick, S::Error> {
        if self.finished {
            return Ok(Tick::Stopped);
        }

        surface.clear();
        if self.bursts.len() < self.config.spawn_threshold {
            let (width, height) = surface.size();
            self.spawn(width, height);
        }

        for burst in &mut self.bursts {
            burst.update(&self.config, &mut self.rng);
            burst.draw(surface, &self.config)?;
        }
        self.bursts.retain(|burst| !burst.is_done());

        if self.elapsed(now) < self.config.duration_ms {
            return Ok(Tick::Continue);
        }

        surface.clear();
        self.bursts.clear();
        self.finished = true;
        Ok(Tick::Finished)
    }

    // Rockets start on the bottom edge and aim somewhere in the upper half
    fn spawn(&mut self, width: f64, height: f64) {
        let (low, high) = self.config.target_height_fraction;
        for _ in 0..self.config.spawn_batch {
            let x = random_between(&mut self.rng, 0.0, width);
            let target_y = random_between(&mut self.rng, height * low, height * high);
            let hue = random_between(&mut self.rng, 0.0, 360.0).floor() as u16;
            self.bursts
                .push(Burst::launch(x, height, target_y, Color::from_hue(hue)));
        }
    }
}
