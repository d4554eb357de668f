// Tunables for the fireworks show and the page it runs on.
// Defaults match the welcome page; tests override them to pin down behaviour.

#[derive(Clone, Debug, PartialEq)]
pub struct FireworksConfig {
    // Show length in milliseconds, measured from the session's start timestamp.
    pub duration_ms: f64,
    // New bursts are launched only while fewer than this many are active.
    pub spawn_threshold: usize,
    // Bursts launched per spawning frame.
    pub spawn_batch: usize,
    // Target height range as fractions of the surface height, (low, high).
    pub target_height_fraction: (f64, f64),
    // Upward distance a rocket travels per frame.
    pub ascent_step: f64,
    pub rocket_radius: f64,
    pub particles_per_burst: usize,
    // Particle speed components are drawn from [-max_speed, max_speed].
    pub max_speed: f64,
    pub particle_radius: (f64, f64),
    // Added to every particle's vertical speed per frame.
    pub gravity: f64,
    // Subtracted from every particle's opacity per frame.
    pub fade_step: f64,
}

impl Default for FireworksConfig {
    fn default() -> Self {
        FireworksConfig {
            duration_ms: 3000.0,
            spawn_threshold: 15,
            spawn_batch: 2,
            target_height_fraction: (0.25, 0.5),
            ascent_step: 5.0,
            rocket_radius: 3.0,
            particles_per_burst: 30,
            max_speed: 3.0,
            particle_radius: (2.0, 4.0),
            gravity: 0.1,
            fade_step: 0.02,
        }
    }
}

// Element ids and query parameters the show touches on the host page
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub canvas_id: String,
    pub success_message_id: String,
    pub stripped_params: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            canvas_id: "fireworks".to_owned(),
            success_message_id: "donate-success-message".to_owned(),
            stripped_params: vec!["donation".to_owned(), "welcome".to_owned()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_welcome_page() {
        let config = FireworksConfig::default();
        assert_eq!(config.spawn_threshold, 15);
        assert_eq!(config.spawn_batch, 2);
        assert_eq!(config.particles_per_burst, 30);
        assert_eq!(config.duration_ms, 3000.0);

        let page = PageConfig::default();
        assert_eq!(page.canvas_id, "fireworks");
        assert_eq!(page.stripped_params, vec!["donation", "welcome"]);
    }
}
