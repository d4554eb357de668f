// Simple HSL color struct, bursts pick a hue and keep full saturation at mid lightness.
// Canvas fill styles take CSS strings, so this only knows how to print itself.

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Color {
    pub fn from_hue(hue: u16) -> Color {
        Color {
            hue: hue % 360,
            saturation: 100,
            lightness: 50,
        }
    }

    pub fn to_css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }

    // Same color with an opacity channel, used for fading particles
    pub fn to_css_with_alpha(&self, alpha: f64) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.hue,
            self.saturation,
            self.lightness,
            alpha.max(0.0).min(1.0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_solid_and_translucent_css() {
        let color = Color::from_hue(210);
        assert_eq!(color.to_css(), "hsl(210, 100%, 50%)");
        assert_eq!(color.to_css_with_alpha(0.5), "hsla(210, 100%, 50%, 0.5)");
    }

    #[test]
    fn hue_wraps_and_alpha_is_clamped() {
        let color = Color::from_hue(360);
        assert_eq!(color.hue, 0);
        assert_eq!(color.to_css_with_alpha(-0.01), "hsla(0, 100%, 50%, 0)");
    }
}
