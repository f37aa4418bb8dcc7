use crate::sections::TriggerBand;

pub const THEME_KEY: &str = "pref-theme";
pub const ANIMATION_PATH: &str = "/animations/ai-brain.json";
pub const ANIMATION_SCRIPT_SRC: &str = "/vendor/lottie.min.js";
pub const EASING_FACTOR: f64 = 0.16;
pub const CURSOR_OFFSET: f64 = 8.0;
pub const PARALLAX_RANGE_X: f64 = 10.0;
pub const PARALLAX_RANGE_Y: f64 = 6.0;
pub const CARD_STAGGER_MS: u32 = 60;

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub theme_key: &'static str,
    pub trigger_band: TriggerBand,
    pub easing_factor: f64,
    pub cursor_offset: f64,
    pub parallax_range: (f64, f64),
    pub animation_path: &'static str,
    pub animation_script_src: &'static str,
    pub card_stagger_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_key: THEME_KEY,
            trigger_band: TriggerBand::default(),
            easing_factor: EASING_FACTOR,
            cursor_offset: CURSOR_OFFSET,
            parallax_range: (PARALLAX_RANGE_X, PARALLAX_RANGE_Y),
            animation_path: ANIMATION_PATH,
            animation_script_src: ANIMATION_SCRIPT_SRC,
            card_stagger_ms: CARD_STAGGER_MS,
        }
    }
}

impl SiteConfig {
    pub fn card_delay(&self, index: usize) -> String {
        let delay = u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.card_stagger_ms);
        format!("--card-delay: {delay}ms;")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_delay_grows_with_index() {
        let config = SiteConfig::default();

        assert_eq!(config.card_delay(0), "--card-delay: 0ms;");
        assert_eq!(config.card_delay(3), "--card-delay: 180ms;");
    }

    #[test]
    fn default_band_matches_forty_percent_insets() {
        let config = SiteConfig::default();

        assert_eq!(config.trigger_band.root_margin(), "-40% 0px -40% 0px");
    }
}
