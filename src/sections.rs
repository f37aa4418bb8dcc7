#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Projects,
    Skills,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Projects,
        Section::Skills,
        Section::About,
        Section::Contact,
    ];

    pub const NAV: [Section; 4] = [
        Section::Projects,
        Section::Skills,
        Section::About,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

/// Insets are fractions of the viewport height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerBand {
    pub top_inset: f64,
    pub bottom_inset: f64,
}

impl Default for TriggerBand {
    fn default() -> Self {
        Self {
            top_inset: 0.4,
            bottom_inset: 0.4,
        }
    }
}

impl TriggerBand {
    pub fn root_margin(&self) -> String {
        format!(
            "-{}% 0px -{}% 0px",
            percent(self.top_inset),
            percent(self.bottom_inset)
        )
    }

    pub fn contains(&self, top: f64, bottom: f64, viewport_height: f64) -> bool {
        let band_top = viewport_height * self.top_inset;
        let band_bottom = viewport_height * (1.0 - self.bottom_inset);
        top <= band_bottom && bottom >= band_top
    }
}

fn percent(fraction: f64) -> String {
    let value = (fraction * 100.0 * 100.0).round() / 100.0;
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollSpy {
    active: Section,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self {
            active: Section::Home,
        }
    }
}

impl ScrollSpy {
    pub fn active(&self) -> Section {
        self.active
    }

    /// Returns the new section when it changed.
    pub fn observe<I>(&mut self, entries: I) -> Option<Section>
    where
        I: IntoIterator<Item = (Section, bool)>,
    {
        let previous = self.active;

        for (section, intersecting) in entries {
            if intersecting {
                self.active = section;
            }
        }

        (self.active != previous).then_some(self.active)
    }
}

/// `false` when the anchor is missing.
pub fn scroll_to<T>(
    section: Section,
    find: impl FnOnce(&'static str) -> Option<T>,
    scroll: impl FnOnce(T),
) -> bool {
    match find(section.id()) {
        Some(target) => {
            scroll(target);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 1000.0;
    const SECTION_HEIGHT: f64 = 900.0;

    fn layout(scroll_y: f64) -> Vec<(Section, f64, f64)> {
        Section::ALL
            .iter()
            .enumerate()
            .map(|(index, section)| {
                let top = index as f64 * SECTION_HEIGHT - scroll_y;
                (*section, top, top + SECTION_HEIGHT)
            })
            .collect()
    }

    #[test]
    fn ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("footer"), None);
    }

    #[test]
    fn band_matches_forty_percent_insets() {
        let band = TriggerBand::default();

        assert!(band.contains(350.0, 450.0, VIEWPORT));
        assert!(!band.contains(0.0, 399.0, VIEWPORT));
        assert!(!band.contains(601.0, 900.0, VIEWPORT));
        assert!(band.contains(-5000.0, 5000.0, VIEWPORT));
    }

    #[test]
    fn scrolling_through_sections_highlights_each_in_order() {
        let band = TriggerBand::default();
        let mut spy = ScrollSpy::default();
        let mut seen = vec![spy.active()];

        for index in 0..Section::ALL.len() {
            // Centre section `index` on the band.
            let scroll_y = index as f64 * SECTION_HEIGHT + SECTION_HEIGHT / 2.0 - VIEWPORT / 2.0;
            let entries = layout(scroll_y)
                .into_iter()
                .map(|(section, top, bottom)| (section, band.contains(top, bottom, VIEWPORT)));

            if let Some(changed) = spy.observe(entries) {
                seen.push(changed);
            }
            assert_eq!(spy.active(), Section::ALL[index]);
        }

        assert_eq!(seen, Section::ALL);
    }

    #[test]
    fn missing_anchor_is_not_scrolled() {
        let mut scrolled = Vec::new();

        let found = scroll_to(Section::About, |_| None::<&str>, |id| scrolled.push(id));

        assert!(!found);
        assert!(scrolled.is_empty());
    }

    #[test]
    fn present_anchor_is_scrolled_once() {
        let mut scrolled = Vec::new();

        let found = scroll_to(
            Section::Contact,
            |id| (id == "contact").then_some(id),
            |id| scrolled.push(id),
        );

        assert!(found);
        assert_eq!(scrolled, ["contact"]);
    }

    #[test]
    fn last_intersecting_entry_in_a_batch_wins() {
        let mut spy = ScrollSpy::default();

        let changed = spy.observe([
            (Section::Skills, true),
            (Section::About, true),
            (Section::Contact, false),
        ]);

        assert_eq!(changed, Some(Section::About));
    }

    #[test]
    fn leaving_the_band_keeps_the_last_section() {
        let mut spy = ScrollSpy::default();
        spy.observe([(Section::Projects, true)]);

        assert_eq!(spy.observe([(Section::Projects, false)]), None);
        assert_eq!(spy.active(), Section::Projects);
    }
}
