use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pixels of look-ahead added to the scroll offset, so a section counts as
/// active slightly before its heading reaches the top of the viewport.
pub const SCROLL_LOOKAHEAD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Home,
    About,
    Experience,
    Skills,
    Contact,
}

impl SectionId {
    /// Display order, top to bottom.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// The `id` attribute of the section's element on the page.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Inicio",
            Self::About => "Sobre mí",
            Self::Experience => "Experiencia",
            Self::Skills => "Habilidades",
            Self::Contact => "Contacto",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct SectionParseError(pub String);

impl FromStr for SectionId {
    type Err = SectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.element_id() == s)
            .ok_or_else(|| SectionParseError(s.to_string()))
    }
}

/// Vertical extent of a section, in page pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open: `[top, top + height)`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The rendering environment that owns real geometry and scroll position.
pub trait DisplaySurface {
    /// `None` when the section's element is not on the page.
    fn section_bounds(&self, section: SectionId) -> Option<SectionBounds>;

    fn scroll_offset(&self) -> f64;

    /// Smoothly scrolls the section into view. Returns `false` when the
    /// element could not be found and nothing happened.
    fn scroll_into_view(&self, section: SectionId) -> bool;
}

/// First section, in display order, whose bounds contain `probe`.
pub fn section_at<S: DisplaySurface + ?Sized>(surface: &S, probe: f64) -> Option<SectionId> {
    SectionId::ALL.into_iter().find(|&section| {
        surface
            .section_bounds(section)
            .is_some_and(|bounds| bounds.contains(probe))
    })
}

/// All mutable UI state of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    menu_open: bool,
    dark_mode: bool,
    active_section: SectionId,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn active_section(&self) -> SectionId {
        self.active_section
    }

    pub fn navigate_to<S: DisplaySurface + ?Sized>(&mut self, surface: &S, section: SectionId) {
        if !surface.scroll_into_view(section) {
            log::debug!("no element for section {section}, not scrolling");
        }
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Re-derives the active section from a scroll offset. Leaves the current
    /// value alone when no section contains the probe point. Returns whether
    /// the active section changed.
    pub fn recompute_active_section<S: DisplaySurface + ?Sized>(
        &mut self,
        surface: &S,
        scroll_offset_y: f64,
    ) -> bool {
        let probe = scroll_offset_y + SCROLL_LOOKAHEAD;
        match section_at(surface, probe) {
            Some(section) if section != self.active_section => {
                log::debug!("active section {} -> {}", self.active_section, section);
                self.active_section = section;
                true
            }
            _ => false,
        }
    }

    /// Scroll notification handler: re-derives the active section from the
    /// surface's current scroll offset.
    pub fn sync_with_scroll<S: DisplaySurface + ?Sized>(&mut self, surface: &S) -> bool {
        self.recompute_active_section(surface, surface.scroll_offset())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap};

    use super::*;

    #[derive(Default)]
    struct FakeSurface {
        bounds: HashMap<SectionId, SectionBounds>,
        offset: f64,
        scrolled_to: RefCell<Vec<SectionId>>,
    }

    impl FakeSurface {
        /// Five stacked 800px sections starting at 0.
        fn stacked() -> Self {
            let bounds = SectionId::ALL
                .into_iter()
                .enumerate()
                .map(|(i, s)| (s, SectionBounds::new(i as f64 * 800.0, 800.0)))
                .collect();
            Self {
                bounds,
                ..Default::default()
            }
        }

        fn without(mut self, section: SectionId) -> Self {
            self.bounds.remove(&section);
            self
        }
    }

    impl DisplaySurface for FakeSurface {
        fn section_bounds(&self, section: SectionId) -> Option<SectionBounds> {
            self.bounds.get(&section).copied()
        }

        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn scroll_into_view(&self, section: SectionId) -> bool {
            if self.bounds.contains_key(&section) {
                self.scrolled_to.borrow_mut().push(section);
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert!(!state.menu_open());
        assert!(!state.dark_mode());
        assert_eq!(state.active_section(), SectionId::Home);
    }

    #[test]
    fn test_navigate_closes_menu() {
        let surface = FakeSurface::stacked();
        for section in SectionId::ALL {
            let mut state = ViewState::new();
            state.toggle_menu();
            assert!(state.menu_open());
            state.navigate_to(&surface, section);
            assert!(!state.menu_open());

            // closed stays closed
            state.navigate_to(&surface, section);
            assert!(!state.menu_open());
        }
        assert_eq!(surface.scrolled_to.borrow().len(), SectionId::ALL.len() * 2);
        assert_eq!(surface.scrolled_to.borrow()[0], SectionId::Home);
    }

    #[test]
    fn test_navigate_to_missing_section() {
        let surface = FakeSurface::stacked().without(SectionId::Skills);
        let mut state = ViewState::new();
        state.toggle_menu();
        state.toggle_dark_mode();
        state.recompute_active_section(&surface, 900.0);
        let before = state;

        state.navigate_to(&surface, SectionId::Skills);

        assert!(surface.scrolled_to.borrow().is_empty());
        assert!(!state.menu_open());
        assert_eq!(state.dark_mode(), before.dark_mode());
        assert_eq!(state.active_section(), before.active_section());
    }

    #[test]
    fn test_toggles_are_involutions() {
        let mut state = ViewState::new();
        state.toggle_menu();
        assert!(state.menu_open());
        state.toggle_menu();
        assert_eq!(state, ViewState::new());

        state.toggle_dark_mode();
        assert!(state.dark_mode());
        state.toggle_dark_mode();
        assert_eq!(state, ViewState::new());
    }

    #[test]
    fn test_recompute_active_section() {
        let surface = FakeSurface::stacked();
        let mut state = ViewState::new();

        state.recompute_active_section(&surface, 0.0);
        assert_eq!(state.active_section(), SectionId::Home);

        // probe = 850
        assert!(state.recompute_active_section(&surface, 750.0));
        assert_eq!(state.active_section(), SectionId::About);

        state.recompute_active_section(&surface, 2500.0);
        assert_eq!(state.active_section(), SectionId::Skills);

        // probe = 4050, past the last section
        assert!(!state.recompute_active_section(&surface, 3950.0));
        assert_eq!(state.active_section(), SectionId::Skills);
    }

    #[test]
    fn test_recompute_boundaries() {
        let surface = FakeSurface::stacked();
        let mut state = ViewState::new();

        // probe = 800 belongs to about, not home
        state.recompute_active_section(&surface, 700.0);
        assert_eq!(state.active_section(), SectionId::About);

        // probe = 799.5 is still home
        state.recompute_active_section(&surface, 699.5);
        assert_eq!(state.active_section(), SectionId::Home);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let surface = FakeSurface::stacked();
        let mut state = ViewState::new();

        assert!(state.recompute_active_section(&surface, 1700.0));
        let settled = state;
        for _ in 0..5 {
            assert!(!state.recompute_active_section(&surface, 1700.0));
            assert_eq!(state, settled);
        }
        assert_eq!(state.active_section(), SectionId::Experience);
    }

    #[test]
    fn test_overlap_prefers_display_order() {
        let mut surface = FakeSurface::stacked();
        surface
            .bounds
            .insert(SectionId::About, SectionBounds::new(500.0, 1000.0));
        surface
            .bounds
            .insert(SectionId::Experience, SectionBounds::new(600.0, 1000.0));
        let mut state = ViewState::new();

        // probe = 700 is inside home, about and experience
        state.recompute_active_section(&surface, 600.0);
        assert_eq!(state.active_section(), SectionId::Home);

        // probe = 1000 is inside about and experience
        state.recompute_active_section(&surface, 900.0);
        assert_eq!(state.active_section(), SectionId::About);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let surface = FakeSurface::stacked().without(SectionId::About);
        let mut state = ViewState::new();

        state.recompute_active_section(&surface, 1700.0);
        assert_eq!(state.active_section(), SectionId::Experience);

        // about's range is gone, so nothing matches and the value sticks
        state.recompute_active_section(&surface, 900.0);
        assert_eq!(state.active_section(), SectionId::Experience);

        let empty = FakeSurface::default();
        assert_eq!(section_at(&empty, 100.0), None);
        state.recompute_active_section(&empty, 0.0);
        assert_eq!(state.active_section(), SectionId::Experience);
    }

    #[test]
    fn test_sync_with_scroll_reads_surface_offset() {
        let mut surface = FakeSurface::stacked();
        let mut state = ViewState::new();

        assert!(!state.sync_with_scroll(&surface));
        assert_eq!(state.active_section(), SectionId::Home);

        surface.offset = 750.0;
        assert!(state.sync_with_scroll(&surface));
        assert_eq!(state.active_section(), SectionId::About);
        assert!(!state.sync_with_scroll(&surface));

        surface.offset = 3950.0;
        assert!(!state.sync_with_scroll(&surface));
        assert_eq!(state.active_section(), SectionId::About);

        // only the active section moves
        state.toggle_menu();
        state.toggle_dark_mode();
        surface.offset = 3200.0;
        assert!(state.sync_with_scroll(&surface));
        assert_eq!(state.active_section(), SectionId::Contact);
        assert!(state.menu_open());
        assert!(state.dark_mode());
    }

    #[test]
    fn test_section_id_parsing() {
        for section in SectionId::ALL {
            let parsed: SectionId = section.to_string().parse().unwrap();
            assert_eq!(parsed, section);
        }
        assert_eq!(
            "sobre-mi".parse::<SectionId>(),
            Err(SectionParseError("sobre-mi".to_string()))
        );
        assert_eq!(SectionId::About.element_id(), "about");
        assert_eq!(SectionId::default(), SectionId::Home);
    }
}
