//! Scroll-linked navigation state: progress ratio, active section and eased
//! programmatic scrolling.

/// Allowance added to the scroll position when deciding which section is active.
pub const ACTIVE_SECTION_ALLOWANCE: f64 = 100.0;
/// Fixed header height compensated for when scrolling to a section.
pub const HEADER_OFFSET: f64 = 80.0;
pub const SCROLL_DURATION_MS: f64 = 1500.0;
pub const SCROLL_TOP_THRESHOLD: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::About => "☺",
            Self::Skills => "</>",
            Self::Projects => "▣",
            Self::Contact => "✉",
        }
    }
}

/// Scroll progress in `[0, 1]`; `0` when the content fits the viewport.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let max_scroll = scroll_height - viewport_height;
    if max_scroll <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / max_scroll).clamp(0.0, 1.0)
}

/// Scans sections back to front and returns the first whose top has been
/// reached. `offsets` pairs each section with its document top offset;
/// sections missing from the page are simply absent.
pub fn active_section(offsets: &[(SectionId, f64)], scroll_y: f64) -> Option<SectionId> {
    let position = scroll_y + ACTIVE_SECTION_ALLOWANCE;
    offsets
        .iter()
        .rev()
        .find(|(_, top)| *top <= position)
        .map(|(id, _)| *id)
}

/// Target scroll position for a section whose top sits at `offset_top`.
pub fn scroll_target(offset_top: f64) -> f64 {
    (offset_top - HEADER_OFFSET).max(0.0)
}

/// GSAP-style `power2.inOut`.
pub fn ease_power2_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimation {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            duration_ms: SCROLL_DURATION_MS,
        }
    }

    /// Scroll position `elapsed_ms` after the animation started.
    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        let t = if self.duration_ms <= 0.0 {
            1.0
        } else {
            elapsed_ms / self.duration_ms
        };
        self.from + (self.to - self.from) * ease_power2_in_out(t)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    pub active: SectionId,
    pub progress: f64,
    pub menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active: SectionId::Home,
            progress: 0.0,
            menu_open: false,
        }
    }
}

/// Scroll metrics sampled from the page in one go.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
    pub offsets: Vec<(SectionId, f64)>,
}

impl NavState {
    pub fn on_scroll(&self, snapshot: &ScrollSnapshot) -> Self {
        let active = active_section(&snapshot.offsets, snapshot.scroll_y).unwrap_or(self.active);
        Self {
            active,
            progress: scroll_progress(
                snapshot.scroll_y,
                snapshot.scroll_height,
                snapshot.viewport_height,
            ),
            menu_open: self.menu_open,
        }
    }

    /// Explicit navigation: activates `target` directly, closes the menu and
    /// returns the scroll animation to run.
    pub fn navigate(
        &self,
        target: SectionId,
        current_scroll: f64,
        target_offset_top: f64,
    ) -> (Self, ScrollAnimation) {
        let next = Self {
            active: target,
            progress: self.progress,
            menu_open: false,
        };
        (next, ScrollAnimation::new(current_scroll, scroll_target(target_offset_top)))
    }

    pub fn toggle_menu(&self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self.clone()
        }
    }

    pub fn shows_scroll_top(&self) -> bool {
        self.progress > SCROLL_TOP_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equal_sections(height: f64) -> Vec<(SectionId, f64)> {
        SectionId::ALL
            .into_iter()
            .enumerate()
            .map(|(index, id)| (id, index as f64 * height))
            .collect()
    }

    #[test]
    fn progress_is_bounded_and_hits_both_ends() {
        assert_eq!(scroll_progress(0.0, 5000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(4000.0, 5000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(2000.0, 5000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(4500.0, 5000.0, 1000.0), 1.0);

        for step in 0..=40 {
            let progress = scroll_progress(step as f64 * 100.0, 5000.0, 1000.0);
            assert!((0.0..=1.0).contains(&progress));
        }
    }

    #[test]
    fn progress_is_zero_when_content_fits_viewport() {
        let progress = scroll_progress(0.0, 800.0, 800.0);
        assert_eq!(progress, 0.0);
        assert!(!scroll_progress(10.0, 600.0, 800.0).is_nan());
    }

    #[test]
    fn active_section_uses_last_passed_boundary() {
        let offsets = equal_sections(1000.0);
        assert_eq!(active_section(&offsets, 0.0), Some(SectionId::Home));
        assert_eq!(active_section(&offsets, 899.0), Some(SectionId::Home));
        assert_eq!(active_section(&offsets, 900.0), Some(SectionId::About));
        assert_eq!(active_section(&offsets, 10_000.0), Some(SectionId::Contact));
    }

    #[test]
    fn monotonic_scroll_visits_every_section_in_order_once() {
        let offsets = equal_sections(1000.0);
        let mut state = NavState::default();
        let mut visited = vec![state.active];

        for scroll_y in (0..5000).step_by(10) {
            let snapshot = ScrollSnapshot {
                scroll_y: scroll_y as f64,
                scroll_height: 5000.0,
                viewport_height: 800.0,
                offsets: offsets.clone(),
            };
            let next = state.on_scroll(&snapshot);
            if next.active != state.active {
                visited.push(next.active);
            }
            state = next;
        }

        assert_eq!(visited, SectionId::ALL.to_vec());
    }

    #[test]
    fn unmatched_scan_keeps_current_section() {
        let state = NavState {
            active: SectionId::Skills,
            ..NavState::default()
        };
        let snapshot = ScrollSnapshot {
            scroll_y: 0.0,
            scroll_height: 3000.0,
            viewport_height: 800.0,
            offsets: vec![(SectionId::Contact, 2000.0)],
        };
        assert_eq!(state.on_scroll(&snapshot).active, SectionId::Skills);
    }

    #[test]
    fn navigate_activates_target_and_compensates_header() {
        let state = NavState::default().toggle_menu();
        assert!(state.menu_open);

        let (next, animation) = state.navigate(SectionId::Projects, 120.0, 3000.0);
        assert_eq!(next.active, SectionId::Projects);
        assert!(!next.menu_open);
        assert_eq!(animation.from, 120.0);
        assert_eq!(animation.to, 2920.0);
    }

    #[test]
    fn scroll_animation_eases_between_endpoints() {
        let animation = ScrollAnimation::new(0.0, 1000.0);
        assert_eq!(animation.position_at(0.0), 0.0);
        assert_eq!(animation.position_at(SCROLL_DURATION_MS), 1000.0);
        assert_eq!(animation.position_at(SCROLL_DURATION_MS * 2.0), 1000.0);
        assert!((animation.position_at(SCROLL_DURATION_MS / 2.0) - 500.0).abs() < 1e-9);
        assert!(animation.position_at(SCROLL_DURATION_MS / 4.0) < 250.0);
        assert!(animation.is_finished(SCROLL_DURATION_MS));
    }

    #[test]
    fn scroll_top_button_appears_after_a_fifth_of_the_page() {
        let mut state = NavState::default();
        state.progress = 0.2;
        assert!(!state.shows_scroll_top());
        state.progress = 0.21;
        assert!(state.shows_scroll_top());
    }
}
