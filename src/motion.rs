//! Presentational animation state shared by the sections.
//!
//! None of these types touch the DOM; the frontend turns them into inline
//! styles and CSS custom properties.

/// Rotation applied to a card from the pointer's offset to its centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Maps `dy ∈ [-range, range]` to `[max_deg, -max_deg]` and
    /// `dx ∈ [-range, range]` to `[-max_deg, max_deg]`, clamped at both ends.
    pub fn from_pointer(dx: f64, dy: f64, range: f64, max_deg: f64) -> Self {
        if range <= 0.0 {
            return Self::NEUTRAL;
        }
        let normalize = |value: f64| (value / range).clamp(-1.0, 1.0);
        Self {
            rotate_x: -normalize(dy) * max_deg,
            rotate_y: normalize(dx) * max_deg,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg);",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Per-card tilt ranges, in pointer pixels and degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltProfile {
    pub range: f64,
    pub max_deg: f64,
}

pub const HERO_TILT: TiltProfile = TiltProfile {
    range: 300.0,
    max_deg: 5.0,
};
pub const ABOUT_CARD_TILT: TiltProfile = TiltProfile {
    range: 300.0,
    max_deg: 15.0,
};
pub const SKILL_BUBBLE_TILT: TiltProfile = TiltProfile {
    range: 100.0,
    max_deg: 10.0,
};
pub const CONTACT_CARD_TILT: TiltProfile = TiltProfile {
    range: 100.0,
    max_deg: 3.0,
};

impl TiltProfile {
    pub fn tilt(&self, dx: f64, dy: f64) -> Tilt {
        Tilt::from_pointer(dx, dy, self.range, self.max_deg)
    }
}

/// One character of a staggered text reveal.
#[derive(Clone, Debug, PartialEq)]
pub struct StaggeredChar {
    pub glyph: char,
    pub delay_secs: f64,
}

/// Splits `text` into characters delayed by `step_secs` each. Spaces become
/// non-breaking so inline-block spans keep their width.
pub fn stagger(text: &str, step_secs: f64) -> Vec<StaggeredChar> {
    text.chars()
        .enumerate()
        .map(|(index, glyph)| StaggeredChar {
            glyph: if glyph == ' ' { '\u{00A0}' } else { glyph },
            delay_secs: index as f64 * step_secs,
        })
        .collect()
}

/// Visibility latch driven by viewport intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealLatch {
    once: bool,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(once: bool) -> Self {
        Self {
            once,
            revealed: false,
        }
    }

    pub fn observe(&mut self, intersecting: bool) {
        if self.once {
            self.revealed |= intersecting;
        } else {
            self.revealed = intersecting;
        }
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailParticle {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub life: f64,
}

/// Fading particles left behind the pointer in the hero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CursorTrail {
    particles: Vec<TrailParticle>,
    next_id: u64,
}

impl CursorTrail {
    pub const CAPACITY: usize = 16;
    pub const FADE_PER_TICK: f64 = 0.07;
    pub const TICK_MS: u32 = 16;

    pub fn push(&mut self, x: f64, y: f64) {
        if self.particles.len() >= Self::CAPACITY {
            let excess = self.particles.len() + 1 - Self::CAPACITY;
            self.particles.drain(..excess);
        }
        self.particles.push(TrailParticle {
            id: self.next_id,
            x,
            y,
            life: 1.0,
        });
        self.next_id += 1;
    }

    pub fn fade(&mut self) {
        for particle in &mut self.particles {
            particle.life -= Self::FADE_PER_TICK;
        }
        self.particles.retain(|particle| particle.life > 0.0);
    }

    pub fn particles(&self) -> &[TrailParticle] {
        &self.particles
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Index that advances by one on every tick, wrapping at `len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cycler {
    index: usize,
    len: usize,
}

impl Cycler {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            len: self.len,
        }
    }
}

/// Name glitch: active for `GLITCH_MS` at the start of every `PERIOD_MS`.
pub const GLITCH_PERIOD_MS: u32 = 8000;
pub const GLITCH_MS: u32 = 200;

/// Loading overlay progress, in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingProgress(u8);

impl LoadingProgress {
    pub const STEP: u8 = 2;
    pub const TICK_MS: u32 = 30;

    pub fn advance(self) -> Self {
        Self(self.0.saturating_add(Self::STEP).min(100))
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    pub fn is_complete(self) -> bool {
        self.0 >= 100
    }
}

/// Project card face. Only the front's details control flips it over and
/// only the back's close control flips it back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlipCard {
    flipped: bool,
}

impl FlipCard {
    pub fn show_details(self) -> Self {
        Self { flipped: true }
    }

    pub fn close(self) -> Self {
        Self { flipped: false }
    }

    pub fn is_flipped(self) -> bool {
        self.flipped
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeOfDay {
    Day,
    Night,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        if (6..18).contains(&hour) {
            Self::Day
        } else {
            Self::Night
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Day => "ambient-day",
            Self::Night => "ambient-night",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_card_opens_on_details_and_closes_on_close() {
        let card = FlipCard::default();
        assert!(!card.is_flipped());
        let card = card.show_details();
        assert!(card.is_flipped());
        assert!(card.show_details().is_flipped(), "details is not a toggle");
        assert!(!card.close().is_flipped());
        assert!(!card.close().close().is_flipped());
    }

    #[test]
    fn tilt_is_clamped_and_signed() {
        let tilt = Tilt::from_pointer(50.0, 50.0, 100.0, 10.0);
        assert_eq!(tilt.rotate_y, 5.0);
        assert_eq!(tilt.rotate_x, -5.0);

        let far = SKILL_BUBBLE_TILT.tilt(-1000.0, -1000.0);
        assert_eq!(far.rotate_y, -10.0);
        assert_eq!(far.rotate_x, 10.0);
    }

    #[test]
    fn centred_pointer_is_neutral() {
        assert_eq!(HERO_TILT.tilt(0.0, 0.0), Tilt::NEUTRAL);
        assert_eq!(Tilt::from_pointer(10.0, 10.0, 0.0, 5.0), Tilt::NEUTRAL);
    }

    #[test]
    fn stagger_delays_grow_per_character() {
        let chars = stagger("a b", 0.03);
        assert_eq!(chars.len(), 3);
        assert_eq!(chars[1].glyph, '\u{00A0}');
        assert!((chars[2].delay_secs - 0.06).abs() < 1e-12);
    }

    #[test]
    fn once_latch_stays_revealed() {
        let mut latch = RevealLatch::new(true);
        latch.observe(false);
        assert!(!latch.revealed());
        latch.observe(true);
        latch.observe(false);
        assert!(latch.revealed());

        let mut toggled = RevealLatch::new(false);
        toggled.observe(true);
        toggled.observe(false);
        assert!(!toggled.revealed());
    }

    #[test]
    fn trail_keeps_most_recent_particles() {
        let mut trail = CursorTrail::default();
        for step in 0..20 {
            trail.push(step as f64, 0.0);
        }
        assert_eq!(trail.particles().len(), CursorTrail::CAPACITY);
        assert_eq!(trail.particles()[0].x, 4.0);
        assert_eq!(trail.particles().last().map(|p| p.id), Some(19));
    }

    #[test]
    fn trail_particles_expire() {
        let mut trail = CursorTrail::default();
        trail.push(1.0, 1.0);
        for _ in 0..14 {
            trail.fade();
        }
        assert!(!trail.is_empty());
        trail.fade();
        assert!(trail.is_empty());
    }

    #[test]
    fn cycler_wraps() {
        let cycler = Cycler::new(3).advance().advance().advance();
        assert_eq!(cycler.index(), 0);
        assert_eq!(Cycler::new(0).advance().index(), 0);
    }

    #[test]
    fn loading_progress_saturates_at_hundred() {
        let mut progress = LoadingProgress::default();
        for _ in 0..49 {
            progress = progress.advance();
        }
        assert!(!progress.is_complete());
        progress = progress.advance().advance();
        assert_eq!(progress.percent(), 100);
        assert!(progress.is_complete());
    }

    #[test]
    fn daytime_window() {
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(6), TimeOfDay::Day);
        assert_eq!(TimeOfDay::from_hour(18), TimeOfDay::Night);
    }
}
