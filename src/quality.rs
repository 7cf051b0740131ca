//! Device tier classification and the render settings derived from it.

const MOBILE_BREAKPOINT: f64 = 768.0;
const LOW_END_CORES: u32 = 4;
const HIGH_END_CORES: u32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualityTier {
    Low,
    Medium,
    High,
}

impl Default for QualityTier {
    fn default() -> Self {
        Self::Medium
    }
}

impl QualityTier {
    /// One-shot classification from viewport width and logical core count.
    pub fn classify(viewport_width: f64, hardware_concurrency: u32) -> Self {
        if viewport_width < MOBILE_BREAKPOINT || hardware_concurrency < LOW_END_CORES {
            Self::Low
        } else if hardware_concurrency >= HIGH_END_CORES {
            Self::High
        } else {
            Self::Medium
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Every tier-dependent scene knob, resolved once at mount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    pub tier: QualityTier,
    pub antialias: bool,
    pub particle_count: usize,
    pub particle_size: f32,
    pub star_count: usize,
    pub pixel_ratio_cap: f64,
    pub shadows: bool,
    pub post_processing: bool,
    pub animate_particles: bool,
}

impl RenderSettings {
    pub fn for_tier(tier: QualityTier) -> Self {
        match tier {
            QualityTier::Low => Self {
                tier,
                antialias: false,
                particle_count: 500,
                particle_size: 0.1,
                star_count: 1000,
                pixel_ratio_cap: 1.0,
                shadows: false,
                post_processing: false,
                animate_particles: false,
            },
            QualityTier::Medium => Self {
                tier,
                antialias: true,
                particle_count: 1000,
                particle_size: 0.05,
                star_count: 3000,
                pixel_ratio_cap: 2.0,
                shadows: false,
                post_processing: true,
                animate_particles: true,
            },
            QualityTier::High => Self {
                tier,
                antialias: true,
                particle_count: 1500,
                particle_size: 0.05,
                star_count: 3000,
                pixel_ratio_cap: 2.0,
                shadows: true,
                post_processing: true,
                animate_particles: true,
            },
        }
    }

    /// Backing-store scale for a canvas given the device pixel ratio.
    pub fn pixel_ratio(&self, device_pixel_ratio: f64) -> f64 {
        device_pixel_ratio.clamp(1.0, self.pixel_ratio_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewport_is_low_even_with_many_cores() {
        assert_eq!(QualityTier::classify(375.0, 4), QualityTier::Low);
        assert_eq!(QualityTier::classify(375.0, 16), QualityTier::Low);
    }

    #[test]
    fn core_count_splits_desktop_tiers() {
        assert_eq!(QualityTier::classify(1920.0, 8), QualityTier::High);
        assert_eq!(QualityTier::classify(1920.0, 4), QualityTier::Medium);
        assert_eq!(QualityTier::classify(1920.0, 2), QualityTier::Low);
    }

    #[test]
    fn breakpoint_width_is_not_mobile() {
        assert_eq!(QualityTier::classify(768.0, 6), QualityTier::Medium);
    }

    #[test]
    fn settings_follow_tier() {
        let counts: Vec<usize> = [QualityTier::Low, QualityTier::Medium, QualityTier::High]
            .into_iter()
            .map(|tier| RenderSettings::for_tier(tier).particle_count)
            .collect();
        assert_eq!(counts, vec![500, 1000, 1500]);

        let low = RenderSettings::for_tier(QualityTier::Low);
        assert!(!low.antialias);
        assert!(!low.post_processing);
        assert!(!low.animate_particles);

        let high = RenderSettings::for_tier(QualityTier::High);
        assert!(high.shadows);
        assert!(!RenderSettings::for_tier(QualityTier::Medium).shadows);
    }

    #[test]
    fn pixel_ratio_is_capped_per_tier() {
        assert_eq!(RenderSettings::for_tier(QualityTier::Low).pixel_ratio(3.0), 1.0);
        assert_eq!(RenderSettings::for_tier(QualityTier::High).pixel_ratio(3.0), 2.0);
        assert_eq!(RenderSettings::for_tier(QualityTier::High).pixel_ratio(1.5), 1.5);
    }
}
