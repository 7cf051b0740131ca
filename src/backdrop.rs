//! Layout of the 2D ambient layer behind the page content.

pub const SHAPE_COUNT: usize = 6;
pub const PARTICLE_COUNT: usize = 12;
pub const GLOW_THROTTLE_MS: u32 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Star8,
    Hexagon,
    Crescent,
    Arabesque,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Star8,
        ShapeKind::Hexagon,
        ShapeKind::Crescent,
        ShapeKind::Arabesque,
    ];

    pub fn class(self) -> &'static str {
        match self {
            Self::Star8 => "shape-star8",
            Self::Hexagon => "shape-hexagon",
            Self::Crescent => "shape-crescent",
            Self::Arabesque => "shape-arabesque",
        }
    }

    /// Height relative to width; hexagons are flattened.
    fn aspect(self) -> f64 {
        match self {
            Self::Hexagon => 0.866,
            _ => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Gold,
    Turquoise,
    Green,
}

impl Tint {
    pub fn class(self) -> &'static str {
        match self {
            Self::Gold => "tint-gold",
            Self::Turquoise => "tint-turquoise",
            Self::Green => "tint-green",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AmbientShape {
    pub kind: ShapeKind,
    pub tint: Tint,
    pub size: f64,
    /// Percent of the viewport.
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub duration_secs: f64,
    pub delay_secs: f64,
}

impl AmbientShape {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; --shape-opacity: {:.3}; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.x,
            self.y,
            self.size,
            self.size * self.kind.aspect(),
            self.opacity,
            self.duration_secs,
            self.delay_secs,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AmbientParticle {
    pub id: usize,
    pub tint: Tint,
    pub size: f64,
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
}

impl AmbientParticle {
    /// Each particle drifts on its own loop: `15 + id` seconds, staggered by
    /// half a second per id.
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; --particle-opacity: {:.3}; animation-duration: {}s; animation-delay: {:.1}s;",
            self.x,
            self.y,
            self.size,
            self.size,
            self.opacity,
            15 + self.id,
            self.id as f64 * 0.5,
        )
    }
}

fn range(rng: &mut fastrand::Rng, min: f64, max: f64) -> f64 {
    min + rng.f64() * (max - min)
}

pub fn generate_shapes(rng: &mut fastrand::Rng) -> Vec<AmbientShape> {
    const TINTS: [Tint; 3] = [Tint::Gold, Tint::Turquoise, Tint::Green];
    (0..SHAPE_COUNT)
        .map(|_| AmbientShape {
            kind: ShapeKind::ALL[rng.usize(..ShapeKind::ALL.len())],
            tint: TINTS[rng.usize(..TINTS.len())],
            size: range(rng, 40.0, 120.0),
            x: range(rng, 0.0, 100.0),
            y: range(rng, 0.0, 100.0),
            opacity: range(rng, 0.05, 0.25),
            duration_secs: range(rng, 20.0, 45.0),
            delay_secs: range(rng, 0.0, 5.0),
        })
        .collect()
}

pub fn generate_particles(rng: &mut fastrand::Rng) -> Vec<AmbientParticle> {
    (0..PARTICLE_COUNT)
        .map(|id| AmbientParticle {
            id,
            tint: if rng.bool() { Tint::Gold } else { Tint::Turquoise },
            size: range(rng, 2.0, 6.0),
            x: range(rng, 0.0, 100.0),
            y: range(rng, 0.0, 100.0),
            opacity: range(rng, 0.1, 0.5),
        })
        .collect()
}

/// Pointer position as a percentage of the viewport, driving two mirrored
/// radial glows.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerGlow {
    pub x: f64,
    pub y: f64,
}

impl PointerGlow {
    pub fn from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        let percent = |value: f64, extent: f64| {
            if extent > 0.0 {
                (value / extent * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            }
        };
        Self {
            x: percent(client_x, width),
            y: percent(client_y, height),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "background: radial-gradient(circle at {x:.2}% {y:.2}%, rgba(201, 169, 97, 0.05) 0%, transparent 40%), \
             radial-gradient(circle at {mx:.2}% {my:.2}%, rgba(74, 157, 156, 0.05) 0%, transparent 40%), \
             linear-gradient(135deg, rgba(30, 58, 95, 0.02), transparent 50%, rgba(44, 95, 45, 0.02));",
            x = self.x,
            y = self.y,
            mx = 100.0 - self.x,
            my = 100.0 - self.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_stay_within_their_ranges() {
        let mut rng = fastrand::Rng::with_seed(5);
        let shapes = generate_shapes(&mut rng);
        assert_eq!(shapes.len(), SHAPE_COUNT);
        for shape in &shapes {
            assert!((40.0..=120.0).contains(&shape.size));
            assert!((0.05..=0.25).contains(&shape.opacity));
            assert!((20.0..=45.0).contains(&shape.duration_secs));
            assert!((0.0..=5.0).contains(&shape.delay_secs));
        }
    }

    #[test]
    fn particles_are_gold_or_turquoise() {
        let mut rng = fastrand::Rng::with_seed(9);
        let particles = generate_particles(&mut rng);
        assert_eq!(particles.len(), PARTICLE_COUNT);
        for (id, particle) in particles.iter().enumerate() {
            assert_eq!(particle.id, id);
            assert_ne!(particle.tint, Tint::Green);
            assert!((2.0..=6.0).contains(&particle.size));
            assert!((0.1..=0.5).contains(&particle.opacity));
        }
        assert!(particles[3].style().contains("animation-duration: 18s"));
    }

    #[test]
    fn hexagon_is_flattened() {
        let shape = AmbientShape {
            kind: ShapeKind::Hexagon,
            tint: Tint::Gold,
            size: 100.0,
            x: 10.0,
            y: 20.0,
            opacity: 0.1,
            duration_secs: 30.0,
            delay_secs: 1.0,
        };
        assert!(shape.style().contains("height: 86.6px"));
    }

    #[test]
    fn glow_is_a_clamped_percentage() {
        let glow = PointerGlow::from_client(200.0, 900.0, 800.0, 600.0);
        assert_eq!(glow, PointerGlow { x: 25.0, y: 100.0 });
        assert_eq!(PointerGlow::from_client(5.0, 5.0, 0.0, 0.0), PointerGlow::default());
        assert!(glow.style().contains("circle at 75.00% 0.00%"));
    }
}
