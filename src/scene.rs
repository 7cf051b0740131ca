//! Composes the decorative scene into a flat, depth-sorted draw list for one
//! frame. The browser renderer only rasterises what this produces.

use crate::content::{SCENE_LABELS, SCENE_PHRASES};
use crate::geometry::{
    self, face_normal, float_offset, palette, Extrusion, FloatingShape, OrbitCamera, ParticleField,
    Placement, Rgb,
};
use crate::model::HeadShape;
use crate::quality::RenderSettings;
use glam::{Mat3, Vec3};

pub const PHRASE_INTERVAL_MS: u32 = 5000;
const PHRASE_ANCHOR_Y: f32 = -8.0;
const HEAD_ANCHOR: Vec3 = Vec3::new(0.0, 0.0, -4.0);
const HALO_SPIN: f32 = 0.2;
const HOVER_SCALE: f32 = 1.1;
const HOVER_EASE: f32 = 0.12;
/// Screen radius, as a share of viewport height, that counts as hovering the star.
const HOVER_RADIUS: f32 = 0.12;

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Polygon {
        points: Vec<Vec3>,
        fill: Rgb,
        alpha: f32,
        /// Emissive surface, redrawn by the bloom pass.
        glow: bool,
    },
    Polyline {
        points: Vec<Vec3>,
        color: Rgb,
        alpha: f32,
        width: f32,
        closed: bool,
    },
    Point {
        position: Vec3,
        color: Rgb,
        size: f32,
        alpha: f32,
    },
    Label {
        position: Vec3,
        text: String,
        color: Rgb,
        size_px: f32,
    },
}

impl Primitive {
    /// Representative world position used for painter's ordering.
    pub fn anchor(&self) -> Vec3 {
        match self {
            Self::Polygon { points, .. } | Self::Polyline { points, .. } => {
                if points.is_empty() {
                    Vec3::ZERO
                } else {
                    points.iter().copied().sum::<Vec3>() / points.len() as f32
                }
            }
            Self::Point { position, .. } | Self::Label { position, .. } => *position,
        }
    }
}

/// Everything generated once at mount; per-frame state is derived from it.
pub struct SceneComposer {
    settings: RenderSettings,
    star: Extrusion,
    orbit: Vec<Placement>,
    octahedron: Vec<[Vec3; 3]>,
    icosahedron: Vec<[Vec3; 3]>,
    particles: ParticleField,
    rings: Vec<Vec<Vec3>>,
    ornaments: Vec<Vec3>,
    floating: Vec<FloatingShape>,
    stars: Vec<Vec3>,
    halo: Vec<Vec3>,
    head: HeadShape,
    hover_scale: f32,
}

impl SceneComposer {
    pub fn new(settings: RenderSettings, rng: &mut fastrand::Rng) -> Self {
        let outline = geometry::star_outline(
            geometry::STAR_SPIKES,
            geometry::STAR_OUTER_RADIUS,
            geometry::STAR_INNER_RADIUS,
        );
        Self {
            settings,
            star: Extrusion::new(&outline, geometry::STAR_DEPTH, geometry::STAR_BEVEL),
            orbit: geometry::octahedron_orbit(),
            octahedron: geometry::octahedron_faces(geometry::OCTAHEDRON_SIZE),
            icosahedron: geometry::icosahedron_faces(0.5),
            particles: ParticleField::generate(settings.particle_count, rng),
            rings: geometry::RING_RADII
                .iter()
                .map(|radius| {
                    geometry::catmull_rom_closed(
                        &geometry::ring_control_points(*radius),
                        geometry::RING_SAMPLES,
                    )
                })
                .collect(),
            ornaments: geometry::ring_ornaments(),
            floating: geometry::floating_shapes(rng),
            stars: geometry::starfield(settings.star_count, rng),
            halo: geometry::halo(8, 2.0),
            head: HeadShape::placeholder(),
            hover_scale: 1.0,
        }
    }

    pub fn set_head(&mut self, head: HeadShape) {
        self.head = head;
    }

    /// Eases the centrepiece scale towards 1.1 while hovered, 1.0 otherwise.
    pub fn update_hover(&mut self, hovered: bool) {
        let target = if hovered { HOVER_SCALE } else { 1.0 };
        self.hover_scale += (target - self.hover_scale) * HOVER_EASE;
    }

    /// Whether a pointer at `(x, y)` on a `width` × `height` viewport is over
    /// the centrepiece.
    pub fn is_over_centrepiece(
        &self,
        camera: &OrbitCamera,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> bool {
        camera
            .project(Vec3::ZERO, width, height)
            .map(|centre| {
                let (dx, dy) = (x - centre.x, y - centre.y);
                (dx * dx + dy * dy).sqrt() <= height * HOVER_RADIUS
            })
            .unwrap_or(false)
    }

    pub fn phrase_index(elapsed_ms: f64) -> usize {
        (elapsed_ms / f64::from(PHRASE_INTERVAL_MS)) as usize % SCENE_PHRASES.len()
    }

    /// Draw list for time `t` (seconds), back to front for `camera`.
    pub fn compose(&self, t: f32, camera: &OrbitCamera) -> Vec<Primitive> {
        let mut items = Vec::new();
        self.push_starfield(&mut items);
        self.push_particles(&mut items, t);
        self.push_rings(&mut items, t);
        self.push_head(&mut items, t);
        self.push_centrepiece(&mut items, t, camera);
        self.push_floating(&mut items, t, camera);
        self.push_labels(&mut items, t);

        let view_depth = |item: &Primitive| {
            camera
                .project(item.anchor(), 1.0, 1.0)
                .map(|p| p.depth)
                .unwrap_or(f32::MIN)
        };
        // Project each anchor once, not once per comparison.
        let mut keyed: Vec<(f32, Primitive)> = items
            .into_iter()
            .map(|item| (view_depth(&item), item))
            .collect();
        keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
        keyed.into_iter().map(|(_, item)| item).collect()
    }

    fn push_starfield(&self, items: &mut Vec<Primitive>) {
        for star in &self.stars {
            let fade = 1.0 - (star.length() - geometry::STARFIELD_RADIUS) / geometry::STARFIELD_DEPTH;
            items.push(Primitive::Point {
                position: *star,
                color: palette::LIGHT,
                size: 0.6,
                alpha: (0.2 + 0.6 * fade).clamp(0.0, 1.0),
            });
        }
    }

    fn push_particles(&self, items: &mut Vec<Primitive>, t: f32) {
        let animate = self.settings.animate_particles;
        for index in 0..self.particles.len() {
            items.push(Primitive::Point {
                position: self.particles.position_at(index, t, animate),
                color: self.particles.colors[index],
                size: self.settings.particle_size,
                alpha: 0.6,
            });
        }
    }

    fn push_rings(&self, items: &mut Vec<Primitive>, t: f32) {
        let group = Mat3::from_rotation_y(t * geometry::RING_GROUP_SPIN);
        for (index, ring) in self.rings.iter().enumerate() {
            let spin = group * Mat3::from_rotation_z(geometry::ring_spin(index, t));
            items.push(Primitive::Polyline {
                points: ring.iter().map(|p| spin * *p).collect(),
                color: geometry::ring_color(index),
                alpha: 0.7,
                width: 0.1,
                closed: true,
            });
        }
        for ornament in &self.ornaments {
            items.push(Primitive::Point {
                position: group * *ornament,
                color: palette::GOLD,
                size: 0.4,
                alpha: 1.0,
            });
        }
    }

    fn push_head(&self, items: &mut Vec<Primitive>, t: f32) {
        let bob = Vec3::new(0.0, (t * 0.5).sin() * 0.3, 0.0);
        let sway = Mat3::from_rotation_z((t * 0.3).sin() * 0.05);
        let color = if self.head.is_placeholder() {
            palette::TURQUOISE
        } else {
            palette::LIGHT
        };
        for (a, b) in self.head.model().segments() {
            items.push(Primitive::Polyline {
                points: vec![
                    HEAD_ANCHOR + bob + sway * a,
                    HEAD_ANCHOR + bob + sway * b,
                ],
                color,
                alpha: 0.35,
                width: 0.02,
                closed: false,
            });
        }
        let halo_spin = Mat3::from_rotation_z(t * HALO_SPIN);
        items.push(Primitive::Polyline {
            points: self
                .halo
                .iter()
                .map(|p| HEAD_ANCHOR + bob + halo_spin * *p)
                .collect(),
            color: palette::GOLD,
            alpha: 0.5,
            width: 0.04,
            closed: true,
        });
    }

    fn push_centrepiece(&self, items: &mut Vec<Primitive>, t: f32, camera: &OrbitCamera) {
        let spin = Mat3::from_rotation_z(t * geometry::STAR_SPIN);
        let star = self.star.transformed(spin, self.hover_scale);

        for [a, b, c, d] in star.sides() {
            let shade = camera.light_factor(face_normal(a, b, c));
            items.push(Primitive::Polygon {
                points: vec![a, b, c, d],
                fill: palette::GOLD.shade(shade * 0.8),
                alpha: 1.0,
                glow: false,
            });
        }
        items.push(Primitive::Polygon {
            points: star.back.clone(),
            fill: palette::GOLD.shade(0.6),
            alpha: 1.0,
            glow: false,
        });
        items.push(Primitive::Polygon {
            points: star.front,
            fill: palette::GOLD.shade(camera.light_factor(Vec3::Z) + 0.2),
            alpha: 1.0,
            glow: true,
        });

        for placement in &self.orbit {
            let local = Mat3::from_rotation_z(placement.rotation_z);
            let centre = spin * (placement.position * self.hover_scale);
            for [a, b, c] in &self.octahedron {
                let (a, b, c) = (spin * (local * *a), spin * (local * *b), spin * (local * *c));
                let shade = camera.light_factor(face_normal(a, b, c));
                items.push(Primitive::Polygon {
                    points: vec![centre + a, centre + b, centre + c],
                    fill: placement.color.shade(shade),
                    alpha: 1.0,
                    glow: false,
                });
            }
        }
    }

    fn push_floating(&self, items: &mut Vec<Primitive>, t: f32, camera: &OrbitCamera) {
        for (index, shape) in self.floating.iter().enumerate() {
            let offset = Vec3::Y * float_offset(t, shape.speed, 0.4, index as f32);
            let tumble = Mat3::from_rotation_x(t * 0.3 * shape.speed * 0.25)
                * Mat3::from_rotation_y(t * 0.2);
            for [a, b, c] in &self.icosahedron {
                let (a, b, c) = (tumble * *a, tumble * *b, tumble * *c);
                let shade = camera.light_factor(face_normal(a, b, c));
                items.push(Primitive::Polygon {
                    points: vec![
                        shape.position + offset + a,
                        shape.position + offset + b,
                        shape.position + offset + c,
                    ],
                    fill: shape.color.shade(shade),
                    alpha: 0.8,
                    glow: false,
                });
            }
        }
    }

    fn push_labels(&self, items: &mut Vec<Primitive>, t: f32) {
        for (index, (text, position)) in SCENE_LABELS.iter().enumerate() {
            let bob = float_offset(t, 1.5, 0.5, index as f32 * 1.3);
            items.push(Primitive::Label {
                position: Vec3::from_array(*position) + Vec3::Y * bob,
                text: (*text).to_string(),
                color: palette::GOLD,
                size_px: 24.0,
            });
        }
    }

    /// Position of the rotating phrase beneath the centrepiece.
    pub fn phrase_anchor(t: f32) -> Vec3 {
        Vec3::new(0.0, PHRASE_ANCHOR_Y + (t * 0.5).sin() * 0.3, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeadModel;
    use crate::quality::QualityTier;

    fn composer(tier: QualityTier) -> SceneComposer {
        let mut rng = fastrand::Rng::with_seed(11);
        SceneComposer::new(RenderSettings::for_tier(tier), &mut rng)
    }

    fn point_positions(items: &[Primitive], color: Rgb, size: f32) -> Vec<Vec3> {
        let mut positions: Vec<Vec3> = items
            .iter()
            .filter_map(|item| match item {
                Primitive::Point {
                    position,
                    color: c,
                    size: s,
                    ..
                } if *c == color && *s == size => Some(*position),
                _ => None,
            })
            .collect();
        positions.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));
        positions
    }

    #[test]
    fn particle_count_follows_tier() {
        let camera = OrbitCamera::default();
        let count = |tier| {
            let composer = composer(tier);
            let size = composer.settings.particle_size;
            composer
                .compose(0.0, &camera)
                .iter()
                .filter(|item| matches!(item, Primitive::Point { size: s, alpha, .. } if *s == size && *alpha == 0.6))
                .count()
        };
        assert_eq!(count(QualityTier::Low), 500);
        assert_eq!(count(QualityTier::High), 1500);
    }

    #[test]
    fn low_tier_particles_do_not_move() {
        let camera = OrbitCamera::default();
        let composer = composer(QualityTier::Low);
        let size = composer.settings.particle_size;
        let first = point_positions(&composer.compose(0.0, &camera), palette::TURQUOISE, size);
        let later = point_positions(&composer.compose(30.0, &camera), palette::TURQUOISE, size);
        assert!(!first.is_empty());
        assert_eq!(first, later);
    }

    #[test]
    fn draw_list_is_back_to_front() {
        let camera = OrbitCamera::at_time(3.0);
        let items = composer(QualityTier::Medium).compose(3.0, &camera);
        let depths: Vec<f32> = items
            .iter()
            .filter_map(|item| camera.project(item.anchor(), 1.0, 1.0).map(|p| p.depth))
            .collect();
        assert!(depths.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn depth_sort_keeps_every_star() {
        let camera = OrbitCamera::at_time(0.0);
        let composer = composer(QualityTier::Low);
        let items = composer.compose(0.0, &camera);
        let stars = items
            .iter()
            .filter(|item| matches!(item, Primitive::Point { color, size, .. } if *color == palette::LIGHT && *size == 0.6))
            .count();
        assert_eq!(stars, composer.stars.len());
    }

    #[test]
    fn hover_eases_towards_target_scale() {
        let mut composer = composer(QualityTier::Medium);
        for _ in 0..200 {
            composer.update_hover(true);
        }
        assert!((composer.hover_scale - HOVER_SCALE).abs() < 1e-3);
        for _ in 0..200 {
            composer.update_hover(false);
        }
        assert!((composer.hover_scale - 1.0).abs() < 1e-3);
    }

    #[test]
    fn centrepiece_hit_test_uses_projected_centre() {
        let composer = composer(QualityTier::Medium);
        let camera = OrbitCamera::default();
        assert!(composer.is_over_centrepiece(&camera, 400.0, 300.0, 800.0, 600.0));
        assert!(!composer.is_over_centrepiece(&camera, 10.0, 10.0, 800.0, 600.0));
    }

    #[test]
    fn loaded_head_replaces_placeholder() {
        let mut composer = composer(QualityTier::Medium);
        assert!(composer.head.is_placeholder());
        let model = HeadModel {
            vertices: vec![[0.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            edges: vec![[0, 1]],
        };
        composer.set_head(HeadShape::Loaded(model));
        assert!(!composer.head.is_placeholder());
    }

    #[test]
    fn phrases_rotate_every_five_seconds() {
        assert_eq!(SceneComposer::phrase_index(0.0), 0);
        assert_eq!(SceneComposer::phrase_index(4999.0), 0);
        assert_eq!(SceneComposer::phrase_index(5000.0), 1);
        assert_eq!(SceneComposer::phrase_index(15_000.0), 0);
    }
}
