//! Procedural geometry for the decorative scene.
//!
//! Every function here is a pure function of its inputs (plus an explicit
//! `fastrand::Rng` where sampling is involved); animation is expressed as
//! closed-form functions of elapsed seconds.

use glam::{Mat3, Vec3};
use std::collections::HashMap;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn css(self, alpha: f32) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }

    /// Scales the colour by `factor`, clamped to the displayable range.
    pub fn shade(self, factor: f32) -> Self {
        let scale = |channel: u8| (f32::from(channel) * factor).round().clamp(0.0, 255.0) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

/// Opaque CSS colour strings, formatted once per distinct colour. Alpha is
/// applied separately through the context's global alpha.
#[derive(Debug, Default)]
pub struct CssColors {
    cached: HashMap<Rgb, String>,
}

impl CssColors {
    pub fn get(&mut self, rgb: Rgb) -> &str {
        self.cached.entry(rgb).or_insert_with(|| rgb.css(1.0))
    }
}

pub mod palette {
    use super::Rgb;

    pub const PRIMARY: Rgb = Rgb::new(0x1e, 0x3a, 0x5f);
    pub const GOLD: Rgb = Rgb::new(0xc9, 0xa9, 0x61);
    pub const GREEN: Rgb = Rgb::new(0x2c, 0x5f, 0x2d);
    pub const LIGHT: Rgb = Rgb::new(0xf4, 0xf4, 0xf9);
    pub const TURQUOISE: Rgb = Rgb::new(0x4a, 0x9d, 0x9c);
    pub const BURGUNDY: Rgb = Rgb::new(0x6d, 0x1f, 0x2c);
    pub const DARK_PRIMARY: Rgb = Rgb::new(0x0d, 0x1f, 0x3a);

    pub const PARTICLES: [Rgb; 3] = [GOLD, TURQUOISE, GREEN];
}

pub const STAR_SPIKES: usize = 8;
pub const STAR_OUTER_RADIUS: f32 = 2.0;
pub const STAR_INNER_RADIUS: f32 = 0.8;
pub const STAR_DEPTH: f32 = 0.5;
pub const STAR_BEVEL: f32 = 0.1;
pub const STAR_SPIN: f32 = 0.1;

/// Closed outline of a star: `2 * spikes` vertices alternating between the
/// outer and inner radius, starting on the positive x axis.
pub fn star_outline(spikes: usize, outer: f32, inner: f32) -> Vec<Vec3> {
    let count = spikes * 2;
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * TAU;
            let radius = if i % 2 == 0 { outer } else { inner };
            Vec3::new(angle.cos() * radius, angle.sin() * radius, 0.0)
        })
        .collect()
}

/// An outline extruded along z. Both caps share the outline's vertex order.
#[derive(Clone, Debug, PartialEq)]
pub struct Extrusion {
    pub front: Vec<Vec3>,
    pub back: Vec<Vec3>,
}

impl Extrusion {
    pub fn new(outline: &[Vec3], depth: f32, bevel: f32) -> Self {
        let half = depth / 2.0 + bevel;
        Self {
            front: outline.iter().map(|p| Vec3::new(p.x, p.y, half)).collect(),
            back: outline.iter().map(|p| Vec3::new(p.x, p.y, -half)).collect(),
        }
    }

    /// Side quads joining consecutive outline edges, wrapping at the end.
    pub fn sides(&self) -> Vec<[Vec3; 4]> {
        let count = self.front.len();
        (0..count)
            .map(|i| {
                let j = (i + 1) % count;
                [self.front[i], self.front[j], self.back[j], self.back[i]]
            })
            .collect()
    }

    pub fn transformed(&self, rotation: Mat3, scale: f32) -> Self {
        let apply = |points: &[Vec3]| points.iter().map(|p| rotation * (*p * scale)).collect();
        Self {
            front: apply(&self.front),
            back: apply(&self.back),
        }
    }
}

pub const ORBIT_COUNT: usize = 6;
pub const ORBIT_RADIUS: f32 = 4.0;
pub const OCTAHEDRON_SIZE: f32 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub rotation_z: f32,
    pub color: Rgb,
}

/// Octahedra evenly spaced around the star, colours alternating.
pub fn octahedron_orbit() -> Vec<Placement> {
    (0..ORBIT_COUNT)
        .map(|i| {
            let angle = i as f32 / ORBIT_COUNT as f32 * TAU;
            Placement {
                position: Vec3::new(angle.cos() * ORBIT_RADIUS, angle.sin() * ORBIT_RADIUS, 0.0),
                rotation_z: angle,
                color: if i % 2 == 0 {
                    palette::TURQUOISE
                } else {
                    palette::GREEN
                },
            }
        })
        .collect()
}

/// Triangular faces of an octahedron with circumradius `size`.
pub fn octahedron_faces(size: f32) -> Vec<[Vec3; 3]> {
    let px = Vec3::X * size;
    let nx = -Vec3::X * size;
    let py = Vec3::Y * size;
    let ny = -Vec3::Y * size;
    let pz = Vec3::Z * size;
    let nz = -Vec3::Z * size;
    vec![
        [px, py, pz],
        [py, nx, pz],
        [nx, ny, pz],
        [ny, px, pz],
        [py, px, nz],
        [nx, py, nz],
        [ny, nx, nz],
        [px, ny, nz],
    ]
}

/// Triangular faces of an icosahedron with circumradius `size`.
pub fn icosahedron_faces(size: f32) -> Vec<[Vec3; 3]> {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let raw = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];
    let v: Vec<Vec3> = raw.iter().map(|p| p.normalize() * size).collect();
    const FACES: [[usize; 3]; 20] = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    FACES.iter().map(|f| [v[f[0]], v[f[1]], v[f[2]]]).collect()
}

pub const PARTICLE_MIN_RADIUS: f32 = 15.0;
pub const PARTICLE_MAX_RADIUS: f32 = 30.0;
pub const PARTICLE_WAVE_AMPLITUDE: f32 = 0.3;
pub const PARTICLE_FIELD_SPIN: f32 = 0.05;

/// Uniform sample on a spherical shell: theta uniform, `phi = acos(2u - 1)`
/// so the poles are not over-represented.
pub fn sample_shell(rng: &mut fastrand::Rng, min_radius: f32, max_radius: f32) -> Vec3 {
    let theta = rng.f32() * TAU;
    let phi = (rng.f32() * 2.0 - 1.0).acos();
    let radius = min_radius + rng.f32() * (max_radius - min_radius);
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    pub base: Vec<Vec3>,
    pub colors: Vec<Rgb>,
}

impl ParticleField {
    pub fn generate(count: usize, rng: &mut fastrand::Rng) -> Self {
        let mut base = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for _ in 0..count {
            base.push(sample_shell(rng, PARTICLE_MIN_RADIUS, PARTICLE_MAX_RADIUS));
            colors.push(palette::PARTICLES[rng.usize(..palette::PARTICLES.len())]);
        }
        Self { base, colors }
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Particle `index` at time `t`. With `animate` off the field is static.
    pub fn position_at(&self, index: usize, t: f32, animate: bool) -> Vec3 {
        let base = self.base[index];
        if !animate {
            return base;
        }
        let wave = (t * 0.5 + base.x * 0.01).sin() * PARTICLE_WAVE_AMPLITUDE;
        Mat3::from_rotation_y(t * PARTICLE_FIELD_SPIN) * Vec3::new(base.x, base.y + wave, base.z)
    }
}

pub const RING_RADII: [f32; 3] = [4.0, 6.0, 8.0];
pub const RING_CONTROL_POINTS: usize = 16;
pub const RING_SAMPLES: usize = 64;
pub const RING_SCALLOP: f32 = 0.1;
pub const RING_GROUP_SPIN: f32 = 0.08;
pub const RING_ORNAMENTS: usize = 8;
pub const RING_ORNAMENT_RADIUS: f32 = 10.0;

/// Control points of a scalloped ring in the XY plane: radius perturbed by
/// `sin(8θ)`.
pub fn ring_control_points(radius: f32) -> Vec<Vec3> {
    (0..RING_CONTROL_POINTS)
        .map(|i| {
            let theta = i as f32 / RING_CONTROL_POINTS as f32 * TAU;
            let r = radius + (theta * 8.0).sin() * RING_SCALLOP;
            Vec3::new(r * theta.cos(), r * theta.sin(), 0.0)
        })
        .collect()
}

/// Samples a closed uniform Catmull-Rom spline through `points`.
pub fn catmull_rom_closed(points: &[Vec3], samples: usize) -> Vec<Vec3> {
    let count = points.len();
    if count < 2 || samples == 0 {
        return points.to_vec();
    }
    (0..samples)
        .map(|s| {
            let u = s as f32 / samples as f32 * count as f32;
            let segment = (u.floor() as usize).min(count - 1);
            let t = u - segment as f32;
            let p0 = points[(segment + count - 1) % count];
            let p1 = points[segment];
            let p2 = points[(segment + 1) % count];
            let p3 = points[(segment + 2) % count];
            let t2 = t * t;
            let t3 = t2 * t;
            0.5 * (2.0 * p1
                + (p2 - p0) * t
                + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
                + (3.0 * p1 - p0 - 3.0 * p2 + p3) * t3)
        })
        .collect()
}

/// Spin of ring `index` about its own axis; direction alternates by parity.
pub fn ring_spin(index: usize, t: f32) -> f32 {
    let direction = if index % 2 == 0 { 1.0 } else { -1.0 };
    t * (0.1 + index as f32 * 0.02) * direction
}

pub fn ring_color(index: usize) -> Rgb {
    if index == 1 {
        palette::GOLD
    } else {
        palette::TURQUOISE
    }
}

pub fn ring_ornaments() -> Vec<Vec3> {
    (0..RING_ORNAMENTS)
        .map(|i| {
            let angle = i as f32 / RING_ORNAMENTS as f32 * TAU;
            Vec3::new(
                angle.cos() * RING_ORNAMENT_RADIUS,
                0.0,
                angle.sin() * RING_ORNAMENT_RADIUS,
            )
        })
        .collect()
}

/// Vertical bob of a floating element.
pub fn float_offset(t: f32, speed: f32, intensity: f32, phase: f32) -> f32 {
    (t * speed * 0.5 + phase).sin() * 0.5 * intensity
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingShape {
    pub position: Vec3,
    pub speed: f32,
    pub color: Rgb,
}

/// Five icosahedra scattered through a 15 × 10 × 8 box.
pub fn floating_shapes(rng: &mut fastrand::Rng) -> Vec<FloatingShape> {
    (0..5)
        .map(|i| FloatingShape {
            position: Vec3::new(
                (rng.f32() - 0.5) * 15.0,
                (rng.f32() - 0.5) * 10.0,
                (rng.f32() - 0.5) * 8.0,
            ),
            speed: 2.0 + i as f32 * 0.3,
            color: if i % 2 == 0 {
                palette::TURQUOISE
            } else {
                palette::BURGUNDY
            },
        })
        .collect()
}

pub const STARFIELD_RADIUS: f32 = 100.0;
pub const STARFIELD_DEPTH: f32 = 50.0;

pub fn starfield(count: usize, rng: &mut fastrand::Rng) -> Vec<Vec3> {
    (0..count)
        .map(|_| sample_shell(rng, STARFIELD_RADIUS, STARFIELD_RADIUS + STARFIELD_DEPTH))
        .collect()
}

/// Points of the halo ring drawn around the head.
pub fn halo(segments: usize, radius: f32) -> Vec<Vec3> {
    (0..segments)
        .map(|i| {
            let theta = i as f32 / segments as f32 * TAU;
            Vec3::new(theta.cos() * radius, theta.sin() * radius, 0.0)
        })
        .collect()
}

pub const CAMERA_DISTANCE: f32 = 20.0;
pub const CAMERA_FOV_DEG: f32 = 45.0;
/// Orbit speed in radians per second.
pub const CAMERA_ORBIT_SPEED: f32 = 0.15 * TAU / 60.0;
pub const CAMERA_MIN_POLAR: f32 = PI / 3.0;
pub const CAMERA_MAX_POLAR: f32 = PI / 1.8;
const NEAR_PLANE: f32 = 0.1;

/// Perspective camera orbiting the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    pub azimuth: f32,
    pub polar: f32,
    pub distance: f32,
    pub fov_deg: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            polar: PI / 2.0,
            distance: CAMERA_DISTANCE,
            fov_deg: CAMERA_FOV_DEG,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
    /// Pixels per world unit at this depth.
    pub scale: f32,
}

impl OrbitCamera {
    pub fn at_time(t: f32) -> Self {
        Self {
            azimuth: t * CAMERA_ORBIT_SPEED,
            ..Self::default()
        }
    }

    pub fn with_polar(self, polar: f32) -> Self {
        Self {
            polar: polar.clamp(CAMERA_MIN_POLAR, CAMERA_MAX_POLAR),
            ..self
        }
    }

    fn view(&self) -> Mat3 {
        let tilt = self.polar - PI / 2.0;
        Mat3::from_rotation_x(tilt) * Mat3::from_rotation_y(-self.azimuth)
    }

    /// Screen position of `point` on a `width` × `height` viewport, or `None`
    /// when it sits behind the near plane.
    pub fn project(&self, point: Vec3, width: f32, height: f32) -> Option<Projected> {
        let view = self.view() * point;
        let depth = self.distance - view.z;
        if depth < NEAR_PLANE {
            return None;
        }
        let focal = 1.0 / (self.fov_deg.to_radians() / 2.0).tan();
        let scale = focal * (height / 2.0) / depth;
        Some(Projected {
            x: width / 2.0 + view.x * scale,
            y: height / 2.0 - view.y * scale,
            depth,
            scale,
        })
    }

    /// Lambert factor for a face normal against a fixed key light.
    pub fn light_factor(&self, normal: Vec3) -> f32 {
        let key = Vec3::new(10.0, 10.0, 5.0).normalize();
        let facing = (self.view() * normal).normalize_or_zero();
        0.35 + 0.65 * facing.dot(key).max(0.0)
    }
}

pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn star_alternates_radii() {
        let outline = star_outline(STAR_SPIKES, STAR_OUTER_RADIUS, STAR_INNER_RADIUS);
        assert_eq!(outline.len(), 16);
        assert!((outline[0] - Vec3::new(2.0, 0.0, 0.0)).length() < EPS);
        for (i, point) in outline.iter().enumerate() {
            let expected = if i % 2 == 0 { 2.0 } else { 0.8 };
            assert!((point.length() - expected).abs() < EPS, "vertex {i}");
        }
    }

    #[test]
    fn extrusion_has_one_side_per_edge() {
        let outline = star_outline(8, 2.0, 0.8);
        let extrusion = Extrusion::new(&outline, STAR_DEPTH, STAR_BEVEL);
        assert_eq!(extrusion.sides().len(), outline.len());
        assert!((extrusion.front[0].z - 0.35).abs() < EPS);
        assert!((extrusion.back[0].z + 0.35).abs() < EPS);
    }

    #[test]
    fn orbit_places_six_octahedra_on_radius_four() {
        let orbit = octahedron_orbit();
        assert_eq!(orbit.len(), 6);
        for placement in &orbit {
            assert!((placement.position.length() - ORBIT_RADIUS).abs() < EPS);
        }
        assert_eq!(orbit[0].color, palette::TURQUOISE);
        assert_eq!(orbit[1].color, palette::GREEN);
    }

    #[test]
    fn shell_samples_stay_within_radii_and_palette() {
        let mut rng = fastrand::Rng::with_seed(7);
        let field = ParticleField::generate(1000, &mut rng);
        assert_eq!(field.len(), 1000);
        for (point, color) in field.base.iter().zip(&field.colors) {
            let radius = point.length();
            assert!(radius >= PARTICLE_MIN_RADIUS - EPS && radius <= PARTICLE_MAX_RADIUS + EPS);
            assert!(palette::PARTICLES.contains(color));
        }
    }

    #[test]
    fn shell_sampling_does_not_cluster_at_poles() {
        let mut rng = fastrand::Rng::with_seed(42);
        let samples = 20_000;
        let polar_caps = (0..samples)
            .map(|_| sample_shell(&mut rng, 1.0, 1.0))
            .filter(|p| p.z.abs() > 0.9)
            .count();
        // Uniform on the sphere puts 10% of the area beyond |z| > 0.9.
        let share = polar_caps as f32 / samples as f32;
        assert!((share - 0.1).abs() < 0.02, "share was {share}");
    }

    #[test]
    fn static_particles_ignore_time() {
        let mut rng = fastrand::Rng::with_seed(3);
        let field = ParticleField::generate(4, &mut rng);
        assert_eq!(field.position_at(2, 12.5, false), field.base[2]);
        let moved = field.position_at(2, 12.5, true);
        assert!((moved.length() - field.base[2].length()).abs() < PARTICLE_WAVE_AMPLITUDE + EPS);
    }

    #[test]
    fn ring_spline_passes_through_control_points() {
        let control = ring_control_points(6.0);
        assert_eq!(control.len(), RING_CONTROL_POINTS);
        let curve = catmull_rom_closed(&control, RING_SAMPLES);
        assert_eq!(curve.len(), RING_SAMPLES);
        let per_segment = RING_SAMPLES / RING_CONTROL_POINTS;
        for (i, point) in control.iter().enumerate() {
            assert!((curve[i * per_segment] - *point).length() < EPS);
        }
        for point in &curve {
            assert!((point.length() - 6.0).abs() < 0.2);
        }
    }

    #[test]
    fn ring_spin_alternates_direction() {
        assert!(ring_spin(0, 10.0) > 0.0);
        assert!(ring_spin(1, 10.0) < 0.0);
        assert!((ring_spin(2, 10.0) - 1.4).abs() < EPS);
        assert_eq!(ring_spin(1, 0.0), 0.0);
    }

    #[test]
    fn camera_projects_origin_to_centre() {
        let camera = OrbitCamera::default();
        let centre = camera.project(Vec3::ZERO, 800.0, 600.0).expect("origin is visible");
        assert!((centre.x - 400.0).abs() < EPS);
        assert!((centre.y - 300.0).abs() < EPS);
        assert!((centre.depth - CAMERA_DISTANCE).abs() < EPS);

        let right = camera.project(Vec3::X, 800.0, 600.0).expect("visible");
        assert!(right.x > centre.x);
        let up = camera.project(Vec3::Y, 800.0, 600.0).expect("visible");
        assert!(up.y < centre.y);
    }

    #[test]
    fn points_behind_camera_are_culled() {
        let camera = OrbitCamera::default();
        assert!(camera.project(Vec3::new(0.0, 0.0, 25.0), 800.0, 600.0).is_none());
    }

    #[test]
    fn polar_angle_is_clamped() {
        let camera = OrbitCamera::default().with_polar(0.0);
        assert!((camera.polar - CAMERA_MIN_POLAR).abs() < EPS);
    }

    #[test]
    fn css_colors_format_each_colour_once() {
        let mut colors = CssColors::default();
        for _ in 0..3 {
            for rgb in palette::PARTICLES {
                colors.get(rgb);
            }
        }
        assert_eq!(colors.cached.len(), palette::PARTICLES.len());
        assert_eq!(colors.get(palette::GOLD), "rgba(201, 169, 97, 1.000)");
    }

    #[test]
    fn shade_clamps_channels() {
        assert_eq!(palette::LIGHT.shade(2.0), Rgb::new(255, 255, 255));
        assert_eq!(palette::GOLD.shade(0.0), Rgb::new(0, 0, 0));
    }
}
