//! Optional head mesh shown behind the star, with a procedural stand-in.

use glam::Vec3;
use serde::Deserialize;
use std::f32::consts::{PI, TAU};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("request failed: {0}")]
    Fetch(String),
    #[error("asset responded with status {0}")]
    Status(u16),
    #[error("invalid model json: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("model has no vertices")]
    Empty,
    #[error("edge {edge} references vertex {vertex} but only {count} exist")]
    EdgeOutOfRange {
        edge: usize,
        vertex: u32,
        count: usize,
    },
}

/// Wireframe mesh: vertex positions plus index pairs.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeadModel {
    pub vertices: Vec<[f32; 3]>,
    pub edges: Vec<[u32; 2]>,
}

impl HeadModel {
    pub fn parse(json: &str) -> Result<Self, ModelError> {
        let model: HeadModel = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.vertices.is_empty() {
            return Err(ModelError::Empty);
        }
        let count = self.vertices.len();
        for (edge, pair) in self.edges.iter().enumerate() {
            if let Some(&vertex) = pair.iter().find(|&&v| v as usize >= count) {
                return Err(ModelError::EdgeOutOfRange {
                    edge,
                    vertex,
                    count,
                });
            }
        }
        Ok(())
    }

    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.edges.iter().map(|[a, b]| {
            (
                Vec3::from_array(self.vertices[*a as usize]),
                Vec3::from_array(self.vertices[*b as usize]),
            )
        })
    }

    /// Latitude/longitude wire sphere used when no model is available.
    pub fn placeholder(radius: f32, rings: usize, segments: usize) -> Self {
        let rings = rings.max(2);
        let segments = segments.max(3);
        let mut vertices = Vec::with_capacity((rings - 1) * segments);
        let mut edges = Vec::new();

        for ring in 1..rings {
            let phi = ring as f32 / rings as f32 * PI;
            for segment in 0..segments {
                let theta = segment as f32 / segments as f32 * TAU;
                vertices.push([
                    radius * phi.sin() * theta.cos(),
                    radius * phi.cos(),
                    radius * phi.sin() * theta.sin(),
                ]);
            }
        }

        let index = |ring: usize, segment: usize| ((ring - 1) * segments + segment % segments) as u32;
        for ring in 1..rings {
            for segment in 0..segments {
                edges.push([index(ring, segment), index(ring, segment + 1)]);
                if ring + 1 < rings {
                    edges.push([index(ring, segment), index(ring + 1, segment)]);
                }
            }
        }

        Self { vertices, edges }
    }
}

/// What the scene draws for the head.
#[derive(Clone, Debug, PartialEq)]
pub enum HeadShape {
    Loaded(HeadModel),
    Placeholder(HeadModel),
}

impl HeadShape {
    pub fn placeholder() -> Self {
        Self::Placeholder(HeadModel::placeholder(1.2, 6, 12))
    }

    /// Keeps a loaded model or substitutes the placeholder, logging why.
    pub fn from_result(result: Result<HeadModel, ModelError>) -> Self {
        match result {
            Ok(model) => {
                log::info!("head model loaded ({} vertices)", model.vertices.len());
                Self::Loaded(model)
            }
            Err(error) => {
                log::warn!("head model unavailable, using fallback geometry: {error}");
                Self::placeholder()
            }
        }
    }

    pub fn model(&self) -> &HeadModel {
        match self {
            Self::Loaded(model) | Self::Placeholder(model) => model,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_wireframe() {
        let model = HeadModel::parse(r#"{"vertices": [[0,0,0],[1,0,0]], "edges": [[0,1]]}"#)
            .expect("valid model parses");
        let segments: Vec<_> = model.segments().collect();
        assert_eq!(segments, vec![(Vec3::ZERO, Vec3::X)]);
    }

    #[test]
    fn rejects_out_of_range_edges() {
        let error = HeadModel::parse(r#"{"vertices": [[0,0,0]], "edges": [[0,3]]}"#)
            .expect_err("edge points past the vertex list");
        assert!(matches!(
            error,
            ModelError::EdgeOutOfRange {
                edge: 0,
                vertex: 3,
                count: 1
            }
        ));
    }

    #[test]
    fn rejects_empty_and_malformed_models() {
        assert!(matches!(
            HeadModel::parse(r#"{"vertices": [], "edges": []}"#),
            Err(ModelError::Empty)
        ));
        assert!(matches!(
            HeadModel::parse("<html>not found</html>"),
            Err(ModelError::Decode(_))
        ));
    }

    #[test]
    fn failed_load_falls_back_to_placeholder() {
        let shape = HeadShape::from_result(Err(ModelError::Status(404)));
        assert!(shape.is_placeholder());
        assert!(shape.model().validate().is_ok());
    }

    #[test]
    fn placeholder_sphere_is_well_formed() {
        let model = HeadModel::placeholder(2.0, 6, 12);
        assert_eq!(model.vertices.len(), 5 * 12);
        assert!(model.validate().is_ok());
        for vertex in &model.vertices {
            assert!((Vec3::from_array(*vertex).length() - 2.0).abs() < 1e-4);
        }
    }
}
