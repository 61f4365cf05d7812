//! # Triangle Mesh
//!
//! Vertices plus triangle connectivity, as handed over by mesh readers.

use glam::DVec3;

use crate::adjacency::validate_triangles;
use crate::error::GeometryResult;

/// Three vertex indices.
pub type Triangle = [u32; 3];

/// A triangle mesh with dense vertex indices.
///
/// Construction does not check indices; [`TriangleMesh::validate`] and every
/// consumer in this crate do.
///
/// # Example
///
/// ```rust
/// use disc_geometry::TriangleMesh;
/// use glam::DVec3;
///
/// let mesh = TriangleMesh::from_parts(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
/// assert!(mesh.validate().is_ok());
/// assert_eq!(mesh.bounds(), Some((DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0))));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    vertices: Vec<DVec3>,
    triangles: Vec<Triangle>,
}

impl TriangleMesh {
    pub fn from_parts(vertices: Vec<DVec3>, triangles: Vec<Triangle>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True when there is nothing to draw: no vertices at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Fails with [`GeometryError::IndexOutOfRange`](crate::GeometryError::IndexOutOfRange)
    /// on the first triangle naming a missing vertex.
    pub fn validate(&self) -> GeometryResult<()> {
        validate_triangles(self.vertices.len(), &self.triangles)
    }

    /// Componentwise (min, max) over all vertices, `None` when empty.
    pub fn bounds(&self) -> Option<(DVec3, DVec3)> {
        let (&first, rest) = self.vertices.split_first()?;
        Some(
            rest.iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }
}
