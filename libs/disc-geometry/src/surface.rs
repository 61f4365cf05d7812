//! # Output Surfaces
//!
//! The shapes handed to surface writers, and the three ways of producing
//! them from reader output.

use glam::DVec3;

use crate::adjacency::validate_triangles;
use crate::error::{GeometryError, GeometryResult};
use crate::mesh::{Triangle, TriangleMesh};
use crate::synthesis::DiscSynthesizer;

/// One disc: a point sample with a surface normal and a radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub position: DVec3,
    pub normal: DVec3,
    pub radius: f64,
}

/// Per-point positions, normals and radii of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscSurface {
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    radii: Vec<f64>,
}

impl DiscSurface {
    /// Bundles parallel attribute arrays.
    ///
    /// Fails with [`GeometryError::LengthMismatch`] unless all three have the
    /// same length.
    pub fn new(positions: Vec<DVec3>, normals: Vec<DVec3>, radii: Vec<f64>) -> GeometryResult<Self> {
        if positions.len() != normals.len() || positions.len() != radii.len() {
            return Err(GeometryError::LengthMismatch {
                vertices: positions.len(),
                normals: normals.len(),
                radii: radii.len(),
            });
        }
        Ok(Self {
            positions,
            normals,
            radii,
        })
    }

    /// Returns the number of discs.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    #[inline]
    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    /// Returns disc `index`, or `None` past the end.
    pub fn disc(&self, index: usize) -> Option<Disc> {
        Some(Disc {
            position: *self.positions.get(index)?,
            normal: self.normals[index],
            radius: self.radii[index],
        })
    }

    /// Iterates over the discs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = Disc> + '_ {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.radii)
            .map(|((&position, &normal), &radius)| Disc {
                position,
                normal,
                radius,
            })
    }
}

/// Wraps point samples whose normals and radii are already known.
///
/// # Example
///
/// ```rust
/// use disc_geometry::disc_surface_from_points;
/// use glam::DVec3;
///
/// let surface = disc_surface_from_points(vec![DVec3::ZERO], vec![DVec3::Z], vec![0.5]).unwrap();
/// assert_eq!(surface.len(), 1);
/// ```
pub fn disc_surface_from_points(
    vertices: Vec<DVec3>,
    normals: Vec<DVec3>,
    radii: Vec<f64>,
) -> GeometryResult<DiscSurface> {
    DiscSurface::new(vertices, normals, radii)
}

/// Synthesizes one disc per mesh vertex.
///
/// # Errors
///
/// [`GeometryError::IndexOutOfRange`] for invalid triangles, and
/// [`GeometryError::DegenerateVertex`] for vertices without a normal.
pub fn disc_surface_from_mesh(
    vertices: &[DVec3],
    triangles: &[Triangle],
) -> GeometryResult<DiscSurface> {
    DiscSynthesizer::new(vertices, triangles)?.synthesize()
}

/// Validates the mesh and returns it unchanged.
pub fn triangle_surface_from_mesh(
    vertices: &[DVec3],
    triangles: &[Triangle],
) -> GeometryResult<TriangleMesh> {
    validate_triangles(vertices.len(), triangles)?;
    Ok(TriangleMesh::from_parts(vertices.to_vec(), triangles.to_vec()))
}

impl TriangleMesh {
    /// See [`disc_surface_from_mesh`].
    pub fn to_disc_surface(&self) -> GeometryResult<DiscSurface> {
        disc_surface_from_mesh(self.vertices(), self.triangles())
    }
}
