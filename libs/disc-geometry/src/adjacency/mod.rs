//! # Vertex Adjacency
//!
//! Maps every vertex to the triangles that reference it.
//!
//! The index is stored in compressed rows: one flat array of triangle indices
//! plus `vertex_count + 1` offsets, so the triangles of vertex `v` are
//! `triangles[offsets[v]..offsets[v + 1]]`. It is filled in two passes
//! (degree count, then placement) without any per-vertex allocation.
//!
//! A triangle that names the same vertex twice is listed twice for that
//! vertex. Aggregations over the index therefore weight such triangles by
//! their multiplicity.

use log::debug;

use crate::error::{GeometryError, GeometryResult};
use crate::mesh::Triangle;

/// Checks that every triangle index is below `vertex_count`.
///
/// Reports the first offending triangle in sequence order.
///
/// # Examples
/// ```
/// use disc_geometry::adjacency::validate_triangles;
/// assert!(validate_triangles(3, &[[0, 1, 2]]).is_ok());
/// assert!(validate_triangles(3, &[[0, 1, 3]]).is_err());
/// ```
pub fn validate_triangles(vertex_count: usize, triangles: &[Triangle]) -> GeometryResult<()> {
    for (triangle, tri) in triangles.iter().enumerate() {
        if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(GeometryError::IndexOutOfRange {
                triangle,
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}

/// Vertex → incident triangle index.
///
/// # Example
///
/// ```rust
/// use disc_geometry::adjacency::Adjacency;
///
/// let adjacency = Adjacency::build(4, &[[0, 1, 2], [0, 2, 3]]).unwrap();
/// assert_eq!(adjacency.triangles_of(0), &[0, 1]);
/// assert_eq!(adjacency.triangles_of(3), &[1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    /// Row offsets, `vertex_count + 1` entries
    offsets: Vec<usize>,
    /// Triangle indices grouped by vertex
    triangles: Vec<usize>,
}

impl Adjacency {
    /// Builds the index for `vertex_count` vertices.
    ///
    /// All indices are validated before anything is allocated; an index
    /// `>= vertex_count` yields [`GeometryError::IndexOutOfRange`].
    pub fn build(vertex_count: usize, triangles: &[Triangle]) -> GeometryResult<Self> {
        validate_triangles(vertex_count, triangles)?;

        // Pass 1: degree per vertex, shifted by one so the prefix sum lands
        // directly on the row starts.
        let mut offsets = vec![0usize; vertex_count + 1];
        for tri in triangles {
            for &v in tri {
                offsets[v as usize + 1] += 1;
            }
        }
        for v in 0..vertex_count {
            offsets[v + 1] += offsets[v];
        }

        // Pass 2: place triangle indices using a moving cursor per row.
        let mut cursor = offsets[..vertex_count].to_vec();
        let mut entries = vec![0usize; offsets[vertex_count]];
        for (t, tri) in triangles.iter().enumerate() {
            for &v in tri {
                let slot = &mut cursor[v as usize];
                entries[*slot] = t;
                *slot += 1;
            }
        }

        debug!(
            "Built adjacency: {} vertices, {} triangles, {} incidences",
            vertex_count,
            triangles.len(),
            entries.len()
        );

        Ok(Self {
            offsets,
            triangles: entries,
        })
    }

    /// Returns the number of vertices covered by the index.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns the total number of (vertex, triangle) incidences.
    #[inline]
    pub fn incidence_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the triangles incident to `vertex`, in ascending triangle order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex >= self.vertex_count()`.
    #[inline]
    pub fn triangles_of(&self, vertex: usize) -> &[usize] {
        &self.triangles[self.offsets[vertex]..self.offsets[vertex + 1]]
    }

    /// Returns the number of incidences of `vertex`.
    #[inline]
    pub fn degree(&self, vertex: usize) -> usize {
        self.offsets[vertex + 1] - self.offsets[vertex]
    }

    /// Returns true if no triangle references `vertex`.
    #[inline]
    pub fn is_isolated(&self, vertex: usize) -> bool {
        self.degree(vertex) == 0
    }

    /// Iterates over the vertices no triangle references.
    pub fn isolated_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.vertex_count()).filter(move |&v| self.is_isolated(v))
    }
}
