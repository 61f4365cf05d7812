//! # Disc Synthesis
//!
//! Derives one disc per mesh vertex from the triangles around it:
//!
//! - **Normal**: the sum of the unnormalized normals of all incident
//!   triangles, normalized. Larger triangles weigh more.
//! - **Radius**: the largest distance from the vertex to the centroid of an
//!   incident triangle, so the disc reaches over the whole triangle fan.
//!
//! A vertex without incident triangles gets radius 0 but has no normal;
//! asking for it fails with [`GeometryError::DegenerateVertex`].
//!
//! Vertices are independent of each other. Once the adjacency index exists,
//! large batches are spread over the rayon thread pool.

use config::constants::GlobalConfig;
use glam::DVec3;
use log::debug;
use rayon::prelude::*;

use crate::adjacency::Adjacency;
use crate::error::{GeometryError, GeometryResult};
use crate::mesh::Triangle;
use crate::surface::DiscSurface;
use crate::vec3::{centroid, distance, normalize_with, sum, triangle_normal};

/// Per-vertex disc attributes over a borrowed mesh.
///
/// The vertex and triangle slices stay borrowed for the lifetime of the
/// synthesizer, so the adjacency index built in [`DiscSynthesizer::new`]
/// always matches the connectivity it is queried against.
///
/// # Example
///
/// ```rust
/// use disc_geometry::DiscSynthesizer;
/// use glam::DVec3;
///
/// let vertices = [DVec3::ZERO, DVec3::X, DVec3::Y];
/// let triangles = [[0, 1, 2]];
/// let synthesizer = DiscSynthesizer::new(&vertices, &triangles).unwrap();
/// assert_eq!(synthesizer.normal(0).unwrap(), DVec3::Z);
/// ```
#[derive(Debug, Clone)]
pub struct DiscSynthesizer<'a> {
    vertices: &'a [DVec3],
    triangles: &'a [Triangle],
    adjacency: Adjacency,
    config: GlobalConfig,
}

impl<'a> DiscSynthesizer<'a> {
    /// Validates the triangles and builds the adjacency index.
    pub fn new(vertices: &'a [DVec3], triangles: &'a [Triangle]) -> GeometryResult<Self> {
        Self::with_config(vertices, triangles, GlobalConfig::default())
    }

    /// Same as [`DiscSynthesizer::new`] with explicit tolerance and
    /// parallelism settings.
    pub fn with_config(
        vertices: &'a [DVec3],
        triangles: &'a [Triangle],
        config: GlobalConfig,
    ) -> GeometryResult<Self> {
        let adjacency = Adjacency::build(vertices.len(), triangles)?;
        Ok(Self {
            vertices,
            triangles,
            adjacency,
            config,
        })
    }

    /// Returns the adjacency index built for this mesh.
    #[inline]
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    #[inline]
    fn corners(&self, triangle: usize) -> [DVec3; 3] {
        self.triangles[triangle].map(|i| self.vertices[i as usize])
    }

    /// Unit normal of `vertex`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateVertex`] when the vertex has no incident
    /// triangles or when their normals sum to a vector that cannot be
    /// normalized (all incident triangles collinear, or cancelling out).
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a vertex of the mesh.
    pub fn normal(&self, vertex: usize) -> GeometryResult<DVec3> {
        let incident = self.adjacency.triangles_of(vertex);
        if incident.is_empty() {
            return Err(GeometryError::degenerate_vertex(
                vertex,
                "no adjacent triangles",
            ));
        }

        let total = incident.iter().fold(DVec3::ZERO, |acc, &t| {
            let [v0, v1, v2] = self.corners(t);
            sum(acc, triangle_normal(v0, v1, v2))
        });

        normalize_with(total, &self.config).map_err(|_| {
            GeometryError::degenerate_vertex(
                vertex,
                format!(
                    "normals of {} adjacent triangles sum to length {}",
                    incident.len(),
                    total.length()
                ),
            )
        })
    }

    /// Disc radius of `vertex`: the largest vertex-to-centroid distance over
    /// its incident triangles, or 0 for an unreferenced vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a vertex of the mesh.
    pub fn radius(&self, vertex: usize) -> f64 {
        let position = self.vertices[vertex];
        self.adjacency
            .triangles_of(vertex)
            .iter()
            .fold(0.0, |radius, &t| {
                let [v0, v1, v2] = self.corners(t);
                let d = distance(position, centroid(v0, v1, v2));
                if radius < d {
                    d
                } else {
                    radius
                }
            })
    }

    /// Unit normals of all vertices.
    ///
    /// On failure the error of the lowest failing vertex index is returned.
    pub fn normals(&self) -> GeometryResult<Vec<DVec3>> {
        self.per_vertex(|v| self.normal(v)).into_iter().collect()
    }

    /// Radii of all vertices.
    pub fn radii(&self) -> Vec<f64> {
        self.per_vertex(|v| self.radius(v))
    }

    /// Builds the complete disc surface.
    pub fn synthesize(&self) -> GeometryResult<DiscSurface> {
        let normals = self.normals()?;
        let radii = self.radii();
        debug!(
            "Synthesized {} discs from {} triangles ({} incidences)",
            self.vertices.len(),
            self.triangles.len(),
            self.adjacency.incidence_count()
        );
        DiscSurface::new(self.vertices.to_vec(), normals, radii)
    }

    fn per_vertex<T, F>(&self, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        let count = self.vertices.len();
        if count >= self.config.parallel_threshold {
            (0..count).into_par_iter().map(f).collect()
        } else {
            (0..count).map(f).collect()
        }
    }
}
