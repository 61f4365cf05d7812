//! # Disc Geometry
//!
//! Turns triangle meshes into disc surfaces: one point per vertex carrying an
//! averaged unit normal and a radius that covers its triangle fan.
//!
//! ## Architecture
//!
//! ```text
//! (vertices, triangles) → Adjacency → DiscSynthesizer → DiscSurface
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use disc_geometry::disc_surface_from_mesh;
//! use glam::DVec3;
//!
//! let vertices = [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
//! let triangles = [[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];
//! let surface = disc_surface_from_mesh(&vertices, &triangles).unwrap();
//! assert_eq!(surface.len(), 4);
//! ```

pub mod adjacency;
pub mod error;
pub mod mesh;
pub mod surface;
pub mod synthesis;
pub mod vec3;

pub use adjacency::Adjacency;
pub use error::{GeometryError, GeometryResult};
pub use mesh::{Triangle, TriangleMesh};
pub use surface::{
    disc_surface_from_mesh, disc_surface_from_points, triangle_surface_from_mesh, Disc,
    DiscSurface,
};
pub use synthesis::DiscSynthesizer;
