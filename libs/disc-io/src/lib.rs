//! # Disc IO
//!
//! File formats around [`disc_geometry`]:
//!
//! - [`dsv`]: whitespace-delimited point records, read into a [`PointCloud`]
//! - [`msh`]: ASCII Gmsh meshes, read into a [`TriangleMesh`]
//! - [`vtp`]: ASCII VTK XML PolyData, written from a [`DiscSurface`] or a
//!   [`TriangleMesh`]
//!
//! [`TriangleMesh`]: disc_geometry::TriangleMesh
//! [`DiscSurface`]: disc_geometry::DiscSurface

pub mod dsv;
pub mod error;
pub mod msh;
pub mod vtp;

pub use dsv::{DsvReader, PointCloud, PointRecord, RecordPolicy};
pub use error::{IoError, IoResult};
pub use msh::{load_msh, parse_msh};
pub use vtp::{save_disc_surface, save_triangle_surface, write_disc_surface, write_triangle_surface};
