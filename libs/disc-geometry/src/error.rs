//! # Geometry Errors
//!
//! Error types for disc synthesis and mesh validation.
//!
//! ## Error Policy
//!
//! - Every failure is terminal for the conversion it occurs in
//! - Errors carry the vertex or triangle index they were detected at

use thiserror::Error;

/// Errors that can occur while building or synthesizing a surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A vertex has no usable normal direction.
    #[error("Degenerate vertex {vertex}: {message}")]
    DegenerateVertex { vertex: usize, message: String },

    /// A triangle references a vertex that does not exist.
    #[error("Triangle {triangle} references vertex {index}, but only {vertex_count} vertices exist")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    /// A vector with zero or non-finite length cannot be normalized.
    #[error("Cannot normalize vector of length {length}")]
    DegenerateVector { length: f64 },

    /// Parallel attribute arrays disagree in length.
    #[error("Attribute length mismatch: {vertices} vertices, {normals} normals, {radii} radii")]
    LengthMismatch {
        vertices: usize,
        normals: usize,
        radii: usize,
    },
}

impl GeometryError {
    /// Creates a degenerate vertex error.
    pub fn degenerate_vertex(vertex: usize, message: impl Into<String>) -> Self {
        Self::DegenerateVertex {
            vertex,
            message: message.into(),
        }
    }
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeometryError::degenerate_vertex(7, "no adjacent triangles");
        assert!(err.to_string().contains("vertex 7"));
        assert!(err.to_string().contains("no adjacent triangles"));

        let err = GeometryError::IndexOutOfRange {
            triangle: 3,
            index: 12,
            vertex_count: 10,
        };
        assert!(err.to_string().contains("Triangle 3"));
        assert!(err.to_string().contains("12"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeometryError>();
    }
}
