//! Centralized configuration values shared across the disc-surface pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Allowed deviation from 1.0 for the length of a normalized vector.
///
/// # Examples
/// ```
/// use config::constants::NORMALIZATION_TOLERANCE;
/// let length: f64 = 0.9999995;
/// assert!((length - 1.0).abs() <= NORMALIZATION_TOLERANCE);
/// ```
pub const NORMALIZATION_TOLERANCE: f64 = 1.0e-6;

// =============================================================================
// SYNTHESIS CONSTANTS
// =============================================================================

/// Vertex count at which disc synthesis switches to the rayon thread pool.
///
/// Smaller batches run sequentially; both paths produce identical output.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_PARALLEL_THRESHOLD;
/// let vertex_count = 12;
/// assert!(vertex_count < DEFAULT_PARALLEL_THRESHOLD);
/// ```
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

// =============================================================================
// POINT RECORD (DSV) CONSTANTS
// =============================================================================

/// Number of whitespace-separated fields in a point record:
/// position (3), normal (3), material id, area, cover flag.
///
/// # Examples
/// ```
/// use config::constants::DSV_FIELD_COUNT;
/// let line = "0 0 0 0 0 1 7 0.25 0";
/// assert_eq!(line.split_whitespace().count(), DSV_FIELD_COUNT);
/// ```
pub const DSV_FIELD_COUNT: usize = 9;

/// First non-whitespace character marking a comment line.
///
/// # Examples
/// ```
/// use config::constants::DSV_COMMENT_PREFIX;
/// assert!("  # header".trim_start().starts_with(DSV_COMMENT_PREFIX));
/// ```
pub const DSV_COMMENT_PREFIX: char = '#';

// =============================================================================
// GMSH CONSTANTS
// =============================================================================

/// Gmsh element type code of a 3-node triangle.
pub const MSH_TRIANGLE_ELEMENT_TYPE: u32 = 2;

// =============================================================================
// VTK OUTPUT CONSTANTS
// =============================================================================

/// Name of the scalar cell array carrying disc radii.
///
/// # Examples
/// ```
/// use config::constants::RADIUS_ARRAY_NAME;
/// assert_eq!(RADIUS_ARRAY_NAME, "radius");
/// ```
pub const RADIUS_ARRAY_NAME: &str = "radius";

/// Name of the 3-component cell array carrying disc normals.
pub const NORMALS_ARRAY_NAME: &str = "Normals";

/// Number of values written per line inside an ASCII `DataArray`.
pub const VTP_VALUES_PER_LINE: usize = 6;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Accepted deviation of a unit normal's length from 1.0.
    pub tolerance: f64,
    /// Vertex count from which per-vertex synthesis runs in parallel.
    pub parallel_threshold: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and parallel threshold.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-5, 128).expect("valid config");
    /// assert_eq!(cfg.parallel_threshold, 128);
    /// ```
    pub fn new(tolerance: f64, parallel_threshold: usize) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0 && tolerance < 1.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if parallel_threshold == 0 {
            return Err(ConfigError::InvalidParallelThreshold(parallel_threshold));
        }
        Ok(Self {
            tolerance,
            parallel_threshold,
        })
    }

    /// Returns true if a vector of the given length counts as normalized.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::default();
    /// assert!(cfg.is_unit_length(1.0 + 5.0e-7));
    /// assert!(!cfg.is_unit_length(1.01));
    /// ```
    #[inline]
    pub fn is_unit_length(&self, length: f64) -> bool {
        (length - 1.0).abs() <= self.tolerance
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: NORMALIZATION_TOLERANCE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the tolerance is not inside (0, 1).
    InvalidTolerance(f64),
    /// Raised when the parallel threshold is zero.
    InvalidParallelThreshold(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be inside (0, 1): {value}")
            }
            ConfigError::InvalidParallelThreshold(value) => {
                write!(f, "parallel_threshold must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
