//! # Config Crate
//!
//! Centralized configuration constants for the disc-surface conversion
//! pipeline. Tolerances, attribute names and reader/writer literals are
//! defined here so the geometry, I/O and CLI crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, NORMALIZATION_TOLERANCE};
//!
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.tolerance, NORMALIZATION_TOLERANCE);
//!
//! let length: f64 = 1.0 + 1e-8;
//! assert!((length - 1.0).abs() <= cfg.tolerance);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Format Compatible**: Names match what the VTK tooling expects
//! - **Validated**: Runtime configuration goes through a checked constructor

pub mod constants;
