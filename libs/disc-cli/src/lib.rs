//! # Disc CLI
//!
//! Shared pieces of the `dsv2vtp` and `msh2vtp` converters. Each command
//! module holds its `clap` arguments and a `run` function; the binaries only
//! parse, initialise logging and map errors to the exit status.

pub mod dsv2vtp;
pub mod logging;
pub mod msh2vtp;

use disc_geometry::GeometryError;
use disc_io::IoError;
use thiserror::Error;

/// Any failure of a conversion.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Runs a conversion and turns failure into exit status 1.
pub fn exit_on_error(result: Result<(), CliError>) {
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
