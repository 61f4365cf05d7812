//! Logger setup for the binaries.
//!
//! Without `RUST_LOG`, the workspace crates log at `info`, one level more per
//! `-v`. With `RUST_LOG` set, it wins.

use log::LevelFilter;

/// Log targets that belong to this workspace.
const CRATES: [&str; 5] = ["disc_geometry", "disc_io", "disc_cli", "dsv2vtp", "msh2vtp"];

/// Level for a `-v` count.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Default filter string, as it would appear in `RUST_LOG`.
pub fn default_filter(level: LevelFilter) -> String {
    let level = level.as_str().to_lowercase();
    CRATES
        .iter()
        .map(|name| format!("{name}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global logger. Later calls are no-ops.
pub fn init(verbosity: u8) {
    let filter = default_filter(level_for(verbosity));
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .try_init();
}
