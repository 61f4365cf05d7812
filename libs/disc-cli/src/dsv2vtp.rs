//! Point records to a PolyData disc surface.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use disc_io::{save_disc_surface, DsvReader, RecordPolicy};
use log::debug;

use crate::CliError;

/// How malformed records are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PolicyArg {
    /// Fail on the first malformed record.
    #[default]
    Strict,
    /// Drop malformed records with a warning.
    Skip,
    /// Read missing or broken fields as 0.
    Lenient,
}

impl From<PolicyArg> for RecordPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Strict => RecordPolicy::Strict,
            PolicyArg::Skip => RecordPolicy::Skip,
            PolicyArg::Lenient => RecordPolicy::Lenient,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "dsv2vtp",
    version,
    about = "Convert point records into a VTK PolyData disc surface"
)]
pub struct Dsv2VtpArgs {
    /// Point-record file to read.
    #[arg(long)]
    pub infile: PathBuf,

    /// PolyData file to write.
    #[arg(long, alias = "write")]
    pub outfile: PathBuf,

    /// Drop records whose cover flag is nonzero.
    #[arg(long)]
    pub filter_covered: bool,

    /// Treatment of malformed records.
    #[arg(long, value_enum, default_value_t = PolicyArg::Strict)]
    pub record_policy: PolicyArg,

    /// Log more; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Reads, optionally filters, and writes the disc surface.
pub fn run(args: &Dsv2VtpArgs) -> Result<(), CliError> {
    debug!("{args:?}");
    let cloud = DsvReader::new()
        .filter_covered(args.filter_covered)
        .policy(args.record_policy.into())
        .read_path(&args.infile)?;
    let surface = cloud.to_disc_surface()?;
    save_disc_surface(&surface, &args.outfile)?;
    Ok(())
}
