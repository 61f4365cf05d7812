//! Convert point records into a VTK PolyData disc surface.

use clap::Parser;
use disc_cli::dsv2vtp::{run, Dsv2VtpArgs};
use disc_cli::{exit_on_error, logging};

fn main() {
    let args = Dsv2VtpArgs::parse();
    logging::init(args.verbose);
    exit_on_error(run(&args));
}
