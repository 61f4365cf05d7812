//! Convert a Gmsh mesh into a VTK PolyData triangle or disc surface.

use clap::Parser;
use disc_cli::msh2vtp::{run, Msh2VtpArgs};
use disc_cli::{exit_on_error, logging};

fn main() {
    let args = Msh2VtpArgs::parse();
    logging::init(args.verbose);
    exit_on_error(run(&args));
}
