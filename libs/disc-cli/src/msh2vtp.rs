//! Gmsh meshes to a PolyData triangle or disc surface.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use disc_geometry::{disc_surface_from_mesh, triangle_surface_from_mesh};
use disc_io::{load_msh, save_disc_surface, save_triangle_surface};
use log::debug;

use crate::CliError;

#[derive(Parser, Debug)]
#[command(
    name = "msh2vtp",
    version,
    about = "Convert a Gmsh mesh into a VTK PolyData surface"
)]
pub struct Msh2VtpArgs {
    /// ASCII .msh file to read.
    #[arg(short, long)]
    pub infile: PathBuf,

    /// PolyData file to write.
    #[arg(short, long)]
    pub outfile: PathBuf,

    /// Write one disc per vertex instead of the triangles.
    #[arg(short = 'c', long)]
    pub convert_to_discs: bool,

    /// Log more; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

pub fn run(args: &Msh2VtpArgs) -> Result<(), CliError> {
    debug!("{args:?}");
    let mesh = load_msh(&args.infile)?;
    if args.convert_to_discs {
        let surface = disc_surface_from_mesh(mesh.vertices(), mesh.triangles())?;
        save_disc_surface(&surface, &args.outfile)?;
    } else {
        let surface = triangle_surface_from_mesh(mesh.vertices(), mesh.triangles())?;
        save_triangle_surface(&surface, &args.outfile)?;
    }
    Ok(())
}
