//! # Conversion Tests
//!
//! Whole conversions through files on disk, as the command-line tools run them.

use std::fs;

use approx::assert_relative_eq;
use disc_geometry::triangle_surface_from_mesh;
use disc_io::{
    load_msh, save_disc_surface, save_triangle_surface, DsvReader, IoError, RecordPolicy,
};

const TETRAHEDRON_MSH: &str = "\
$MeshFormat
4.1 0 8
$EndMeshFormat
$Nodes
1 4 1 4
2 1 0 4
1
2
3
4
0 0 0
1 0 0
0 1 0
0 0 1
$EndNodes
$Elements
1 4 1 4
2 1 2 4
1 1 3 2
2 1 2 4
3 1 4 3
4 2 3 4
$EndElements
";

fn count(xml: &str, needle: &str) -> usize {
    xml.matches(needle).count()
}

#[test]
fn msh_to_disc_surface_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tetrahedron.msh");
    let output = dir.path().join("tetrahedron.vtp");
    fs::write(&input, TETRAHEDRON_MSH).unwrap();

    let mesh = load_msh(&input).unwrap();
    assert_eq!(mesh.triangle_count(), 4);
    let surface = mesh.to_disc_surface().unwrap();
    for normal in surface.normals() {
        assert_relative_eq!(normal.length(), 1.0, epsilon = 1e-6);
    }
    save_disc_surface(&surface, &output).unwrap();

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.contains("NumberOfVerts=\"4\""));
    assert!(xml.contains("Name=\"radius\""));
    assert_eq!(count(&xml, "<DataArray"), 11);
}

#[test]
fn msh_to_triangle_surface_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tetrahedron.msh");
    let output = dir.path().join("tetrahedron.vtp");
    fs::write(&input, TETRAHEDRON_MSH).unwrap();

    let mesh = load_msh(&input).unwrap();
    let surface = triangle_surface_from_mesh(mesh.vertices(), mesh.triangles()).unwrap();
    save_triangle_surface(&surface, &output).unwrap();

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.contains("NumberOfPolys=\"4\""));
    assert!(xml.contains("0 2 1 0 1 3"));
}

#[test]
fn point_records_to_disc_surface_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("samples.dsv");
    let output = dir.path().join("samples.vtp");
    fs::write(
        &input,
        "# x y z nx ny nz material area cover\n\
         0 0 0 0 0 1 1 1.0 0\n\
         1 0 0 0 0 1 1 4.0 1\n\
         2 0 0 0 0 1 1 9.0 0\n",
    )
    .unwrap();

    let cloud = DsvReader::new().filter_covered(true).read_path(&input).unwrap();
    save_disc_surface(&cloud.to_disc_surface().unwrap(), &output).unwrap();

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.contains("NumberOfPoints=\"2\""));
    assert!(xml.contains("          1 3\n"));
}

#[test]
fn malformed_records_leave_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.dsv");
    fs::write(&input, "0 0 0 0 0 1 1 1.0 0\n0 0 0\n").unwrap();

    let err = DsvReader::new()
        .policy(RecordPolicy::Strict)
        .read_path(&input)
        .unwrap_err();
    assert!(matches!(err, IoError::MalformedRecord { line: 2, .. }));
}
