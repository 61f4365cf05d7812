//! # Closed Mesh Tests
//!
//! End-to-end disc synthesis on small closed, outward-wound solids.

use approx::assert_relative_eq;
use disc_geometry::{disc_surface_from_mesh, DiscSynthesizer, GeometryError, Triangle};
use glam::DVec3;

fn unit_tetrahedron() -> (Vec<DVec3>, Vec<Triangle>) {
    (
        vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z],
        vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
    )
}

fn octahedron() -> (Vec<DVec3>, Vec<Triangle>) {
    let vertices = vec![
        DVec3::X,
        DVec3::NEG_X,
        DVec3::Y,
        DVec3::NEG_Y,
        DVec3::Z,
        DVec3::NEG_Z,
    ];
    let mut triangles = Vec::new();
    for (x, sx) in [(0u32, 1.0), (1, -1.0)] {
        for (y, sy) in [(2u32, 1.0), (3, -1.0)] {
            for (z, sz) in [(4u32, 1.0), (5, -1.0)] {
                if sx * sy * sz > 0.0 {
                    triangles.push([x, y, z]);
                } else {
                    triangles.push([x, z, y]);
                }
            }
        }
    }
    (vertices, triangles)
}

fn centre(vertices: &[DVec3]) -> DVec3 {
    vertices.iter().copied().sum::<DVec3>() / vertices.len() as f64
}

#[test]
fn tetrahedron_vertices_touch_three_triangles() {
    let (vertices, triangles) = unit_tetrahedron();
    let synthesizer = DiscSynthesizer::new(&vertices, &triangles).unwrap();
    for v in 0..vertices.len() {
        assert_eq!(synthesizer.adjacency().degree(v), 3);
    }
}

#[test]
fn tetrahedron_normals_point_outward_with_unit_length() {
    let (vertices, triangles) = unit_tetrahedron();
    let surface = disc_surface_from_mesh(&vertices, &triangles).unwrap();
    let centre = centre(&vertices);

    for disc in surface.iter() {
        assert!((disc.normal.length() - 1.0).abs() <= 1e-6);
        assert!(disc.normal.dot(disc.position - centre) > 0.0, "{disc:?}");
    }

    // The corner at the origin looks down the negative diagonal.
    let expected = DVec3::splat(-1.0).normalize();
    assert_relative_eq!(surface.normals()[0].x, expected.x, epsilon = 1e-12);
    assert_relative_eq!(surface.normals()[0].y, expected.y, epsilon = 1e-12);
    assert_relative_eq!(surface.normals()[0].z, expected.z, epsilon = 1e-12);
}

#[test]
fn tetrahedron_radii_are_positive_and_bounded() {
    let (vertices, triangles) = unit_tetrahedron();
    let surface = disc_surface_from_mesh(&vertices, &triangles).unwrap();

    // Circumsphere: centre (0.5, 0.5, 0.5), radius sqrt(3) / 2. Vertices and
    // centroids both lie inside it, so no radius exceeds its diameter.
    let circumradius = 3.0_f64.sqrt() / 2.0;
    for &r in surface.radii() {
        assert!(r > 0.0);
        assert!(r <= 2.0 * circumradius);
    }

    // The three faces meeting at the origin have centroids at sqrt(2) / 3.
    assert_relative_eq!(surface.radii()[0], 2.0_f64.sqrt() / 3.0, epsilon = 1e-12);
}

#[test]
fn octahedron_normals_follow_the_axes() {
    let (vertices, triangles) = octahedron();
    let surface = disc_surface_from_mesh(&vertices, &triangles).unwrap();

    for disc in surface.iter() {
        assert_relative_eq!(disc.normal.x, disc.position.x, epsilon = 1e-12);
        assert_relative_eq!(disc.normal.y, disc.position.y, epsilon = 1e-12);
        assert_relative_eq!(disc.normal.z, disc.position.z, epsilon = 1e-12);
    }

    // All vertices are equivalent, so they share one radius.
    let r0 = surface.radii()[0];
    for &r in surface.radii() {
        assert_relative_eq!(r, r0, epsilon = 1e-12);
    }
}

#[test]
fn stray_vertex_aborts_synthesis() {
    let (mut vertices, triangles) = unit_tetrahedron();
    vertices.push(DVec3::splat(3.0));
    let err = disc_surface_from_mesh(&vertices, &triangles).unwrap_err();
    assert!(matches!(err, GeometryError::DegenerateVertex { vertex: 4, .. }));
}
