//! # Gmsh Meshes
//!
//! Reader for ASCII Gmsh `.msh` files, format versions 2.2 and 4.1.
//!
//! Only the `$MeshFormat`, `$Nodes` and `$Elements` sections are interpreted;
//! every other section is skipped. Of the elements, the 3-node triangles are
//! kept. Points, lines and volume elements are ignored, while any other
//! surface element (quads, curved triangles) is rejected because it cannot be
//! represented as a triangle without remeshing.
//!
//! Gmsh node tags start at 1 and may have gaps. They are renumbered to dense
//! vertex indices in ascending tag order, so tags `1..=N` become `0..N`.
//!
//! ## Example
//!
//! ```rust
//! use disc_io::msh::parse_msh;
//!
//! let text = "\
//! $MeshFormat
//! 2.2 0 8
//! $EndMeshFormat
//! $Nodes
//! 3
//! 1 0 0 0
//! 2 1 0 0
//! 3 0 1 0
//! $EndNodes
//! $Elements
//! 1
//! 1 2 2 0 1 1 2 3
//! $EndElements
//! ";
//! let mesh = parse_msh(text).unwrap();
//! assert_eq!(mesh.triangles(), &[[0, 1, 2]]);
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use config::constants::MSH_TRIANGLE_ELEMENT_TYPE;
use disc_geometry::TriangleMesh;
use glam::DVec3;
use log::{debug, info, warn};

use crate::error::{IoError, IoResult};

/// Format generations with distinct section layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Version {
    V2,
    V4,
}

/// Line-oriented view over the file with 1-based line numbers.
struct LineCursor<'a> {
    lines: std::str::Lines<'a>,
    line: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line: 0,
        }
    }

    /// Next line, trimmed.
    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.next()?;
        self.line += 1;
        Some(line.trim())
    }

    /// Next non-empty line, or an error naming what was expected.
    fn expect(&mut self, what: &str) -> IoResult<&'a str> {
        loop {
            match self.next_line() {
                Some("") => continue,
                Some(line) => return Ok(line),
                None => {
                    return Err(IoError::invalid_content(
                        self.line,
                        format!("unexpected end of file, expected {what}"),
                    ))
                }
            }
        }
    }

    /// Next line parsed as at least `min` whitespace-separated numbers.
    fn numbers<T: FromStr>(&mut self, what: &str, min: usize) -> IoResult<Vec<T>> {
        let line = self.expect(what)?;
        let values = line
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<T>, _>>()
            .map_err(|_| self.error(format!("malformed {what}: {line:?}")))?;
        if values.len() < min {
            return Err(self.error(format!(
                "{what} needs {min} values, found {}",
                values.len()
            )));
        }
        Ok(values)
    }

    /// Next line as a node tag followed by x y z.
    fn node(&mut self) -> IoResult<(u64, DVec3)> {
        let line = self.expect("node")?;
        let mut fields = line.split_whitespace();
        let tag = fields.next().and_then(|t| t.parse::<u64>().ok());
        let xyz = fields
            .take(3)
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>();
        match (tag, xyz) {
            (Some(tag), Ok(xyz)) if xyz.len() == 3 => Ok((tag, self.point(&xyz)?)),
            _ => Err(self.error(format!("malformed node: {line:?}"))),
        }
    }

    /// Position from the first three values, which must be finite.
    fn point(&self, xyz: &[f64]) -> IoResult<DVec3> {
        let point = DVec3::new(xyz[0], xyz[1], xyz[2]);
        if point.is_finite() {
            Ok(point)
        } else {
            Err(self.error(format!("node coordinates are not finite: {point}")))
        }
    }

    /// Narrows an element type read as `u64`.
    fn element_type(&self, value: u64) -> IoResult<u32> {
        u32::try_from(value).map_err(|_| self.error(format!("element type {value} out of range")))
    }

    fn expect_end(&mut self, section: &str) -> IoResult<()> {
        let line = self.expect(&format!("$End{section}"))?;
        if line.strip_prefix("$End") == Some(section) {
            Ok(())
        } else {
            Err(self.error(format!("expected $End{section}, found {line:?}")))
        }
    }

    fn skip_section(&mut self, section: &str) -> IoResult<()> {
        let start = self.line;
        while let Some(line) = self.next_line() {
            if line.strip_prefix("$End") == Some(section) {
                return Ok(());
            }
        }
        Err(IoError::invalid_content(
            start,
            format!("section ${section} is never closed"),
        ))
    }

    fn error(&self, message: impl Into<String>) -> IoError {
        IoError::invalid_content(self.line, message)
    }
}

/// A triangle as read, still in node tags, with the line it came from.
struct TaggedTriangle {
    nodes: [u64; 3],
    line: usize,
}

/// A node as read, with the line it came from.
struct TaggedNode {
    tag: u64,
    position: DVec3,
    line: usize,
}

/// Raw section contents before renumbering.
#[derive(Default)]
struct RawMesh {
    nodes: Vec<TaggedNode>,
    triangles: Vec<TaggedTriangle>,
    ignored_elements: usize,
}

/// Gmsh dimension of an element type, for the types Gmsh writes by default.
fn element_dimension(element_type: u32) -> Option<u32> {
    match element_type {
        15 => Some(0),
        1 | 8 | 26 | 27 | 28 => Some(1),
        2 | 3 | 9 | 10 | 16 | 20 | 21 | 22 | 23 | 24 | 25 => Some(2),
        4..=7 | 11..=14 | 17..=19 | 29..=31 => Some(3),
        _ => None,
    }
}

fn parse_format(cursor: &mut LineCursor<'_>) -> IoResult<Version> {
    let line = cursor.expect("mesh format")?;
    let mut fields = line.split_whitespace();
    let version = fields.next().unwrap_or_default();
    let file_type = fields.next().unwrap_or_default();

    if file_type != "0" {
        return Err(IoError::unsupported(format!(
            "binary .msh files (file type {file_type:?})"
        )));
    }
    // 4.0 shares the major version with 4.1 but lays out its blocks differently.
    let version = match (version.split('.').next(), version) {
        (Some("2"), _) => Version::V2,
        (_, "4.1") => Version::V4,
        _ => {
            return Err(IoError::unsupported(format!(
                ".msh format version {version:?}"
            )))
        }
    };
    cursor.expect_end("MeshFormat")?;
    Ok(version)
}

fn parse_nodes_v2(cursor: &mut LineCursor<'_>, raw: &mut RawMesh) -> IoResult<()> {
    let count = cursor.numbers::<usize>("node count", 1)?[0];
    for _ in 0..count {
        let (tag, position) = cursor.node()?;
        raw.nodes.push(TaggedNode {
            tag,
            position,
            line: cursor.line,
        });
    }
    cursor.expect_end("Nodes")
}

fn parse_nodes_v4(cursor: &mut LineCursor<'_>, raw: &mut RawMesh) -> IoResult<()> {
    let header = cursor.numbers::<usize>("node section header", 4)?;
    let (blocks, count) = (header[0], header[1]);

    for _ in 0..blocks {
        let block = cursor.numbers::<usize>("node block header", 4)?;
        let in_block = block[3];
        let mut tags = Vec::new();
        for _ in 0..in_block {
            tags.push(cursor.numbers::<u64>("node tag", 1)?[0]);
        }
        for tag in tags {
            // Parametric nodes append their (u, v, w) after x y z.
            let xyz = cursor.numbers::<f64>("node coordinates", 3)?;
            raw.nodes.push(TaggedNode {
                tag,
                position: cursor.point(&xyz)?,
                line: cursor.line,
            });
        }
    }

    if raw.nodes.len() != count {
        return Err(cursor.error(format!(
            "node section announces {count} nodes, blocks hold {}",
            raw.nodes.len()
        )));
    }
    cursor.expect_end("Nodes")
}

fn push_triangle(cursor: &LineCursor<'_>, raw: &mut RawMesh, nodes: &[u64]) -> IoResult<()> {
    match *nodes {
        [a, b, c] => {
            raw.triangles.push(TaggedTriangle {
                nodes: [a, b, c],
                line: cursor.line,
            });
            Ok(())
        }
        _ => Err(cursor.error(format!("triangle with {} nodes", nodes.len()))),
    }
}

fn parse_elements_v2(cursor: &mut LineCursor<'_>, raw: &mut RawMesh) -> IoResult<()> {
    let count = cursor.numbers::<usize>("element count", 1)?[0];
    for _ in 0..count {
        let values = cursor.numbers::<u64>("element", 3)?;
        let element_type = cursor.element_type(values[1])?;
        let tag_count = usize::try_from(values[2]).unwrap_or(usize::MAX);
        let nodes = values.get(tag_count.saturating_add(3)..).unwrap_or_default();

        match element_dimension(element_type) {
            Some(2) if element_type == MSH_TRIANGLE_ELEMENT_TYPE => {
                push_triangle(cursor, raw, nodes)?
            }
            Some(2) => {
                return Err(IoError::unsupported(format!(
                    "surface element type {element_type} on line {}",
                    cursor.line
                )))
            }
            Some(_) => raw.ignored_elements += 1,
            None => {
                return Err(IoError::unsupported(format!(
                    "unknown element type {element_type} on line {}",
                    cursor.line
                )))
            }
        }
    }
    cursor.expect_end("Elements")
}

fn parse_elements_v4(cursor: &mut LineCursor<'_>, raw: &mut RawMesh) -> IoResult<()> {
    let header = cursor.numbers::<usize>("element section header", 4)?;
    let blocks = header[0];

    for _ in 0..blocks {
        let block = cursor.numbers::<u64>("element block header", 4)?;
        let (dimension, in_block) = (block[0], block[3]);
        let element_type = cursor.element_type(block[2])?;

        if dimension == 2 && element_type != MSH_TRIANGLE_ELEMENT_TYPE {
            return Err(IoError::unsupported(format!(
                "surface element type {element_type} on line {}",
                cursor.line
            )));
        }
        for _ in 0..in_block {
            let values = cursor.numbers::<u64>("element", 2)?;
            if dimension == 2 {
                push_triangle(cursor, raw, &values[1..])?;
            } else {
                raw.ignored_elements += 1;
            }
        }
    }
    cursor.expect_end("Elements")
}

/// Renumbers node tags densely and resolves triangle corners.
fn assemble(raw: RawMesh) -> IoResult<TriangleMesh> {
    let mut nodes = raw.nodes;
    nodes.sort_by_key(|node| node.tag);
    if nodes.len() > u32::MAX as usize {
        return Err(IoError::unsupported(format!("{} nodes", nodes.len())));
    }

    let mut index_of = HashMap::with_capacity(nodes.len());
    for (index, node) in nodes.iter().enumerate() {
        if index_of.insert(node.tag, index as u32).is_some() {
            return Err(IoError::invalid_content(
                node.line,
                format!("duplicate node tag {}", node.tag),
            ));
        }
    }
    let dense = nodes.first().map_or(true, |node| node.tag == 1)
        && nodes.last().map_or(true, |node| node.tag == nodes.len() as u64);
    if !dense {
        debug!("Node tags are sparse, renumbering {} nodes", nodes.len());
    }

    let mut triangles = Vec::with_capacity(raw.triangles.len());
    for triangle in &raw.triangles {
        let mut corners = [0u32; 3];
        for (corner, tag) in corners.iter_mut().zip(triangle.nodes) {
            *corner = *index_of.get(&tag).ok_or_else(|| {
                IoError::invalid_content(triangle.line, format!("unknown node tag {tag}"))
            })?;
        }
        triangles.push(corners);
    }

    if raw.ignored_elements > 0 {
        warn!(
            "Ignored {} point, line and volume elements",
            raw.ignored_elements
        );
    }
    debug!("Mesh: {} vertices, {} triangles", nodes.len(), triangles.len());
    let vertices = nodes.into_iter().map(|node| node.position).collect();
    Ok(TriangleMesh::from_parts(vertices, triangles))
}

/// Parses the text of an ASCII `.msh` file.
pub fn parse_msh(text: &str) -> IoResult<TriangleMesh> {
    let mut cursor = LineCursor::new(text);
    let mut version = None;
    let mut raw = RawMesh::default();

    while let Some(line) = cursor.next_line() {
        if line.is_empty() {
            continue;
        }
        let Some(section) = line.strip_prefix('$') else {
            return Err(cursor.error(format!("expected a section header, found {line:?}")));
        };
        if section == "MeshFormat" {
            version = Some(parse_format(&mut cursor)?);
            continue;
        }
        let Some(version) = version else {
            return Err(cursor.error(format!("${section} before $MeshFormat")));
        };
        match (section, version) {
            ("Nodes", Version::V2) => parse_nodes_v2(&mut cursor, &mut raw)?,
            ("Nodes", Version::V4) => parse_nodes_v4(&mut cursor, &mut raw)?,
            ("Elements", Version::V2) => parse_elements_v2(&mut cursor, &mut raw)?,
            ("Elements", Version::V4) => parse_elements_v4(&mut cursor, &mut raw)?,
            (other, _) => cursor.skip_section(other)?,
        }
    }

    if version.is_none() {
        return Err(IoError::invalid_content(cursor.line, "missing $MeshFormat section"));
    }
    assemble(raw)
}

/// Reads an ASCII `.msh` file.
pub fn load_msh<P: AsRef<Path>>(path: P) -> IoResult<TriangleMesh> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| IoError::from_open(e, path))?;
    let mesh = parse_msh(&text)?;
    if let Some((lo, hi)) = mesh.bounds() {
        debug!("Mesh bounds: {lo} .. {hi}");
    }
    info!(
        "Read {} vertices and {} triangles from {}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        path.display()
    );
    Ok(mesh)
}
