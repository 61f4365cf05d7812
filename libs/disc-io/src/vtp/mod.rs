//! # VTK PolyData Output
//!
//! Writes ASCII VTK XML PolyData (`.vtp`) files that ParaView and other VTK
//! readers open directly.
//!
//! A disc surface becomes one vertex cell per point. Its normals and radii
//! live in the cell data: `Normals` is a 3-component array flagged as the
//! active normals, `radius` a scalar array. A triangle surface becomes the
//! points plus one polygon cell per triangle.

use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use config::constants::{NORMALS_ARRAY_NAME, RADIUS_ARRAY_NAME, VTP_VALUES_PER_LINE};
use disc_geometry::{DiscSurface, TriangleMesh};
use glam::DVec3;
use log::info;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{IoError, IoResult};

/// Cell sections of a piece, in the order VTK writes them.
const CELL_SECTIONS: [&str; 4] = ["Verts", "Lines", "Strips", "Polys"];

/// Spaces per nesting level.
const INDENT: usize = 2;

/// Flat connectivity and offsets for one cell section.
#[derive(Debug, Default)]
struct CellArray {
    connectivity: Vec<u64>,
    offsets: Vec<u64>,
}

impl CellArray {
    fn push(&mut self, cell: &[u64]) {
        self.connectivity.extend_from_slice(cell);
        self.offsets.push(self.connectivity.len() as u64);
    }

    fn len(&self) -> usize {
        self.offsets.len()
    }
}

/// Indenting XML event writer that tracks its nesting depth, so array
/// values can be wrapped onto lines aligned with the markup.
struct PolyDataWriter<W: Write> {
    xml: Writer<W>,
    depth: usize,
}

impl<W: Write> PolyDataWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            xml: Writer::new_with_indent(inner, b' ', INDENT),
            depth: 0,
        }
    }

    fn event(&mut self, event: Event<'_>) -> IoResult<()> {
        self.xml.write_event(event).map_err(IoError::xml)
    }

    fn start<'a>(
        &mut self,
        name: &str,
        attributes: impl IntoIterator<Item = (&'a str, String)>,
    ) -> IoResult<()> {
        let mut element = BytesStart::new(name);
        for (key, value) in attributes {
            element.push_attribute((key, value.as_str()));
        }
        self.event(Event::Start(element))?;
        self.depth += 1;
        Ok(())
    }

    fn open(&mut self, name: &str) -> IoResult<()> {
        self.start(name, Vec::<(&str, String)>::new())
    }

    fn end(&mut self, name: &str) -> IoResult<()> {
        self.depth -= 1;
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn data_array<T, I>(
        &mut self,
        data_type: &str,
        name: &str,
        components: usize,
        values: I,
    ) -> IoResult<()>
    where
        T: Display,
        I: IntoIterator<Item = T>,
    {
        let mut attributes = vec![("type", data_type.to_owned()), ("Name", name.to_owned())];
        if components > 1 {
            attributes.push(("NumberOfComponents", components.to_string()));
        }
        attributes.push(("format", "ascii".to_owned()));
        self.start("DataArray", attributes)?;

        let row_indent = " ".repeat(self.depth * INDENT);
        let mut text = String::new();
        for (i, value) in values.into_iter().enumerate() {
            if i % VTP_VALUES_PER_LINE == 0 {
                text.push('\n');
                text.push_str(&row_indent);
            } else {
                text.push(' ');
            }
            text.push_str(&value.to_string());
        }
        // The closing tag follows text directly, so it carries its own indent.
        text.push('\n');
        text.push_str(&" ".repeat((self.depth - 1) * INDENT));
        self.event(Event::Text(BytesText::new(&text)))?;

        self.end("DataArray")
    }

    fn finish(mut self) -> IoResult<()> {
        let inner = self.xml.get_mut();
        inner.write_all(b"\n")?;
        inner.flush()?;
        Ok(())
    }
}

/// One `<Piece>`: points, the four cell sections and optional cell data.
struct Piece<'a> {
    points: &'a [DVec3],
    cells: [CellArray; 4],
    normals: Option<&'a [DVec3]>,
    radii: Option<&'a [f64]>,
}

impl<'a> Piece<'a> {
    fn new(points: &'a [DVec3]) -> Self {
        Self {
            points,
            cells: Default::default(),
            normals: None,
            radii: None,
        }
    }

    fn write<W: Write>(&self, writer: W) -> IoResult<()> {
        let mut w = PolyDataWriter::new(writer);
        w.event(Event::Decl(BytesDecl::new("1.0", None, None)))?;
        w.start(
            "VTKFile",
            [
                ("type", "PolyData".to_owned()),
                ("version", "1.0".to_owned()),
                ("byte_order", "LittleEndian".to_owned()),
                ("header_type", "UInt64".to_owned()),
            ],
        )?;
        w.open("PolyData")?;

        let mut counts = vec![("NumberOfPoints".to_owned(), self.points.len().to_string())];
        for (name, cells) in CELL_SECTIONS.iter().zip(&self.cells) {
            counts.push((format!("NumberOf{name}"), cells.len().to_string()));
        }
        w.start(
            "Piece",
            counts.iter().map(|(key, value)| (key.as_str(), value.clone())),
        )?;

        w.open("PointData")?;
        w.end("PointData")?;
        self.write_cell_data(&mut w)?;

        w.open("Points")?;
        w.data_array("Float64", "Points", 3, flatten(self.points))?;
        w.end("Points")?;

        for (name, cells) in CELL_SECTIONS.iter().zip(&self.cells) {
            w.open(name)?;
            w.data_array("Int64", "connectivity", 1, &cells.connectivity)?;
            w.data_array("Int64", "offsets", 1, &cells.offsets)?;
            w.end(name)?;
        }

        w.end("Piece")?;
        w.end("PolyData")?;
        w.end("VTKFile")?;
        w.finish()
    }

    fn write_cell_data<W: Write>(&self, w: &mut PolyDataWriter<W>) -> IoResult<()> {
        let mut attributes = Vec::new();
        if self.normals.is_some() {
            attributes.push(("Normals", NORMALS_ARRAY_NAME.to_owned()));
        }
        if self.radii.is_some() {
            attributes.push(("Scalars", RADIUS_ARRAY_NAME.to_owned()));
        }
        w.start("CellData", attributes)?;
        if let Some(normals) = self.normals {
            w.data_array("Float64", NORMALS_ARRAY_NAME, 3, flatten(normals))?;
        }
        if let Some(radii) = self.radii {
            w.data_array("Float64", RADIUS_ARRAY_NAME, 1, radii)?;
        }
        w.end("CellData")
    }
}

fn flatten(vectors: &[DVec3]) -> impl Iterator<Item = f64> + '_ {
    vectors.iter().flat_map(|v| v.to_array())
}

/// Writes a disc surface as vertex cells with `Normals` and `radius` cell data.
///
/// # Example
///
/// ```rust
/// use disc_geometry::disc_surface_from_points;
/// use disc_io::vtp::write_disc_surface;
/// use glam::DVec3;
///
/// let surface = disc_surface_from_points(vec![DVec3::ZERO], vec![DVec3::Z], vec![0.5]).unwrap();
/// let mut out = Vec::new();
/// write_disc_surface(&surface, &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Name=\"radius\""));
/// ```
pub fn write_disc_surface<W: Write>(surface: &DiscSurface, writer: W) -> IoResult<()> {
    let mut piece = Piece::new(surface.positions());
    for index in 0..surface.len() as u64 {
        piece.cells[0].push(&[index]);
    }
    piece.normals = Some(surface.normals());
    piece.radii = Some(surface.radii());
    piece.write(writer)
}

/// Writes a triangle mesh as polygon cells.
pub fn write_triangle_surface<W: Write>(mesh: &TriangleMesh, writer: W) -> IoResult<()> {
    let mut piece = Piece::new(mesh.vertices());
    for triangle in mesh.triangles() {
        piece.cells[3].push(&triangle.map(u64::from));
    }
    piece.write(writer)
}

/// Writes a disc surface to a file.
pub fn save_disc_surface<P: AsRef<Path>>(surface: &DiscSurface, path: P) -> IoResult<()> {
    let path = path.as_ref();
    write_disc_surface(surface, BufWriter::new(File::create(path)?))?;
    info!("Wrote {} discs to {}", surface.len(), path.display());
    Ok(())
}

/// Writes a triangle mesh to a file.
pub fn save_triangle_surface<P: AsRef<Path>>(mesh: &TriangleMesh, path: P) -> IoResult<()> {
    let path = path.as_ref();
    write_triangle_surface(mesh, BufWriter::new(File::create(path)?))?;
    info!(
        "Wrote {} triangles to {}",
        mesh.triangle_count(),
        path.display()
    );
    Ok(())
}
