//! # Point Records
//!
//! Reader for whitespace-delimited disc samples, one per line:
//!
//! ```text
//! # x y z nx ny nz material area cover
//! 0.0 0.0 0.0 0.0 0.0 1.0 3 0.25 0
//! ```
//!
//! Lines whose first non-whitespace character is `#` are comments; blank
//! lines are ignored. A nonzero cover flag marks a sample that a finer sample
//! elsewhere supersedes; such records can be filtered out while reading.
//!
//! Records that do not parse are handled according to [`RecordPolicy`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use config::constants::{DSV_COMMENT_PREFIX, DSV_FIELD_COUNT};
use disc_geometry::{disc_surface_from_points, DiscSurface, GeometryResult};
use glam::DVec3;
use log::{debug, info, warn};

use crate::error::{IoError, IoResult};

const FIELD_NAMES: [&str; DSV_FIELD_COUNT] = [
    "x",
    "y",
    "z",
    "nx",
    "ny",
    "nz",
    "material id",
    "area",
    "cover flag",
];

/// What to do with a record that does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordPolicy {
    /// Abort the read with [`IoError::MalformedRecord`].
    #[default]
    Strict,
    /// Drop the record and log a warning.
    Skip,
    /// Substitute 0 for missing or unparseable fields, ignore extra fields
    /// and clamp negative areas to 0.
    Lenient,
}

/// One parsed disc sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRecord {
    pub position: DVec3,
    pub normal: DVec3,
    /// Carried through but not used by any output.
    pub material_id: i32,
    pub area: f64,
    pub cover_flag: i32,
}

impl PointRecord {
    /// Returns true if a finer sample supersedes this one.
    #[inline]
    pub fn is_covered(&self) -> bool {
        self.cover_flag != 0
    }

    /// Radius of the disc with this record's area.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.area.sqrt()
    }

    /// Parses a record, rejecting anything but exactly nine valid fields.
    pub fn parse_strict(text: &str, line: usize) -> IoResult<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != DSV_FIELD_COUNT {
            return Err(IoError::malformed(
                line,
                format!("expected {DSV_FIELD_COUNT} fields, found {}", tokens.len()),
            ));
        }

        let float = |i: usize| -> IoResult<f64> {
            match tokens[i].parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(IoError::malformed(
                    line,
                    format!("{} is not a finite number: {:?}", FIELD_NAMES[i], tokens[i]),
                )),
            }
        };
        let int = |i: usize| -> IoResult<i32> {
            tokens[i].parse::<i32>().map_err(|_| {
                IoError::malformed(
                    line,
                    format!("{} is not an integer: {:?}", FIELD_NAMES[i], tokens[i]),
                )
            })
        };

        let area = float(7)?;
        if area < 0.0 {
            return Err(IoError::malformed(line, format!("negative area {area}")));
        }

        Ok(Self {
            position: DVec3::new(float(0)?, float(1)?, float(2)?),
            normal: DVec3::new(float(3)?, float(4)?, float(5)?),
            material_id: int(6)?,
            area,
            cover_flag: int(8)?,
        })
    }

    /// Parses a record the forgiving way: every field that is missing or
    /// does not parse reads as 0. Never fails.
    pub fn parse_lenient(text: &str) -> Self {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let float = |i: usize| {
            tokens
                .get(i)
                .and_then(|t| t.parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .unwrap_or(0.0)
        };
        let int = |i: usize| tokens.get(i).and_then(|t| t.parse::<i32>().ok()).unwrap_or(0);

        Self {
            position: DVec3::new(float(0), float(1), float(2)),
            normal: DVec3::new(float(3), float(4), float(5)),
            material_id: int(6),
            area: float(7).max(0.0),
            cover_flag: int(8),
        }
    }
}

/// Point samples in file order, stored as parallel arrays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    material_ids: Vec<i32>,
    areas: Vec<f64>,
    cover_flags: Vec<i32>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn push(&mut self, record: PointRecord) {
        self.positions.push(record.position);
        self.normals.push(record.normal);
        self.material_ids.push(record.material_id);
        self.areas.push(record.area);
        self.cover_flags.push(record.cover_flag);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    pub fn material_ids(&self) -> &[i32] {
        &self.material_ids
    }

    pub fn areas(&self) -> &[f64] {
        &self.areas
    }

    pub fn cover_flags(&self) -> &[i32] {
        &self.cover_flags
    }

    /// Returns record `index`, or `None` past the end.
    pub fn record(&self, index: usize) -> Option<PointRecord> {
        Some(PointRecord {
            position: *self.positions.get(index)?,
            normal: self.normals[index],
            material_id: self.material_ids[index],
            area: self.areas[index],
            cover_flag: self.cover_flags[index],
        })
    }

    /// Disc radii, the square roots of the areas.
    pub fn radii(&self) -> Vec<f64> {
        self.areas.iter().map(|a| a.sqrt()).collect()
    }

    /// Discs at the sample positions with the supplied normals.
    pub fn to_disc_surface(&self) -> GeometryResult<DiscSurface> {
        disc_surface_from_points(self.positions.clone(), self.normals.clone(), self.radii())
    }
}

/// Configurable point-record reader.
///
/// # Example
///
/// ```rust
/// use disc_io::dsv::DsvReader;
///
/// let text = "# comment\n0 0 0 0 0 1 1 4.0 0\n1 0 0 0 0 1 1 1.0 2\n";
/// let cloud = DsvReader::new().filter_covered(true).read_str(text).unwrap();
/// assert_eq!(cloud.len(), 1);
/// assert_eq!(cloud.radii(), vec![2.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DsvReader {
    filter_covered: bool,
    policy: RecordPolicy,
}

impl DsvReader {
    /// Reader without filtering and with [`RecordPolicy::Strict`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop records whose cover flag is nonzero.
    pub fn filter_covered(mut self, filter_covered: bool) -> Self {
        self.filter_covered = filter_covered;
        self
    }

    pub fn policy(mut self, policy: RecordPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Reads records from a file.
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> IoResult<PointCloud> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| IoError::from_open(e, path))?;
        let cloud = self.read(BufReader::new(file))?;
        info!("Read {} point records from {}", cloud.len(), path.display());
        Ok(cloud)
    }

    pub fn read_str(&self, text: &str) -> IoResult<PointCloud> {
        self.read(text.as_bytes())
    }

    /// Reads records line by line.
    pub fn read<R: BufRead>(&self, reader: R) -> IoResult<PointCloud> {
        let mut cloud = PointCloud::new();
        let mut covered = 0usize;
        let mut skipped = 0usize;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = index + 1;
            let text = line.trim_start();
            if text.is_empty() || text.starts_with(DSV_COMMENT_PREFIX) {
                continue;
            }

            let record = match self.policy {
                RecordPolicy::Strict => PointRecord::parse_strict(text, line_no)?,
                RecordPolicy::Skip => match PointRecord::parse_strict(text, line_no) {
                    Ok(record) => record,
                    Err(err) => {
                        warn!("Skipping record: {err}");
                        skipped += 1;
                        continue;
                    }
                },
                RecordPolicy::Lenient => PointRecord::parse_lenient(text),
            };

            if self.filter_covered && record.is_covered() {
                covered += 1;
                continue;
            }
            cloud.push(record);
        }

        debug!(
            "Point records: {} kept, {} covered, {} malformed",
            cloud.len(),
            covered,
            skipped
        );
        Ok(cloud)
    }
}

#[cfg(test)]
mod tests;
