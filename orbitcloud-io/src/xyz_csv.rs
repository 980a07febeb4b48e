//! XYZ/CSV text output
//!
//! One line per point with `x y z r g b a` columns. Coordinates are in the
//! scene frame, color channels are written as floats in `[0, 1]`.

use orbitcloud_core::{Marker, Point3d, Result, Rgba, SceneSink};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Column names in output order
pub const COLUMNS: [&str; 7] = ["x", "y", "z", "r", "g", "b", "a"];

/// Supported delimiters for CSV/XYZ files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Space,
    Tab,
    Semicolon,
}

impl Delimiter {
    /// Get the character representation of the delimiter
    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Space => ' ',
            Delimiter::Tab => '\t',
            Delimiter::Semicolon => ';',
        }
    }
}

/// Layout options for [`XyzCsvSink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XyzCsvWriteOptions {
    pub delimiter: Delimiter,
    pub include_header: bool,
}

impl XyzCsvWriteOptions {
    /// Space separated, no header
    pub fn xyz() -> Self {
        Self {
            delimiter: Delimiter::Space,
            include_header: false,
        }
    }

    /// Comma separated with a header line
    pub fn csv() -> Self {
        Self {
            delimiter: Delimiter::Comma,
            include_header: true,
        }
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Default for XyzCsvWriteOptions {
    fn default() -> Self {
        Self::csv()
    }
}

/// Sink that writes all received points to one delimited text file
#[derive(Debug)]
pub struct XyzCsvSink {
    path: PathBuf,
    options: XyzCsvWriteOptions,
    markers: Vec<Marker>,
}

impl XyzCsvSink {
    pub fn new<P: AsRef<Path>>(path: P, options: XyzCsvWriteOptions) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            options,
            markers: Vec::new(),
        }
    }
}

impl SceneSink for XyzCsvSink {
    fn draw(&mut self, marker: Marker) -> Result<()> {
        self.markers.push(marker);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let rows = write_markers(&self.markers, &mut writer, &self.options)?;
        writer.flush()?;

        info!(path = %self.path.display(), rows, "wrote point table");
        Ok(())
    }
}

/// Write the points of every marker, returning the number of data rows
pub fn write_markers<W: Write>(
    markers: &[Marker],
    writer: &mut W,
    options: &XyzCsvWriteOptions,
) -> Result<usize> {
    let separator = options.delimiter.as_char().to_string();

    if options.include_header {
        writeln!(writer, "{}", COLUMNS.join(&separator))?;
    }

    let mut rows = 0;
    for marker in markers {
        for (point, color) in marker.world_points().zip(marker.colors()) {
            writeln!(writer, "{}", format_row(&point, color, &separator))?;
            rows += 1;
        }
    }

    Ok(rows)
}

fn format_row(point: &Point3d, color: &Rgba, separator: &str) -> String {
    [
        point.x.to_string(),
        point.y.to_string(),
        point.z.to_string(),
        color.r.to_string(),
        color.g.to_string(),
        color.b.to_string(),
        color.a.to_string(),
    ]
    .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbitcloud_core::MarkerKind;

    fn marker() -> Marker {
        let mut marker = Marker::new(MarkerKind::Spheres);
        marker.push(Point3d::new(1.5, -2.0, 0.0), Rgba::new(0.5, 0.25, 1.0, 1.0));
        marker.push(Point3d::new(0.0, 3.0, 4.0), Rgba::BLUE);
        marker
    }

    #[test]
    fn test_csv_with_header() {
        let mut buffer = Vec::new();
        let rows = write_markers(&[marker()], &mut buffer, &XyzCsvWriteOptions::csv()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(rows, 2);
        assert_eq!(lines, vec!["x,y,z,r,g,b,a", "1.5,-2,0,0.5,0.25,1,1", "0,3,4,0,0,1,1"]);
    }

    #[test]
    fn test_xyz_without_header() {
        let mut buffer = Vec::new();
        write_markers(&[marker()], &mut buffer, &XyzCsvWriteOptions::xyz()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().next(), Some("1.5 -2 0 0.5 0.25 1 1"));
    }

    #[test]
    fn test_custom_delimiter() {
        let options = XyzCsvWriteOptions::csv().with_delimiter(Delimiter::Semicolon);
        let mut buffer = Vec::new();
        write_markers(&[marker()], &mut buffer, &options).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("x;y;z;r;g;b;a\n"));
    }
}
