//! File-backed scene sinks
//!
//! This crate provides [`SceneSink`] implementations that persist a scene
//! instead of drawing it: ASCII PLY, delimited XYZ/CSV text, and JSON.
//! Every sink buffers the markers it receives and writes its file once,
//! when the scene is finished.

pub mod ply;
pub mod xyz_csv;
pub mod json;

pub use ply::PlySink;
pub use xyz_csv::{Delimiter, XyzCsvSink, XyzCsvWriteOptions};
pub use json::{JsonSink, read_scene};

use orbitcloud_core::{Error, Result, SceneSink};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// File formats a scene can be written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Ply,
    Csv,
    Xyz,
    Json,
}

impl OutputFormat {
    /// Canonical file extension for the format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Ply => "ply",
            OutputFormat::Csv => "csv",
            OutputFormat::Xyz => "xyz",
            OutputFormat::Json => "json",
        }
    }

    /// Detect the format from a path's extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| Error::UnsupportedFormat(format!("No file extension found: {}", path.display())))?;
        extension.parse()
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ply" => Ok(OutputFormat::Ply),
            "csv" => Ok(OutputFormat::Csv),
            "xyz" | "txt" => Ok(OutputFormat::Xyz),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::UnsupportedFormat(format!("Unsupported scene format: {}", other))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Create a sink writing `format` to `path`
pub fn create_sink<P: AsRef<Path>>(format: OutputFormat, path: P) -> Box<dyn SceneSink> {
    let path = path.as_ref();
    match format {
        OutputFormat::Ply => Box::new(PlySink::new(path)),
        OutputFormat::Csv => Box::new(XyzCsvSink::new(path, XyzCsvWriteOptions::csv())),
        OutputFormat::Xyz => Box::new(XyzCsvSink::new(path, XyzCsvWriteOptions::xyz())),
        OutputFormat::Json => Box::new(JsonSink::new(path)),
    }
}

/// Create a sink for `path`, picking the format from its extension
pub fn create_sink_for_path<P: AsRef<Path>>(path: P) -> Result<Box<dyn SceneSink>> {
    let format = OutputFormat::from_path(&path)?;
    Ok(create_sink(format, path))
}
