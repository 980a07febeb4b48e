//! PLY format support

use orbitcloud_core::{Error, Marker, Result, SceneSink};
use ply_rs::{
    ply::{Addable, DefaultElement, ElementDef, Encoding, Ply, Property, PropertyDef, PropertyType, ScalarType},
    writer::Writer,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Sink that writes every received marker into one ASCII PLY file
///
/// Points go to the `vertex` element in scene coordinates with 8-bit RGBA
/// colors. Line list markers also contribute their segments to an `edge`
/// element whose indices refer to the combined vertex list.
#[derive(Debug)]
pub struct PlySink {
    path: PathBuf,
    markers: Vec<Marker>,
}

impl PlySink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            markers: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SceneSink for PlySink {
    fn draw(&mut self, marker: Marker) -> Result<()> {
        self.markers.push(marker);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let vertices = write_markers(&self.markers, &mut writer)?;
        writer.flush()?;

        info!(path = %self.path.display(), vertices, "wrote PLY scene");
        Ok(())
    }
}

/// Write markers as an ASCII PLY document, returning the vertex count
pub fn write_markers<W: Write>(markers: &[Marker], writer: &mut W) -> Result<usize> {
    let mut ply = Ply::<DefaultElement>::new();
    ply.header.encoding = Encoding::Ascii;
    ply.header.comments.push("generated by orbitcloud".to_string());

    let mut vertices = Vec::new();
    let mut edges = Vec::new();

    for marker in markers {
        let offset = vertices.len();

        for (position, color) in marker.world_points().zip(marker.colors()) {
            let [red, green, blue, alpha] = color.to_rgba8();
            let mut vertex = DefaultElement::new();
            vertex.insert("x".to_string(), Property::Double(position.x));
            vertex.insert("y".to_string(), Property::Double(position.y));
            vertex.insert("z".to_string(), Property::Double(position.z));
            vertex.insert("red".to_string(), Property::UChar(red));
            vertex.insert("green".to_string(), Property::UChar(green));
            vertex.insert("blue".to_string(), Property::UChar(blue));
            vertex.insert("alpha".to_string(), Property::UChar(alpha));
            vertices.push(vertex);
        }

        for [a, b] in marker.segments() {
            let mut edge = DefaultElement::new();
            edge.insert("vertex1".to_string(), Property::Int(edge_index(offset, a)?));
            edge.insert("vertex2".to_string(), Property::Int(edge_index(offset, b)?));
            edges.push(edge);
        }
    }

    let vertex_count = vertices.len();

    let mut vertex_element = ElementDef::new("vertex".to_string());
    vertex_element.count = vertex_count;
    for name in ["x", "y", "z"] {
        vertex_element.properties.add(PropertyDef::new(
            name.to_string(),
            PropertyType::Scalar(ScalarType::Double),
        ));
    }
    for name in ["red", "green", "blue", "alpha"] {
        vertex_element.properties.add(PropertyDef::new(
            name.to_string(),
            PropertyType::Scalar(ScalarType::UChar),
        ));
    }
    ply.header.elements.add(vertex_element);
    ply.payload.insert("vertex".to_string(), vertices);

    if !edges.is_empty() {
        let mut edge_element = ElementDef::new("edge".to_string());
        edge_element.count = edges.len();
        for name in ["vertex1", "vertex2"] {
            edge_element.properties.add(PropertyDef::new(
                name.to_string(),
                PropertyType::Scalar(ScalarType::Int),
            ));
        }
        ply.header.elements.add(edge_element);
        ply.payload.insert("edge".to_string(), edges);
    }

    let ply_writer = Writer::new();
    ply_writer.write_ply(writer, &mut ply)?;

    Ok(vertex_count)
}

/// Index into the combined vertex list as a PLY `int`
fn edge_index(offset: usize, local: usize) -> Result<i32> {
    offset
        .checked_add(local)
        .and_then(|index| i32::try_from(index).ok())
        .ok_or_else(|| {
            Error::InvalidData(format!(
                "edge vertex index {} + {} does not fit a PLY int",
                offset, local
            ))
        })
}
