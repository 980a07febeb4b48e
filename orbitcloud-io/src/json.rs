//! JSON scene documents

use orbitcloud_core::{Error, Marker, Result, Scene, SceneSink};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Sink that stores the received markers as a JSON [`Scene`] document
#[derive(Debug)]
pub struct JsonSink {
    path: PathBuf,
    pretty: bool,
    scene: Scene,
}

impl JsonSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pretty: true,
            scene: Scene::new(),
        }
    }

    /// Write compact JSON instead of indented output
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl SceneSink for JsonSink {
    fn draw(&mut self, marker: Marker) -> Result<()> {
        self.scene.add(marker);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        let written = if self.pretty {
            serde_json::to_writer_pretty(&mut writer, &self.scene)
        } else {
            serde_json::to_writer(&mut writer, &self.scene)
        };
        written.map_err(|e| Error::Serialization(e.to_string()))?;
        writer.flush()?;

        info!(path = %self.path.display(), markers = self.scene.len(), "wrote JSON scene");
        Ok(())
    }
}

/// Load a scene previously written by [`JsonSink`]
pub fn read_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| Error::Serialization(e.to_string()))
}
