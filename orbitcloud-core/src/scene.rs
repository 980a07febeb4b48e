//! Scenes: ordered marker collections and their delivery to sinks

use crate::error::Result;
use crate::marker::Marker;
use crate::traits::SceneSink;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered collection of markers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    markers: Vec<Marker>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a marker; markers are presented in insertion order
    pub fn add(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Append a marker, builder style
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.add(marker);
        self
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Get the number of markers in the scene
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Total number of points over all markers
    pub fn total_points(&self) -> usize {
        self.markers.iter().map(Marker::len).sum()
    }

    /// Hand every marker to `sink` in order, then finish it
    ///
    /// The first sink error aborts delivery and `finish` is not called.
    pub fn present<S: SceneSink + ?Sized>(self, sink: &mut S) -> Result<()> {
        for marker in self.markers {
            sink.draw(marker)?;
        }
        sink.finish()
    }
}

impl Index<usize> for Scene {
    type Output = Marker;

    fn index(&self, index: usize) -> &Self::Output {
        &self.markers[index]
    }
}

impl IntoIterator for Scene {
    type Item = Marker;
    type IntoIter = std::vec::IntoIter<Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.into_iter()
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Marker;
    type IntoIter = std::slice::Iter<'a, Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}

impl FromIterator<Marker> for Scene {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        Self {
            markers: Vec::from_iter(iter),
        }
    }
}

impl Extend<Marker> for Scene {
    fn extend<I: IntoIterator<Item = Marker>>(&mut self, iter: I) {
        self.markers.extend(iter);
    }
}

/// A sink that keeps everything it is given in memory
#[derive(Debug, Default)]
pub struct SceneRecorder {
    markers: Vec<Marker>,
    finished: bool,
}

impl SceneRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Whether [`SceneSink::finish`] has been called
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Rebuild the received markers as a scene
    pub fn into_scene(self) -> Scene {
        Scene::from_iter(self.markers)
    }
}

impl SceneSink for SceneRecorder {
    fn draw(&mut self, marker: Marker) -> Result<()> {
        self.markers.push(marker);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}
