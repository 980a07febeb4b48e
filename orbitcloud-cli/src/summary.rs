//! A sink that only reports what it receives.

use orbitcloud_core::{Drawable, Marker, Result, Scene, SceneSink};
use tracing::info;

/// Logs per-marker statistics and the overall scene extent.
#[derive(Debug, Default)]
pub struct SummarySink {
    scene: Scene,
}

impl SummarySink {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

impl SceneSink for SummarySink {
    fn draw(&mut self, marker: Marker) -> Result<()> {
        let (min, max) = marker.bounding_box();
        info!(
            kind = ?marker.kind(),
            points = marker.len(),
            "marker spans [{:.3}, {:.3}, {:.3}] to [{:.3}, {:.3}, {:.3}]",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
        self.scene.add(marker);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let center = self.scene.center();
        info!(
            markers = self.scene.len(),
            points = self.scene.total_points(),
            "scene centered at [{:.3}, {:.3}, {:.3}]",
            center.x, center.y, center.z
        );
        Ok(())
    }
}
