//! Reference axes

use orbitcloud_core::{Error, Marker, MarkerKind, Point3d, Result, Rgba, Vector3d};
use serde::{Deserialize, Serialize};

/// Parameters for the X/Y/Z reference axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesParams {
    /// Half-length of each axis; segments run from `-length` to `+length`
    pub length: f64,
}

impl Default for AxesParams {
    fn default() -> Self {
        Self { length: 100.0 }
    }
}

impl AxesParams {
    pub fn validate(&self) -> Result<()> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "axes length must be finite and positive, got {}",
                self.length
            )));
        }
        Ok(())
    }
}

/// Build a line list with one segment per axis: X red, Y green, Z blue
pub fn axes_marker(params: &AxesParams) -> Result<Marker> {
    params.validate()?;

    let mut marker = Marker::with_capacity(MarkerKind::LineList, 6);
    for (axis, color) in [
        (Vector3d::x(), Rgba::RED),
        (Vector3d::y(), Rgba::GREEN),
        (Vector3d::z(), Rgba::BLUE),
    ] {
        let tip = axis * params.length;
        marker.push_uniform([Point3d::from(-tip), Point3d::from(tip)], color);
    }

    Ok(marker)
}
