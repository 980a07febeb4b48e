//! Point and color types

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// An RGBA color with double precision channels, nominally in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(1.0, 1.0, 1.0);
    pub const RED: Rgba = Rgba::opaque(1.0, 0.0, 0.0);
    pub const GREEN: Rgba = Rgba::opaque(0.0, 1.0, 0.0);
    pub const BLUE: Rgba = Rgba::opaque(0.0, 0.0, 1.0);

    /// Create a color from all four channels
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Check that every channel lies in `[0, 1]`
    pub fn is_normalized(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// Convert to 8-bit channels, clamping out-of-range values
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

fn channel_to_u8(value: f64) -> u8 {
    // NaN maps to 0
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgba8_rounds_and_clamps() {
        let color = Rgba::new(0.5, 1.5, -0.2, 1.0);
        assert_eq!(color.to_rgba8(), [128, 255, 0, 255]);
        assert_eq!(Rgba::new(f64::NAN, 0.0, 0.0, 1.0).to_rgba8()[0], 0);
    }

    #[test]
    fn test_is_normalized() {
        assert!(Rgba::RED.is_normalized());
        assert!(!Rgba::new(0.0, 0.0, 1.1, 1.0).is_normalized());
        assert!(!Rgba::new(0.0, f64::NAN, 0.0, 1.0).is_normalized());
    }

    #[test]
    fn test_default_is_opaque_white() {
        let color = Rgba::default();
        assert_eq!(color, Rgba::new(1.0, 1.0, 1.0, 1.0));
    }
}
