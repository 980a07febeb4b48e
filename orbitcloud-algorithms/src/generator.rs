//! Point cloud generation
//!
//! Places `steps` evenly spaced samples on a circle of the given radius and
//! projects every sample onto the XY, YZ and ZX planes, giving three
//! interleaved rings that share a color per sample.

use crate::color_ramp::number_to_color;
use orbitcloud_core::{Error, Marker, MarkerKind, Point3d, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use tracing::{debug, warn};

/// Number of planes every circle sample is projected onto
pub const PROJECTIONS_PER_STEP: usize = 3;

/// Largest accepted step count
pub const MAX_STEPS: usize = u32::MAX as usize;

/// Parameters for [`PointCloudGenerator`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    /// Circle radius in scene units
    pub radius: f64,
    /// Number of samples around the circle
    pub steps: usize,
    /// Opacity shared by every generated color
    pub alpha: f64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            radius: 20.0,
            steps: 100,
            alpha: 1.0,
        }
    }
}

impl GeneratorParams {
    /// Parameters with the given radius and step count and opaque colors
    pub fn new(radius: f64, steps: usize) -> Self {
        Self {
            radius,
            steps,
            ..Self::default()
        }
    }

    /// Check the parameters can produce finite, displayable output
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "radius must be finite, got {}",
                self.radius
            )));
        }

        if self.steps > MAX_STEPS || self.steps.checked_mul(PROJECTIONS_PER_STEP).is_none() {
            return Err(Error::InvalidParameter(format!(
                "steps must be at most {}, got {}",
                MAX_STEPS, self.steps
            )));
        }

        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(Error::InvalidParameter(format!(
                "alpha must be within [0, 1], got {}",
                self.alpha
            )));
        }

        Ok(())
    }
}

/// Generator for the three-plane colored point cloud
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointCloudGenerator {
    params: GeneratorParams,
}

impl PointCloudGenerator {
    /// Create a generator, rejecting non-finite radius, out-of-range alpha and
    /// step counts above [`MAX_STEPS`]
    ///
    /// A step count of zero is accepted and produces an empty marker.
    pub fn new(params: GeneratorParams) -> Result<Self> {
        params.validate()?;
        if params.steps == 0 {
            warn!("generator configured with zero steps, output will be empty");
        }
        Ok(Self { params })
    }

    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    /// Angle between consecutive samples in radians
    pub fn delta_radian(&self) -> f64 {
        TAU / self.params.steps.max(1) as f64
    }

    /// The `steps` circle samples as `(radius * cos, radius * sin)` pairs
    pub fn circle_coordinates(&self) -> Vec<(f64, f64)> {
        let delta = self.delta_radian();
        let radius = self.params.radius;

        (0..self.params.steps)
            .map(|idx| {
                let angle = delta * idx as f64;
                (radius * angle.cos(), radius * angle.sin())
            })
            .collect()
    }

    /// Build the sphere marker
    ///
    /// For sample `i` with coordinates `(c1, c2)` the marker receives
    /// `(c1, c2, 0)`, `(0, c1, c2)` and `(c2, 0, c1)` in that order, all
    /// three with the ramp color of `i`.
    pub fn generate(&self) -> Marker {
        let steps = self.params.steps;
        let mut marker = Marker::with_capacity(MarkerKind::Spheres, PROJECTIONS_PER_STEP * steps);

        for (idx, (c1, c2)) in self.circle_coordinates().into_iter().enumerate() {
            let color = number_to_color(idx, steps, self.params.alpha);
            marker.push_uniform(project_onto_planes(c1, c2), color);
        }

        debug!(
            radius = self.params.radius,
            steps,
            points = marker.len(),
            "generated point cloud marker"
        );
        marker
    }
}

/// The 2D pair `(c1, c2)` placed on the XY, YZ and ZX planes
pub fn project_onto_planes(c1: f64, c2: f64) -> [Point3d; PROJECTIONS_PER_STEP] {
    [
        Point3d::new(c1, c2, 0.0),
        Point3d::new(0.0, c1, c2),
        Point3d::new(c2, 0.0, c1),
    ]
}

/// Generate the marker for `radius` and `steps` with opaque colors
pub fn generate_marker(radius: f64, steps: usize) -> Result<Marker> {
    Ok(PointCloudGenerator::new(GeneratorParams::new(radius, steps))?.generate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use orbitcloud_core::Rgba;

    fn assert_point_eq(actual: &Point3d, expected: [f64; 3]) {
        assert_relative_eq!(actual.x, expected[0], epsilon = 1e-12);
        assert_relative_eq!(actual.y, expected[1], epsilon = 1e-12);
        assert_relative_eq!(actual.z, expected[2], epsilon = 1e-12);
    }

    #[test]
    fn test_default_params_match_demo_scene() {
        let params = GeneratorParams::default();
        assert_eq!(params.radius, 20.0);
        assert_eq!(params.steps, 100);
        assert_eq!(params.alpha, 1.0);
    }

    #[test]
    fn test_output_has_three_points_and_colors_per_step() {
        for steps in [1, 2, 4, 99, 100] {
            let marker = generate_marker(20.0, steps).unwrap();
            assert_eq!(marker.len(), 3 * steps);
            assert_eq!(marker.colors().len(), 3 * steps);
            assert_eq!(marker.kind(), MarkerKind::Spheres);
        }
    }

    #[test]
    fn test_unit_circle_with_four_steps() {
        let generator = PointCloudGenerator::new(GeneratorParams::new(1.0, 4)).unwrap();

        let coords = generator.circle_coordinates();
        let expected = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
        for ((c1, c2), (e1, e2)) in coords.iter().zip(expected.iter()) {
            assert_relative_eq!(*c1, *e1, epsilon = 1e-12);
            assert_relative_eq!(*c2, *e2, epsilon = 1e-12);
        }

        let marker = generator.generate();
        assert_point_eq(&marker.points()[0], [1.0, 0.0, 0.0]);
        assert_point_eq(&marker.points()[1], [0.0, 1.0, 0.0]);
        assert_point_eq(&marker.points()[2], [0.0, 0.0, 1.0]);

        // second sample (0, 1)
        assert_point_eq(&marker.points()[3], [0.0, 1.0, 0.0]);
        assert_point_eq(&marker.points()[4], [0.0, 0.0, 1.0]);
        assert_point_eq(&marker.points()[5], [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_single_step_gives_three_identical_colors() {
        let marker = generate_marker(7.5, 1).unwrap();
        assert_eq!(marker.len(), 3);
        assert_point_eq(&marker.points()[0], [7.5, 0.0, 0.0]);
        assert_point_eq(&marker.points()[1], [0.0, 7.5, 0.0]);
        assert_point_eq(&marker.points()[2], [0.0, 0.0, 7.5]);

        let colors = marker.colors();
        assert_eq!(colors[0], colors[1]);
        assert_eq!(colors[1], colors[2]);
    }

    #[test]
    fn test_projections_permute_the_same_pair() {
        let marker = generate_marker(20.0, 37).unwrap();

        for chunk in marker.points().chunks(3) {
            let (xy, yz, zx) = (chunk[0], chunk[1], chunk[2]);
            assert_eq!(xy.z, 0.0);
            assert_eq!(yz.x, 0.0);
            assert_eq!(zx.y, 0.0);

            let (c1, c2) = (xy.x, xy.y);
            assert_eq!((yz.y, yz.z), (c1, c2));
            assert_eq!((zx.z, zx.x), (c1, c2));
            assert_relative_eq!((c1 * c1 + c2 * c2).sqrt(), 20.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_colors_follow_ramp_and_stay_normalized() {
        let generator = PointCloudGenerator::new(GeneratorParams {
            radius: 3.0,
            steps: 50,
            alpha: 0.5,
        })
        .unwrap();
        let marker = generator.generate();

        for (idx, chunk) in marker.colors().chunks(3).enumerate() {
            let expected = number_to_color(idx, 50, 0.5);
            assert!(chunk.iter().all(|c| *c == expected));
            assert!(expected.is_normalized());
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let generator = PointCloudGenerator::new(GeneratorParams::default()).unwrap();
        let first = generator.generate();
        let second = generator.generate();
        assert_eq!(first, second);

        let bits = |m: &Marker| -> Vec<u64> {
            m.points().iter().flat_map(|p| [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()]).collect()
        };
        assert_eq!(bits(&first), bits(&second));
    }

    #[test]
    fn test_zero_steps_yields_empty_marker() {
        let marker = generate_marker(20.0, 0).unwrap();
        assert!(marker.is_empty());
    }

    #[test]
    fn test_rejects_non_finite_radius() {
        assert!(matches!(generate_marker(f64::NAN, 10), Err(Error::InvalidParameter(_))));
        assert!(matches!(generate_marker(f64::INFINITY, 10), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_rejects_oversized_step_count() {
        for steps in [MAX_STEPS + 1, usize::MAX / 2, usize::MAX] {
            assert!(matches!(generate_marker(1.0, steps), Err(Error::InvalidParameter(_))));
        }
        assert!(GeneratorParams::new(1.0, MAX_STEPS).validate().is_ok());
    }

    #[test]
    fn test_rejects_alpha_out_of_range() {
        let params = GeneratorParams {
            alpha: 1.5,
            ..GeneratorParams::default()
        };
        assert!(PointCloudGenerator::new(params).is_err());
    }

    #[test]
    fn test_marker_has_identity_pose() {
        let marker = generate_marker(1.0, 3).unwrap();
        assert!(marker.pose().is_identity(1e-12));
        assert_eq!(marker.colors()[0].a, Rgba::WHITE.a);
    }

    #[test]
    fn test_params_deserialize_with_defaults() {
        let params: GeneratorParams = serde_json::from_str(r#"{"steps": 12}"#).unwrap();
        assert_eq!(params, GeneratorParams::new(20.0, 12));
    }
}
