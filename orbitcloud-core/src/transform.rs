//! Marker poses

use crate::point::{Point3d, Vector3d};
use nalgebra::{Isometry3, Translation3, UnitQuaternion};
use serde::{Deserialize, Serialize};

/// Position and orientation of a marker in the scene frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Point3d,
    pub orientation: UnitQuaternion<f64>,
}

impl Pose {
    /// Create an identity pose at the origin
    pub fn identity() -> Self {
        Self {
            position: Point3d::origin(),
            orientation: UnitQuaternion::identity(),
        }
    }

    /// Create a pose that only translates
    pub fn from_position(position: Point3d) -> Self {
        Self {
            position,
            orientation: UnitQuaternion::identity(),
        }
    }

    /// Create a pose from a position and an orientation
    pub fn new(position: Point3d, orientation: UnitQuaternion<f64>) -> Self {
        Self { position, orientation }
    }

    /// Convert to a rigid transformation
    pub fn to_isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(Translation3::from(self.position.coords), self.orientation)
    }

    /// Map a point from marker space into the scene frame
    pub fn transform_point(&self, point: &Point3d) -> Point3d {
        self.to_isometry().transform_point(point)
    }

    /// Map a point from marker space into the scene frame, scaling it first
    pub fn transform_scaled(&self, point: &Point3d, scale: &Vector3d) -> Point3d {
        let scaled = Point3d::from(point.coords.component_mul(scale));
        self.transform_point(&scaled)
    }

    /// Check if this is approximately the identity pose
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.position.coords.norm() < epsilon && self.orientation.angle() < epsilon
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Isometry3<f64>> for Pose {
    fn from(isometry: Isometry3<f64>) -> Self {
        Self {
            position: Point3d::from(isometry.translation.vector),
            orientation: isometry.rotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    #[test]
    fn test_identity_leaves_points_unchanged() {
        let pose = Pose::identity();
        let point = Point3d::new(1.0, -2.0, 3.5);
        assert_eq!(pose.transform_point(&point), point);
        assert!(pose.is_identity(1e-12));
    }

    #[test]
    fn test_translation_and_rotation() {
        let rotation = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), std::f64::consts::FRAC_PI_2);
        let pose = Pose::new(Point3d::new(0.0, 0.0, 1.0), rotation);

        let moved = pose.transform_point(&Point3d::new(1.0, 0.0, 0.0));
        assert_relative_eq!(moved.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(moved.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(moved.z, 1.0, epsilon = 1e-12);
        assert!(!pose.is_identity(1e-6));
    }

    #[test]
    fn test_scale_is_applied_before_pose() {
        let pose = Pose::from_position(Point3d::new(10.0, 0.0, 0.0));
        let scaled = pose.transform_scaled(&Point3d::new(1.0, 1.0, 1.0), &Vector3d::new(2.0, 3.0, 4.0));
        assert_eq!(scaled, Point3d::new(12.0, 3.0, 4.0));
    }

    #[test]
    fn test_isometry_roundtrip() {
        let pose = Pose::from_position(Point3d::new(1.0, 2.0, 3.0));
        assert_eq!(Pose::from(pose.to_isometry()), pose);
    }
}
