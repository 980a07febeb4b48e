//! Markers: batches of colored primitives handed to a scene sink

use crate::error::{Error, Result};
use crate::point::{Point3d, Rgba, Vector3d};
use crate::transform::Pose;
use serde::{Deserialize, Serialize};

/// How a sink should draw the points of a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// One sphere per point
    Spheres,
    /// Consecutive point pairs form line segments
    LineList,
}

/// A renderable batch of positioned, colored primitives
///
/// Every point carries exactly one color. The fields are private so that the
/// pairing can only be built through [`Marker::push`] and friends, and
/// deserialization rejects documents where the two sequences disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMarker", into = "RawMarker")]
pub struct Marker {
    kind: MarkerKind,
    pose: Pose,
    scale: Vector3d,
    points: Vec<Point3d>,
    colors: Vec<Rgba>,
}

/// Serialized form of a [`Marker`], checked on the way in
#[derive(Serialize, Deserialize)]
struct RawMarker {
    kind: MarkerKind,
    #[serde(default)]
    pose: Pose,
    #[serde(default = "unit_scale")]
    scale: Vector3d,
    points: Vec<Point3d>,
    colors: Vec<Rgba>,
}

fn unit_scale() -> Vector3d {
    Vector3d::new(1.0, 1.0, 1.0)
}

impl TryFrom<RawMarker> for Marker {
    type Error = Error;

    fn try_from(raw: RawMarker) -> Result<Self> {
        let mut marker = Marker::from_parts(raw.kind, raw.points, raw.colors)?;
        marker.pose = raw.pose;
        marker.scale = raw.scale;
        Ok(marker)
    }
}

impl From<Marker> for RawMarker {
    fn from(marker: Marker) -> Self {
        Self {
            kind: marker.kind,
            pose: marker.pose,
            scale: marker.scale,
            points: marker.points,
            colors: marker.colors,
        }
    }
}

impl Marker {
    /// Create an empty marker with identity pose and unit scale
    pub fn new(kind: MarkerKind) -> Self {
        Self {
            kind,
            pose: Pose::identity(),
            scale: unit_scale(),
            points: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Create an empty marker with room for `capacity` points
    pub fn with_capacity(kind: MarkerKind, capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
            ..Self::new(kind)
        }
    }

    /// Create a marker from parallel point and color sequences
    pub fn from_parts(kind: MarkerKind, points: Vec<Point3d>, colors: Vec<Rgba>) -> Result<Self> {
        if points.len() != colors.len() {
            return Err(Error::InvalidData(format!(
                "marker has {} points but {} colors",
                points.len(),
                colors.len()
            )));
        }

        Ok(Self {
            points,
            colors,
            ..Self::new(kind)
        })
    }

    /// Set the pose, builder style
    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self
    }

    /// Set the per-axis scale, builder style
    pub fn with_scale(mut self, scale: Vector3d) -> Self {
        self.scale = scale;
        self
    }

    pub fn kind(&self) -> MarkerKind {
        self.kind
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn scale(&self) -> &Vector3d {
        &self.scale
    }

    pub fn points(&self) -> &[Point3d] {
        &self.points
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Get the number of points in the marker
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the marker has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append one point with its color
    pub fn push(&mut self, point: Point3d, color: Rgba) {
        self.points.push(point);
        self.colors.push(color);
    }

    /// Append several points that share one color
    pub fn push_uniform<I>(&mut self, points: I, color: Rgba)
    where
        I: IntoIterator<Item = Point3d>,
    {
        for point in points {
            self.push(point, color);
        }
    }

    /// Reserve capacity for additional points
    pub fn reserve(&mut self, additional: usize) {
        self.points.reserve(additional);
        self.colors.reserve(additional);
    }

    /// Iterate over `(point, color)` pairs in marker space
    pub fn iter(&self) -> impl Iterator<Item = (&Point3d, &Rgba)> + '_ {
        self.points.iter().zip(self.colors.iter())
    }

    /// Points mapped through scale and pose into the scene frame
    pub fn world_points(&self) -> impl Iterator<Item = Point3d> + '_ {
        self.points
            .iter()
            .map(move |p| self.pose.transform_scaled(p, &self.scale))
    }

    /// Line segments as index pairs; empty for anything but [`MarkerKind::LineList`]
    ///
    /// A trailing unpaired point is ignored.
    pub fn segments(&self) -> Vec<[usize; 2]> {
        match self.kind {
            MarkerKind::LineList => (0..self.len() / 2).map(|i| [2 * i, 2 * i + 1]).collect(),
            MarkerKind::Spheres => Vec::new(),
        }
    }
}
