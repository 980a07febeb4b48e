//! Core traits for orbitcloud

use crate::{error::Result, marker::Marker, point::Point3d, scene::Scene};

/// A consumer of markers, typically a renderer or a file writer
///
/// Markers are handed over by value; a sink owns whatever it receives.
pub trait SceneSink {
    /// Accept one marker for display
    fn draw(&mut self, marker: Marker) -> Result<()>;

    /// Called once after the last marker of a scene
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: SceneSink + ?Sized> SceneSink for Box<S> {
    fn draw(&mut self, marker: Marker) -> Result<()> {
        (**self).draw(marker)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

impl<S: SceneSink + ?Sized> SceneSink for &mut S {
    fn draw(&mut self, marker: Marker) -> Result<()> {
        (**self).draw(marker)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

/// Trait for drawable/renderable objects
pub trait Drawable {
    /// Get the axis-aligned bounding box in the scene frame
    fn bounding_box(&self) -> (Point3d, Point3d);

    /// Get the center point of the object
    fn center(&self) -> Point3d {
        let (min, max) = self.bounding_box();
        nalgebra::center(&min, &max)
    }
}

fn bounds_of<I: IntoIterator<Item = Point3d>>(points: I) -> Option<(Point3d, Point3d)> {
    let mut points = points.into_iter();
    let first = points.next()?;
    let (mut min, mut max) = (first, first);

    for p in points {
        min = min.inf(&p);
        max = max.sup(&p);
    }

    Some((min, max))
}

impl Drawable for Marker {
    fn bounding_box(&self) -> (Point3d, Point3d) {
        bounds_of(self.world_points()).unwrap_or((Point3d::origin(), Point3d::origin()))
    }
}

impl Drawable for Scene {
    fn bounding_box(&self) -> (Point3d, Point3d) {
        bounds_of(self.markers().iter().flat_map(|m| m.world_points()))
            .unwrap_or((Point3d::origin(), Point3d::origin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MarkerKind, Pose, Rgba};

    #[test]
    fn test_empty_marker_bounds_at_origin() {
        let marker = Marker::new(MarkerKind::Spheres);
        assert_eq!(marker.bounding_box(), (Point3d::origin(), Point3d::origin()));
        assert_eq!(marker.center(), Point3d::origin());
    }

    #[test]
    fn test_scene_bounds_cover_all_markers_in_world_space() {
        let mut a = Marker::new(MarkerKind::Spheres);
        a.push(Point3d::new(-1.0, 0.0, 0.0), Rgba::RED);
        let mut b = Marker::new(MarkerKind::Spheres)
            .with_pose(Pose::from_position(Point3d::new(0.0, 5.0, 0.0)));
        b.push(Point3d::new(3.0, 0.0, 2.0), Rgba::GREEN);

        let mut scene = Scene::new();
        scene.add(a);
        scene.add(b);

        let (min, max) = scene.bounding_box();
        assert_eq!(min, Point3d::new(-1.0, 0.0, 0.0));
        assert_eq!(max, Point3d::new(3.0, 5.0, 2.0));
        assert_eq!(scene.center(), Point3d::new(1.0, 2.5, 1.0));
    }
}
