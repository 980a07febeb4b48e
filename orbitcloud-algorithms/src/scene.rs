//! Assembly of the standard orbit scene

use crate::axes::{axes_marker, AxesParams};
use crate::generator::{GeneratorParams, PointCloudGenerator};
use orbitcloud_core::{Result, Scene};

/// The three-ring point cloud, followed by reference axes when requested
pub fn orbit_scene(params: GeneratorParams, axes: Option<AxesParams>) -> Result<Scene> {
    let mut scene = Scene::new().with_marker(PointCloudGenerator::new(params)?.generate());

    if let Some(axes) = axes {
        scene.add(axes_marker(&axes)?);
    }

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbitcloud_core::{MarkerKind, SceneRecorder};

    #[test]
    fn test_scene_with_axes() {
        let scene = orbit_scene(GeneratorParams::default(), Some(AxesParams::default())).unwrap();
        assert_eq!(scene.len(), 2);
        assert_eq!(scene[0].kind(), MarkerKind::Spheres);
        assert_eq!(scene[1].kind(), MarkerKind::LineList);
        assert_eq!(scene.total_points(), 300 + 6);
    }

    #[test]
    fn test_scene_without_axes_presents_single_marker() {
        let scene = orbit_scene(GeneratorParams::new(1.0, 4), None).unwrap();
        let mut recorder = SceneRecorder::new();
        scene.present(&mut recorder).unwrap();
        assert_eq!(recorder.markers().len(), 1);
        assert_eq!(recorder.markers()[0].len(), 12);
    }

    #[test]
    fn test_invalid_axes_fail_the_scene() {
        assert!(orbit_scene(GeneratorParams::default(), Some(AxesParams { length: 0.0 })).is_err());
    }
}
