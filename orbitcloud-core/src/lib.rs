//! Core data structures and traits for orbitcloud
//! 
//! This crate provides the fundamental types shared by the generator, the
//! file sinks and the command line tool: points, colors, poses, markers,
//! scenes, and the [`SceneSink`] boundary that consumes them.

pub mod point;
pub mod marker;
pub mod scene;
pub mod traits;
pub mod transform;
pub mod error;

pub use point::*;
pub use marker::*;
pub use scene::*;
pub use traits::*;
pub use transform::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, UnitQuaternion, Isometry3};
