//! # orbitcloud Algorithms
//!
//! Procedural generation of markers for orbitcloud scenes.
//!
//! This crate provides the point cloud generator (three interleaved circles
//! on the XY, YZ and ZX planes), the sinusoidal color ramp that tints them,
//! and the reference axes drawn alongside.

pub mod color_ramp;
pub mod generator;
pub mod axes;
pub mod scene;

// Re-export commonly used items
pub use color_ramp::*;
pub use generator::*;
pub use axes::*;
pub use scene::*;
