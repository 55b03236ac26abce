//! 2D vector math plus the toolkit-independent half of the vector viewer:
//! camera mapping, placed vectors, presets and input handling.

pub mod camera;
pub mod config;
pub mod entries;
pub mod error;
pub mod presets;
pub mod scene;
pub mod vector;
pub mod viewer;

pub use vector::{EPSILON, Vec2};
