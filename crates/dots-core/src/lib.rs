pub mod buffers;
pub mod camera;
pub mod config;
pub mod constants;
pub mod field;
pub mod gpu;
pub mod interaction;
pub mod math;
pub mod morph;
pub mod pointer;
pub mod sim;

pub use buffers::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use field::*;
pub use gpu::*;
pub use interaction::*;
pub use morph::{blink_color, spherical_angles, wave, MorphControl};
pub use pointer::*;
pub use sim::*;

// Shader bundled as a string constant
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");
