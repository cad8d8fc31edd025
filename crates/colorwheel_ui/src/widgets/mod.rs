//! Widget implementations

mod color_wheel;
mod slider;

pub use color_wheel::{color_wheel, ColorWheel};
pub use slider::{slider, Slider};
