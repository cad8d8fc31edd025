//! colorwheel_ui - color model, wheel geometry and a circular color picker
//!
//! The core is two pure pieces: the RGB/HSV conversion in [`color`] and the
//! pointer/polar mapping in [`geometry`]. The widgets, gradient and software
//! renderer are built on top of them.

pub mod color;
pub mod constants;
pub mod geometry;
pub mod gradient;

mod callback;
mod event;
mod layout;
mod renderer;
mod state;
mod widget;
mod widgets;

pub use callback::Callback;
pub use color::{Hsv, Rgb};
pub use event::{Event, MouseButton};
pub use geometry::map_pointer_to_hue_saturation;
pub use gradient::{render_gradient, GradientOptions};
pub use layout::{Bounds, Point, Size};
pub use renderer::{Color, DrawCommand, Renderer};
pub use state::*;
pub use widget::Widget;

// Re-export widgets
pub use widgets::{color_wheel, slider, ColorWheel, Slider};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::color::{Hsv, Rgb};
    pub use crate::event::{Event, MouseButton};
    pub use crate::layout::{Bounds, Point, Size};
    pub use crate::renderer::{Color, Renderer};
    pub use crate::state::*;
    pub use crate::widget::Widget;
    pub use crate::widgets::{color_wheel, slider, ColorWheel, Slider};
}
