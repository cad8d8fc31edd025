//! Application message types.
//!
//! All UI events and actions are represented as messages in the Elm architecture style.

use colorwheel_ui::{ColorWheelState, SliderState};

/// Messages that can be sent to update application state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Color wheel produced a new color or drag phase
    WheelChanged(ColorWheelState),
    /// Brightness slider changed
    BrightnessChanged(SliderState),
}
