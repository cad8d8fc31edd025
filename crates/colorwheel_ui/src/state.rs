//! Widget state types for stateful widgets
//!
//! Widgets are rebuilt from these values every frame; the application owns
//! them and receives updated copies through widget callbacks.

use serde::{Deserialize, Serialize};

use crate::color::{Hsv, Rgb};

/// Color wheel drag interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WheelDragState {
    /// Pointer is up
    #[default]
    Idle,
    /// Pointer went down on the wheel and every move publishes a color
    Dragging,
}

impl WheelDragState {
    /// Check if currently dragging
    pub fn is_dragging(&self) -> bool {
        matches!(self, WheelDragState::Dragging)
    }

    /// Start dragging
    pub fn start_drag(&mut self) {
        *self = WheelDragState::Dragging;
    }

    /// Stop dragging
    pub fn stop_drag(&mut self) {
        *self = WheelDragState::Idle;
    }
}

/// State for the color wheel: the current color plus the drag phase.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorWheelState {
    /// Current color, the single source of truth for the picker
    pub color: Rgb,
    /// Drag interaction state
    #[serde(skip)]
    pub drag: WheelDragState,
}

impl ColorWheelState {
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            drag: WheelDragState::default(),
        }
    }

    /// Current color in HSV form.
    pub fn hsv(&self) -> Hsv {
        self.color.hsv()
    }

    /// Store a new color from wheel coordinates at the given brightness.
    pub fn select(&mut self, hue: f32, saturation: f32, brightness: f32) {
        self.color = Hsv::new(hue, saturation, brightness).rgb();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }
}

/// Slider thumb drag interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliderDragState {
    /// Not dragging
    #[default]
    Idle,
    /// Dragging the slider thumb
    Dragging,
}

impl SliderDragState {
    /// Check if currently dragging
    pub fn is_dragging(&self) -> bool {
        matches!(self, SliderDragState::Dragging)
    }

    /// Start dragging
    pub fn start_drag(&mut self) {
        *self = SliderDragState::Dragging;
    }

    /// Stop dragging
    pub fn stop_drag(&mut self) {
        *self = SliderDragState::Idle;
    }
}

/// State for slider widgets
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliderState {
    /// Current value
    pub value: f32,
    /// Drag interaction state
    pub drag: SliderDragState,
}

impl SliderState {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            drag: SliderDragState::default(),
        }
    }

    /// Set the value
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
    }
}
