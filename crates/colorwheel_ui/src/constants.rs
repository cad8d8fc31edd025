//! Centralized constants for colorwheel_ui
//!
//! All magic numbers and repeated constants are defined here for consistency
//! and easy maintenance.

use crate::renderer::Color;

// =============================================================================
// Color Wheel
// =============================================================================

/// Diameter of the selection indicator
pub const DEFAULT_INDICATOR_SIZE: f32 = 20.0;

/// Outline width drawn around the selection indicator
pub const INDICATOR_OUTLINE_WIDTH: f32 = 1.5;

/// Gaussian blur applied to the gradient disk
pub const DEFAULT_BLUR_RADIUS: f32 = 12.0;

/// Gradient disk radius as a fraction of the wheel's side
pub const DEFAULT_GRADIENT_RATIO: f32 = 0.4;

/// Preferred wheel side when layout offers unbounded space
pub const DEFAULT_WHEEL_SIZE: f32 = 350.0;

/// Indicator fill
pub const INDICATOR_COLOR: Color = Color::WHITE;

/// Indicator outline, keeps the indicator visible on light colors
pub const INDICATOR_OUTLINE_COLOR: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.35,
};

// =============================================================================
// Slider
// =============================================================================

/// Height of the slider track
pub const SLIDER_TRACK_HEIGHT: f32 = 6.0;

/// Diameter of the slider thumb
pub const SLIDER_THUMB_SIZE: f32 = 16.0;

/// Total slider widget height
pub const SLIDER_HEIGHT: f32 = 24.0;

/// Slider width when layout offers unbounded space
pub const DEFAULT_SLIDER_WIDTH: f32 = 200.0;

pub const SLIDER_TRACK_COLOR: Color = Color {
    r: 0.3,
    g: 0.3,
    b: 0.3,
    a: 1.0,
};

pub const SLIDER_FILL_COLOR: Color = Color {
    r: 0.3,
    g: 0.6,
    b: 0.9,
    a: 1.0,
};
