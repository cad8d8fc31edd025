//! UI constants for consistent styling across the application.

use colorwheel_ui::Color;

/// Spacing constants for consistent layout.
pub mod spacing {
    /// Padding around the whole canvas
    pub const PADDING: f32 = 20.0;
    /// Gap between the wheel and the brightness slider
    pub const WHEEL_TO_SLIDER: f32 = 10.0;
}

/// Canvas background behind the wheel
pub const BACKGROUND: Color = Color {
    r: 0.12,
    g: 0.12,
    b: 0.14,
    a: 1.0,
};
