//! Circular hue/saturation picker.
//!
//! The wheel occupies the largest square centered in its bounds. Pressing
//! the left button inside that square starts a drag; every pointer sample
//! while dragging maps the pointer to `(hue, saturation)`, combines it with
//! the externally supplied brightness and publishes the resulting color.
//! Brightness itself is never changed by the wheel.

use std::sync::Arc;

use crate::callback::Callback;
use crate::constants::{
    DEFAULT_INDICATOR_SIZE, DEFAULT_WHEEL_SIZE, INDICATOR_COLOR, INDICATOR_OUTLINE_COLOR,
    INDICATOR_OUTLINE_WIDTH,
};
use crate::event::{Event, MouseButton};
use crate::geometry::{indicator_position, map_pointer_to_hue_saturation};
use crate::gradient::{render_gradient, GradientOptions};
use crate::layout::{Bounds, Point, Size};
use crate::renderer::Renderer;
use crate::state::ColorWheelState;
use crate::widget::Widget;

/// A circular color picker widget
pub struct ColorWheel<M> {
    /// External state (cloned from app state)
    state: ColorWheelState,
    /// Brightness applied to picked colors and to the gradient disk
    brightness: f32,
    /// Diameter of the selection indicator
    indicator_size: f32,
    /// Gradient disk appearance
    gradient: GradientOptions,
    /// Callback when the color or drag state changes
    on_change: Callback<ColorWheelState, M>,
}

impl<M> ColorWheel<M> {
    /// Create a new color wheel
    pub fn new() -> Self {
        Self {
            state: ColorWheelState::default(),
            brightness: 1.0,
            indicator_size: DEFAULT_INDICATOR_SIZE,
            gradient: GradientOptions::default(),
            on_change: Callback::none(),
        }
    }

    /// Set the external state
    pub fn state(mut self, state: &ColorWheelState) -> Self {
        self.state = *state;
        self
    }

    /// Set the brightness used for picked colors, clamped to [0, 1]
    pub fn brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness.clamp(0.0, 1.0);
        self
    }

    /// Set the selection indicator diameter
    pub fn indicator_size(mut self, size: f32) -> Self {
        self.indicator_size = size.max(0.0);
        self
    }

    /// Set the gradient disk appearance (radius ratio and blur)
    pub fn gradient(mut self, options: GradientOptions) -> Self {
        self.gradient = GradientOptions {
            blur_radius: options.blur_radius.max(0.0),
            ..options
        };
        self
    }

    /// Set the change callback, called with the full updated state
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(ColorWheelState) -> M + 'static,
    {
        self.on_change = Callback::new(handler);
        self
    }

    /// Current state as seen by the widget
    pub fn current_state(&self) -> ColorWheelState {
        self.state
    }

    /// Square region the wheel occupies within `bounds`
    pub fn wheel_bounds(bounds: Bounds) -> Bounds {
        bounds.centered_square()
    }

    /// Center of the selection indicator for the current color
    pub fn indicator_center(&self, bounds: Bounds) -> Point {
        let wheel = Self::wheel_bounds(bounds);
        indicator_position(
            self.state.hsv(),
            wheel.center(),
            wheel.min_side(),
            self.indicator_size,
        )
    }

    /// Recompute the color from a pointer position
    fn update_color(&mut self, bounds: Bounds, position: Point) {
        let wheel = Self::wheel_bounds(bounds);
        let (hue, saturation) =
            map_pointer_to_hue_saturation(position, wheel.center(), wheel.min_side());
        self.state.select(hue, saturation, self.brightness);
    }
}

impl<M> Default for ColorWheel<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Widget<M> for ColorWheel<M> {
    fn layout(&mut self, available: Size) -> Size {
        let side = available.width.min(available.height);
        if side.is_finite() {
            Size::new(side.max(0.0), side.max(0.0))
        } else {
            Size::new(DEFAULT_WHEEL_SIZE, DEFAULT_WHEEL_SIZE)
        }
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let wheel = Self::wheel_bounds(bounds);
        let side = wheel.min_side().round();
        if side < 1.0 {
            return;
        }

        let disk = render_gradient(side as u32, self.brightness, &self.gradient);
        renderer.draw_image(Arc::new(disk), Point::new(wheel.x, wheel.y));

        let indicator = self.indicator_center(bounds);
        let radius = self.indicator_size / 2.0;
        renderer.fill_circle(indicator, radius, INDICATOR_COLOR);
        renderer.stroke_circle(
            indicator,
            radius,
            INDICATOR_OUTLINE_COLOR,
            INDICATOR_OUTLINE_WIDTH,
        );
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        match event {
            Event::MousePressed {
                button: MouseButton::Left,
                position,
            } => {
                if !Self::wheel_bounds(bounds).contains(*position) {
                    return None;
                }
                self.state.drag.start_drag();
                self.update_color(bounds, *position);
                log::debug!(
                    "ColorWheel: started dragging, color={:?}",
                    self.state.color
                );
                self.on_change.call(self.state)
            }

            Event::MouseMoved { position } => {
                if !self.state.is_dragging() {
                    return None;
                }
                self.update_color(bounds, *position);
                log::trace!("ColorWheel: dragging, color={:?}", self.state.color);
                self.on_change.call(self.state)
            }

            Event::MouseReleased {
                button: MouseButton::Left,
                ..
            } => {
                if !self.state.is_dragging() {
                    return None;
                }
                self.state.drag.stop_drag();
                log::debug!(
                    "ColorWheel: stopped dragging, color={:?}",
                    self.state.color
                );
                self.on_change.call(self.state)
            }

            _ => None,
        }
    }

    fn has_active_drag(&self) -> bool {
        self.state.is_dragging()
    }
}

/// Helper function to create a color wheel.
pub fn color_wheel<M>() -> ColorWheel<M> {
    ColorWheel::new()
}
