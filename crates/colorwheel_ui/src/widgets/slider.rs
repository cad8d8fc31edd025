//! A slider widget for selecting values within a range.

use crate::callback::Callback;
use crate::constants::{
    DEFAULT_SLIDER_WIDTH, SLIDER_FILL_COLOR, SLIDER_HEIGHT, SLIDER_THUMB_SIZE,
    SLIDER_TRACK_COLOR, SLIDER_TRACK_HEIGHT,
};
use crate::event::{Event, MouseButton};
use crate::layout::{Bounds, Point, Size};
use crate::renderer::{Color, Renderer};
use crate::state::SliderState;
use crate::widget::Widget;

/// A slider widget for selecting values within a range.
pub struct Slider<M> {
    /// External state (cloned from app state)
    state: SliderState,
    /// Minimum value
    min: f32,
    /// Maximum value
    max: f32,
    /// Step size (0 for continuous)
    step: f32,
    /// Callback when the value or drag state changes
    on_change: Callback<SliderState, M>,
}

impl<M> Slider<M> {
    /// Create a new slider.
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            state: SliderState::new(min),
            min,
            max,
            step: 0.0,
            on_change: Callback::none(),
        }
    }

    /// Set the external state; the value is clamped into range.
    pub fn state(mut self, state: &SliderState) -> Self {
        self.state = *state;
        self.state.value = self.clamp(state.value);
        self
    }

    /// Set the step size (0 for continuous).
    pub fn step(mut self, step: f32) -> Self {
        self.step = step.max(0.0);
        self
    }

    /// Set the callback when the state changes.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(SliderState) -> M + 'static,
    {
        self.on_change = Callback::new(f);
        self
    }

    fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min.min(self.max), self.max.max(self.min))
    }

    /// Convert x position to value.
    fn x_to_value(&self, x: f32, bounds: Bounds) -> f32 {
        let track_start = bounds.x + SLIDER_THUMB_SIZE / 2.0;
        let track_width = (bounds.width - SLIDER_THUMB_SIZE).max(f32::EPSILON);
        let ratio = ((x - track_start) / track_width).clamp(0.0, 1.0);
        let value = self.min + ratio * (self.max - self.min);

        if self.step > 0.0 {
            let steps = ((value - self.min) / self.step).round();
            self.clamp(self.min + steps * self.step)
        } else {
            value
        }
    }

    /// Get the normalized position (0-1) of the current value.
    fn value_ratio(&self) -> f32 {
        if (self.max - self.min).abs() < f32::EPSILON {
            0.0
        } else {
            (self.state.value - self.min) / (self.max - self.min)
        }
    }
}

impl<M> Widget<M> for Slider<M> {
    fn layout(&mut self, available: Size) -> Size {
        let width = if available.width.is_finite() {
            available.width.max(SLIDER_THUMB_SIZE)
        } else {
            DEFAULT_SLIDER_WIDTH
        };
        Size::new(width, SLIDER_HEIGHT)
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let ratio = self.value_ratio();
        let usable = (bounds.width - SLIDER_THUMB_SIZE).max(0.0);

        // Track background
        let track_y = bounds.y + (bounds.height - SLIDER_TRACK_HEIGHT) / 2.0;
        let track = Bounds::new(
            bounds.x + SLIDER_THUMB_SIZE / 2.0,
            track_y,
            usable,
            SLIDER_TRACK_HEIGHT,
        );
        renderer.fill_rect(track, SLIDER_TRACK_COLOR);

        // Fill (progress)
        let fill_width = usable * ratio;
        if fill_width > 0.0 {
            let fill = Bounds::new(track.x, track_y, fill_width, SLIDER_TRACK_HEIGHT);
            renderer.fill_rect(fill, SLIDER_FILL_COLOR);
        }

        // Thumb
        let thumb = Point::new(
            bounds.x + SLIDER_THUMB_SIZE / 2.0 + ratio * usable,
            bounds.y + bounds.height / 2.0,
        );
        renderer.fill_circle(thumb, SLIDER_THUMB_SIZE / 2.0, Color::WHITE);
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        match event {
            Event::MousePressed {
                button: MouseButton::Left,
                position,
            } => {
                if !bounds.contains(*position) {
                    return None;
                }
                self.state.drag.start_drag();
                self.state.set_value(self.x_to_value(position.x, bounds));
                log::debug!("Slider: started dragging, value={}", self.state.value);
                self.on_change.call(self.state)
            }
            Event::MouseMoved { position } => {
                if !self.state.drag.is_dragging() {
                    return None;
                }
                self.state.set_value(self.x_to_value(position.x, bounds));
                self.on_change.call(self.state)
            }
            Event::MouseReleased {
                button: MouseButton::Left,
                ..
            } => {
                if !self.state.drag.is_dragging() {
                    return None;
                }
                self.state.drag.stop_drag();
                log::debug!("Slider: stopped dragging, value={}", self.state.value);
                self.on_change.call(self.state)
            }
            _ => None,
        }
    }

    fn has_active_drag(&self) -> bool {
        self.state.drag.is_dragging()
    }
}

/// Helper function to create a slider.
pub fn slider<M>(min: f32, max: f32) -> Slider<M> {
    Slider::new(min, max)
}
