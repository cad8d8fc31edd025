//! Color wheel application.
//!
//! Owns the picker state (current color and brightness), rebuilds the widgets
//! from it for every event and frame, and applies the messages they return.

use std::path::Path;

use colorwheel_ui::constants::SLIDER_HEIGHT;
use colorwheel_ui::prelude::*;
use image::RgbaImage;

use crate::config::AppConfig;
use crate::error::Result;
use crate::message::Message;
use crate::ui_constants::{spacing, BACKGROUND};

/// The color wheel application state.
pub struct WheelApp {
    /// Current color and wheel drag phase
    wheel: ColorWheelState,
    /// Brightness slider; its value is the brightness applied to picks
    brightness: SliderState,
    /// Active configuration
    config: AppConfig,
}

impl WheelApp {
    /// Create the application from a configuration.
    pub fn new(config: AppConfig) -> Self {
        let color = Rgb::from_u8(config.initial.color);
        let brightness = SliderState::new(config.initial.brightness.clamp(0.0, 1.0));
        log::debug!(
            "WheelApp: starting with color={:?} brightness={}",
            color,
            brightness.value
        );
        Self {
            wheel: ColorWheelState::new(color),
            brightness,
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Current color.
    pub fn color(&self) -> Rgb {
        self.wheel.color
    }

    /// Current color in HSV form.
    pub fn hsv(&self) -> Hsv {
        self.wheel.hsv()
    }

    /// Current brightness.
    pub fn brightness(&self) -> f32 {
        self.brightness.value
    }

    pub fn wheel_state(&self) -> &ColorWheelState {
        &self.wheel
    }

    /// Set brightness directly. The current color is left as is; only the
    /// next pick on the wheel uses the new value.
    pub fn set_brightness(&mut self, value: f32) {
        let mut state = self.brightness;
        state.set_value(value.clamp(0.0, 1.0));
        self.update(Message::BrightnessChanged(state));
    }

    /// Apply a message to the application state.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::WheelChanged(state) => {
                if state.color != self.wheel.color {
                    log::debug!("WheelApp: color -> {}", state.color);
                }
                self.wheel = state;
            }
            Message::BrightnessChanged(state) => {
                log::debug!("WheelApp: brightness -> {:.2}", state.value);
                self.brightness = state;
            }
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    fn wheel_side(&self) -> f32 {
        self.config.wheel.size as f32
    }

    /// Bounds of the wheel on the canvas.
    pub fn wheel_bounds(&self) -> Bounds {
        let side = self.wheel_side();
        Bounds::new(spacing::PADDING, spacing::PADDING, side, side)
    }

    /// Bounds of the brightness slider on the canvas.
    pub fn slider_bounds(&self) -> Bounds {
        let wheel = self.wheel_bounds();
        Bounds::new(
            wheel.x,
            wheel.y + wheel.height + spacing::WHEEL_TO_SLIDER,
            wheel.width,
            SLIDER_HEIGHT,
        )
    }

    /// Canvas size in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        let slider = self.slider_bounds();
        let width = self.wheel_side() + spacing::PADDING * 2.0;
        let height = slider.y + slider.height + spacing::PADDING;
        (width.ceil() as u32, height.ceil() as u32)
    }

    // =========================================================================
    // View
    // =========================================================================

    fn wheel_widget(&self) -> ColorWheel<Message> {
        let settings = &self.config.wheel;
        color_wheel()
            .state(&self.wheel)
            .brightness(self.brightness.value)
            .indicator_size(settings.indicator_size)
            .gradient(settings.gradient_options())
            .on_change(Message::WheelChanged)
    }

    fn brightness_widget(&self) -> Slider<Message> {
        slider(0.0, 1.0)
            .state(&self.brightness)
            .on_change(Message::BrightnessChanged)
    }

    /// Route a pointer event to the widgets and apply the resulting message.
    ///
    /// A widget that is mid-drag receives every event until it releases.
    pub fn handle_event(&mut self, event: &Event) {
        let mut wheel = self.wheel_widget();
        let mut brightness = self.brightness_widget();
        let wheel_bounds = self.wheel_bounds();
        let slider_bounds = self.slider_bounds();

        let message = if wheel.has_active_drag() {
            wheel.on_event(event, wheel_bounds)
        } else if brightness.has_active_drag() {
            brightness.on_event(event, slider_bounds)
        } else {
            wheel
                .on_event(event, wheel_bounds)
                .or_else(|| brightness.on_event(event, slider_bounds))
        };

        if let Some(message) = message {
            self.update(message);
        }
    }

    /// Replay a pointer drag: press on the first sample, move through the
    /// rest, release on the last.
    pub fn replay_drag(&mut self, samples: &[Point]) {
        let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
            return;
        };
        self.handle_event(&Event::MousePressed {
            button: MouseButton::Left,
            position: *first,
        });
        for position in &samples[1..] {
            self.handle_event(&Event::MouseMoved {
                position: *position,
            });
        }
        self.handle_event(&Event::MouseReleased {
            button: MouseButton::Left,
            position: *last,
        });
    }

    /// Value panel: brightness, RGB and HSV readouts.
    pub fn readout(&self) -> Vec<String> {
        vec![
            format!("Brightness: {:.2}", self.brightness.value),
            self.color().to_string(),
            self.hsv().to_string(),
        ]
    }

    /// Record the draw commands of the current frame.
    fn frame(&self) -> Renderer {
        let mut renderer = Renderer::new();
        self.wheel_widget().draw(&mut renderer, self.wheel_bounds());
        self.brightness_widget()
            .draw(&mut renderer, self.slider_bounds());
        renderer
    }

    /// Draw the current frame.
    pub fn render(&self) -> RgbaImage {
        let (width, height) = self.canvas_size();
        self.frame().render(width, height, BACKGROUND)
    }

    /// Draw the current frame and write it as PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let (width, height) = self.canvas_size();
        self.frame()
            .save_png(path, width, height, BACKGROUND)?;
        Ok(())
    }
}

impl Default for WheelApp {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn small_app() -> WheelApp {
        let mut config = AppConfig::default();
        config.wheel.size = 100;
        config.wheel.blur_radius = 0.0;
        WheelApp::new(config)
    }

    #[test]
    fn test_initial_state() {
        let app = WheelApp::default();
        assert_eq!(app.color(), Rgb::RED);
        assert_eq!(app.brightness(), 1.0);
        assert!(!app.wheel_state().is_dragging());
    }

    #[test]
    fn test_layout() {
        let app = small_app();
        assert_eq!(app.wheel_bounds(), Bounds::new(20.0, 20.0, 100.0, 100.0));
        assert_eq!(app.slider_bounds().y, 130.0);
        assert_eq!(app.canvas_size(), (140, 174));
    }

    #[test]
    fn test_brightness_does_not_recolor() {
        let mut app = small_app();
        app.set_brightness(0.3);
        assert_eq!(app.brightness(), 0.3);
        assert_eq!(app.color(), Rgb::RED);
    }

    #[test]
    fn test_drag_uses_current_brightness() {
        let mut app = small_app();
        app.set_brightness(0.5);
        // Wheel center is (70, 70); straight left at full saturation
        app.replay_drag(&[Point::new(70.0, 70.0), Point::new(20.0, 70.0)]);
        let hsv = app.hsv();
        assert!(approx_eq(hsv.h(), 180.0));
        assert!(approx_eq(hsv.s(), 1.0));
        assert!(approx_eq(hsv.v(), 0.5));
        assert!(!app.wheel_state().is_dragging());
    }

    #[test]
    fn test_slider_event_routing() {
        let mut app = small_app();
        let slider = app.slider_bounds();
        app.handle_event(&Event::MousePressed {
            button: MouseButton::Left,
            position: Point::new(slider.x + 8.0, slider.y + 12.0),
        });
        assert_eq!(app.brightness(), 0.0);
        // Moving over the wheel while the slider drags must not pick a color;
        // x = 70 is the middle of the slider track
        app.handle_event(&Event::MouseMoved {
            position: Point::new(70.0, 30.0),
        });
        assert_eq!(app.color(), Rgb::RED);
        assert!(approx_eq(app.brightness(), 0.5));
        app.handle_event(&Event::MouseReleased {
            button: MouseButton::Left,
            position: Point::new(70.0, 30.0),
        });
        assert!(approx_eq(app.brightness(), 0.5));
        assert!(!app.brightness.drag.is_dragging());
    }

    #[test]
    fn test_readout() {
        let app = WheelApp::default();
        assert_eq!(
            app.readout(),
            vec![
                "Brightness: 1.00".to_string(),
                "R: 1.00 G: 0.00 B: 0.00".to_string(),
                "H: 0.0° S: 1.00 V: 1.00".to_string(),
            ]
        );
    }

    #[test]
    fn test_render_dimensions() {
        let app = small_app();
        let img = app.render();
        assert_eq!(img.dimensions(), app.canvas_size());
    }

    #[test]
    fn test_empty_drag_is_noop() {
        let mut app = small_app();
        app.replay_drag(&[]);
        assert_eq!(app.color(), Rgb::RED);
    }
}
