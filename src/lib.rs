//! colorwheel - interactive circular color picker
//!
//! Drag over a disk to pick hue (angle) and saturation (distance from the
//! center); brightness comes from a separate slider. The application state,
//! configuration and PNG output live here; the color model, wheel geometry
//! and widgets live in `colorwheel_ui`.

pub mod app;
pub mod config;
pub mod error;
pub mod message;
pub mod ui_constants;

pub use app::WheelApp;
pub use config::{AppConfig, ConfigError, LogLevel};
pub use error::AppError;
pub use message::Message;
