//! Callback abstraction for widget event handlers
//!
//! Widgets store their handlers as `Callback<T, M>` instead of spelling out
//! `Option<Box<dyn Fn(T) -> M>>`.
//!
//! # Examples
//!
//! ```
//! use colorwheel_ui::Callback;
//!
//! let on_change: Callback<f32, String> = Callback::new(|v| format!("{v:.1}"));
//! assert_eq!(on_change.call(0.5), Some("0.5".to_string()));
//!
//! let unset: Callback<f32, String> = Callback::none();
//! assert_eq!(unset.call(0.5), None);
//! ```

use std::fmt;

/// A callback wrapper that encapsulates optional event handlers.
///
/// - `T`: The input type for the callback (e.g., slider state, wheel state)
/// - `M`: The message type returned by the callback
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `Some(message)` if the callback is set, or `None` if no callback is registered.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_returns_nothing() {
        let cb: Callback<u8, u8> = Callback::default();
        assert!(cb.is_none());
        assert_eq!(cb.call(3), None);
    }

    #[test]
    fn test_new_maps_value() {
        let cb = Callback::new(|x: u8| x * 2);
        assert!(cb.is_some());
        assert_eq!(cb.call(21), Some(42));
    }

    #[test]
    fn test_debug_reports_set() {
        let cb = Callback::new(|_: ()| 1);
        assert_eq!(format!("{:?}", cb), "Callback { set: true }");
    }
}
