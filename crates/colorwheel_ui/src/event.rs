use crate::layout::Point;

/// Pointer events that widgets can respond to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Mouse button pressed.
    MousePressed {
        button: MouseButton,
        position: Point,
    },
    /// Mouse button released.
    MouseReleased {
        button: MouseButton,
        position: Point,
    },
    /// Mouse moved.
    MouseMoved { position: Point },
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}
