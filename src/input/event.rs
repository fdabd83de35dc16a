use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`TrackballCommand`](super::TrackballCommand) values.
/// Positions use the window-system convention: physical pixels with the
/// origin at the top-left corner.
///
/// # Example
///
/// ```
/// use quatcam::input::{InputEvent, InputProcessor};
///
/// let mut processor = InputProcessor::new();
/// let cmd = processor.handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// assert!(cmd.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Cursor moved to absolute window position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, growing downwards.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// Window inner size changed.
    Resized {
        /// New width in physical pixels.
        width: f32,
        /// New height in physical pixels.
        height: f32,
    },
    /// A key was pressed; `key` uses the `KeyCode` debug names of the
    /// usual window toolkits (`"ArrowLeft"`, `"Space"`, ...).
    KeyPressed {
        /// Physical key name.
        key: String,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}
