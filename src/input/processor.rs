//! Converts raw platform events into trackball commands.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! held buttons, window size) and the key-binding map. It is the only thing
//! that sits between raw window events and
//! [`TrackballCommand::apply`](super::TrackballCommand::apply).

use super::command::TrackballCommand;
use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyBindings;
use crate::math::Vector2;

/// Window size assumed until the first resize event.
const DEFAULT_WINDOW: Vector2 = Vector2::new(640.0, 480.0);

/// Converts raw window events into [`TrackballCommand`]s.
///
/// Left-button drags rotate, right- or middle-button drags pan, the wheel
/// zooms and bound keys orbit or reset. Cursor positions arrive with a
/// top-left origin and are flipped to the bottom-left origin the trackball
/// works in.
///
/// # Usage
///
/// ```
/// use quatcam::camera::Trackball;
/// use quatcam::input::{InputEvent, InputProcessor, MouseButton};
///
/// let mut trackball = Trackball::new();
/// let mut processor = InputProcessor::new();
/// let events = [
///     InputEvent::CursorMoved { x: 320.0, y: 240.0 },
///     InputEvent::MouseButton { button: MouseButton::Left, pressed: true },
///     InputEvent::CursorMoved { x: 340.0, y: 240.0 },
/// ];
/// for event in events {
///     if let Some(cmd) = processor.handle_event(event) {
///         cmd.apply(&mut trackball);
///     }
/// }
/// assert_ne!(trackball, Trackball::new());
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Last cursor position (bottom-left origin), if any has been seen.
    cursor: Option<Vector2>,
    /// Window size in physical pixels.
    window: Vector2,
    /// Whether the rotate button is held.
    rotating: bool,
    /// Whether a pan button is held.
    panning: bool,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor: None,
            window: DEFAULT_WINDOW,
            rotating: false,
            panning: false,
            key_bindings: KeyBindings::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Current window size in physical pixels.
    #[must_use]
    pub fn window_size(&self) -> Vector2 {
        self.window
    }

    /// Last cursor position with a bottom-left origin.
    #[must_use]
    pub fn cursor(&self) -> Option<Vector2> {
        self.cursor
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Release all buttons without producing a command, e.g. when the window
    /// loses focus mid-drag.
    pub fn release_buttons(&mut self) {
        self.rotating = false;
        self.panning = false;
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<TrackballCommand> {
        let cmd = self.key_bindings.lookup(key);
        if cmd.is_none() {
            log::trace!("unbound key {key}");
        }
        cmd
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<TrackballCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                match button {
                    MouseButton::Left => self.rotating = pressed,
                    MouseButton::Right | MouseButton::Middle => {
                        self.panning = pressed;
                    }
                }
                None
            }
            InputEvent::Scroll { delta } => Some(TrackballCommand::Zoom {
                delta,
                size: self.window.y,
            }),
            InputEvent::Resized { width, height } => {
                log::debug!("window resized to {width}x{height}");
                self.window = Vector2::new(width, height);
                None
            }
            InputEvent::KeyPressed { key } => self.handle_key_press(&key),
        }
    }

    /// Cursor moved: record it and, while a button is held, turn the motion
    /// into a drag or pan.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<TrackballCommand> {
        let to = Vector2::new(x, self.window.y - y);
        let from = self.cursor.replace(to)?;

        if self.rotating {
            return Some(TrackballCommand::Drag {
                from,
                to,
                window: self.window,
            });
        }
        if self.panning {
            return Some(TrackballCommand::Pan { from, to });
        }
        None
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
