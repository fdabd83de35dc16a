//! Input handling: platform-agnostic event types and the processor that
//! converts raw window events into trackball commands.

/// Trackball command vocabulary.
pub mod command;
/// Platform-agnostic input events.
pub mod event;
/// Key-to-command bindings.
pub mod keyboard;
/// Converts raw events into trackball commands.
pub mod processor;

pub use command::{OrbitDirection, TrackballCommand};
pub use event::{InputEvent, MouseButton};
pub use keyboard::{KeyBindings, KeyCommandTag};
pub use processor::InputProcessor;
