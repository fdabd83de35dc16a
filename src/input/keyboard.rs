use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::command::{OrbitDirection, TrackballCommand};

/// Maps physical key strings to [`TrackballCommand`] variants.
///
/// Key strings use the `KeyCode` debug format of the usual window toolkits:
/// `"ArrowLeft"`, `"Space"`, `"KeyR"`, etc.
///
/// Only discrete commands make sense as key bindings; drags and zooms come
/// from the pointer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the key-bindable subset of [`TrackballCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Orbit one step to the left.
    OrbitLeft,
    /// Orbit one step to the right.
    OrbitRight,
    /// Orbit one step upwards.
    OrbitUp,
    /// Orbit one step downwards.
    OrbitDown,
    /// Restore the initial camera.
    Reset,
}

impl KeyCommandTag {
    /// Convert to the corresponding parameterless [`TrackballCommand`].
    fn to_command(self) -> TrackballCommand {
        let orbit = |direction| TrackballCommand::Orbit { direction };
        match self {
            Self::OrbitLeft => orbit(OrbitDirection::Left),
            Self::OrbitRight => orbit(OrbitDirection::Right),
            Self::OrbitUp => orbit(OrbitDirection::Up),
            Self::OrbitDown => orbit(OrbitDirection::Down),
            Self::Reset => TrackballCommand::Reset,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("ArrowLeft".into(), KeyCommandTag::OrbitLeft),
            ("ArrowRight".into(), KeyCommandTag::OrbitRight),
            ("ArrowUp".into(), KeyCommandTag::OrbitUp),
            ("ArrowDown".into(), KeyCommandTag::OrbitDown),
            ("Space".into(), KeyCommandTag::Reset),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<TrackballCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind `key` to `tag`, returning the tag it replaces.
    pub fn bind(
        &mut self,
        key: impl Into<String>,
        tag: KeyCommandTag,
    ) -> Option<KeyCommandTag> {
        self.bindings.insert(key.into(), tag)
    }

    /// Remove the binding for `key`.
    pub fn unbind(&mut self, key: &str) -> Option<KeyCommandTag> {
        self.bindings.remove(key)
    }
}
