//! Remote, pointer, and keyboard input as the launcher sees it.
//!
//! Hosts translate their native events into these enums before handing
//! them to the shell.

use serde::{Deserialize, Serialize};

/// One user input delivered to the launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A remote / d-pad button pressed.
    ButtonPress(Button),
    /// Pointer moved over the grid tile at `index` of the active list.
    Hover { index: usize },
    /// Pointer moved somewhere without a tile target.
    PointerMove { x: i32, y: i32 },
    /// Pointer click (wakes the screensaver, resets idle).
    PointerClick { x: i32, y: i32 },
    /// Character typed on a physical keyboard.
    TextInput(char),
    /// Delete the last typed character.
    Backspace,
    /// The host is shutting the launcher down.
    Quit,
}

impl InputEvent {
    /// Whether the event counts as user activity for the idle timer.
    pub fn is_activity(&self) -> bool {
        !matches!(self, Self::Quit)
    }
}

/// Remote-control buttons that map across all hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
    /// Global volume key, independent of focus.
    VolumeUp,
    /// Global volume key, independent of focus.
    VolumeDown,
}

impl Button {
    /// Whether this button is reserved for the volume HUD.
    pub fn is_volume(self) -> bool {
        matches!(self, Self::VolumeUp | Self::VolumeDown)
    }
}
