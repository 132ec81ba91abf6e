//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
        /// Modifier keys held during the press
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Mouse entered widget bounds
    MouseEnter,
    /// Mouse left widget bounds, or left the document when routed at
    /// document level
    MouseLeave,
    /// Key pressed
    KeyDown {
        /// Key pressed
        key: Key,
        /// Modifier keys held
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Key released
    KeyUp {
        /// Key released
        key: Key,
    },
    /// Widget gained focus
    FocusIn,
    /// Widget lost focus
    FocusOut,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

impl MouseButton {
    /// Whether this is the primary (button code 0) button.
    #[must_use]
    pub const fn is_primary(&self) -> bool {
        matches!(self, Self::Left)
    }
}

/// Keyboard key identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Any other key
    Other,
}

impl Key {
    /// Arrow keys that move a value up (`Right`, `Up`).
    #[must_use]
    pub const fn is_increment(&self) -> bool {
        matches!(self, Self::Right | Self::Up)
    }

    /// Arrow keys that move a value down (`Left`, `Down`).
    #[must_use]
    pub const fn is_decrement(&self) -> bool {
        matches!(self, Self::Left | Self::Down)
    }
}

/// Modifier key state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift held
    pub shift: bool,
    /// Control held
    pub ctrl: bool,
    /// Alt/Option held
    pub alt: bool,
    /// Meta (Windows/Command) held
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Control only.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
        meta: false,
    };

    /// Whether a press with these modifiers is treated as a secondary click
    /// (control-click opens the context menu on some platforms).
    #[must_use]
    pub const fn is_secondary_click(&self) -> bool {
        self.ctrl || self.meta
    }
}
