//! Activate-signal aggregation
//!
//! Keyboard, mouse and touch each report their own held state; the game
//! consumes only their logical OR.

use crate::sim::TickInput;

/// Key that acts as the activate button (`KeyboardEvent.key`)
pub const ACTIVATE_KEY: &str = " ";

/// Primary pointer button (`MouseEvent.button`)
pub const PRIMARY_BUTTON: i16 = 0;

/// Held state of every physical input source
#[derive(Debug, Clone, Default)]
pub struct InputState {
    key_held: bool,
    pointer_held: bool,
    active_touches: u32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the key is the activate key (caller may suppress scrolling)
    pub fn key_down(&mut self, key: &str) -> bool {
        if key == ACTIVATE_KEY {
            self.key_held = true;
            return true;
        }
        false
    }

    pub fn key_up(&mut self, key: &str) {
        if key == ACTIVATE_KEY {
            self.key_held = false;
        }
    }

    pub fn pointer_down(&mut self, button: i16) {
        if button == PRIMARY_BUTTON {
            self.pointer_held = true;
        }
    }

    pub fn pointer_up(&mut self, button: i16) {
        if button == PRIMARY_BUTTON {
            self.pointer_held = false;
        }
    }

    /// Number of fingers currently on the surface
    pub fn set_touches(&mut self, count: u32) {
        self.active_touches = count;
    }

    /// Forget everything held, e.g. when the window loses focus
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Logical OR of all sources
    pub fn is_pressing(&self) -> bool {
        self.key_held || self.pointer_held || self.active_touches > 0
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            pressing: self.is_pressing(),
        }
    }
}
