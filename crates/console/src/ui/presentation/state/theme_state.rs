//! Theme state management using Dioxus signals

use dioxus::prelude::*;

use crate::application::services::ThemeMode;

/// Current color theme, shared through context
#[derive(Clone, Copy)]
pub struct ThemeState {
    mode: Signal<ThemeMode>,
}

impl ThemeState {
    /// Create a new ThemeState with the default (light) theme
    pub fn new() -> Self {
        Self {
            mode: Signal::new(ThemeMode::default()),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        (self.mode)()
    }

    pub fn set(&mut self, mode: ThemeMode) {
        self.mode.set(mode);
    }

    /// Flip the theme and return the new mode
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.mode().toggled();
        self.mode.set(next);
        next
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}
