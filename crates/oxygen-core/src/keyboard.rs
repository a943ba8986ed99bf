//! Keyboard activation shared by button-like widgets.
//!
//! Space activates on release, Enter activates on press; both show the
//! pressed state while held.

/// Keys the widgets react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// The space bar.
    Space,
    /// Enter / Return.
    Enter,
    /// Escape.
    Escape,
    /// Anything else.
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            " " | "Spacebar" => Self::Space,
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// What the host element should do in response to a key event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Suppress the browser default (scrolling, form submit).
    pub prevent_default: bool,
    /// Dispatch a synthetic click.
    pub click: bool,
}

/// Pressed-state tracker driven by key events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyboardActivation {
    active: bool,
}

impl KeyboardActivation {
    /// Whether an activation key is currently held.
    #[must_use]
    pub const fn active(&self) -> bool {
        self.active
    }

    /// Handle `keydown`.
    pub fn key_down(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Space => {
                self.active = true;
                KeyOutcome {
                    prevent_default: true,
                    click: false,
                }
            }
            Key::Enter => {
                self.active = true;
                KeyOutcome {
                    prevent_default: true,
                    click: true,
                }
            }
            Key::Escape | Key::Other => KeyOutcome::default(),
        }
    }

    /// Handle `keyup`.
    pub fn key_up(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Space => {
                self.active = false;
                KeyOutcome {
                    prevent_default: false,
                    click: true,
                }
            }
            Key::Enter => {
                self.active = false;
                KeyOutcome::default()
            }
            Key::Escape | Key::Other => KeyOutcome::default(),
        }
    }
}
