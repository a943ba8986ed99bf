//! Modal dialog open/close state.

use tracing::debug;

use crate::emitter::{ChangeEmitter, SubscriptionId};
use crate::keyboard::Key;
use crate::reflect::Attributes;

/// Lifecycle notifications emitted by [`Dialog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogEvent {
    /// The dialog became visible.
    Opened,
    /// The dialog was dismissed.
    Closed,
}

/// Dialog visibility with optional click-outside dismissal.
#[derive(Debug, Default)]
pub struct Dialog {
    opened: bool,
    /// Render a backdrop that closes the dialog when clicked.
    pub backdrop: bool,
    events: ChangeEmitter<DialogEvent>,
}

impl Dialog {
    /// Closed dialog.
    #[must_use]
    pub fn new(backdrop: bool) -> Self {
        Self {
            backdrop,
            ..Self::default()
        }
    }

    /// Whether the dialog is visible.
    #[must_use]
    pub const fn opened(&self) -> bool {
        self.opened
    }

    /// Register a listener for open/close transitions.
    pub fn subscribe(&mut self, listener: impl FnMut(&DialogEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(listener)
    }

    /// Show the dialog.
    pub fn open(&mut self) -> Option<DialogEvent> {
        self.set_opened(true)
    }

    /// Hide the dialog.
    pub fn close(&mut self) -> Option<DialogEvent> {
        self.set_opened(false)
    }

    /// Mirror an externally driven `opened` property.
    pub fn set_opened(&mut self, opened: bool) -> Option<DialogEvent> {
        if self.opened == opened {
            return None;
        }
        self.opened = opened;
        let event = if opened {
            DialogEvent::Opened
        } else {
            DialogEvent::Closed
        };
        debug!(?event, "dialog transition");
        self.events.emit(&event);
        Some(event)
    }

    /// Click on the backdrop; closes only when a backdrop is configured.
    pub fn backdrop_click(&mut self) -> Option<DialogEvent> {
        if self.backdrop {
            self.close()
        } else {
            None
        }
    }

    /// Handle `keydown`; Escape dismisses.
    pub fn key_down(&mut self, key: Key) -> Option<DialogEvent> {
        if key == Key::Escape {
            self.close()
        } else {
            None
        }
    }

    /// Host attributes reflecting the current state.
    #[must_use]
    pub fn attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        attrs
            .set("role", "dialog")
            .set("aria-modal", "true")
            .set("aria-hidden", if self.opened { "false" } else { "true" })
            .flag("opened", self.opened)
            .flag("backdrop", self.backdrop);
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn close_fires_only_on_transition() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut dialog = Dialog::new(true);
        {
            let seen = Rc::clone(&seen);
            dialog.subscribe(move |event| seen.borrow_mut().push(*event));
        }
        assert_eq!(dialog.close(), None);
        dialog.open();
        assert_eq!(dialog.key_down(Key::Escape), Some(DialogEvent::Closed));
        assert_eq!(*seen.borrow(), vec![DialogEvent::Opened, DialogEvent::Closed]);
    }

    #[test]
    fn backdrop_click_requires_backdrop() {
        let mut dialog = Dialog::new(false);
        dialog.open();
        assert_eq!(dialog.backdrop_click(), None);
        assert!(dialog.opened());
        dialog.backdrop = true;
        assert_eq!(dialog.backdrop_click(), Some(DialogEvent::Closed));
        assert_eq!(dialog.attributes().get("aria-hidden"), Some("true"));
    }
}
