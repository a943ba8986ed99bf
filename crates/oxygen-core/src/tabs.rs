//! Tab bar selection coordination.
//!
//! # Design
//! - The group owns the selected index; children only mirror it.
//! - Clicks are resolved by walking from the event target up to the direct
//!   child of the group, so nested markup inside a tab still selects it.

use tracing::debug;

use crate::emitter::{ChangeEmitter, SubscriptionId};
use crate::reflect::Attributes;

/// Layout direction of a tab bar, propagated to every tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Tabs laid out in a row.
    #[default]
    Horizontal,
    /// Tabs stacked in a column.
    Vertical,
}

impl Orientation {
    /// Attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// Parse an attribute value; anything but `vertical` is horizontal.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("vertical") {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }
}

/// Index of the direct child of `host` that contains `target`.
///
/// Walks `target` up through `parent_of` until a node whose parent is
/// `host` is found, then locates it in `children`. Returns `None` when the
/// target lies outside the host or is the host itself.
pub fn direct_child_index<N, F>(target: N, host: &N, children: &[N], parent_of: F) -> Option<usize>
where
    N: PartialEq,
    F: Fn(&N) -> Option<N>,
{
    let mut current = Some(target);
    while let Some(node) = current {
        match parent_of(&node) {
            Some(parent) if parent == *host => {
                return children.iter().position(|child| *child == node);
            }
            parent => current = parent,
        }
    }
    None
}

/// Selection state for a group of tabs.
#[derive(Debug, Default)]
pub struct TabGroup {
    orientation: Orientation,
    selected: usize,
    len: usize,
    changes: ChangeEmitter<usize>,
}

impl TabGroup {
    /// Group of `len` tabs with the first one selected.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    /// Selected index; may point past the end, in which case no tab is
    /// selected.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Number of tabs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the group has no tabs.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Layout direction.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Change the layout direction.
    pub const fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Update the tab count after children were added or removed.
    pub const fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Register a listener for selection changes.
    pub fn subscribe(&mut self, listener: impl FnMut(&usize) + 'static) -> SubscriptionId {
        self.changes.subscribe(listener)
    }

    /// Select `index`. Out-of-range indices deselect every tab.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index == self.selected {
            return None;
        }
        debug!(from = self.selected, to = index, tabs = self.len, "tab selection changed");
        self.selected = index;
        self.changes.emit(&index);
        Some(index)
    }

    /// Resolve a click on `target` and select the tab that contains it.
    pub fn click<N, F>(&mut self, target: N, host: &N, children: &[N], parent_of: F) -> Option<usize>
    where
        N: PartialEq,
        F: Fn(&N) -> Option<N>,
    {
        let index = direct_child_index(target, host, children, parent_of)?;
        self.select(index)
    }

    /// Whether tab `index` carries the selected state.
    #[must_use]
    pub const fn is_selected(&self, index: usize) -> bool {
        index < self.len && index == self.selected
    }

    /// Host attributes for the tab list.
    #[must_use]
    pub fn attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        attrs
            .set("role", "tablist")
            .set("orientation", self.orientation.as_str())
            .set("selected", self.selected.to_string());
        attrs
    }

    /// Attributes for the tab at `index`.
    #[must_use]
    pub fn tab_attributes(&self, index: usize) -> Attributes {
        let selected = self.is_selected(index);
        let mut attrs = Attributes::new();
        attrs
            .set("role", "tab")
            .set("orientation", self.orientation.as_str())
            .set("aria-selected", if selected { "true" } else { "false" })
            .flag("selected", selected);
        attrs
    }
}
