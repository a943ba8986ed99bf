//! Icon sets and the process-wide icon registry.
//!
//! # Design
//! - Icons are addressed as `set:name` (for example `icons:bug-report`).
//! - [`IconRegistry`] is a plain value for tests and embedding; the free
//!   functions operate on a lazily initialised global seeded with the
//!   built-in [`base`] set.

pub mod base;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{IconError, IconResult};

/// Default square viewport used by icon sets.
pub const DEFAULT_ICON_SIZE: u32 = 24;

/// Parsed `set:name` icon reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QualifiedIconName {
    /// Icon set name.
    pub set: String,
    /// Icon name within the set.
    pub name: String,
}

impl FromStr for QualifiedIconName {
    type Err = IconError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || IconError::MalformedName {
            value: value.to_string(),
        };
        let (set, name) = value.trim().split_once(':').ok_or_else(malformed)?;
        if set.is_empty() || name.is_empty() || name.contains(':') {
            return Err(malformed());
        }
        Ok(Self {
            set: set.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for QualifiedIconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.set, self.name)
    }
}

/// Resolved icon ready for rendering as a single SVG path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Icon {
    /// Fully qualified name.
    pub name: QualifiedIconName,
    /// SVG path data.
    pub path: String,
    /// Square viewport edge length.
    pub size: u32,
}

impl Icon {
    /// `viewBox` attribute value.
    #[must_use]
    pub fn view_box(&self) -> String {
        format!("0 0 {size} {size}", size = self.size)
    }
}

/// Named collection of icons sharing a viewport size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconSet {
    name: String,
    size: u32,
    icons: BTreeMap<String, String>,
}

impl IconSet {
    /// Empty set with the default viewport.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: DEFAULT_ICON_SIZE,
            icons: BTreeMap::new(),
        }
    }

    /// Override the viewport edge length.
    #[must_use]
    pub const fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Add (or replace) an icon.
    #[must_use]
    pub fn icon(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.icons.insert(name.into(), path.into());
        self
    }

    /// Set name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Icon names in sorted order.
    pub fn icon_names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    /// Number of icons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    fn resolve(&self, name: &str) -> Option<Icon> {
        self.icons.get(name).map(|path| Icon {
            name: QualifiedIconName {
                set: self.name.clone(),
                name: name.to_string(),
            },
            path: path.clone(),
            size: self.size,
        })
    }
}

/// Registry of icon sets keyed by set name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IconRegistry {
    sets: BTreeMap<String, IconSet>,
}

impl IconRegistry {
    /// Registry without any sets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the built-in base set.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.sets.insert(base::SET_NAME.to_string(), base::iconset());
        registry
    }

    /// Add `set`.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::DuplicateSet`] when the name is taken.
    pub fn register(&mut self, set: IconSet) -> IconResult<()> {
        if self.sets.contains_key(set.name()) {
            return Err(IconError::DuplicateSet {
                set: set.name().to_string(),
            });
        }
        debug!(set = set.name(), icons = set.len(), "icon set registered");
        self.sets.insert(set.name().to_string(), set);
        Ok(())
    }

    /// Resolve a `set:name` reference.
    ///
    /// # Errors
    ///
    /// Returns an error when the name is malformed or the set/icon is unknown.
    pub fn lookup(&self, qualified: &str) -> IconResult<Icon> {
        let name: QualifiedIconName = qualified.parse()?;
        let set = self.sets.get(&name.set).ok_or_else(|| IconError::UnknownSet {
            set: name.set.clone(),
        })?;
        set.resolve(&name.name).ok_or(IconError::UnknownIcon {
            set: name.set,
            name: name.name,
        })
    }

    /// Registered set names in sorted order.
    #[must_use]
    pub fn iconset_names(&self) -> Vec<String> {
        self.sets.keys().cloned().collect()
    }

    /// Icon names of `set` in sorted order.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::UnknownSet`] when the set is not registered.
    pub fn icon_names(&self, set: &str) -> IconResult<Vec<String>> {
        self.sets
            .get(set)
            .map(|found| found.icon_names().map(str::to_string).collect())
            .ok_or_else(|| IconError::UnknownSet {
                set: set.to_string(),
            })
    }
}

static REGISTRY: Lazy<RwLock<IconRegistry>> =
    Lazy::new(|| RwLock::new(IconRegistry::with_builtin()));

/// Register `set` in the global registry.
///
/// # Errors
///
/// Returns [`IconError::DuplicateSet`] or [`IconError::RegistryPoisoned`].
pub fn register_iconset(set: IconSet) -> IconResult<()> {
    REGISTRY
        .write()
        .map_err(|_| IconError::RegistryPoisoned)?
        .register(set)
}

/// Resolve a `set:name` reference against the global registry.
///
/// # Errors
///
/// See [`IconRegistry::lookup`]; also [`IconError::RegistryPoisoned`].
pub fn lookup_icon(qualified: &str) -> IconResult<Icon> {
    REGISTRY
        .read()
        .map_err(|_| IconError::RegistryPoisoned)?
        .lookup(qualified)
}

/// Globally registered set names.
///
/// # Errors
///
/// Returns [`IconError::RegistryPoisoned`] if a writer panicked.
pub fn iconset_names() -> IconResult<Vec<String>> {
    Ok(REGISTRY
        .read()
        .map_err(|_| IconError::RegistryPoisoned)?
        .iconset_names())
}

/// Icon names of a globally registered set.
///
/// # Errors
///
/// Returns [`IconError::UnknownSet`] or [`IconError::RegistryPoisoned`].
pub fn icon_names(set: &str) -> IconResult<Vec<String>> {
    REGISTRY
        .read()
        .map_err(|_| IconError::RegistryPoisoned)?
        .icon_names(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn qualified_names_parse() {
        let parsed: QualifiedIconName = "icons:bug-report".parse().expect("valid name");
        assert_eq!(parsed.set, "icons");
        assert_eq!(parsed.to_string(), "icons:bug-report");
        for bad in ["bug-report", ":x", "icons:", "a:b:c"] {
            assert!(matches!(
                bad.parse::<QualifiedIconName>(),
                Err(IconError::MalformedName { .. })
            ));
        }
    }

    #[test]
    fn lookup_reports_missing_set_and_icon() {
        let registry = IconRegistry::with_builtin();
        assert_eq!(
            registry.lookup("nope:x"),
            Err(IconError::UnknownSet { set: "nope".into() })
        );
        assert_eq!(
            registry.lookup("icons:nope"),
            Err(IconError::UnknownIcon {
                set: "icons".into(),
                name: "nope".into()
            })
        );
        let icon = registry.lookup("icons:bug-report").expect("builtin icon");
        assert_eq!(icon.view_box(), "0 0 24 24");
    }

    #[test]
    fn duplicate_sets_are_rejected() {
        let mut registry = IconRegistry::new();
        registry
            .register(IconSet::new("extra").icon("dot", "M0 0h1v1H0z"))
            .expect("first registration");
        assert_eq!(
            registry.register(IconSet::new("extra")),
            Err(IconError::DuplicateSet { set: "extra".into() })
        );
        assert_eq!(registry.icon_names("extra"), Ok(vec!["dot".to_string()]));
    }

    #[test]
    #[serial]
    fn global_registry_accepts_custom_sets() {
        let set = IconSet::new("global-test").with_size(16).icon("dot", "M0 0h1v1H0z");
        register_iconset(set).expect("registration succeeds");
        let names = iconset_names().expect("registry readable");
        assert!(names.contains(&"global-test".to_string()));
        assert!(names.contains(&base::SET_NAME.to_string()));
        let icon = lookup_icon("global-test:dot").expect("registered icon");
        assert_eq!(icon.size, 16);
        assert_eq!(icon_names("global-test"), Ok(vec!["dot".to_string()]));
    }
}
