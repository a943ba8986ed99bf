//! Error types for the fallible widget surfaces (icon registry, theme config).
//!
//! Widget state changes never fail; out-of-range input is clamped instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by icon registration and lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IconError {
    /// Qualified name was not of the form `set:name`.
    #[error("malformed icon name")]
    MalformedName {
        /// Raw name supplied by the caller.
        value: String,
    },
    /// No icon set is registered under the requested name.
    #[error("unknown icon set")]
    UnknownSet {
        /// Requested icon set.
        set: String,
    },
    /// The icon set exists but does not contain the icon.
    #[error("unknown icon")]
    UnknownIcon {
        /// Icon set that was searched.
        set: String,
        /// Requested icon name.
        name: String,
    },
    /// An icon set with the same name was already registered.
    #[error("icon set already registered")]
    DuplicateSet {
        /// Conflicting icon set name.
        set: String,
    },
    /// The process-wide registry lock was poisoned by a panicking writer.
    #[error("icon registry lock poisoned")]
    RegistryPoisoned,
}

/// Result alias for icon operations.
pub type IconResult<T> = Result<T, IconError>;

/// Errors raised while loading or validating theme overrides.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Theme override file could not be read.
    #[error("failed to read theme config")]
    Read {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// Theme override payload was not valid JSON for [`crate::ThemeConfig`].
    #[error("failed to parse theme config")]
    Parse {
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// Override key is not an `--oxy-` custom property.
    #[error("invalid theme variable")]
    InvalidVariable {
        /// Offending variable name.
        name: String,
    },
    /// Override value would break out of the declaration block.
    #[error("invalid theme value")]
    InvalidValue {
        /// Variable the value was assigned to.
        name: String,
        /// Offending value.
        value: String,
    },
    /// Theme mode identifier was not recognised.
    #[error("unknown theme mode")]
    UnknownMode {
        /// Raw mode supplied by the caller.
        value: String,
    },
}

/// Result alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn icon_error_messages_are_stable() {
        let err = IconError::UnknownIcon {
            set: "icons".into(),
            name: "nope".into(),
        };
        assert_eq!(err.to_string(), "unknown icon");
        assert_eq!(IconError::RegistryPoisoned.to_string(), "icon registry lock poisoned");
    }

    #[test]
    fn theme_read_error_exposes_source() {
        let err = ThemeError::Read {
            path: PathBuf::from("/missing/theme.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "failed to read theme config");
        assert!(err.source().is_some());
    }
}
