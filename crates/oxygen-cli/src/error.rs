//! Exit-code classification for command errors.
//!
//! Bad user input (flags, override files, icon references, gesture scripts)
//! exits with 2; anything that kept a valid request from completing exits
//! with 3.

use std::fmt::{self, Display, Formatter};

use oxygen_core::{IconError, ThemeError};

/// Error returned by a command handler.
#[derive(Debug)]
pub(crate) enum CliError {
    /// The request itself was wrong.
    Validation(String),
    /// The request was fine but could not be carried out.
    Failure(anyhow::Error),
}

/// Result alias used by command handlers.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    /// Prefix the message with the input it concerns (a file or reference).
    pub(crate) fn located(self, location: impl Display) -> Self {
        match self {
            Self::Validation(message) => Self::Validation(format!("{location}: {message}")),
            Self::Failure(error) => Self::Failure(error.context(location.to_string())),
        }
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.display_message())
    }
}

impl std::error::Error for CliError {}

impl From<IconError> for CliError {
    fn from(err: IconError) -> Self {
        match err {
            IconError::MalformedName { value } => {
                Self::validation(format!("`{value}` is not a `set:name` icon reference"))
            }
            IconError::UnknownSet { set } => Self::validation(format!("unknown icon set `{set}`")),
            IconError::UnknownIcon { set, name } => {
                Self::validation(format!("icon set `{set}` has no icon `{name}`"))
            }
            IconError::DuplicateSet { .. } | IconError::RegistryPoisoned => Self::failure(err),
        }
    }
}

impl From<ThemeError> for CliError {
    fn from(err: ThemeError) -> Self {
        match err {
            ThemeError::Read { .. } => Self::failure(err),
            ThemeError::Parse { source } => {
                Self::validation(format!("malformed overrides: {source}"))
            }
            ThemeError::InvalidVariable { name } => {
                Self::validation(format!("`{name}` is not a widget custom property"))
            }
            ThemeError::InvalidValue { name, value } => {
                Self::validation(format!("`{name}` has invalid value `{value}`"))
            }
            ThemeError::UnknownMode { value } => {
                Self::validation(format!("unknown theme mode `{value}`"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn exit_codes_distinguish_kinds() {
        let validation = CliError::validation("bad flag");
        assert_eq!(validation.exit_code(), 2);
        assert_eq!(validation.to_string(), "bad flag");

        let failure = CliError::failure(anyhow!("inner").context("outer"));
        assert_eq!(failure.exit_code(), 3);
        assert_eq!(failure.display_message(), "outer: inner");
    }

    #[test]
    fn location_prefixes_both_kinds() {
        let validation = CliError::validation("bad value").located("theme.json");
        assert_eq!(validation.display_message(), "theme.json: bad value");

        let failure = CliError::failure(anyhow!("denied")).located("theme.json");
        assert_eq!(failure.display_message(), "theme.json: denied");
    }

    #[test]
    fn icon_lookup_errors_are_input_errors() {
        let err = CliError::from(IconError::UnknownIcon {
            set: "icons".to_string(),
            name: "nope".to_string(),
        });
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.display_message(), "icon set `icons` has no icon `nope`");
        assert_eq!(CliError::from(IconError::RegistryPoisoned).exit_code(), 3);
    }

    #[test]
    fn theme_read_errors_are_failures() {
        let read = ThemeError::Read {
            path: "absent.json".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(CliError::from(read).exit_code(), 3);

        let invalid = CliError::from(ThemeError::InvalidVariable {
            name: "color".to_string(),
        });
        assert_eq!(invalid.exit_code(), 2);
        assert!(invalid.display_message().contains("`color`"));
    }
}
