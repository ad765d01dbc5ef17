// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    I18n(I18nError),
}

/// Problems encountered while loading embedded Fluent resources.
///
/// None of these are fatal: the catalogue falls back to built-in English
/// labels, but callers may want to surface them in logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// The `.ftl` file name is not a valid language identifier.
    InvalidLocale(String),

    /// The `.ftl` content failed to parse.
    Parse { locale: String, detail: String },

    /// The resource conflicts with messages already in the bundle.
    Conflict { locale: String, detail: String },
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            I18nError::InvalidLocale(name) => write!(f, "Invalid locale file name: {}", name),
            I18nError::Parse { locale, detail } => {
                write!(f, "Failed to parse {} resource: {}", locale, detail)
            }
            I18nError::Conflict { locale, detail } => {
                write!(f, "Conflicting messages in {} resource: {}", locale, detail)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::I18n(e) => write!(f, "I18n Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<I18nError> for Error {
    fn from(err: I18nError) -> Self {
        Error::I18n(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_error_maps_to_config() {
        let parse_err = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn i18n_error_display_names_locale() {
        let err: Error = I18nError::Parse {
            locale: "fr".to_string(),
            detail: "unexpected token".to_string(),
        }
        .into();
        let rendered = format!("{}", err);
        assert!(rendered.starts_with("I18n Error:"));
        assert!(rendered.contains("fr"));
    }
}
