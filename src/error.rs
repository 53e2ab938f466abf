// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    /// The file was read but is not a decodable image.
    Decode(String),
    Config(String),
    /// A source directory was added twice.
    DuplicateSource(PathBuf),
    /// User-entered slideshow interval was rejected.
    InvalidInterval(String),
}

impl Error {
    /// Returns the i18n message key used when this error reaches the status line.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notification-load-error-io",
            Error::Decode(_) => "notification-load-error-decode",
            Error::Config(_) => "notification-config-error",
            Error::DuplicateSource(_) => "notification-source-already-added",
            Error::InvalidInterval(_) => "notification-interval-invalid",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::DuplicateSource(path) => {
                write!(f, "Source already added: {}", path.display())
            }
            Error::InvalidInterval(e) => write!(f, "Invalid interval: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) => Error::Io(io.to_string()),
            other => Error::Decode(other.to_string()),
        }
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
    fn duplicate_source_mentions_path() {
        let err = Error::DuplicateSource(PathBuf::from("/photos/holiday"));
        assert!(format!("{}", err).contains("/photos/holiday"));
        assert_eq!(err.i18n_key(), "notification-source-already-added");
    }

    #[test]
    fn unsupported_image_maps_to_decode() {
        let err: Error = image_rs::load_from_memory(b"definitely not an image")
            .expect_err("garbage must not decode")
            .into();
        assert!(matches!(err, Error::Decode(_)));
        assert_eq!(err.i18n_key(), "notification-load-error-decode");
    }
}
