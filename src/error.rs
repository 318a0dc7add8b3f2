// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// A locale tag failed to parse.
    Locale(String),

    /// A Fluent resource failed to parse or could not be added to a bundle.
    Resource(String),

    /// Configuration file I/O or (de)serialization failure.
    Config(String),

    /// A delegating accessor was called on a node whose translator has not
    /// been resolved yet. Carries the node name.
    UnboundNode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Locale(e) => write!(f, "Locale Error: {}", e),
            Error::Resource(e) => write!(f, "Resource Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::UnboundNode(name) => {
                write!(f, "Node '{}' has no bound translator yet", name)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
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

impl From<unic_langid::LanguageIdentifierError> for Error {
    fn from(err: unic_langid::LanguageIdentifierError) -> Self {
        Error::Locale(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_locale_error() {
        let err = Error::Locale("bad tag".to_string());
        assert_eq!(format!("{}", err), "Locale Error: bad tag");
    }

    #[test]
    fn display_formats_unbound_node() {
        let err = Error::UnboundNode("sidebar".to_string());
        assert_eq!(
            format!("{}", err),
            "Node 'sidebar' has no bound translator yet"
        );
    }

    #[test]
    fn from_io_error_produces_config_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Config(message) => assert!(message.contains("boom")),
            _ => panic!("expected Config variant"),
        }
    }

    #[test]
    fn from_langid_error_produces_locale_variant() {
        let parse_err = "not a tag!!".parse::<unic_langid::LanguageIdentifier>();
        let err: Error = parse_err.unwrap_err().into();
        assert!(matches!(err, Error::Locale(_)));
    }
}
