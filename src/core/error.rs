//! Catalog error taxonomy
//!
//! Every catalog operation fails with a [`CatalogError`]. The variant tells the
//! caller what went wrong; the wrapped source tells it why.

use std::path::PathBuf;
use thiserror::Error;

/// Unified failure type for catalog lookup, parsing and persistence
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An explicitly configured catalog location does not exist
    #[error("the specified archetype catalog does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but is not a valid archetype catalog document
    #[error("error parsing archetype catalog {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    /// Any other read or write failure
    #[error("error accessing archetype catalog {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A property key that cannot be stored as an XML element name
    #[error("invalid archetype property name '{key}'")]
    InvalidPropertyName { key: String },

    /// The configuration properties carry no catalog location
    #[error("missing catalog property '{key}'")]
    MissingProperty { key: String },

    /// The user's home directory could not be determined
    #[error("unable to determine the user home directory")]
    HomeDirUnavailable,
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: quick_xml::DeError) -> Self {
        CatalogError::Parse {
            path: path.into(),
            source,
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_not_found_message() {
        let err = CatalogError::NotFound {
            path: PathBuf::from("/tmp/missing.xml"),
        };
        assert_eq!(
            err.to_string(),
            "the specified archetype catalog does not exist: /tmp/missing.xml"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_keeps_source() {
        let err = CatalogError::io("/tmp/c.xml", std::io::Error::other("disk full"));
        assert_eq!(err.to_string(), "error accessing archetype catalog /tmp/c.xml");
        assert_eq!(err.source().unwrap().to_string(), "disk full");
    }

    #[test]
    fn test_invalid_property_name_message() {
        let err = CatalogError::InvalidPropertyName {
            key: "a b".to_string(),
        };
        assert_eq!(err.to_string(), "invalid archetype property name 'a b'");
    }

    #[test]
    fn test_missing_property_message() {
        let err = CatalogError::MissingProperty {
            key: "file".to_string(),
        };
        assert_eq!(err.to_string(), "missing catalog property 'file'");
    }
}
