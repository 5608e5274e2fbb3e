//! Catalog location resolution
//!
//! A catalog is found in one of three places:
//! - an explicitly configured path (the `file` property), which must exist
//!   when read
//! - `<local repository>/archetype-catalog.xml`
//! - the default `<home>/.m2/archetype-catalog.xml`
//!
//! The last two are best-effort: a missing file reads as an empty catalog.

use directories::BaseDirs;
use std::path::{Path, PathBuf};

use crate::catalog::model::Properties;
use crate::core::error::{CatalogError, CatalogResult};

/// Property naming an explicit catalog location
pub const CATALOG_FILE_PROPERTY: &str = "file";

/// File name of a catalog inside a directory
pub const CATALOG_FILENAME: &str = "archetype-catalog.xml";

/// Placeholder replaced with the user home directory in configured paths
pub const USER_HOME_PLACEHOLDER: &str = "${user.home}";

/// Per-user Maven configuration directory, relative to home
pub const MAVEN_CONFIGURATION_DIR: &str = ".m2";

/// Look up the current user's home directory
pub fn user_home() -> CatalogResult<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(CatalogError::HomeDirUnavailable)
}

/// `<home>/.m2/archetype-catalog.xml`
pub fn default_catalog_path(home: &Path) -> PathBuf {
    home.join(MAVEN_CONFIGURATION_DIR).join(CATALOG_FILENAME)
}

/// Catalog file kept at the root of a local repository
pub fn local_repository_catalog(local_repo: &Path) -> PathBuf {
    local_repo.join(CATALOG_FILENAME)
}

/// Turn a configured location into a catalog file path.
///
/// Every literal `${user.home}` is replaced with `home`. When the result names
/// an existing directory the catalog file name is appended.
pub fn resolve_configured_path(value: &str, home: &Path) -> PathBuf {
    let expanded = value.replace(USER_HOME_PLACEHOLDER, &home.to_string_lossy());
    let path = PathBuf::from(expanded);
    if path.is_dir() {
        path.join(CATALOG_FILENAME)
    } else {
        path
    }
}

/// Resolve the catalog path named by the `file` property
pub fn resolve_catalog_location(properties: &Properties, home: &Path) -> CatalogResult<PathBuf> {
    let value = properties
        .get(CATALOG_FILE_PROPERTY)
        .ok_or_else(|| CatalogError::MissingProperty {
            key: CATALOG_FILE_PROPERTY.to_string(),
        })?;
    Ok(resolve_configured_path(value, home))
}

/// Where a command should read and write its catalog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogLocation {
    /// `<home>/.m2/archetype-catalog.xml`
    #[default]
    Default,
    /// Explicitly configured location, may contain `${user.home}` or name a
    /// directory
    Configured(String),
    /// Root directory of a local repository
    LocalRepository(PathBuf),
}

impl CatalogLocation {
    /// Concrete file path for this location
    pub fn resolve(&self, home: &Path) -> PathBuf {
        match self {
            CatalogLocation::Default => default_catalog_path(home),
            CatalogLocation::Configured(value) => resolve_configured_path(value, home),
            CatalogLocation::LocalRepository(dir) => local_repository_catalog(dir),
        }
    }

    /// Whether a missing catalog is an error when reading
    pub fn is_explicit(&self) -> bool {
        matches!(self, CatalogLocation::Configured(_))
    }

    /// Lookup properties equivalent to this location, if it is configured
    pub fn to_properties(&self) -> Option<Properties> {
        match self {
            CatalogLocation::Configured(value) => {
                let mut properties = Properties::new();
                properties.insert(CATALOG_FILE_PROPERTY.to_string(), value.clone());
                Some(properties)
            }
            _ => None,
        }
    }
}
