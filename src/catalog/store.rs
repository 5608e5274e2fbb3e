//! Catalog store - read, update and write catalog files
//!
//! Each call reads or writes a whole file. Nothing is cached between calls.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;
use tracing::debug;

use crate::catalog::codec;
use crate::catalog::location::{local_repository_catalog, resolve_catalog_location, CatalogLocation};
use crate::catalog::model::{ArchetypeEntry, Catalog, Properties, UpsertOutcome};
use crate::core::error::{CatalogError, CatalogResult};

/// Read the catalog at `path`, returning `None` when the file does not exist
fn read_catalog(path: &Path) -> CatalogResult<Option<Catalog>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(CatalogError::io(path, e)),
    };

    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|e| CatalogError::io(path, e))?;

    let catalog = codec::from_xml_bytes(&bytes).map_err(|e| CatalogError::parse(path, e))?;
    Ok(Some(catalog))
}

/// Load a catalog. A missing file yields an empty catalog.
pub fn load(path: &Path) -> CatalogResult<Catalog> {
    debug!(path = %path.display(), "Reading the catalog");
    match read_catalog(path)? {
        Some(catalog) => Ok(catalog),
        None => {
            debug!(path = %path.display(), "Catalog file does not exist");
            Ok(Catalog::new())
        }
    }
}

/// Load a catalog that the caller named explicitly. A missing file is an error.
pub fn load_existing(path: &Path) -> CatalogResult<Catalog> {
    debug!(path = %path.display(), "Reading the catalog");
    read_catalog(path)?.ok_or_else(|| CatalogError::NotFound {
        path: path.to_path_buf(),
    })
}

/// Write the whole catalog to `path`, replacing any previous content.
///
/// Property keys are checked and the document is rendered before the file is
/// opened, so a rejected catalog leaves an existing file untouched.
pub fn save(catalog: &Catalog, path: &Path) -> CatalogResult<()> {
    if let Some(key) = catalog
        .iter()
        .flat_map(|entry| entry.properties.keys())
        .find(|key| !codec::is_valid_property_name(key))
    {
        return Err(CatalogError::InvalidPropertyName { key: key.clone() });
    }

    let xml = codec::to_xml(catalog).map_err(|e| CatalogError::io(path, e))?;

    let file = File::create(path).map_err(|e| CatalogError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(xml.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| CatalogError::io(path, e))?;

    debug!(path = %path.display(), entries = catalog.len(), "Catalog written");
    Ok(())
}

/// Load the catalog named by the `file` property.
///
/// The location is explicit, so a missing file fails with
/// [`CatalogError::NotFound`].
pub fn catalog_from_properties(properties: &Properties, home: &Path) -> CatalogResult<Catalog> {
    let path = resolve_catalog_location(properties, home)?;
    debug!(path = %path.display(), "Using catalog");
    load_existing(&path)
}

/// Load the catalog for a location, strict only when it was configured
pub fn load_location(location: &CatalogLocation, home: &Path) -> CatalogResult<Catalog> {
    match location.to_properties() {
        Some(properties) => catalog_from_properties(&properties, home),
        None => {
            let path = location.resolve(home);
            debug!(path = %path.display(), "Using catalog");
            load(&path)
        }
    }
}

/// Read, upsert and write back the catalog at `path`
pub fn upsert_file(path: &Path, entry: ArchetypeEntry) -> CatalogResult<UpsertOutcome> {
    let mut catalog = load(path)?;
    let coordinate = entry.coordinate();
    let outcome = catalog.upsert(entry);
    debug!(archetype = %coordinate, ?outcome, "Catalog entry upserted");
    save(&catalog, path)?;
    Ok(outcome)
}

/// Register `entry` in the catalog kept at the root of a local repository
pub fn update_catalog(local_repo: &Path, entry: ArchetypeEntry) -> CatalogResult<UpsertOutcome> {
    let path = local_repository_catalog(local_repo);
    debug!(path = %path.display(), "Using catalog");
    upsert_file(&path, entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_entry() -> ArchetypeEntry {
        ArchetypeEntry::new("org.a", "x", "1.0")
            .with_repository("https://repo.example.org")
            .with_description("sample")
            .with_property("package", "org.a.x")
            .with_goal("install")
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = tempdir().unwrap();
        let catalog = load(&temp.path().join("absent.xml")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_existing_missing_file_is_not_found() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("absent.xml");
        let err = load_existing(&path).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { path: ref p } if *p == path));
    }

    #[test]
    fn test_load_malformed_is_parse_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("archetype-catalog.xml");
        fs::write(&path, "<archetype-catalog><archetypes><archetype>").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let temp = tempdir().unwrap();
        let err = load(temp.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_save_then_load() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("archetype-catalog.xml");
        let mut catalog = Catalog::new();
        catalog.upsert(sample_entry());
        catalog.upsert(ArchetypeEntry::new("org.b", "y", "2.0"));

        save(&catalog, &path).unwrap();
        assert_eq!(load(&path).unwrap(), catalog);
    }

    #[test]
    fn test_save_load_save_is_byte_stable() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("archetype-catalog.xml");
        let mut catalog = Catalog::new();
        catalog.upsert(sample_entry());
        save(&catalog, &path).unwrap();
        let first = fs::read_to_string(&path).unwrap();

        save(&load(&path).unwrap(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), first);
    }

    #[test]
    fn test_save_truncates_previous_content() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("archetype-catalog.xml");
        let mut big = Catalog::new();
        for i in 0..10 {
            big.upsert(ArchetypeEntry::new("g", &format!("a{}", i), "1"));
        }
        save(&big, &path).unwrap();

        save(&Catalog::new(), &path).unwrap();
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_save_into_missing_directory_is_io_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("no-such-dir").join("archetype-catalog.xml");
        let err = save(&Catalog::new(), &path).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_save_rejects_unwritable_property_name() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("archetype-catalog.xml");
        let mut catalog = Catalog::new();
        catalog.upsert(sample_entry());
        save(&catalog, &path).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        for key in ["a b", "1x", "x:y", "$value", "@attr"] {
            let mut bad = catalog.clone();
            bad.upsert(ArchetypeEntry::new("g", "a", "1").with_property(key, "v"));

            let err = save(&bad, &path).unwrap_err();
            assert!(
                matches!(err, CatalogError::InvalidPropertyName { key: ref k } if k == key),
                "{}",
                key
            );
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_upsert_file_refuses_foreign_xml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("pom.xml");
        let pom = "<project>\n  <modelVersion>4.0.0</modelVersion>\n  <artifactId>app</artifactId>\n</project>\n";
        fs::write(&path, pom).unwrap();

        assert!(matches!(load(&path).unwrap_err(), CatalogError::Parse { .. }));
        let err = upsert_file(&path, ArchetypeEntry::new("org.a", "x", "1.0")).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), pom);
    }

    #[test]
    fn test_update_catalog_creates_and_updates() {
        let temp = tempdir().unwrap();

        let outcome = update_catalog(temp.path(), ArchetypeEntry::new("org.a", "x", "1.0")).unwrap();
        assert_eq!(outcome, UpsertOutcome::Inserted(0));

        update_catalog(temp.path(), ArchetypeEntry::new("org.b", "y", "1.0")).unwrap();
        let outcome = update_catalog(
            temp.path(),
            ArchetypeEntry::new("org.a", "x", "2.0").with_description("d"),
        )
        .unwrap();
        assert_eq!(outcome, UpsertOutcome::Updated(0));

        let catalog = load(&temp.path().join("archetype-catalog.xml")).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.archetypes[0],
            ArchetypeEntry::new("org.a", "x", "2.0").with_description("d")
        );
    }

    #[test]
    fn test_update_catalog_keeps_malformed_file_untouched() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("archetype-catalog.xml");
        fs::write(&path, "garbage <").unwrap();

        let err = update_catalog(temp.path(), sample_entry()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "garbage <");
    }

    #[test]
    fn test_catalog_from_properties_reads_directory() {
        let home = tempdir().unwrap();
        let dir = home.path().join("catalogs");
        fs::create_dir(&dir).unwrap();
        let mut catalog = Catalog::new();
        catalog.upsert(sample_entry());
        save(&catalog, &dir.join("archetype-catalog.xml")).unwrap();

        let mut properties = Properties::new();
        properties.insert("file".to_string(), "${user.home}/catalogs".to_string());

        assert_eq!(catalog_from_properties(&properties, home.path()).unwrap(), catalog);
    }

    #[test]
    fn test_catalog_from_properties_missing_is_not_found() {
        let home = tempdir().unwrap();
        let mut properties = Properties::new();
        properties.insert("file".to_string(), "${user.home}/nope.xml".to_string());

        let err = catalog_from_properties(&properties, home.path()).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[test]
    fn test_load_location_default_is_lenient() {
        let home = tempdir().unwrap();
        let catalog = load_location(&CatalogLocation::Default, home.path()).unwrap();
        assert!(catalog.is_empty());
    }
}
