//! Register or update a catalog entry

use anyhow::{Context, Result};
use std::fs;
use tracing::info;

use crate::catalog::codec::is_valid_property_name;
use crate::catalog::location::CatalogLocation;
use crate::catalog::model::{ArchetypeEntry, UpsertOutcome};
use crate::catalog::store::{update_catalog, upsert_file};
use crate::commands::CommandContext;

/// Parse a `KEY=VALUE` property argument
pub fn parse_property(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid property '{}': expected KEY=VALUE", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid property '{}': empty key", s));
    }
    if !is_valid_property_name(key) {
        return Err(format!(
            "invalid property '{}': '{}' is not a plain XML element name",
            s, key
        ));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Upsert `entry` into the configured catalog and print the stored entry.
///
/// Writing never requires the catalog to exist beforehand, even for an
/// explicitly configured location. The stored entry always equals `entry`
/// since every non-key field is replaced.
pub fn run_add(ctx: &CommandContext, entry: ArchetypeEntry) -> Result<()> {
    let path = ctx.catalog_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let coordinate = entry.coordinate();
    let outcome = match &ctx.location {
        CatalogLocation::LocalRepository(dir) => update_catalog(dir, entry.clone()),
        _ => upsert_file(&path, entry.clone()),
    }
    .with_context(|| format!("Failed to update catalog {}", path.display()))?;

    match outcome {
        UpsertOutcome::Inserted(_) => {
            info!(archetype = %coordinate, path = %path.display(), "Archetype added")
        }
        UpsertOutcome::Updated(_) => {
            info!(archetype = %coordinate, path = %path.display(), "Archetype updated")
        }
    }

    ctx.print(&[entry])
}
