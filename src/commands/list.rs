//! Catalog listing and lookup

use anyhow::{bail, Context, Result};

use crate::catalog::model::{ArchetypeEntry, Catalog};
use crate::catalog::store::load_location;
use crate::commands::CommandContext;

fn load(ctx: &CommandContext) -> Result<Catalog> {
    load_location(&ctx.location, &ctx.home)
        .with_context(|| format!("Failed to load catalog {}", ctx.catalog_path().display()))
}

/// Entries in catalog order, optionally restricted to one groupId
pub fn select<'a>(catalog: &'a Catalog, group: Option<&str>) -> Vec<&'a ArchetypeEntry> {
    catalog
        .iter()
        .filter(|entry| group.map_or(true, |g| entry.group_id == g))
        .collect()
}

/// List catalog entries
pub fn run_list(ctx: &CommandContext, group: Option<&str>) -> Result<()> {
    let catalog = load(ctx)?;
    let entries: Vec<ArchetypeEntry> = select(&catalog, group).into_iter().cloned().collect();
    ctx.print(&entries)
}

/// Print a single entry by key
pub fn run_get(ctx: &CommandContext, group_id: &str, artifact_id: &str) -> Result<()> {
    let catalog = load(ctx)?;
    match catalog.find(group_id, artifact_id) {
        Some(entry) => ctx.print(std::slice::from_ref(entry)),
        None => bail!(
            "Archetype {}:{} not found in {}",
            group_id,
            artifact_id,
            ctx.catalog_path().display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all() {
        let mut catalog = Catalog::new();
        catalog.upsert(ArchetypeEntry::new("org.a", "x", "1"));
        catalog.upsert(ArchetypeEntry::new("org.b", "y", "1"));

        assert_eq!(select(&catalog, None).len(), 2);
    }

    #[test]
    fn test_select_by_group_keeps_order() {
        let mut catalog = Catalog::new();
        catalog.upsert(ArchetypeEntry::new("org.a", "x", "1"));
        catalog.upsert(ArchetypeEntry::new("org.b", "y", "1"));
        catalog.upsert(ArchetypeEntry::new("org.a", "z", "1"));

        let ids: Vec<_> = select(&catalog, Some("org.a"))
            .iter()
            .map(|e| e.artifact_id.as_str())
            .collect();
        assert_eq!(ids, vec!["x", "z"]);
        assert!(select(&catalog, Some("org.c")).is_empty());
    }
}
