//! Archetype catalog model
//!
//! A catalog is an ordered list of archetype entries. Entries are keyed by
//! their (groupId, artifactId) coordinate and that key is unique within a
//! catalog once it has gone through [`Catalog::upsert`].

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered string to string mapping, used for archetype default properties and
/// for catalog lookup configuration
pub type Properties = IndexMap<String, String>;

/// A single project template registered in a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeEntry {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,

    /// Remote repository the archetype is fetched from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Default template parameters
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: Properties,

    /// Build goals to run after generation
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub goals: Vec<String>,
}

impl ArchetypeEntry {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Self {
        Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub fn with_repository(mut self, repository: &str) -> Self {
        self.repository = Some(repository.to_string());
        self
    }

    #[cfg(test)]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    #[cfg(test)]
    pub fn with_property(mut self, key: &str, value: &str) -> Self {
        self.properties.insert(key.to_string(), value.to_string());
        self
    }

    #[cfg(test)]
    pub fn with_goal(mut self, goal: &str) -> Self {
        self.goals.push(goal.to_string());
        self
    }

    /// The (groupId, artifactId) key
    pub fn key(&self) -> (&str, &str) {
        (&self.group_id, &self.artifact_id)
    }

    /// `groupId:artifactId:version` coordinate, for diagnostics
    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    /// Overwrite every mutable field with the values of `other`. The key is
    /// left untouched.
    fn update_from(&mut self, other: ArchetypeEntry) {
        self.version = other.version;
        self.repository = other.repository;
        self.description = other.description;
        self.properties = other.properties;
        self.goals = other.goals;
    }
}

/// What [`Catalog::upsert`] did with the incoming entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// Appended at the given position
    Inserted(usize),
    /// Existing entry at the given position was overwritten in place
    Updated(usize),
}

impl UpsertOutcome {
    #[cfg(test)]
    pub fn index(self) -> usize {
        match self {
            UpsertOutcome::Inserted(index) | UpsertOutcome::Updated(index) => index,
        }
    }
}

/// Ordered collection of archetype entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub archetypes: Vec<ArchetypeEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArchetypeEntry> {
        self.archetypes.iter()
    }

    /// Position of the entry with the given key
    pub fn position(&self, group_id: &str, artifact_id: &str) -> Option<usize> {
        self.archetypes
            .iter()
            .position(|a| a.key() == (group_id, artifact_id))
    }

    pub fn find(&self, group_id: &str, artifact_id: &str) -> Option<&ArchetypeEntry> {
        self.position(group_id, artifact_id)
            .map(|index| &self.archetypes[index])
    }

    /// Insert `entry`, or overwrite the entry sharing its key.
    ///
    /// An existing entry keeps its position in the catalog; a new one is
    /// appended at the end.
    pub fn upsert(&mut self, entry: ArchetypeEntry) -> UpsertOutcome {
        match self.position(&entry.group_id, &entry.artifact_id) {
            Some(index) => {
                self.archetypes[index].update_from(entry);
                UpsertOutcome::Updated(index)
            }
            None => {
                self.archetypes.push(entry);
                UpsertOutcome::Inserted(self.archetypes.len() - 1)
            }
        }
    }
}
