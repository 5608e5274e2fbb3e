//! XML codec for archetype-catalog.xml
//!
//! The document layout is:
//!
//! ```xml
//! <archetype-catalog>
//!   <archetypes>
//!     <archetype>
//!       <groupId>..</groupId>
//!       <artifactId>..</artifactId>
//!       <version>..</version>
//!       <repository>..</repository>
//!       <description>..</description>
//!       <properties><name>value</name></properties>
//!       <goals><goal>..</goal></goals>
//!     </archetype>
//!   </archetypes>
//! </archetype-catalog>
//! ```
//!
//! The wire structs below mirror that layout and convert to and from the
//! model types, which stay free of XML nesting concerns.

use quick_xml::events::Event;
use quick_xml::{DeError, Reader};
use serde::{Deserialize, Serialize};

use crate::catalog::model::{ArchetypeEntry, Catalog, Properties};

/// Declaration prepended to every written document
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Name of the document element
pub const ROOT_ELEMENT: &str = "archetype-catalog";

const INDENT_SIZE: usize = 2;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename = "archetype-catalog")]
struct CatalogDocument {
    #[serde(default)]
    archetypes: ArchetypeList,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ArchetypeList {
    #[serde(default)]
    archetype: Vec<ArchetypeElement>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArchetypeElement {
    group_id: String,
    artifact_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Properties::is_empty")]
    properties: Properties,
    #[serde(default, skip_serializing_if = "GoalList::is_empty")]
    goals: GoalList,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct GoalList {
    #[serde(default)]
    goal: Vec<String>,
}

impl GoalList {
    fn is_empty(&self) -> bool {
        self.goal.is_empty()
    }
}

impl From<ArchetypeElement> for ArchetypeEntry {
    fn from(element: ArchetypeElement) -> Self {
        ArchetypeEntry {
            group_id: element.group_id,
            artifact_id: element.artifact_id,
            version: element.version,
            repository: element.repository,
            description: element.description,
            properties: element.properties,
            goals: element.goals.goal,
        }
    }
}

impl From<&ArchetypeEntry> for ArchetypeElement {
    fn from(entry: &ArchetypeEntry) -> Self {
        ArchetypeElement {
            group_id: entry.group_id.clone(),
            artifact_id: entry.artifact_id.clone(),
            version: entry.version.clone(),
            repository: entry.repository.clone(),
            description: entry.description.clone(),
            properties: entry.properties.clone(),
            goals: GoalList {
                goal: entry.goals.clone(),
            },
        }
    }
}

/// Whether `name` can be written as a `<properties>` child element and read
/// back unchanged.
///
/// Plain XML names only: no namespace prefix and none of the `@`/`$` forms the
/// serde mapping reserves for attributes and text.
pub fn is_valid_property_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Reject documents whose root element is not `<archetype-catalog>`. The
/// serde layer matches children by name only and would read any other
/// document as an empty catalog.
fn check_root_element(xml: &str) -> Result<(), DeError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let name = e.local_name();
                return if name.as_ref() == ROOT_ELEMENT.as_bytes() {
                    Ok(())
                } else {
                    Err(DeError::Custom(format!(
                        "expected <{}> root element, found <{}>",
                        ROOT_ELEMENT,
                        String::from_utf8_lossy(name.as_ref())
                    )))
                };
            }
            // no root element at all; the deserializer reports it
            Ok(Event::Eof) => return Ok(()),
            Ok(_) => continue,
            Err(e) => return Err(DeError::Custom(e.to_string())),
        }
    }
}

/// Parse a catalog document
pub fn from_xml(xml: &str) -> Result<Catalog, DeError> {
    check_root_element(xml)?;
    let document: CatalogDocument = quick_xml::de::from_str(xml)?;
    Ok(Catalog {
        archetypes: document
            .archetypes
            .archetype
            .into_iter()
            .map(ArchetypeEntry::from)
            .collect(),
    })
}

/// Parse a catalog document from raw bytes, rejecting non UTF-8 content as
/// malformed
pub fn from_xml_bytes(bytes: &[u8]) -> Result<Catalog, DeError> {
    let xml = std::str::from_utf8(bytes)
        .map_err(|e| DeError::Custom(format!("catalog is not valid UTF-8: {}", e)))?;
    // A leading BOM is legal in XML but not something the deserializer skips
    from_xml(xml.trim_start_matches('\u{feff}'))
}

/// Render a catalog as an indented document, declaration included
pub fn to_xml(catalog: &Catalog) -> std::io::Result<String> {
    let document = CatalogDocument {
        archetypes: ArchetypeList {
            archetype: catalog.iter().map(ArchetypeElement::from).collect(),
        },
    };

    let mut body = String::new();
    let mut serializer = quick_xml::se::Serializer::new(&mut body);
    serializer.indent(' ', INDENT_SIZE);
    document
        .serialize(serializer)
        .map_err(std::io::Error::other)?;

    Ok(format!("{}\n{}\n", XML_DECLARATION, body))
}
