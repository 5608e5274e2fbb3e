//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::location::{user_home, CatalogLocation};
use crate::catalog::model::{ArchetypeEntry, Properties};
use crate::commands::{add::parse_property, CommandContext};
use crate::core::render::{OutputFormat, RenderConfig};

/// archetype-catalog - read and update local archetype catalogs.
#[derive(Parser, Debug)]
#[command(name = "archetype-catalog")]
#[command(
    author,
    version,
    about,
    long_about = r#"archetype-catalog manages archetype-catalog.xml files: ordered lists of
project templates keyed by groupId and artifactId.

Catalog location (first match wins):
- --catalog FILE|DIR: an explicit catalog; it must exist when read
- --local-repo DIR: DIR/archetype-catalog.xml
- default: ~/.m2/archetype-catalog.xml

A missing catalog reads as empty unless it was named with --catalog.

Examples:
    archetype-catalog list
    archetype-catalog --catalog '${user.home}/catalogs' list --format md
    archetype-catalog add --group-id org.example --artifact-id quickstart --version 1.0
    archetype-catalog --local-repo ~/.m2/repository get org.example quickstart
"#
)]
pub struct Cli {
    /// Explicit catalog file or directory.
    #[arg(
        long,
        global = true,
        value_name = "FILE|DIR",
        conflicts_with = "local_repo",
        long_help = "Explicit catalog location. The literal ${user.home} is replaced with the\n\
home directory, and a directory gets archetype-catalog.xml appended.\n\n\
Reading a missing explicit catalog is an error."
    )]
    pub catalog: Option<String>,

    /// Local repository whose root holds archetype-catalog.xml.
    #[arg(long, global = true, value_name = "DIR")]
    pub local_repo: Option<PathBuf>,

    /// Output format (jsonl/json/md).
    #[arg(
        long,
        global = true,
        default_value = "jsonl",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)"
    )]
    pub format: OutputFormat,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable debug diagnostics on stderr, such as the catalog path in use.\n\
RUST_LOG overrides this flag."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog entries in catalog order.
    List {
        /// Only include entries with this groupId.
        #[arg(long, value_name = "GROUP_ID")]
        group: Option<String>,
    },

    /// Show a single entry.
    #[command(long_about = "Show the entry keyed by GROUP_ID and ARTIFACT_ID.\n\n\
Exits with an error when the catalog has no such entry.")]
    Get {
        #[arg(value_name = "GROUP_ID")]
        group_id: String,

        #[arg(value_name = "ARTIFACT_ID")]
        artifact_id: String,
    },

    /// Add an entry, or update the entry with the same groupId and artifactId.
    #[command(
        long_about = "Upsert an archetype into the catalog and write the catalog back.\n\n\
An existing entry keeps its position; version, repository, description,\n\
properties and goals are all replaced. A new entry is appended.\n\n\
Examples:\n\
  archetype-catalog add --group-id org.a --artifact-id x --version 1.0\n\
  archetype-catalog add --group-id org.a --artifact-id x --version 2.0 \\\n\
      --property package=org.a.x --goal install\n"
    )]
    Add {
        #[arg(long, value_name = "GROUP_ID")]
        group_id: String,

        #[arg(long, value_name = "ARTIFACT_ID")]
        artifact_id: String,

        #[arg(long, value_name = "VERSION")]
        version: String,

        /// Repository URL the archetype is fetched from.
        #[arg(long, value_name = "URL")]
        repository: Option<String>,

        #[arg(long, value_name = "TEXT")]
        description: Option<String>,

        /// Default template property (repeatable).
        #[arg(long = "property", value_name = "KEY=VALUE", value_parser = parse_property)]
        properties: Vec<(String, String)>,

        /// Post-generation goal (repeatable, kept in order).
        #[arg(long = "goal", value_name = "GOAL")]
        goals: Vec<String>,
    },

    /// Print the catalog file that would be used.
    Resolve,
}

impl Cli {
    /// Catalog location selected by the global flags
    pub fn location(&self) -> CatalogLocation {
        match (&self.catalog, &self.local_repo) {
            (Some(catalog), _) => CatalogLocation::Configured(catalog.clone()),
            (None, Some(dir)) => CatalogLocation::LocalRepository(dir.clone()),
            (None, None) => CatalogLocation::Default,
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let ctx = CommandContext {
        location: cli.location(),
        home: user_home().context("Failed to resolve catalog location")?,
        render: RenderConfig::with_pretty(cli.format, cli.pretty),
    };

    match cli.command {
        Commands::List { group } => crate::commands::list::run_list(&ctx, group.as_deref()),

        Commands::Get {
            group_id,
            artifact_id,
        } => crate::commands::list::run_get(&ctx, &group_id, &artifact_id),

        Commands::Add {
            group_id,
            artifact_id,
            version,
            repository,
            description,
            properties,
            goals,
        } => {
            let entry = ArchetypeEntry {
                repository,
                description,
                properties: properties.into_iter().collect::<Properties>(),
                goals,
                ..ArchetypeEntry::new(&group_id, &artifact_id, &version)
            };
            crate::commands::add::run_add(&ctx, entry)
        }

        Commands::Resolve => crate::commands::resolve::run_resolve(&ctx),
    }
}
