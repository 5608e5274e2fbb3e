//! Renderer module
//!
//! Renders command results to different output formats: jsonl, json, md

use serde::Serialize;
use std::io::Write;

use crate::catalog::model::ArchetypeEntry;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Anything a command can print
pub trait Renderable: Serialize {
    /// Append a Markdown rendition of this item
    fn render_markdown(&self, output: &mut String);
}

impl Renderable for ArchetypeEntry {
    fn render_markdown(&self, output: &mut String) {
        output.push_str(&format!("### `{}`\n", self.coordinate()));
        if let Some(description) = &self.description {
            output.push_str(&format!("\n{}\n", description));
        }
        if let Some(repository) = &self.repository {
            output.push_str(&format!("\n- repository: {}\n", repository));
        }
        if !self.properties.is_empty() {
            output.push_str("\n**Properties**\n\n");
            for (key, value) in &self.properties {
                output.push_str(&format!("- `{}` = `{}`\n", key, value));
            }
        }
        if !self.goals.is_empty() {
            output.push_str(&format!("\n**Goals**: {}\n", self.goals.join(", ")));
        }
        output.push('\n');
    }
}

/// Renderer for command results
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render items to a string
    pub fn render<T: Renderable>(&self, items: &[T]) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(items),
            OutputFormat::Json => self.render_json(items),
            OutputFormat::Markdown => self.render_markdown(items),
        }
    }

    /// Render to a writer, newline terminated
    pub fn render_to<T: Renderable, W: Write>(&self, items: &[T], mut writer: W) -> std::io::Result<()> {
        let output = self.render(items);
        if output.is_empty() {
            return Ok(());
        }
        writeln!(writer, "{}", output.trim_end_matches('\n'))
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl<T: Renderable>(&self, items: &[T]) -> String {
        items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json<T: Renderable>(&self, items: &[T]) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown<T: Renderable>(&self, items: &[T]) -> String {
        let mut output = String::new();
        for item in items {
            item.render_markdown(&mut output);
        }
        output
    }
}
