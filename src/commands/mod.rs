//! Command handlers
//!
//! Each handler resolves the catalog for the configured location, performs
//! one catalog operation and prints the result through the renderer.

pub mod add;
pub mod list;
pub mod resolve;

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::catalog::location::CatalogLocation;
use crate::core::render::{RenderConfig, Renderable, Renderer};

/// Everything a command needs besides its own arguments
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub location: CatalogLocation,
    pub home: PathBuf,
    pub render: RenderConfig,
}

impl CommandContext {
    /// Catalog file this invocation operates on
    pub fn catalog_path(&self) -> PathBuf {
        self.location.resolve(&self.home)
    }

    /// Print items to stdout in the configured format
    pub fn print<T: Renderable>(&self, items: &[T]) -> Result<()> {
        Renderer::with_config(self.render)
            .render_to(items, std::io::stdout().lock())
            .context("Failed to write output")
    }
}
