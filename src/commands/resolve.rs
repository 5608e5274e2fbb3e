//! Show which catalog file a command would use

use anyhow::Result;
use serde::Serialize;

use crate::commands::CommandContext;
use crate::core::render::Renderable;

/// Resolved catalog location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationReport {
    pub path: String,
    pub exists: bool,
    /// Whether a missing file is an error when reading
    pub explicit: bool,
}

impl Renderable for LocationReport {
    fn render_markdown(&self, output: &mut String) {
        output.push_str(&format!("- `{}`", self.path));
        if !self.exists {
            output.push_str(" (missing)");
        }
        output.push('\n');
    }
}

pub fn location_report(ctx: &CommandContext) -> LocationReport {
    let path = ctx.catalog_path();
    LocationReport {
        path: path.to_string_lossy().to_string(),
        exists: path.is_file(),
        explicit: ctx.location.is_explicit(),
    }
}

pub fn run_resolve(ctx: &CommandContext) -> Result<()> {
    ctx.print(&[location_report(ctx)])
}
