//! The full structure report: title, tree and directory descriptions

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::output::{DirectoryDescription, generate_descriptions};
use crate::tree::{RenderedTree, TreeRenderer};

/// Title used when none is given.
pub const DEFAULT_TITLE: &str = "Project File Structure";

/// Everything needed to emit the document in any output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureReport {
    pub title: String,
    pub tree: RenderedTree,
    pub descriptions: Vec<DirectoryDescription>,
}

impl StructureReport {
    /// Walk the configured root and collect the report.
    ///
    /// Nothing is written anywhere; a failure leaves no partial output behind.
    pub fn generate(renderer: &TreeRenderer, title: impl Into<String>) -> Result<Self> {
        let tree = renderer.render()?;
        let descriptions = generate_descriptions(renderer.config().root(), renderer.filter())?;
        debug!(
            entries = tree.entry_count(),
            directories = descriptions.len(),
            "report generated"
        );

        Ok(Self {
            title: title.into(),
            tree,
            descriptions,
        })
    }
}

impl TreeRenderer {
    /// Generate the Markdown document for the configured root.
    pub fn generate_report(&self, title: &str) -> Result<String> {
        StructureReport::generate(self, title).map(|report| crate::output::render_markdown(&report))
    }
}
