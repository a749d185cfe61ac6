//! projtree - render a project's directory layout as an annotated Markdown tree

pub mod error;
pub mod icons;
pub mod output;
pub mod report;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, StructureError};
pub use icons::classify_icon;
pub use output::{Destination, DirectoryDescription, OutputFormat, emit, generate_descriptions};
pub use report::{DEFAULT_TITLE, StructureReport};
pub use tree::{ExclusionFilter, RenderedTree, StructureConfig, TreeRenderer};
