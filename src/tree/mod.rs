//! Directory tree rendering
//!
//! - `config`: the immutable `StructureConfig` and the default exclusion tables
//! - `filter`: `ExclusionFilter`, the name-based exclusion rules
//! - `walker`: `TreeRenderer`, the depth-bounded walk producing tree lines
//! - `rendered`: `RenderedTree`, the walk's output

mod config;
mod filter;
mod rendered;
mod utils;
mod walker;

pub use config::{DEFAULT_EXCLUDE_DIRS, DEFAULT_EXCLUDE_FILES, DEFAULT_MAX_DEPTH, StructureConfig};
pub use filter::{ExclusionFilter, WILDCARD};
pub use rendered::RenderedTree;
pub use utils::{BRANCH_CONNECTOR, CODE_FENCE, LAST_CONNECTOR, ROOT_NAME};
pub use walker::TreeRenderer;
