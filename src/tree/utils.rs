//! Shared helpers for tree rendering

/// Connector for the last entry of a sibling group.
pub const LAST_CONNECTOR: &str = "└── ";
/// Connector for every other entry.
pub const BRANCH_CONNECTOR: &str = "├── ";
/// Fence that opens and closes the tree block.
pub const CODE_FENCE: &str = "```";
/// Display name used for the root, whatever it is called on disk.
pub const ROOT_NAME: &str = ".";

pub fn connector(is_last: bool) -> &'static str {
    if is_last {
        LAST_CONNECTOR
    } else {
        BRANCH_CONNECTOR
    }
}

/// Calculate the prefix handed to the children of an entry.
///
/// `is_last` refers to the entry itself, not to its children. Children of the
/// root start with an empty prefix.
pub fn child_prefix(current_prefix: &str, is_last: bool, depth: usize) -> String {
    if depth == 0 {
        String::new()
    } else if is_last {
        format!("{}    ", current_prefix)
    } else {
        format!("{}│   ", current_prefix)
    }
}
