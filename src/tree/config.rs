//! Configuration for structure rendering

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Default recursion depth below the root.
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Directory names that are always excluded (matched by containment).
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    ".git",
    ".vscode",
    ".idea",
    "__pycache__",
    "node_modules",
    "build",
    "dist",
    "bin",
    "obj",
    ".pytest_cache",
];

/// File patterns that are always excluded. A leading `*` marks a suffix pattern.
pub const DEFAULT_EXCLUDE_FILES: &[&str] = &[
    ".DS_Store",
    "Thumbs.db",
    "*.pyc",
    "*.pyo",
    "*.so",
    "*.dll",
    "*.exe",
    "*.mod",
    "*.o",
    "*.a",
];

/// Configuration for one rendering run.
///
/// Built once from the defaults plus caller overrides and never mutated while
/// a walk is in progress. Nothing here touches the filesystem; a missing root
/// only surfaces once rendering starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureConfig {
    pub root: PathBuf,
    pub exclude_dirs: BTreeSet<String>,
    pub exclude_files: BTreeSet<String>,
    pub max_depth: usize,
}

impl StructureConfig {
    /// Create a configuration for `root` with the default exclusions.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude_dirs: DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect(),
            exclude_files: DEFAULT_EXCLUDE_FILES.iter().map(|s| s.to_string()).collect(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Add directory patterns on top of the defaults.
    pub fn with_excluded_dirs<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_dirs.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Add file patterns on top of the defaults.
    pub fn with_excluded_files<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_files.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
