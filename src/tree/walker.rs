//! TreeRenderer - depth-bounded walk producing the tree diagram

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Result, StructureError};
use crate::icons::{FOLDER_ICON, classify_icon};

use super::config::StructureConfig;
use super::filter::ExclusionFilter;
use super::rendered::RenderedTree;
use super::utils::{CODE_FENCE, ROOT_NAME, child_prefix, connector};

/// An entry waiting on the worklist.
///
/// Lives only until its line has been emitted and its children queued.
#[derive(Debug)]
struct PendingEntry {
    name: String,
    path: PathBuf,
    is_dir: bool,
    is_last: bool,
    prefix: String,
    depth: usize,
}

impl PendingEntry {
    fn line(&self) -> String {
        if self.is_dir {
            format!(
                "{}{}{} {}/",
                self.prefix,
                connector(self.is_last),
                FOLDER_ICON,
                self.name
            )
        } else {
            format!(
                "{}{}{} {}",
                self.prefix,
                connector(self.is_last),
                classify_icon(&self.name),
                self.name
            )
        }
    }
}

/// A listed child before its position among siblings is known.
struct Child {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Renders the directory tree rooted at the configured path.
///
/// The walk is depth-first and uses an explicit stack, so deep trees never
/// grow the native call stack. Siblings are sorted by name with directories
/// and files interleaved.
pub struct TreeRenderer {
    config: StructureConfig,
    filter: ExclusionFilter,
}

impl TreeRenderer {
    pub fn new(config: StructureConfig) -> Self {
        let filter = ExclusionFilter::new(&config);
        Self { config, filter }
    }

    pub fn config(&self) -> &StructureConfig {
        &self.config
    }

    pub fn filter(&self) -> &ExclusionFilter {
        &self.filter
    }

    /// Check whether an entry name is excluded under this configuration.
    pub fn is_excluded(&self, name: &str, is_dir: bool) -> bool {
        self.filter.is_excluded(name, is_dir)
    }

    /// Walk the tree and return its lines, fences included.
    ///
    /// Fails if the root is missing or not a directory, or on any listing
    /// error other than a denied permission. Directories at exactly
    /// `max_depth` are never listed, so errors inside them cannot abort the walk.
    pub fn render(&self) -> Result<RenderedTree> {
        let root = self.config.root();
        check_root(root)?;
        debug!(root = %root.display(), max_depth = self.config.max_depth, "rendering tree");

        let mut lines = vec![CODE_FENCE.to_string(), format!("{}/", ROOT_NAME)];

        let mut stack = self.children_of(root, "", 0, true)?;
        stack.reverse();

        while let Some(entry) = stack.pop() {
            trace!(path = %entry.path.display(), depth = entry.depth, "visit");
            lines.push(entry.line());

            if entry.is_dir {
                let mut children =
                    self.children_of(&entry.path, &entry.prefix, entry.depth, entry.is_last)?;
                children.reverse();
                stack.extend(children);
            }
        }

        lines.push(CODE_FENCE.to_string());
        Ok(RenderedTree::new(lines))
    }

    /// Build worklist entries for the children of a directory at `depth`.
    fn children_of(
        &self,
        path: &Path,
        prefix: &str,
        depth: usize,
        is_last: bool,
    ) -> Result<Vec<PendingEntry>> {
        if depth >= self.config.max_depth {
            return Ok(Vec::new());
        }

        let children = self.list_children(path)?;
        let next_prefix = child_prefix(prefix, is_last, depth);
        let count = children.len();

        Ok(children
            .into_iter()
            .enumerate()
            .map(|(index, child)| PendingEntry {
                name: child.name,
                path: child.path,
                is_dir: child.is_dir,
                is_last: index + 1 == count,
                prefix: next_prefix.clone(),
                depth: depth + 1,
            })
            .collect())
    }

    /// List, filter and sort the immediate children of a directory.
    ///
    /// A denied permission yields an empty listing.
    fn list_children(&self, path: &Path) -> Result<Vec<Child>> {
        let Some(entries) = recover_denied(path, fs::read_dir(path))? else {
            return Ok(Vec::new());
        };

        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StructureError::io(path, e))?;
            let child_path = entry.path();
            let is_dir = child_path.is_dir();
            let name = entry.file_name().to_string_lossy().to_string();

            if self.filter.is_excluded(&name, is_dir) {
                trace!(path = %child_path.display(), "excluded");
                continue;
            }

            children.push(Child {
                name,
                path: child_path,
                is_dir,
            });
        }

        children.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(children)
    }
}

/// Classify the outcome of opening a directory listing.
///
/// A denied permission becomes `None`; every other error propagates.
fn recover_denied<T>(path: &Path, result: io::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            debug!(path = %path.display(), "permission denied, skipping children");
            Ok(None)
        }
        Err(e) => Err(StructureError::io(path, e)),
    }
}

/// Ensure the root exists and is a directory.
fn check_root(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(StructureError::NotADirectory(root.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(StructureError::RootNotFound(root.to_path_buf()))
        }
        Err(e) => Err(StructureError::io(root, e)),
    }
}
