//! Descriptions for the top-level directories of a project

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, StructureError};
use crate::tree::ExclusionFilter;

/// Description given to directories without a conventional name.
pub const FALLBACK_DESCRIPTION: &str = "Project-related directory";

/// A top-level directory and what it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryDescription {
    pub name: String,
    pub description: String,
}

impl DirectoryDescription {
    /// Markdown list item, e.g. `- **src/**: Source code...`.
    pub fn to_markdown(&self) -> String {
        format!("- **{}/**: {}", self.name, self.description)
    }
}

/// Look up the description for a conventional directory name.
pub fn describe_dir(name: &str) -> &'static str {
    match name {
        "src" => "Source code directory, containing all core modules and implementations",
        "test" | "tests" => "Test directory, containing unit tests and performance tests",
        "apps" => "Application examples directory, showing how the library is used in practice",
        "docs" => "Documentation directory (if present)",
        "examples" => "Usage examples directory (if present)",
        "scripts" => "Script tools directory (if present)",
        _ => FALLBACK_DESCRIPTION,
    }
}

/// Describe every non-excluded directory directly under `root`.
///
/// Entries keep the order `read_dir` yields them in; they are not sorted.
/// Any listing failure, permission errors included, is returned.
pub fn generate_descriptions(
    root: &Path,
    filter: &ExclusionFilter,
) -> Result<Vec<DirectoryDescription>> {
    let entries = fs::read_dir(root).map_err(|e| StructureError::io(root, e))?;

    let mut descriptions = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| StructureError::io(root, e))?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if filter.is_excluded(&name, true) {
            continue;
        }
        let description = describe_dir(&name).to_string();
        descriptions.push(DirectoryDescription { name, description });
    }

    Ok(descriptions)
}

/// Render descriptions as Markdown list items joined by newlines.
pub fn format_descriptions(descriptions: &[DirectoryDescription]) -> String {
    descriptions
        .iter()
        .map(DirectoryDescription::to_markdown)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;
    use crate::tree::StructureConfig;

    fn filter() -> ExclusionFilter {
        ExclusionFilter::new(&StructureConfig::default())
    }

    #[test]
    fn test_known_and_fallback_descriptions() {
        assert!(describe_dir("src").starts_with("Source code"));
        assert!(describe_dir("tests").starts_with("Test directory"));
        assert_eq!(describe_dir("test"), describe_dir("tests"));
        assert_eq!(describe_dir("assets"), FALLBACK_DESCRIPTION);
    }

    #[test]
    fn test_generate_skips_files_and_excluded_dirs() {
        let dir = TestDir::new();
        dir.add_file("src/main.py", "");
        dir.add_file("build/out.o", "");
        dir.add_file("README.md", "");
        dir.add_dir("assets");

        let mut names: Vec<String> = generate_descriptions(dir.path(), &filter())
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["assets", "src"]);
    }

    #[test]
    fn test_missing_root_propagates() {
        let dir = TestDir::new();
        let result = generate_descriptions(&dir.path().join("missing"), &filter());
        assert!(matches!(result, Err(StructureError::Io { .. })));
    }

    #[test]
    fn test_format_descriptions() {
        let descriptions = vec![
            DirectoryDescription {
                name: "src".into(),
                description: "code".into(),
            },
            DirectoryDescription {
                name: "docs".into(),
                description: "words".into(),
            },
        ];
        assert_eq!(
            format_descriptions(&descriptions),
            "- **src/**: code\n- **docs/**: words"
        );
        assert_eq!(format_descriptions(&[]), "");
    }
}
