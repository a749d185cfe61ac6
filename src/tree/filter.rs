//! Name-based exclusion rules for tree walking

use std::collections::BTreeSet;

use super::config::StructureConfig;

/// Marker that turns a file pattern into a suffix match.
pub const WILDCARD: char = '*';

/// Exclusion filter over directory and file names.
///
/// Directory patterns match by containment, so `build` also rejects
/// `build-artifacts` and `my_build`. File patterns match by exact name, or by
/// suffix when they start with [`WILDCARD`].
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    dirs: BTreeSet<String>,
    files: BTreeSet<String>,
}

impl ExclusionFilter {
    pub fn new(config: &StructureConfig) -> Self {
        Self {
            dirs: config.exclude_dirs.clone(),
            files: config.exclude_files.clone(),
        }
    }

    /// Check whether an entry with this name should be left out of the tree.
    pub fn is_excluded(&self, name: &str, is_dir: bool) -> bool {
        if is_dir {
            self.dirs.contains(name) || self.dirs.iter().any(|p| name.contains(p.as_str()))
        } else {
            self.files.contains(name)
                || self.files.iter().any(|p| {
                    p.strip_prefix(WILDCARD)
                        .is_some_and(|suffix| name.ends_with(suffix))
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_filter() -> ExclusionFilter {
        ExclusionFilter::new(&StructureConfig::default())
    }

    #[test]
    fn test_dir_exact_match() {
        let filter = default_filter();
        assert!(filter.is_excluded(".git", true));
        assert!(filter.is_excluded("node_modules", true));
        assert!(!filter.is_excluded("src", true));
    }

    #[test]
    fn test_dir_containment_match() {
        let filter = default_filter();
        assert!(filter.is_excluded("build_output_2024", true));
        assert!(filter.is_excluded("my_build", true));
        assert!(filter.is_excluded("build-artifacts", true));
        // "bin" is a default, so anything containing it goes too
        assert!(filter.is_excluded("cabinet", true));
        assert!(!filter.is_excluded("Build", true));
    }

    #[test]
    fn test_file_suffix_pattern() {
        let filter = default_filter();
        assert!(filter.is_excluded("module.pyc", false));
        assert!(filter.is_excluded("libfoo.so", false));
        assert!(filter.is_excluded("main.o", false));
        assert!(!filter.is_excluded("main.c", false));
    }

    #[test]
    fn test_file_exact_match() {
        let filter = default_filter();
        assert!(filter.is_excluded(".DS_Store", false));
        assert!(filter.is_excluded("Thumbs.db", false));
        assert!(!filter.is_excluded("other.db", false));
    }

    #[test]
    fn test_bare_extension_pattern_needs_exact_name() {
        let config = StructureConfig::default().with_excluded_files([".log"]);
        let filter = ExclusionFilter::new(&config);
        assert!(!filter.is_excluded("debug.log", false));
        assert!(filter.is_excluded(".log", false));
    }

    #[test]
    fn test_file_rules_do_not_apply_to_dirs() {
        let filter = default_filter();
        // "*.o" is a file pattern; directory matching only looks at dir patterns
        assert!(!filter.is_excluded("proto", true));
        // and "build" is a dir pattern that does not hit files
        assert!(!filter.is_excluded("build.md", false));
    }

    #[test]
    fn test_repeated_calls_are_consistent() {
        let filter = default_filter();
        for _ in 0..3 {
            assert!(filter.is_excluded("dist", true));
            assert!(!filter.is_excluded("README.md", false));
        }
    }
}
