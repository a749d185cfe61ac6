//! File type icons
//!
//! Maps file names to the glyph shown in front of each tree entry. Special
//! names without an extension (`Makefile`, `LICENSE`, ...) are matched first,
//! then the extension including its leading dot.

/// Icon used for every directory, whatever its name.
pub const FOLDER_ICON: &str = "📁";

/// Icon used when neither the name nor the extension is known.
pub const DEFAULT_FILE_ICON: &str = "📄";

/// Icon for an exact file name match.
fn icon_for_name(name: &str) -> Option<&'static str> {
    match name {
        "Makefile" => Some("🛠️"),
        "Dockerfile" => Some("🐳"),
        ".gitignore" => Some("👁️"),
        ".dockerignore" => Some("🐳"),
        "LICENSE" => Some("📜"),
        "README" => Some("📖"),
        _ => None,
    }
}

/// Icon for an extension. Matching is case-sensitive: `.PY` is not `.py`.
fn icon_for_extension(ext: &str) -> Option<&'static str> {
    match ext {
        ".f90" | ".f95" | ".f03" | ".f08" => Some("📊"),
        ".py" => Some("🐍"),
        ".js" => Some("📜"),
        ".ts" => Some("📘"),
        ".java" => Some("☕"),
        ".cpp" => Some("⚡"),
        ".c" => Some("🔧"),
        ".h" | ".hpp" | ".txt" => Some("📄"),
        ".md" => Some("📖"),
        ".json" => Some("📋"),
        ".yaml" | ".yml" => Some("⚙️"),
        ".xml" => Some("📦"),
        ".html" => Some("🌐"),
        ".css" => Some("🎨"),
        _ => None,
    }
}

/// Extract the extension of a file name, including the leading dot.
///
/// A dot in first position marks a hidden file rather than an extension, and
/// a trailing dot yields no extension at all.
///
/// # Examples
///
/// ```
/// use projtree::icons::extension;
///
/// assert_eq!(extension("main.py"), Some(".py"));
/// assert_eq!(extension("archive.tar.gz"), Some(".gz"));
/// assert_eq!(extension(".bashrc"), None);
/// assert_eq!(extension("Makefile"), None);
/// ```
pub fn extension(name: &str) -> Option<&str> {
    match name.rfind('.') {
        Some(0) | None => None,
        Some(i) if i + 1 == name.len() => None,
        Some(i) => Some(&name[i..]),
    }
}

/// Return the icon for a file name.
///
/// # Examples
///
/// ```
/// use projtree::icons::classify_icon;
///
/// assert_eq!(classify_icon("main.py"), "🐍");
/// assert_eq!(classify_icon("Dockerfile"), "🐳");
/// assert_eq!(classify_icon("data.bin"), "📄");
/// ```
pub fn classify_icon(file_name: &str) -> &'static str {
    icon_for_name(file_name)
        .or_else(|| extension(file_name).and_then(icon_for_extension))
        .unwrap_or(DEFAULT_FILE_ICON)
}
