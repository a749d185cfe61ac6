//! Report formatting and delivery
//!
//! - `descriptions` - top-level directory descriptions
//! - `markdown` - the Markdown document
//! - `json` - JSON rendering of the same report
//!
//! The document is always formatted in full before anything is written, so a
//! failed walk never leaves a truncated output file.

mod descriptions;
mod json;
mod markdown;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, StructureError};
use crate::report::StructureReport;

pub use descriptions::{
    DirectoryDescription, FALLBACK_DESCRIPTION, describe_dir, format_descriptions,
    generate_descriptions,
};
pub use json::render_json;
pub use markdown::{DESCRIPTIONS_HEADING, render_markdown};

/// Document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl OutputFormat {
    pub fn render(self, report: &StructureReport) -> Result<String> {
        match self {
            OutputFormat::Markdown => Ok(render_markdown(report)),
            OutputFormat::Json => render_json(report),
        }
    }
}

/// Where the finished document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Destination::Stdout, Destination::File)
    }
}

/// Write the document to its destination.
///
/// Files are overwritten and a confirmation line is printed to `out`.
/// On stdout the document is followed by a newline.
pub fn write_report<W: Write>(document: &str, destination: &Destination, out: &mut W) -> Result<()> {
    match destination {
        Destination::Stdout => writeln!(out, "{}", document).map_err(StructureError::Stdout),
        Destination::File(path) => {
            write_file(path, document)?;
            info!(path = %path.display(), bytes = document.len(), "report written");
            writeln!(out, "Structure saved to: {}", path.display()).map_err(|e| {
                StructureError::Write {
                    path: path.clone(),
                    source: e,
                }
            })
        }
    }
}

fn write_file(path: &Path, document: &str) -> Result<()> {
    fs::write(path, document).map_err(|e| StructureError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write the document to the process's stdout or to a file.
pub fn emit(document: &str, destination: &Destination) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(document, destination, &mut handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;

    #[test]
    fn test_stdout_destination_appends_newline() {
        let mut buf = Vec::new();
        write_report("# Doc\n", &Destination::Stdout, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "# Doc\n\n");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_stdout_write_failure_is_not_a_path_error() {
        let err = write_report("# Doc", &Destination::Stdout, &mut BrokenPipe).unwrap_err();
        assert!(matches!(err, StructureError::Stdout(_)), "got: {:?}", err);
        assert!(err.to_string().contains("stdout"));
    }

    #[test]
    fn test_file_destination_overwrites_and_confirms() {
        let dir = TestDir::new();
        let target = dir.add_file("STRUCTURE.md", "old content that is longer");

        let mut buf = Vec::new();
        write_report("new", &Destination::File(target.clone()), &mut buf).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
        let printed = String::from_utf8(buf).unwrap();
        assert!(printed.starts_with("Structure saved to: "), "got: {}", printed);
        assert!(printed.contains("STRUCTURE.md"));
    }

    #[test]
    fn test_file_destination_in_missing_dir_fails() {
        let dir = TestDir::new();
        let target = dir.path().join("no/such/dir/out.md");
        let mut buf = Vec::new();
        let err = write_report("x", &Destination::File(target), &mut buf).unwrap_err();
        assert!(matches!(err, StructureError::Write { .. }));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_destination_from_option() {
        assert_eq!(Destination::from_option(None), Destination::Stdout);
        assert_eq!(
            Destination::from_option(Some(PathBuf::from("a.md"))),
            Destination::File(PathBuf::from("a.md"))
        );
    }
}
