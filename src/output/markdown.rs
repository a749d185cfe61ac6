//! Markdown output formatting

use crate::report::StructureReport;

use super::descriptions::format_descriptions;

/// Heading of the directory descriptions section.
pub const DESCRIPTIONS_HEADING: &str = "Directory Descriptions";

/// Compose the Markdown document: title, fenced tree, descriptions.
pub fn render_markdown(report: &StructureReport) -> String {
    format!(
        "# {}\n\n{}\n\n## {}\n\n{}\n\n",
        report.title,
        report.tree.to_block(),
        DESCRIPTIONS_HEADING,
        format_descriptions(&report.descriptions)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::DirectoryDescription;
    use crate::tree::RenderedTree;

    fn sample_report() -> StructureReport {
        StructureReport {
            title: "My Project".to_string(),
            tree: RenderedTree::new(vec![
                "```".to_string(),
                "./".to_string(),
                "└── 📁 src/".to_string(),
                "```".to_string(),
            ]),
            descriptions: vec![DirectoryDescription {
                name: "src".to_string(),
                description: "Source".to_string(),
            }],
        }
    }

    #[test]
    fn test_markdown_layout() {
        let markdown = render_markdown(&sample_report());
        assert_eq!(
            markdown,
            "# My Project\n\n```\n./\n└── 📁 src/\n```\n\n\n## Directory Descriptions\n\n- **src/**: Source\n\n"
        );
    }

    #[test]
    fn test_markdown_without_descriptions() {
        let mut report = sample_report();
        report.descriptions.clear();
        let markdown = render_markdown(&report);
        assert!(markdown.ends_with("## Directory Descriptions\n\n\n\n"));
    }
}
