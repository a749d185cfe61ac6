//! JSON output formatting

use crate::error::Result;
use crate::report::StructureReport;

/// Serialize the report as pretty-printed JSON.
pub fn render_json(report: &StructureReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::DirectoryDescription;
    use crate::tree::RenderedTree;

    #[test]
    fn test_json_shape() {
        let report = StructureReport {
            title: "T".to_string(),
            tree: RenderedTree::new(vec!["```".into(), "./".into(), "```".into()]),
            descriptions: vec![DirectoryDescription {
                name: "docs".into(),
                description: "Docs".into(),
            }],
        };
        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "T");
        assert_eq!(value["tree"][1], "./");
        assert_eq!(value["descriptions"][0]["name"], "docs");
    }
}
