//! Rendered tree output

use serde::Serialize;

/// The lines of a rendered tree, opening and closing fences included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderedTree {
    lines: Vec<String>,
}

impl RenderedTree {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Number of entries below the root.
    pub fn entry_count(&self) -> usize {
        // fence, root, ..., fence
        self.lines.len().saturating_sub(3)
    }

    /// Join the lines into a block where every line ends with a newline.
    pub fn to_block(&self) -> String {
        let mut block = String::new();
        for line in self.lines() {
            block.push_str(line);
            block.push('\n');
        }
        block
    }
}
