use serde::{Deserialize, Serialize};

/// One reported issue. Missing attributes deserialize to their zero value,
/// matching what lenient checkstyle producers emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    #[serde(rename = "@line", default)]
    pub line: u32,

    #[serde(rename = "@column", default)]
    pub column: u32,

    /// Free-text classification, e.g. "warning" or "error"
    #[serde(rename = "@severity", default)]
    pub severity: String,

    #[serde(rename = "@message", default)]
    pub message: String,

    /// Rule or snippet that produced the violation
    #[serde(rename = "@source", default)]
    pub source: String,
}

/// Violations attributed to one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileGroup {
    /// File path; absolute or relative on input, relative to the configured
    /// base after merging
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "error", default)]
    pub violations: Vec<Violation>,
}

/// A whole checkstyle report: version attribute plus per-file groups.
///
/// Input documents are parsed once, folded into the accumulating output
/// document, and discarded. The merge keeps at most one group per distinct
/// file path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "checkstyle")]
pub struct Document {
    #[serde(rename = "@version", default)]
    pub version: String,

    #[serde(rename = "file", default)]
    pub files: Vec<FileGroup>,
}

impl Document {
    /// Total violation count across all file groups.
    pub fn violation_count(&self) -> usize {
        self.files.iter().map(|g| g.violations.len()).sum()
    }
}
