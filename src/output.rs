//! Result of a successful run.

use crate::pipeline::classify::ContentType;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// What was generated and where it went.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationOutput {
    pub label: String,
    pub content_type: ContentType,
    /// The exact payload inside the QR code.
    pub encoded_content: String,
    pub png_path: PathBuf,
    pub pdf_path: PathBuf,
}

const RULE_WIDTH: usize = 50;

/// The confirmation block printed after a run.
impl fmt::Display for GenerationOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "QR CODE GENERATED!")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "  Label:   {}", self.label)?;
        writeln!(f, "  Type:    {}", self.content_type)?;
        writeln!(f, "  Content: {}", self.encoded_content)?;
        writeln!(f, "  PNG:     {}", self.png_path.display())?;
        writeln!(f, "  PDF:     {}", self.pdf_path.display())?;
        writeln!(f, "{rule}")
    }
}
