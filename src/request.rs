//! The user's request: what to encode, how to title it, and an optional
//! type override.

use crate::error::QrArchiveError;
use crate::pipeline::classify::ContentType;

/// One QR generation request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    content: String,
    label: Option<String>,
    explicit_type: Option<ContentType>,
}

impl Request {
    /// Validate and build a request.
    ///
    /// Fails with [`QrArchiveError::EmptyContent`] if `content` is empty or
    /// whitespace only. An empty `label` counts as absent.
    pub fn new(
        content: impl Into<String>,
        label: Option<String>,
        explicit_type: Option<ContentType>,
    ) -> Result<Self, QrArchiveError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(QrArchiveError::EmptyContent);
        }
        Ok(Self {
            content,
            label: label.filter(|l| !l.is_empty()),
            explicit_type,
        })
    }

    /// The content exactly as supplied.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The label, defaulting to the content as supplied.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.content)
    }

    pub fn explicit_type(&self) -> Option<ContentType> {
        self.explicit_type
    }
}
