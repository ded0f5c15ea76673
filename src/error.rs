//! Error types for the qr-archive library.
//!
//! Every failure is fatal to the single run: there are no retries and no
//! partial-success reporting. Variants are grouped by the stage that raises
//! them, and [`QrArchiveError::kind`] collapses them into the four categories
//! callers usually care about (bad input, unencodable payload, filesystem,
//! PDF rendering).
//!
//! A PNG that was written before a later PDF failure is left on disk; there
//! is no rollback.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the qr-archive library.
#[derive(Debug, Error)]
pub enum QrArchiveError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// `--content` was missing, empty, or only whitespace.
    #[error("Content to encode is empty.\nPass the data with --content \"...\".")]
    EmptyContent,

    /// A content type name did not match any known type.
    #[error("Unknown content type '{0}'\nExpected one of: url, text, email, phone, wifi, other.")]
    UnknownContentType(String),

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Encoding errors ───────────────────────────────────────────────────
    /// The QR encoder could not fit the payload into any symbol version.
    #[error("Cannot encode {len} bytes as a QR code: {reason}")]
    EncodingFailed { len: usize, reason: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// The archive directory could not be created.
    #[error("Failed to create archive directory '{path}': {source}")]
    ArchiveDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PNG artifact could not be written.
    #[error("Failed to write PNG '{path}': {source}")]
    PngWriteFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    // ── Render errors ─────────────────────────────────────────────────────
    /// The PDF backend failed while assembling or saving the page.
    #[error("Failed to render PDF '{path}': {detail}")]
    RenderFailed { path: PathBuf, detail: String },
}

/// Coarse failure category of a [`QrArchiveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing user input; nothing was written.
    Input,
    /// The payload cannot be represented as a QR symbol; nothing was written.
    Encoding,
    /// Archive directory or PNG output failure.
    Io,
    /// PDF assembly failure.
    Render,
}

impl QrArchiveError {
    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyContent | Self::UnknownContentType(_) | Self::InvalidConfig(_) => {
                ErrorKind::Input
            }
            Self::EncodingFailed { .. } => ErrorKind::Encoding,
            Self::ArchiveDirFailed { .. } | Self::PngWriteFailed { .. } => ErrorKind::Io,
            Self::RenderFailed { .. } => ErrorKind::Render,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Input => "input error",
            ErrorKind::Encoding => "encoding error",
            ErrorKind::Io => "I/O error",
            ErrorKind::Render => "render error",
        };
        f.write_str(name)
    }
}
