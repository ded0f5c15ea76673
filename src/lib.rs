//! # qr-archive
//!
//! Encode short strings (URLs, text, email addresses, phone numbers, Wi-Fi
//! credentials) as QR codes and archive each one as a PNG plus a one-page PDF
//! summary sheet.
//!
//! ## Pipeline Overview
//!
//! ```text
//! --content "paul@example.com"
//!  │
//!  ├─ 1. Classify   url / email / phone / wifi / text (or --type override)
//!  ├─ 2. Normalise  mailto:paul@example.com
//!  ├─ 3. Encode     QR, error correction H, RGB raster
//!  ├─ 4. Name       archive/paulexamplecom_2025-03-07[-N].{png,pdf}
//!  └─ 5. Write      PNG + letter-size PDF (title, type, QR, caption, date)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use qr_archive::{generate, GenerateConfig, Request};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let request = Request::new("https://example.com", Some("My Website".into()), None)?;
//!     let config = GenerateConfig::builder().archive_dir("archive").build()?;
//!     let output = generate(&request, &config)?;
//!     println!("{output}");
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `genqr` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod pipeline;
pub mod request;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{GenerateConfig, GenerateConfigBuilder};
pub use error::{ErrorKind, QrArchiveError};
pub use generate::generate;
pub use output::GenerationOutput;
pub use pipeline::classify::{classify, ContentType};
pub use pipeline::naming::{resolve_output_paths, slug, OutputPaths};
pub use pipeline::normalize::normalize;
pub use request::Request;
