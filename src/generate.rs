//! The generation entry point: one request in, two archived artifacts out.
//!
//! Stages run strictly in order and the first failure aborts the run. The
//! encoder runs before anything touches the filesystem, so input and
//! encoding errors never leave files behind; a PDF failure after the PNG was
//! written leaves the PNG in place.

use crate::config::GenerateConfig;
use crate::error::QrArchiveError;
use crate::output::GenerationOutput;
use crate::pipeline::artifact::{self, PdfOptions};
use crate::pipeline::{classify, encode, naming, normalize};
use crate::request::Request;
use std::fs;
use tracing::{debug, info};

/// Generate the PNG and PDF for `request` in `config.archive_dir`.
///
/// # Errors
/// - [`QrArchiveError::EncodingFailed`]: payload too large for any QR version
/// - [`QrArchiveError::ArchiveDirFailed`] / [`QrArchiveError::PngWriteFailed`]:
///   filesystem problems
/// - [`QrArchiveError::RenderFailed`]: PDF assembly or output failure
pub fn generate(
    request: &Request,
    config: &GenerateConfig,
) -> Result<GenerationOutput, QrArchiveError> {
    let today = config.resolve_today();

    // ── Step 1: Resolve type and label ───────────────────────────────────
    let content_type = request
        .explicit_type()
        .unwrap_or_else(|| classify::classify(request.content()));
    let label = request.label();
    debug!(
        "Content type: {} ({})",
        content_type,
        if request.explicit_type().is_some() { "explicit" } else { "detected" }
    );

    // ── Step 2: Normalise ────────────────────────────────────────────────
    let encoded_content = normalize::normalize(request.content(), content_type);
    debug!("Encoded content: {}", encoded_content);

    // ── Step 3: Encode ───────────────────────────────────────────────────
    let image = encode::encode(&encoded_content, config.module_size, config.quiet_zone)?;

    // ── Step 4: Archive directory and output paths ───────────────────────
    fs::create_dir_all(&config.archive_dir).map_err(|source| {
        QrArchiveError::ArchiveDirFailed {
            path: config.archive_dir.clone(),
            source,
        }
    })?;
    let base_name = naming::slug(label, today);
    let paths = naming::resolve_output_paths(&config.archive_dir, &base_name);

    // ── Step 5: Write artifacts ──────────────────────────────────────────
    artifact::write_png(&image, &paths.png)?;
    let opts = PdfOptions {
        created: today,
        qr_size_mm: config.qr_size_mm,
        temp_dir: config.temp_dir.as_deref(),
    };
    artifact::write_pdf(
        &image,
        label,
        &encoded_content,
        content_type,
        &paths.pdf,
        &opts,
    )?;

    info!("Generated {} QR code '{}'", content_type, label);

    Ok(GenerationOutput {
        label: label.to_string(),
        content_type,
        encoded_content,
        png_path: paths.png,
        pdf_path: paths.pdf,
    })
}
