//! Artifact output: the PNG and the one-page PDF summary sheet.
//!
//! ## Why a temp file for the PDF image?
//!
//! The PDF backend embeds images through a decoder over a file, not from an
//! in-memory raster. The QR is therefore written to a [`NamedTempFile`],
//! decoded back from its path, and the temp file is removed when it goes out
//! of scope. That scope closes before the output file is even opened, so no
//! failure later in PDF assembly can leave it behind; `Drop` also covers the
//! early-return paths inside the scope.

use crate::error::QrArchiveError;
use crate::pipeline::classify::ContentType;
use crate::pipeline::layout::{Face, ImageBox, SheetLayout, TextRun, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use chrono::NaiveDate;
use image::{ImageFormat, RgbImage};
use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Write the raster as a lossless PNG.
pub fn write_png(image: &RgbImage, path: &Path) -> Result<(), QrArchiveError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| QrArchiveError::PngWriteFailed {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Page details that are not part of the QR itself.
#[derive(Debug, Clone, Copy)]
pub struct PdfOptions<'a> {
    /// Date printed in the footer.
    pub created: NaiveDate,
    /// Side of the printed QR square.
    pub qr_size_mm: f32,
    /// Where the embedding temp file is created; system default when `None`.
    pub temp_dir: Option<&'a Path>,
}

/// Render the one-page summary sheet to `path`.
///
/// Layout, centred top to bottom: bold title (`label`), `Type: <TYPE>`, the QR
/// square, the wrapped `Encoded: <content>` caption, and the italic
/// `Created: <date>` footer. See [`SheetLayout`].
pub fn write_pdf(
    image: &RgbImage,
    label: &str,
    encoded_content: &str,
    content_type: ContentType,
    path: &Path,
    opts: &PdfOptions<'_>,
) -> Result<(), QrArchiveError> {
    let fail = |detail: String| QrArchiveError::RenderFailed {
        path: path.to_path_buf(),
        detail,
    };

    let sheet = SheetLayout::new(
        label,
        content_type.as_str(),
        encoded_content,
        opts.created,
        opts.qr_size_mm,
    );

    let (doc, page, layer) =
        PdfDocument::new(label, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "QR code");
    let layer = doc.get_page(page).get_layer(layer);
    let fonts = Fonts::register(&doc).map_err(|e| fail(format!("font registration: {e}")))?;

    let runs = [&sheet.title, &sheet.badge]
        .into_iter()
        .chain(sheet.caption.iter())
        .chain([&sheet.footer]);
    for run in runs {
        paint_text(&layer, &fonts, run);
    }

    let qr = decode_through_tempfile(image, opts.temp_dir).map_err(fail)?;
    qr.add_to_layer(layer.clone(), placement(sheet.image, image.width()));

    let file = File::create(path).map_err(|e| fail(format!("cannot create output: {e}")))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| fail(format!("cannot save document: {e}")))?;

    info!("Wrote {}", path.display());
    Ok(())
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

impl Fonts {
    fn register(doc: &PdfDocumentReference) -> Result<Self, String> {
        let add = |font: BuiltinFont| doc.add_builtin_font(font).map_err(|e| e.to_string());
        Ok(Self {
            regular: add(BuiltinFont::Helvetica)?,
            bold: add(BuiltinFont::HelveticaBold)?,
            oblique: add(BuiltinFont::HelveticaOblique)?,
        })
    }

    fn face(&self, face: Face) -> &IndirectFontRef {
        match face {
            Face::Regular => &self.regular,
            Face::Bold => &self.bold,
            Face::Oblique => &self.oblique,
        }
    }
}

/// printpdf measures y upwards from the bottom edge.
fn from_bottom(top_mm: f32) -> Mm {
    Mm(PAGE_HEIGHT_MM - top_mm)
}

fn paint_text(layer: &PdfLayerReference, fonts: &Fonts, run: &TextRun) {
    layer.use_text(
        run.text.as_str(),
        run.size_pt,
        Mm(run.x_mm),
        from_bottom(run.baseline_mm),
        fonts.face(run.face),
    );
}

/// Position the raster and pick the DPI that makes it exactly `size_mm` wide.
fn placement(target: ImageBox, width_px: u32) -> ImageTransform {
    ImageTransform {
        translate_x: Some(Mm(target.x_mm)),
        translate_y: Some(from_bottom(target.y_mm + target.size_mm)),
        dpi: Some(width_px as f32 * 25.4 / target.size_mm),
        ..Default::default()
    }
}

/// Round-trip the raster through a scoped temp PNG into a PDF image object.
///
/// The temp file is deleted when this function returns, on every path.
fn decode_through_tempfile(image: &RgbImage, temp_dir: Option<&Path>) -> Result<Image, String> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("qr-embed-").suffix(".png");
    let tmp: NamedTempFile = match temp_dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    }
    .map_err(|e| format!("cannot create temp file: {e}"))?;
    debug!("Embedding QR raster via {}", tmp.path().display());

    image
        .save_with_format(tmp.path(), ImageFormat::Png)
        .map_err(|e| format!("cannot write temp PNG: {e}"))?;

    let reader = File::open(tmp.path())
        .map(BufReader::new)
        .map_err(|e| format!("cannot reopen temp PNG: {e}"))?;
    let decoder = PngDecoder::new(reader).map_err(|e| format!("cannot decode temp PNG: {e}"))?;
    Image::try_from(decoder).map_err(|e| format!("cannot embed image: {e}"))
}
