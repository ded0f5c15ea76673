//! Symbol encoding: payload string → black-on-white RGB raster.
//!
//! The QR maths (Reed–Solomon coding, masking, version selection) lives in the
//! `qrcode` crate. This stage only fixes the rendering contract: error
//! correction level H (about 30 % of the symbol can be damaged and still
//! scan), the smallest version that fits, square modules of a configured pixel
//! size, and the standard 4-module quiet zone.

use crate::error::QrArchiveError;
use image::{DynamicImage, Luma, RgbImage};
use qrcode::{EcLevel, QrCode};
use tracing::debug;

/// Encode `data` as a QR symbol and rasterise it.
///
/// `module_size` is the side of one module in pixels; `quiet_zone` adds the
/// 4-module white border.
pub fn encode(data: &str, module_size: u32, quiet_zone: bool) -> Result<RgbImage, QrArchiveError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::H).map_err(|e| {
        QrArchiveError::EncodingFailed {
            len: data.len(),
            reason: e.to_string(),
        }
    })?;

    debug!(
        "Encoded {} bytes as QR {:?} ({}x{} modules)",
        data.len(),
        code.version(),
        code.width(),
        code.width()
    );

    let luma = code
        .render::<Luma<u8>>()
        .dark_color(Luma([0]))
        .light_color(Luma([255]))
        .quiet_zone(quiet_zone)
        .module_dimensions(module_size, module_size)
        .build();

    Ok(DynamicImage::ImageLuma8(luma).to_rgb8())
}
