//! Raster QR images.

use image::{Rgb, RgbImage};
use qrcode::types::QrError as SymbolError;
use qrcode::{EcLevel, QrCode};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::{ErrorCorrection, QrRequest, RenderOptions, MAX_IMAGE_SIDE};
use crate::render::terminal;
use crate::utils::{QrError, Result};

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

/// Build the smallest symbol that holds `payload` at `level`.
pub(crate) fn symbol(payload: &str, level: ErrorCorrection) -> Result<QrCode> {
    QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::from(level)).map_err(|err| {
        match err {
            SymbolError::DataTooLong => QrError::CapacityExceeded { len: payload.len() },
            other => QrError::Encode(other.to_string()),
        }
    })
}

/// Rasterise `request.payload` with the request's colours.
///
/// Each module becomes a `box_size` square and the symbol is surrounded by
/// `border` light modules, so the image side is `(width + 2 * border) * box_size`.
pub fn encode(request: &QrRequest, options: &RenderOptions) -> Result<RgbImage> {
    let code = symbol(&request.payload, options.error_correction)?;
    let width = code.width() as u32;
    let box_size = options.box_size.max(1);
    let side = options
        .border
        .checked_mul(2)
        .and_then(|quiet| quiet.checked_add(width))
        .and_then(|modules| modules.checked_mul(box_size))
        .filter(|side| *side <= MAX_IMAGE_SIDE)
        .ok_or_else(|| {
            QrError::Encode(format!(
                "{width} modules with border {} and box size {box_size} exceed the \
                 {MAX_IMAGE_SIDE} px image limit",
                options.border
            ))
        })?;

    let dark = Rgb(request.foreground.0);
    let mut img = RgbImage::from_pixel(side, side, Rgb(request.background.0));

    for (i, module) in code.to_colors().iter().enumerate() {
        if *module != qrcode::Color::Dark {
            continue;
        }
        let left = (i as u32 % width + options.border) * box_size;
        let top = (i as u32 / width + options.border) * box_size;
        for dy in 0..box_size {
            for dx in 0..box_size {
                img.put_pixel(left + dx, top + dy, dark);
            }
        }
    }

    debug!(
        version_width = width,
        side,
        foreground = %request.foreground,
        background = %request.background,
        "encoded {} byte payload",
        request.payload.len()
    );
    Ok(img)
}

/// Write `img` to `path`; the extension picks the format.
pub fn save(img: &RgbImage, path: &Path) -> Result<()> {
    img.save(path)?;
    Ok(())
}

/// Encode, save, then preview in the terminal when enabled.
///
/// The saved file is the authoritative output; the preview never fails the call.
pub fn generate(request: &QrRequest, options: &RenderOptions) -> Result<PathBuf> {
    let img = encode(request, options)?;
    save(&img, &request.output_path)?;
    debug!("saved {}", request.output_path.display());

    if options.preview {
        terminal::render(&request.payload, options.error_correction);
    }
    Ok(request.output_path.clone())
}
