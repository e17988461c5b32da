//! QR decoding from image files
//!
//! An unreadable file and an image without a symbol are treated the same way:
//! both yield `None`.

use image::GrayImage;
use std::path::Path;
use tracing::debug;

/// Text of the first QR code found in the image at `path`.
pub fn decode(path: &Path) -> Option<String> {
    let img = match image::open(path) {
        Ok(img) => img,
        Err(err) => {
            debug!("could not load {}: {err}", path.display());
            return None;
        }
    };
    decode_luma(&img.to_luma8())
}

/// Text of the first QR code found in an already loaded greyscale image.
pub fn decode_luma(img: &GrayImage) -> Option<String> {
    let (width, height) = img.dimensions();
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        width as usize,
        height as usize,
        |x, y| img.get_pixel(x as u32, y as u32).0[0],
    );
    let grids = prepared.detect_grids();
    debug!("detected {} candidate grid(s)", grids.len());

    grids.into_iter().find_map(|grid| match grid.decode() {
        Ok((_meta, content)) => Some(content),
        Err(err) => {
            debug!("grid failed to decode: {err:?}");
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{QrRequest, RenderOptions, VCardFields};
    use crate::payload::vcard_payload;
    use crate::render::encode;
    use image::{Luma, Rgb, RgbImage};
    use tempfile::TempDir;

    fn round_trip(payload: &str) -> Option<String> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rt.png");
        let options = RenderOptions { preview: false, ..RenderOptions::default() };
        let img = encode(&QrRequest::new(payload, &path), &options).unwrap();
        img.save(&path).unwrap();
        decode(&path)
    }

    #[test]
    fn link_round_trips() {
        let link = "https://example.com/path?q=1&r=two";
        assert_eq!(round_trip(link).as_deref(), Some(link));
    }

    #[test]
    fn vcard_round_trips() {
        let payload = vcard_payload(&VCardFields {
            name: "Grace Hopper".to_string(),
            phone: "+1 555 0100".to_string(),
            email: "grace@example.com".to_string(),
        });
        assert_eq!(round_trip(&payload), Some(payload));
    }

    #[test]
    fn solid_image_has_no_code() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blank.png");
        RgbImage::from_pixel(120, 120, Rgb([255, 255, 255])).save(&path).unwrap();
        assert_eq!(decode(&path), None);
        assert_eq!(decode_luma(&GrayImage::from_pixel(50, 50, Luma([0u8]))), None);
    }

    #[test]
    fn missing_or_corrupt_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(decode(&dir.path().join("nope.png")), None);

        let corrupt = dir.path().join("corrupt.png");
        std::fs::write(&corrupt, b"definitely not a png").unwrap();
        assert_eq!(decode(&corrupt), None);
    }
}
