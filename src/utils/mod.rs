//! Utility functions

pub mod error;

pub use error::{QrError, Result};

/// File name of the image produced for the 1-based line `index` of a batch file.
pub fn batch_file_name(index: usize) -> String {
    format!("qr_code_{index}.png")
}
