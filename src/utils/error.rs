use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("payload of {len} bytes exceeds QR capacity at the chosen error-correction level")]
    CapacityExceeded { len: usize },

    #[error("QR encoding failed: {0}")]
    Encode(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid color '{0}' (expected a name like 'black' or a hex value like '#1e90ff')")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, QrError>;
