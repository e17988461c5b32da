//! QR rendering: raster images on disk and unicode previews on the terminal

pub mod encoder;
pub mod terminal;

pub use encoder::{encode, generate, save};
