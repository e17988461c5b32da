//! QuantumQR: generate and read QR codes from the command line
//!
//! Builds link, vCard and Wi-Fi payloads, renders them to image files and
//! terminal previews, batch-generates codes from a list of links, and decodes
//! codes found in images.

pub mod batch;
pub mod cli;
pub mod config;
pub mod decode;
pub mod domain;
pub mod payload;
pub mod render;
pub mod shorten;
pub mod utils;
