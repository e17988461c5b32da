//! quantumqr: command-line QR code generator and reader

use anyhow::Result;

fn main() -> Result<()> {
    quantumqr::cli::run()
}
