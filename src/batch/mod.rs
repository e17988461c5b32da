//! Batch generation from a newline-delimited list of links
//!
//! Images are named after the 1-based line they came from, so blank lines
//! leave gaps in the numbering: `a`, ``, `b` produces `qr_code_1.png` and
//! `qr_code_3.png`.

use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::BatchJob;
use crate::payload::link_payload;
use crate::render::generate;
use crate::utils::{batch_file_name, Result};

/// Generate one image per non-blank line of `job.source`.
///
/// A missing source file is reported as a warning and yields no images; the
/// output directory is only created once the source is known to exist. The
/// first line that fails to encode aborts the batch.
pub fn run(job: &BatchJob, config: &Config) -> Result<Vec<PathBuf>> {
    if !job.source.exists() {
        warn!("batch file {} does not exist; no QR codes generated", job.source.display());
        return Ok(Vec::new());
    }

    fs::create_dir_all(&job.output_dir)?;
    let contents = fs::read_to_string(&job.source)?;

    let mut saved = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let link = line.trim();
        if link.is_empty() {
            continue;
        }
        let path = job.output_dir.join(batch_file_name(index + 1));
        let request = config.request(link_payload(link), &path);
        saved.push(generate(&request, &config.render)?);
    }

    info!("generated {} QR code(s) from {}", saved.len(), job.source.display());
    Ok(saved)
}
