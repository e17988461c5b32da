//! Unicode preview on stdout.

use console::{style, Term};
use qrcode::render::unicode::Dense1x2;
use std::io::Write;
use tracing::warn;

use crate::domain::ErrorCorrection;
use crate::render::encoder::symbol;
use crate::utils::Result;

/// Half-block rendering of `payload`, quiet zone included.
pub fn render_to_string(payload: &str, level: ErrorCorrection) -> Result<String> {
    let code = symbol(payload, level)?;
    Ok(code
        .render::<Dense1x2>()
        .dark_color(Dense1x2::Dark)
        .light_color(Dense1x2::Light)
        .quiet_zone(true)
        .build())
}

/// Print `payload` as a scannable block on stdout.
pub fn render(payload: &str, level: ErrorCorrection) {
    preview_to(&mut Term::stdout(), payload, level);
}

/// Write the preview to `out`. Failures are logged, never returned.
pub fn preview_to<W: Write>(out: &mut W, payload: &str, level: ErrorCorrection) {
    if let Err(err) = write_preview(out, payload, level) {
        warn!("terminal preview skipped: {err}");
    }
}

fn write_preview<W: Write>(out: &mut W, payload: &str, level: ErrorCorrection) -> Result<()> {
    let block = render_to_string(payload, level)?;
    // Pin colours so the symbol reads dark-on-light whatever the terminal theme.
    for line in block.lines() {
        writeln!(out, "{}", style(line).black().on_white())?;
    }
    out.flush()?;
    Ok(())
}
