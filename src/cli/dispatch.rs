//! Mode selection and execution.

use anyhow::{Context, Result};
use clap::CommandFactory;
use std::path::PathBuf;
use tracing::debug;

use super::Cli;
use crate::batch;
use crate::config::Config;
use crate::decode::decode;
use crate::domain::{BatchJob, VCardFields, WifiFields};
use crate::payload::{link_payload, vcard_payload, wifi_payload};
use crate::render::generate;
use crate::shorten::Shortener;

/// The single operation an invocation performs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Batch(BatchJob),
    Read(PathBuf),
    VCard(VCardFields),
    Wifi(WifiFields),
    Link(String),
    Help,
}

/// Pick the operation by priority: batch, read, vcard, wifi, link, then help.
///
/// Flags of lower-priority modes are ignored, and so is a single-value flag
/// given an empty string. Batch output always goes to `cwd`.
pub fn select_mode(cli: &Cli, cwd: PathBuf) -> Mode {
    if let Some(source) = cli.batch.as_ref().filter(|p| !p.as_os_str().is_empty()) {
        return Mode::Batch(BatchJob { source: source.clone(), output_dir: cwd });
    }
    if let Some(image) = cli.read.as_ref().filter(|p| !p.as_os_str().is_empty()) {
        return Mode::Read(image.clone());
    }
    if let Some([name, phone, email]) = cli.vcard.as_deref() {
        return Mode::VCard(VCardFields {
            name: name.clone(),
            phone: phone.clone(),
            email: email.clone(),
        });
    }
    if let Some([ssid, password, security]) = cli.wifi.as_deref() {
        return Mode::Wifi(WifiFields {
            ssid: ssid.clone(),
            password: password.clone(),
            security: security.clone(),
        });
    }
    if let Some(link) = cli.link.as_ref().filter(|l| !l.is_empty()) {
        return Mode::Link(link.clone());
    }
    Mode::Help
}

pub fn execute(mode: Mode, config: &Config) -> Result<()> {
    debug!("running {mode:?}");
    match mode {
        Mode::Batch(job) => {
            batch::run(&job, config)
                .with_context(|| format!("batch generation from {} failed", job.source.display()))?;
        }
        Mode::Read(image) => {
            if let Some(text) = decode(&image) {
                println!("{text}");
            }
        }
        Mode::VCard(fields) => {
            let request = config.request(vcard_payload(&fields), &config.output);
            generate(&request, &config.render).context("failed to generate vCard QR code")?;
        }
        Mode::Wifi(fields) => {
            let request = config.request(wifi_payload(&fields), &config.output);
            generate(&request, &config.render).context("failed to generate Wi-Fi QR code")?;
        }
        Mode::Link(link) => {
            let link = if config.shorten { Shortener::default().shorten(&link) } else { link };
            let request = config.request(link_payload(&link), &config.output);
            generate(&request, &config.render).context("failed to generate link QR code")?;
        }
        Mode::Help => {
            Cli::command().print_help()?;
            println!();
        }
    }
    Ok(())
}
