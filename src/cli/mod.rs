//! Command-line interface for quantumqr
//!
//! All mode flags sit on one flat command; [`dispatch`] picks exactly one of
//! them by priority.

use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{merge_cli_with_config, CliOverrides, Config};
use crate::domain::{Color, ErrorCorrection, MAX_BORDER, MAX_BOX_SIZE};

mod dispatch;

pub use dispatch::{execute, select_mode, Mode};

/// QuantumQR - The Ultimate QR Code Generator
#[derive(Parser, Debug)]
#[command(name = "quantumqr")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Generate a QR code from a URL and display it in the terminal
    #[arg(short, long, value_name = "URL")]
    pub link: Option<String>,

    /// Output file name [default: qrcode.png]
    #[arg(short, long, value_name = "FILENAME")]
    pub output: Option<PathBuf>,

    /// Generate multiple QR codes from a text file (one link per line)
    #[arg(short, long, value_name = "FILENAME", value_parser = lenient_path())]
    pub batch: Option<PathBuf>,

    /// Decode a QR code from an image file
    #[arg(short, long, value_name = "IMAGE", value_parser = lenient_path())]
    pub read: Option<PathBuf>,

    /// Generate a vCard QR code (short form: -vc)
    #[arg(long, num_args = 3, value_names = ["NAME", "PHONE", "EMAIL"])]
    pub vcard: Option<Vec<String>>,

    /// Generate a Wi-Fi QR code (short form: -wf)
    #[arg(long, num_args = 3, value_names = ["SSID", "PASSWORD", "SECURITY"])]
    pub wifi: Option<Vec<String>>,

    /// Shorten the --link URL through TinyURL before encoding
    #[arg(long)]
    pub shorten: bool,

    /// Module colour: a name (black, navy, ...) or hex (#1e90ff) [default: black]
    #[arg(long, value_name = "COLOR")]
    pub fg: Option<Color>,

    /// Background colour [default: white]
    #[arg(long, value_name = "COLOR")]
    pub bg: Option<Color>,

    /// Error-correction level [default: high]
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub ec: Option<ErrorCorrection>,

    /// Pixels per module [default: 10]
    #[arg(
        long,
        value_name = "PIXELS",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_BOX_SIZE))
    )]
    pub box_size: Option<u32>,

    /// Quiet-zone width in modules [default: 4]
    #[arg(
        long,
        value_name = "MODULES",
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_BORDER))
    )]
    pub border: Option<u32>,

    /// Do not print the QR code to the terminal
    #[arg(long)]
    pub no_preview: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Render settings for this invocation.
    pub fn config(&self) -> Config {
        let overrides = CliOverrides {
            output: self.output.clone(),
            foreground: self.fg,
            background: self.bg,
            error_correction: self.ec,
            box_size: self.box_size,
            border: self.border,
            preview: if self.no_preview { Some(false) } else { None },
            shorten: if self.shorten { Some(true) } else { None },
        };
        merge_cli_with_config(Config::default(), overrides)
    }
}

/// Path parser that lets an empty value through, so dispatch can treat it as unset.
fn lenient_path() -> impl clap::builder::TypedValueParser<Value = PathBuf> {
    clap::builder::TypedValueParser::map(clap::builder::OsStringValueParser::new(), PathBuf::from)
}

/// Rewrite the two-letter short flags `-vc` and `-wf` to their long forms.
///
/// Everything after a bare `--` is left untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    arg
                }
                Some("-vc") => OsString::from("--vcard"),
                Some("-wf") => OsString::from("--wifi"),
                _ => arg,
            }
        })
        .collect()
}

pub fn run() -> Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let config = cli.config();
    let cwd = std::env::current_dir()?;
    execute(select_mode(&cli, cwd), &config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_mode_flags_are_rewritten() {
        let args = normalize_args(["quantumqr", "-vc", "Ann", "1", "a@b", "-o", "x.png"]);
        assert_eq!(args[1], OsString::from("--vcard"));
        assert_eq!(args[5], OsString::from("-o"));

        let args = normalize_args(["quantumqr", "-wf", "Net", "pw", "WPA"]);
        assert_eq!(args[1], OsString::from("--wifi"));
    }

    #[test]
    fn arguments_after_double_dash_are_kept() {
        let args = normalize_args(["quantumqr", "--", "-vc"]);
        assert_eq!(args[2], OsString::from("-vc"));
    }

    #[test]
    fn config_reflects_flags() {
        let cli = Cli::try_parse_from(normalize_args([
            "quantumqr",
            "--link",
            "https://example.com",
            "--fg",
            "navy",
            "--ec",
            "quartile",
            "--no-preview",
            "-o",
            "site.png",
        ]))
        .unwrap();
        let config = cli.config();
        assert_eq!(config.output, PathBuf::from("site.png"));
        assert_eq!(config.foreground, Color([0, 0, 128]));
        assert_eq!(config.background, Color::WHITE);
        assert_eq!(config.render.error_correction, ErrorCorrection::Quartile);
        assert!(!config.render.preview);
        assert!(!config.shorten);
    }

    #[test]
    fn bad_color_is_rejected_by_parser() {
        let result = Cli::try_parse_from(["quantumqr", "--link", "x", "--fg", "not-a-colour"]);
        assert!(result.is_err());
    }

    #[test]
    fn geometry_flags_are_bounded() {
        let parse =
            |flag: &str, value: &str| Cli::try_parse_from(["quantumqr", "-l", "x", flag, value]);
        assert!(parse("--box-size", "0").is_err());
        assert!(parse("--box-size", "101").is_err());
        assert!(parse("--box-size", "100").is_ok());
        assert!(parse("--border", "0").is_ok());
        assert!(parse("--border", "100").is_ok());
        assert!(parse("--border", "4294967295").is_err());
    }

    #[test]
    fn vcard_takes_exactly_three_values() {
        assert!(Cli::try_parse_from(["quantumqr", "--vcard", "Ann", "1"]).is_err());
    }
}
