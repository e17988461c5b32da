//! CLI argument merging with config

use crate::config::Config;
use crate::domain::{Color, ErrorCorrection};
use std::path::PathBuf;

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub output: Option<PathBuf>,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub error_correction: Option<ErrorCorrection>,
    pub box_size: Option<u32>,
    pub border: Option<u32>,
    pub preview: Option<bool>,
    pub shorten: Option<bool>,
}

pub fn merge_cli_with_config(mut base_config: Config, cli: CliOverrides) -> Config {
    if let Some(output) = cli.output {
        base_config.output = output;
    }

    if let Some(foreground) = cli.foreground {
        base_config.foreground = foreground;
    }
    if let Some(background) = cli.background {
        base_config.background = background;
    }

    if let Some(error_correction) = cli.error_correction {
        base_config.render.error_correction = error_correction;
    }
    if let Some(box_size) = cli.box_size {
        base_config.render.box_size = box_size;
    }
    if let Some(border) = cli.border {
        base_config.render.border = border;
    }
    if let Some(preview) = cli.preview {
        base_config.render.preview = preview;
    }

    if let Some(shorten) = cli.shorten {
        base_config.shorten = shorten;
    }

    base_config
}

#[cfg(test)]
mod tests {
    use super::{merge_cli_with_config, CliOverrides};
    use crate::config::Config;
    use crate::domain::{Color, ErrorCorrection, DEFAULT_BORDER, DEFAULT_BOX_SIZE};
    use std::path::PathBuf;

    #[test]
    fn empty_overrides_keep_defaults() {
        let merged = merge_cli_with_config(Config::default(), CliOverrides::default());
        assert_eq!(merged, Config::default());
        assert_eq!(merged.output, PathBuf::from("qrcode.png"));
        assert_eq!(merged.render.error_correction, ErrorCorrection::High);
        assert_eq!(merged.render.box_size, DEFAULT_BOX_SIZE);
        assert_eq!(merged.render.border, DEFAULT_BORDER);
        assert!(merged.render.preview);
        assert!(!merged.shorten);
    }

    #[test]
    fn cli_overrides_replace_base_values() {
        let cli = CliOverrides {
            output: Some(PathBuf::from("card.jpg")),
            foreground: Some(Color([0, 0, 128])),
            error_correction: Some(ErrorCorrection::Low),
            border: Some(1),
            preview: Some(false),
            shorten: Some(true),
            ..CliOverrides::default()
        };

        let merged = merge_cli_with_config(Config::default(), cli);
        assert_eq!(merged.output, PathBuf::from("card.jpg"));
        assert_eq!(merged.foreground, Color([0, 0, 128]));
        assert_eq!(merged.background, Color::WHITE);
        assert_eq!(merged.render.error_correction, ErrorCorrection::Low);
        assert_eq!(merged.render.box_size, DEFAULT_BOX_SIZE);
        assert_eq!(merged.render.border, 1);
        assert!(!merged.render.preview);
        assert!(merged.shorten);
    }
}
