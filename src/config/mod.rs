pub mod toml_config;

use crate::core::word::DEFAULT_MAX_WORD_LENGTH;
use crate::domain::model::{NegativeMode, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const MAX_ATTEMPTS_LIMIT: usize = 10;

/// Resolved settings: defaults, then the TOML file, then command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub max_word_length: usize,
    pub negative_mode: NegativeMode,
    pub max_attempts: usize,
    pub output_format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            negative_mode: NegativeMode::default(),
            max_attempts: 1,
            output_format: OutputFormat::default(),
        }
    }
}

impl Settings {
    pub fn merge_file(mut self, file: &TomlConfig) -> Result<Self> {
        file.validate()?;
        if let Some(max_length) = file.max_word_length() {
            self.max_word_length = max_length;
        }
        if let Some(mode) = file.negative_mode() {
            self.negative_mode = mode;
        }
        if let Some(max_attempts) = file.max_attempts() {
            self.max_attempts = max_attempts;
        }
        if let Some(format) = file.output_format() {
            self.output_format = format;
        }
        Ok(self)
    }
}

impl ConfigProvider for Settings {
    fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    fn negative_mode(&self) -> NegativeMode {
        self.negative_mode
    }

    fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("word.max_length", self.max_word_length, 1)?;
        validate_range("input.max_attempts", self.max_attempts, 1, MAX_ATTEMPTS_LIMIT)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "palindrome-check")]
#[command(about = "Check whether a word and a number are palindromes")]
pub struct CliConfig {
    /// TOML settings file
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Longest accepted word, in characters [default: 99]
    #[arg(long)]
    pub max_word_length: Option<usize>,

    /// How negative numbers are reversed [default: compat]
    #[arg(long, value_enum)]
    pub negative_mode: Option<NegativeMode>,

    /// Prompts per input before giving up [default: 1]
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Output format [default: text]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading settings from {}", path.display());
            settings = settings.merge_file(&TomlConfig::from_file(path)?)?;
        }

        if let Some(max_length) = self.max_word_length {
            settings.max_word_length = max_length;
        }
        if let Some(mode) = self.negative_mode {
            settings.negative_mode = mode;
        }
        if let Some(max_attempts) = self.max_attempts {
            settings.max_attempts = max_attempts;
        }
        if let Some(format) = self.format {
            settings.output_format = format;
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_behavior() {
        let settings = Settings::default();
        assert_eq!(settings.max_word_length, 99);
        assert_eq!(settings.negative_mode, NegativeMode::Compat);
        assert_eq!(settings.max_attempts, 1);
        assert_eq!(settings.output_format, OutputFormat::Text);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = TomlConfig::from_toml_str("[word]\nmax_length = 5\n[input]\nmax_attempts = 2\n")
            .unwrap();
        let settings = Settings::default().merge_file(&file).unwrap();
        assert_eq!(settings.max_word_length, 5);
        assert_eq!(settings.max_attempts, 2);
        assert_eq!(settings.negative_mode, NegativeMode::Compat);
    }

    #[test]
    fn test_out_of_range_settings_fail_validation() {
        let settings = Settings {
            max_word_length: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            max_attempts: MAX_ATTEMPTS_LIMIT + 1,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_flags_override_file() {
        use clap::Parser;
        use std::io::Write;

        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[number]\nnegative_mode = \"signed\"\n[output]\nformat = \"json\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "palindrome-check",
            "--config",
            &path,
            "--format",
            "text",
            "--max-word-length",
            "12",
        ]);
        let settings = cli.resolve().unwrap();
        assert_eq!(settings.negative_mode, NegativeMode::Signed);
        assert_eq!(settings.output_format, OutputFormat::Text);
        assert_eq!(settings.max_word_length, 12);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_rejects_zero_attempts() {
        use clap::Parser;

        let cli = CliConfig::parse_from(["palindrome-check", "--max-attempts", "0"]);
        let err = cli.resolve().unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
