use crate::domain::model::{NegativeMode, OutputFormat};
use crate::utils::error::{PalindromeError, Result};
use crate::utils::validation::{validate_positive_number, validate_range, Validate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings file. Every section and key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub word: Option<WordConfig>,
    pub number: Option<NumberConfig>,
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WordConfig {
    pub max_length: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumberConfig {
    pub negative_mode: Option<NegativeMode>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub max_attempts: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| PalindromeError::ConfigParse {
            message: format!("{}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Syntax errors are `ConfigParse`; a section whose keys or values don't
    /// fit is `InvalidConfigValue` naming that section.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        let table: toml::Table =
            toml::from_str(&processed_content).map_err(|e| PalindromeError::ConfigParse {
                message: format!("TOML parsing error: {}", e),
            })?;

        let mut config = TomlConfig::default();
        for (name, value) in table {
            match name.as_str() {
                "word" => config.word = Some(Self::section(&name, value)?),
                "number" => config.number = Some(Self::section(&name, value)?),
                "input" => config.input = Some(Self::section(&name, value)?),
                "output" => config.output = Some(Self::section(&name, value)?),
                _ => {
                    return Err(PalindromeError::InvalidConfigValue {
                        field: name,
                        value: value.to_string(),
                        reason: "Unknown section. Valid sections: word, number, input, output"
                            .to_string(),
                    })
                }
            }
        }
        Ok(config)
    }

    fn section<T: DeserializeOwned>(name: &str, value: toml::Value) -> Result<T> {
        let rendered = value.to_string();
        value
            .try_into()
            .map_err(|e: toml::de::Error| PalindromeError::InvalidConfigValue {
                field: name.to_string(),
                value: rendered,
                reason: e.message().to_string(),
            })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn max_word_length(&self) -> Option<usize> {
        self.word.as_ref().and_then(|w| w.max_length)
    }

    pub fn max_attempts(&self) -> Option<usize> {
        self.input.as_ref().and_then(|i| i.max_attempts)
    }

    pub fn negative_mode(&self) -> Option<NegativeMode> {
        self.number.as_ref().and_then(|n| n.negative_mode)
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(max_length) = self.max_word_length() {
            validate_positive_number("word.max_length", max_length, 1)?;
        }
        if let Some(max_attempts) = self.max_attempts() {
            validate_range(
                "input.max_attempts",
                max_attempts,
                1,
                crate::config::MAX_ATTEMPTS_LIMIT,
            )?;
        }
        Ok(())
    }
}
