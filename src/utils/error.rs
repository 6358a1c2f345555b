use crate::domain::model::SubjectKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PalindromeError {
    #[error("{kind} input too long: {length} characters (maximum {max})")]
    InputTooLong {
        kind: SubjectKind,
        length: usize,
        max: usize,
    },

    #[error("number input is malformed: '{token}' {reason}")]
    MalformedNumber { token: String, reason: String },

    #[error("{kind} input is not valid UTF-8 text")]
    InvalidEncoding { kind: SubjectKind },

    #[error("{kind} input line exceeds {limit} bytes")]
    LineTooLong { kind: SubjectKind, limit: u64 },

    #[error("{kind} input missing: end of input reached before a value was entered")]
    EndOfInput { kind: SubjectKind },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

impl PalindromeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PalindromeError::InputTooLong { .. }
            | PalindromeError::MalformedNumber { .. }
            | PalindromeError::InvalidEncoding { .. }
            | PalindromeError::LineTooLong { .. }
            | PalindromeError::EndOfInput { .. } => ErrorCategory::Input,
            PalindromeError::InvalidConfigValue { .. } | PalindromeError::ConfigParse { .. } => {
                ErrorCategory::Configuration
            }
            PalindromeError::Io(_) | PalindromeError::Serialization(_) => ErrorCategory::System,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
        }
    }

    /// Whether the same prompt may be asked again after this error.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PalindromeError::InputTooLong { .. }
                | PalindromeError::MalformedNumber { .. }
                | PalindromeError::InvalidEncoding { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PalindromeError::InputTooLong { kind, length, max } => format!(
                "The {} you entered is too long ({} characters, at most {} allowed)",
                kind, length, max
            ),
            PalindromeError::MalformedNumber { token, reason } => {
                format!("'{}' {}", token, reason)
            }
            PalindromeError::InvalidEncoding { kind } => {
                format!("The {} you entered contains bytes that are not valid UTF-8", kind)
            }
            PalindromeError::LineTooLong { kind, limit } => format!(
                "The line entered for the {} is longer than {} bytes",
                kind, limit
            ),
            PalindromeError::EndOfInput { kind } => {
                format!("Input ended before a {} was entered", kind)
            }
            PalindromeError::InvalidConfigValue { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            PalindromeError::ConfigParse { message } => {
                format!("Could not read the configuration file: {}", message)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PalindromeError::InputTooLong { .. } => {
                "Enter a shorter word or raise --max-word-length"
            }
            PalindromeError::MalformedNumber { .. } => {
                "Enter digits only, optionally preceded by a sign, within the 32-bit integer range"
            }
            PalindromeError::InvalidEncoding { .. } => {
                "Enter plain text, or switch the terminal to UTF-8"
            }
            PalindromeError::LineTooLong { .. } => "Enter one short token per line",
            PalindromeError::EndOfInput { .. } => {
                "Provide both a word and a number on standard input"
            }
            PalindromeError::InvalidConfigValue { .. } | PalindromeError::ConfigParse { .. } => {
                "Check the configuration file and command-line flags"
            }
            PalindromeError::Io(_) | PalindromeError::Serialization(_) => {
                "Check that standard input and output are available"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PalindromeError>;
