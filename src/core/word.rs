use crate::core::Check;
use crate::domain::model::{CheckReport, SubjectKind, Word};
use crate::utils::error::{PalindromeError, Result};

pub const DEFAULT_MAX_WORD_LENGTH: usize = 99;

#[derive(Debug, Clone)]
pub struct WordCheck {
    max_length: usize,
}

impl WordCheck {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    pub fn parse(&self, token: &str) -> Result<Word> {
        let length = token.chars().count();
        if length > self.max_length {
            return Err(PalindromeError::InputTooLong {
                kind: SubjectKind::Word,
                length,
                max: self.max_length,
            });
        }
        Ok(Word::new(token))
    }
}

impl Default for WordCheck {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WORD_LENGTH)
    }
}

impl Check for WordCheck {
    fn kind(&self) -> SubjectKind {
        SubjectKind::Word
    }

    fn prompt(&self) -> &str {
        "Enter a word: "
    }

    fn evaluate(&self, token: &str) -> Result<CheckReport> {
        let word = self.parse(token)?;
        tracing::debug!(
            word = %word.original,
            reversed = %word.reversed,
            "word reversed"
        );
        Ok(CheckReport::from(&word))
    }
}
