use crate::core::Check;
use crate::domain::model::{CheckReport, NegativeMode, Number, SubjectKind};
use crate::utils::error::{PalindromeError, Result};
use std::num::IntErrorKind;

#[derive(Debug, Clone, Default)]
pub struct NumberCheck {
    mode: NegativeMode,
}

impl NumberCheck {
    pub fn new(mode: NegativeMode) -> Self {
        Self { mode }
    }

    pub fn parse(&self, token: &str) -> Result<Number> {
        let value = token.parse::<i32>().map_err(|e| {
            let reason = match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => format!(
                    "is outside the supported range {}..={}",
                    i32::MIN,
                    i32::MAX
                ),
                IntErrorKind::Empty => "is empty".to_string(),
                _ => "is not a valid integer".to_string(),
            };
            PalindromeError::MalformedNumber {
                token: token.to_string(),
                reason,
            }
        })?;
        Ok(Number::new(value, self.mode))
    }
}

impl Check for NumberCheck {
    fn kind(&self) -> SubjectKind {
        SubjectKind::Number
    }

    fn prompt(&self) -> &str {
        "Enter a 5-digit number: "
    }

    fn evaluate(&self, token: &str) -> Result<CheckReport> {
        let number = self.parse(token)?;
        if number.original < 0 && self.mode == NegativeMode::Compat {
            tracing::debug!(
                number = number.original,
                "negative input reverses to 0 in compat mode"
            );
        }
        tracing::debug!(
            number = number.original,
            reversed = number.reversed,
            "number reversed"
        );
        Ok(CheckReport::from(&number))
    }
}
