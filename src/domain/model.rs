use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    Word,
    Number,
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectKind::Word => f.write_str("word"),
            SubjectKind::Number => f.write_str("number"),
        }
    }
}

/// How negative numbers are reversed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum NegativeMode {
    /// The `n > 0` loop guard never runs, so every negative input reverses to 0.
    #[default]
    Compat,
    /// Reverse the magnitude and keep the sign: -121 reverses to -121.
    Signed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub original: String,
    pub reversed: String,
}

impl Word {
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        let reversed = original.chars().rev().collect();
        Self { original, reversed }
    }

    pub fn is_palindrome(&self) -> bool {
        self.original == self.reversed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Number {
    pub original: i32,
    pub reversed: i64,
}

impl Number {
    pub fn new(original: i32, mode: NegativeMode) -> Self {
        Self {
            original,
            reversed: reverse_digits(original, mode),
        }
    }

    pub fn is_palindrome(&self) -> bool {
        i64::from(self.original) == self.reversed
    }
}

/// Rebuilds the decimal digits of `num` least-significant first.
///
/// Works in `i64`: the longest `i32` has ten digits, and ten reversed digits
/// stay below `i64::MAX`.
pub fn reverse_digits(num: i32, mode: NegativeMode) -> i64 {
    let value = i64::from(num);
    match mode {
        NegativeMode::Compat => reverse_positive(value),
        NegativeMode::Signed => {
            let reversed = reverse_positive(value.abs());
            if value < 0 {
                -reversed
            } else {
                reversed
            }
        }
    }
}

fn reverse_positive(mut n: i64) -> i64 {
    let mut revnum = 0;
    while n > 0 {
        revnum = revnum * 10 + n % 10;
        n /= 10;
    }
    revnum
}

/// Outcome of one check, as printed or serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub kind: SubjectKind,
    pub given: String,
    pub reversed: String,
    pub is_palindrome: bool,
}

impl From<&Word> for CheckReport {
    fn from(word: &Word) -> Self {
        Self {
            kind: SubjectKind::Word,
            given: word.original.clone(),
            reversed: word.reversed.clone(),
            is_palindrome: word.is_palindrome(),
        }
    }
}

impl From<&Number> for CheckReport {
    fn from(number: &Number) -> Self {
        Self {
            kind: SubjectKind::Number,
            given: number.original.to_string(),
            reversed: number.reversed.to_string(),
            is_palindrome: number.is_palindrome(),
        }
    }
}
