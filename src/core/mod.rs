pub mod engine;
pub mod number;
pub mod word;

pub use crate::domain::model::{CheckReport, NegativeMode, SubjectKind};
pub use crate::domain::ports::{Check, ConfigProvider, ReportSink, TokenSource};
pub use crate::utils::error::Result;

use number::NumberCheck;
use word::WordCheck;

/// The word check followed by the number check.
pub fn default_checks(config: &dyn ConfigProvider) -> Vec<Box<dyn Check>> {
    vec![
        Box::new(WordCheck::new(config.max_word_length())),
        Box::new(NumberCheck::new(config.negative_mode())),
    ]
}
