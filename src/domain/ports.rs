use crate::domain::model::{CheckReport, NegativeMode, OutputFormat, SubjectKind};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Yields whitespace-delimited tokens; `None` once input is exhausted.
///
/// `kind` names the input being read so decoding failures can report it.
#[async_trait]
pub trait TokenSource: Send {
    async fn next_token(&mut self, kind: SubjectKind) -> Result<Option<String>>;

    /// Drops tokens already read from the current line.
    fn discard_buffered(&mut self);
}

#[async_trait]
pub trait ReportSink: Send {
    async fn prompt(&mut self, text: &str) -> Result<()>;
    async fn report(&mut self, report: &CheckReport) -> Result<()>;
    async fn notice(&mut self, message: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn max_word_length(&self) -> usize;
    fn negative_mode(&self) -> NegativeMode;
    fn max_attempts(&self) -> usize;
    fn output_format(&self) -> OutputFormat;
}

/// One read → reverse → compare step.
pub trait Check: Send + Sync {
    fn kind(&self) -> SubjectKind;
    fn prompt(&self) -> &str;
    fn evaluate(&self, token: &str) -> Result<CheckReport>;
}
