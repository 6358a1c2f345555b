use crate::core::{CheckReport, ReportSink, Result, SubjectKind, TokenSource};
use crate::domain::model::OutputFormat;
use crate::utils::error::PalindromeError;
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Longest line buffered from the input before giving up.
pub const DEFAULT_LINE_LIMIT: u64 = 64 * 1024;

/// Splits buffered input into whitespace-delimited tokens, line by line.
///
/// Like `scanf("%s")`, blank lines are skipped and leftover tokens on a line
/// are served to the next read. Tokens stay raw bytes until they are handed
/// out, so a bad encoding is reported against the input that asked for it.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<Vec<u8>>,
    line_limit: u64,
}

impl<R: AsyncBufRead + Unpin + Send> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_line_limit(reader, DEFAULT_LINE_LIMIT)
    }

    pub fn with_line_limit(reader: R, line_limit: u64) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line_limit: line_limit.max(1),
        }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> TokenSource for TokenReader<R> {
    async fn next_token(&mut self, kind: SubjectKind) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return String::from_utf8(token)
                    .map(Some)
                    .map_err(|_| PalindromeError::InvalidEncoding { kind });
            }

            let mut line = Vec::new();
            let read = (&mut self.reader)
                .take(self.line_limit)
                .read_until(b'\n', &mut line)
                .await?;
            if read == 0 {
                return Ok(None);
            }
            if read as u64 == self.line_limit && line.last() != Some(&b'\n') {
                return Err(PalindromeError::LineTooLong {
                    kind,
                    limit: self.line_limit,
                });
            }

            self.pending.extend(
                line.split(u8::is_ascii_whitespace)
                    .filter(|token| !token.is_empty())
                    .map(<[u8]>::to_vec),
            );
        }
    }

    fn discard_buffered(&mut self) {
        if !self.pending.is_empty() {
            tracing::debug!("discarding {} buffered tokens", self.pending.len());
            self.pending.clear();
        }
    }
}

pub struct ConsoleReporter<W> {
    writer: W,
    format: OutputFormat,
    reports_written: usize,
    separated_after: usize,
}

impl<W: AsyncWrite + Unpin + Send> ConsoleReporter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer,
            format,
            reports_written: 0,
            separated_after: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    async fn write_text(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> ReportSink for ConsoleReporter<W> {
    async fn prompt(&mut self, text: &str) -> Result<()> {
        if self.format == OutputFormat::Json {
            return Ok(());
        }
        // One blank line between checks, not before re-prompts.
        if self.reports_written > self.separated_after {
            self.separated_after = self.reports_written;
            self.write_text("\n").await?;
        }
        self.write_text(text).await
    }

    async fn report(&mut self, report: &CheckReport) -> Result<()> {
        let rendered = match self.format {
            OutputFormat::Text => {
                let verdict = if report.is_palindrome { "" } else { "NOT " };
                format!(
                    "Given {kind}: {}\nReversed {kind}: {}\nThe {kind} is {}a palindrome.\n",
                    report.given,
                    report.reversed,
                    verdict,
                    kind = report.kind,
                )
            }
            OutputFormat::Json => format!("{}\n", serde_json::to_string(report)?),
        };
        self.reports_written += 1;
        self.write_text(&rendered).await
    }

    async fn notice(&mut self, message: &str) -> Result<()> {
        if self.format == OutputFormat::Json {
            return Ok(());
        }
        self.write_text(&format!("{}\n", message)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_tokens_span_lines_and_skip_blanks() {
        let input: &[u8] = b"  hello world\n\n\n  42 \n";
        let mut reader = TokenReader::new(input);

        assert_eq!(reader.next_token(SubjectKind::Word).await.unwrap().as_deref(), Some("hello"));
        assert_eq!(reader.next_token(SubjectKind::Word).await.unwrap().as_deref(), Some("world"));
        assert_eq!(reader.next_token(SubjectKind::Word).await.unwrap().as_deref(), Some("42"));
        assert_eq!(reader.next_token(SubjectKind::Word).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_discard_buffered_drops_rest_of_line() {
        let input: &[u8] = b"one two\nthree\n";
        let mut reader = TokenReader::new(input);

        assert_eq!(reader.next_token(SubjectKind::Word).await.unwrap().as_deref(), Some("one"));
        reader.discard_buffered();
        assert_eq!(reader.next_token(SubjectKind::Word).await.unwrap().as_deref(), Some("three"));
    }

    #[tokio::test]
    async fn test_last_line_without_newline() {
        let input: &[u8] = b"level";
        let mut reader = TokenReader::new(input);
        assert_eq!(reader.next_token(SubjectKind::Word).await.unwrap().as_deref(), Some("level"));
        assert_eq!(reader.next_token(SubjectKind::Word).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_invalid_utf8_names_the_input() {
        let input: &[u8] = b"caf\xe9 121\n";
        let mut reader = TokenReader::new(input);

        match reader.next_token(SubjectKind::Word).await {
            Err(PalindromeError::InvalidEncoding { kind }) => assert_eq!(kind, SubjectKind::Word),
            other => panic!("expected InvalidEncoding, got {:?}", other),
        }
        assert_eq!(
            reader.next_token(SubjectKind::Number).await.unwrap().as_deref(),
            Some("121")
        );
    }

    #[tokio::test]
    async fn test_multibyte_tokens_survive_splitting() {
        let input: &[u8] = "café été\n".as_bytes();
        let mut reader = TokenReader::new(input);
        assert_eq!(reader.next_token(SubjectKind::Word).await.unwrap().as_deref(), Some("café"));
        assert_eq!(reader.next_token(SubjectKind::Word).await.unwrap().as_deref(), Some("été"));
    }

    #[tokio::test]
    async fn test_line_limit_caps_buffering() {
        let input: &[u8] = b"abcdefghijkl\n";
        let mut reader = TokenReader::with_line_limit(input, 8);

        match reader.next_token(SubjectKind::Word).await {
            Err(PalindromeError::LineTooLong { kind, limit }) => {
                assert_eq!(kind, SubjectKind::Word);
                assert_eq!(limit, 8);
            }
            other => panic!("expected LineTooLong, got {:?}", other),
        }

        let input: &[u8] = b"abcdefg\n";
        let mut reader = TokenReader::with_line_limit(input, 8);
        assert_eq!(reader.next_token(SubjectKind::Word).await.unwrap().as_deref(), Some("abcdefg"));
    }

    #[tokio::test]
    async fn test_blank_line_only_before_first_prompt_of_a_check() {
        let mut reporter = ConsoleReporter::new(Vec::new(), OutputFormat::Text);
        reporter
            .report(&CheckReport {
                kind: SubjectKind::Word,
                given: "a".to_string(),
                reversed: "a".to_string(),
                is_palindrome: true,
            })
            .await
            .unwrap();
        reporter.prompt("Enter a 5-digit number: ").await.unwrap();
        reporter.notice("Please try again.").await.unwrap();
        reporter.prompt("Enter a 5-digit number: ").await.unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(output.ends_with(
            "palindrome.\n\nEnter a 5-digit number: Please try again.\nEnter a 5-digit number: "
        ));
    }

    #[tokio::test]
    async fn test_text_report_lines() {
        let mut reporter = ConsoleReporter::new(Vec::new(), OutputFormat::Text);
        reporter
            .report(&CheckReport {
                kind: SubjectKind::Word,
                given: "hello".to_string(),
                reversed: "olleh".to_string(),
                is_palindrome: false,
            })
            .await
            .unwrap();
        reporter.prompt("Enter a 5-digit number: ").await.unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            output,
            "Given word: hello\nReversed word: olleh\nThe word is NOT a palindrome.\n\nEnter a 5-digit number: "
        );
    }

    #[tokio::test]
    async fn test_json_mode_suppresses_prompts() {
        let mut reporter = ConsoleReporter::new(Vec::new(), OutputFormat::Json);
        reporter.prompt("Enter a word: ").await.unwrap();
        reporter.notice("try again").await.unwrap();
        reporter
            .report(&CheckReport {
                kind: SubjectKind::Number,
                given: "0".to_string(),
                reversed: "0".to_string(),
                is_palindrome: true,
            })
            .await
            .unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            output,
            "{\"kind\":\"number\",\"given\":\"0\",\"reversed\":\"0\",\"is_palindrome\":true}\n"
        );
    }
}
