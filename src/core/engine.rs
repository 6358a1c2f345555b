use crate::core::{Check, ReportSink, TokenSource};
use crate::domain::model::CheckReport;
use crate::utils::error::{PalindromeError, Result};

pub struct CheckEngine<S: TokenSource, K: ReportSink> {
    source: S,
    sink: K,
    max_attempts: usize,
}

impl<S: TokenSource, K: ReportSink> CheckEngine<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        Self {
            source,
            sink,
            max_attempts: 1,
        }
    }

    /// Values below 1 are treated as 1.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Runs every check in order and stops at the first terminal error.
    pub async fn run(&mut self, checks: &[Box<dyn Check>]) -> Result<Vec<CheckReport>> {
        tracing::info!("Starting {} palindrome checks", checks.len());

        let mut reports = Vec::with_capacity(checks.len());
        for check in checks {
            let report = self.run_check(check.as_ref()).await?;
            reports.push(report);
        }

        tracing::info!("All checks completed");
        Ok(reports)
    }

    pub async fn run_check(&mut self, check: &dyn Check) -> Result<CheckReport> {
        let mut attempt = 1;
        loop {
            self.sink.prompt(check.prompt()).await?;

            match self.read_and_evaluate(check, attempt).await {
                Ok(report) => {
                    self.sink.report(&report).await?;
                    return Ok(report);
                }
                Err(e) if e.is_retryable() && attempt < self.max_attempts => {
                    tracing::warn!(
                        "Attempt {}/{} for {} failed: {}",
                        attempt,
                        self.max_attempts,
                        check.kind(),
                        e
                    );
                    self.source.discard_buffered();
                    self.sink
                        .notice(&format!("{}. Please try again.", e.user_friendly_message()))
                        .await?;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn read_and_evaluate(&mut self, check: &dyn Check, attempt: usize) -> Result<CheckReport> {
        let token = self
            .source
            .next_token(check.kind())
            .await?
            .ok_or(PalindromeError::EndOfInput { kind: check.kind() })?;
        tracing::debug!(kind = %check.kind(), attempt, "read token");
        check.evaluate(&token)
    }

    pub fn into_parts(self) -> (S, K) {
        (self.source, self.sink)
    }
}
