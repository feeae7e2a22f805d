use std::io::Write;

use colored::Colorize;
use log::warn;

/// Sink for the auditor's per-file verdicts.
///
/// The audit logic never writes to process streams directly; it hands
/// rendered lines to a reporter, so tests can collect them in memory
/// instead of capturing output.
pub trait Reporter {
    /// A file at or under the threshold.
    fn success(&mut self, line: &str);

    /// An oversized file in warn mode. Emitted immediately; the pass
    /// continues.
    fn warning(&mut self, line: &str);
}

/// Renders verdicts to any writer, one line each. Warnings are marked and
/// colored red the way a failing budget should be.
pub struct WriteReporter<W: Write> {
    writer: W,
}

impl<W: Write> WriteReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for WriteReporter<W> {
    fn success(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{line}") {
            warn!("Failed to write success line: {}", e);
        }
    }

    fn warning(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{} {}", "⚠".yellow().bold(), line.red()) {
            warn!("Failed to write warning line: {}", e);
        }
    }
}

/// In-memory reporter for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct CollectingReporter {
    pub(crate) successes: Vec<String>,
    pub(crate) warnings: Vec<String>,
}

#[cfg(test)]
impl Reporter for CollectingReporter {
    fn success(&mut self, line: &str) {
        self.successes.push(line.to_string());
    }

    fn warning(&mut self, line: &str) {
        self.warnings.push(line.to_string());
    }
}
