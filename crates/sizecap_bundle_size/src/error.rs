use std::fmt;

use thiserror::Error;

use crate::types::Violation;

/// Construction-time failure for an unusable option shape. Fatal: no
/// plugin is produced and build setup aborts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(
        "Size check enabled but no maxSize specified. Please provide a number or config object."
    )]
    MissingMaxSize,

    #[error("Invalid size check option")]
    InvalidOption,
}

/// Raised once an audit pass finishes with at least one file over the
/// threshold while the configuration is in throw mode. Carries every
/// violation from the pass, not just the first.
#[derive(Debug, Clone)]
pub struct SizeExceededError {
    violations: Vec<Violation>,
}

impl SizeExceededError {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for SizeExceededError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.violations.iter().map(Violation::message).collect();
        write!(f, "{}", messages.join("\n"))
    }
}

impl std::error::Error for SizeExceededError {}
