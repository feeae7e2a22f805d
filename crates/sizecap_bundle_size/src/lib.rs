//! Per-file size budgets for bundler output.
//!
//! This crate implements a build-completion plugin that measures every file
//! a bundler emits and enforces a maximum byte size on each one. Depending
//! on configuration a violation either fails the build with one combined
//! error listing every offender, or is reported as a warning while the
//! build continues.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use sizecap_bundle_size::{SizeCheckOption, WriteReporter, size_check};
//! use sizecap_core::{Bundle, Output};
//!
//! # fn main() -> anyhow::Result<()> {
//! // A bare number is a byte limit; violations fail the build.
//! let plugin = size_check(SizeCheckOption::Limit(1024 * 1024))?;
//!
//! let mut bundle = Bundle::new();
//! bundle.insert("main.js", Output::chunk("console.log('hello');"));
//!
//! let mut reporter = WriteReporter::new(std::io::stdout());
//! if let Some(hook) = plugin.hook() {
//!     let result = hook.write_bundle(&bundle, &mut reporter)?;
//!     assert_eq!(result.files_checked, 1);
//! }
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod error;
mod plugin;
mod reporter;
mod types;

// Re-export public API
pub use checker::run_size_check;
pub use config::{Normalized, SizeCheckConfig, SizeCheckOption};
pub use error::{ConfigError, SizeExceededError};
pub use plugin::{PLUGIN_NAME, PLUGIN_NAME_DISABLED, SizeCheckHook, SizeCheckPlugin, size_check};
pub use reporter::{Reporter, WriteReporter};
pub use types::{CheckResult, Violation};
