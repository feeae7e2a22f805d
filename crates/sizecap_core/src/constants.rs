//! Reserved output file suffixes.
//!
//! Files with these suffixes are companions to the artifacts a user ships,
//! not artifacts themselves, so the size check never measures them: they
//! produce no log line and do not affect the pass/fail outcome.

/// Source map companion files (`main.js.map`, `style.css.map`, ...)
pub const SOURCE_MAP_SUFFIX: &str = ".map";

/// TypeScript declaration files emitted alongside chunks
pub const DECLARATION_SUFFIX: &str = ".d.ts";

/// All suffixes excluded from measurement
pub const RESERVED_SUFFIXES: &[&str] = &[SOURCE_MAP_SUFFIX, DECLARATION_SUFFIX];

/// Returns true when `file_name` carries a reserved suffix.
pub fn is_reserved_suffix(file_name: &str) -> bool {
    RESERVED_SUFFIXES.iter().any(|suffix| file_name.ends_with(suffix))
}
