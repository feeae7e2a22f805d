//! Core bundle model for sizecap tools.
//!
//! This crate provides the shared types for inspecting the output of a
//! bundling step, including:
//! - Output descriptors (assets and chunks) and their byte measurement
//! - The insertion-ordered bundle mapping a build produces
//! - Reserved output suffixes that are never measured
//! - Human-readable byte formatting

mod bundle;
mod constants;
mod format;
mod output;

// Re-export public API
pub use bundle::Bundle;
pub use constants::{DECLARATION_SUFFIX, RESERVED_SUFFIXES, SOURCE_MAP_SUFFIX, is_reserved_suffix};
pub use format::human_bytes;
pub use output::{AssetSource, Output, OutputAsset, OutputChunk};
