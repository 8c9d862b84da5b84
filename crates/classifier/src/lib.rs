//! Severity classification and exclusion filtering for browser console logs.
//!
//! The classifier partitions a log snapshot into warnings and errors, drops
//! entries matching exclusion rules, and routes the rest into hard failures
//! and non-fatal notices according to the configured policy. It is a pure
//! function over its inputs: no I/O, no retained state.

mod classify;
mod config;
mod exclude;

pub use classify::{ClassificationResult, classify, is_included};
pub use config::ClassifierConfig;
pub use exclude::ExclusionRule;

/// Errors produced when building a classifier configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid exclusion pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
