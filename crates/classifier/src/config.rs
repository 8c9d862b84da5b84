use crate::ExclusionRule;

/// Classification policy for one test run.
///
/// Resolved once at construction and immutable afterwards. `classify`
/// borrows it, so independent runs never share mutable state.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Route included warnings to failures instead of notices.
    pub fail_on_warning: bool,
    /// Route included errors to failures instead of notices.
    pub fail_on_error: bool,
    /// Collect warnings at all. When `false`, warnings are dropped entirely
    /// and `fail_on_warning` has no effect.
    pub log_warnings: bool,
    /// Exclusion rules applied to warning and error messages alike.
    pub exclusions: Vec<ExclusionRule>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            fail_on_warning: false,
            fail_on_error: true,
            log_warnings: true,
            exclusions: Vec::new(),
        }
    }
}
