use loggate_classifier::{ClassifierConfig, ConfigError, ExclusionRule};
use serde::Deserialize;

/// Caller-facing audit options, as found in the host test framework's
/// configuration.
///
/// Absent keys take the documented defaults; unrecognized keys are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditOptions {
    pub fail_on_warning: bool,
    pub fail_on_error: bool,
    pub log_warnings: bool,
    pub exclude: Vec<ExcludeSpec>,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            fail_on_warning: false,
            fail_on_error: true,
            log_warnings: true,
            exclude: Vec::new(),
        }
    }
}

/// One `exclude` item: a plain string is a substring rule, an object with a
/// `pattern` key is a regex rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExcludeSpec {
    Text(String),
    Pattern { pattern: String },
}

impl AuditOptions {
    /// Parses options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolves the options into a classifier configuration, compiling
    /// pattern rules once. The first broken pattern aborts construction.
    pub fn into_config(self) -> Result<ClassifierConfig, ConfigError> {
        let mut exclusions = Vec::with_capacity(self.exclude.len());
        for spec in self.exclude {
            exclusions.push(match spec {
                ExcludeSpec::Text(text) => ExclusionRule::substring(text),
                ExcludeSpec::Pattern { pattern } => ExclusionRule::pattern(&pattern)?,
            });
        }
        Ok(ClassifierConfig {
            fail_on_warning: self.fail_on_warning,
            fail_on_error: self.fail_on_error,
            log_warnings: self.log_warnings,
            exclusions,
        })
    }
}
