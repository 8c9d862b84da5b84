use regex::Regex;

use crate::ConfigError;

/// A matcher that suppresses console log messages from classification.
///
/// Rules form a logical OR: a message matched by any one rule is excluded
/// from both outputs.
#[derive(Debug, Clone)]
pub enum ExclusionRule {
    /// Matches iff the text occurs anywhere in the message.
    Substring(String),
    /// Matches iff the compiled regex matches the message.
    Pattern(Regex),
}

impl ExclusionRule {
    /// Builds a substring rule.
    pub fn substring(text: impl Into<String>) -> Self {
        Self::Substring(text.into())
    }

    /// Compiles a pattern rule. Broken patterns surface here, at
    /// configuration time, never during matching.
    pub fn pattern(pattern: &str) -> Result<Self, ConfigError> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    /// Whether this rule matches the given message.
    pub fn matches(&self, message: &str) -> bool {
        match self {
            Self::Substring(text) => message.contains(text.as_str()),
            Self::Pattern(regex) => regex.is_match(message),
        }
    }
}
