use loggate_protocol::{LogEntry, Severity};

use crate::{ClassifierConfig, ExclusionRule};

/// Output of one classification pass.
///
/// Every included WARNING or SEVERE entry lands in exactly one of the two
/// lists; excluded and unclassified entries land in neither.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassificationResult {
    /// Formatted messages that must fail the run, in routing order.
    pub failures: Vec<String>,
    /// Formatted messages surfaced as non-fatal warnings, in routing order.
    pub notices: Vec<String>,
}

impl ClassificationResult {
    /// `true` iff nothing was routed to `failures`.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Returns `true` iff no exclusion rule matches the message.
///
/// Rules form a logical OR; evaluation order is unobservable.
pub fn is_included(message: &str, exclusions: &[ExclusionRule]) -> bool {
    !exclusions.iter().any(|rule| rule.matches(message))
}

/// Partitions a log snapshot into failures and notices.
///
/// Warnings are processed before errors; within each group input order is
/// preserved. Entries with an unknown or missing level produce no output
/// and no error.
pub fn classify(entries: &[LogEntry], config: &ClassifierConfig) -> ClassificationResult {
    let mut result = ClassificationResult::default();

    if config.log_warnings {
        let warnings = entries.iter().filter(|entry| {
            entry.severity() == Some(Severity::Warning)
                && is_included(&entry.message, &config.exclusions)
        });
        for entry in warnings {
            route(&mut result, Severity::Warning, entry, config.fail_on_warning);
        }
    }

    let errors = entries.iter().filter(|entry| {
        entry.severity() == Some(Severity::Severe)
            && is_included(&entry.message, &config.exclusions)
    });
    for entry in errors {
        route(&mut result, Severity::Severe, entry, config.fail_on_error);
    }

    result
}

fn route(result: &mut ClassificationResult, severity: Severity, entry: &LogEntry, fail: bool) {
    let line = format!("{}: {}", severity.name(), entry.message);
    if fail {
        result.failures.push(line);
    } else {
        result.notices.push(line);
    }
}
