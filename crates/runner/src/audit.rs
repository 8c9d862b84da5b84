use loggate_classifier::{ClassificationResult, ClassifierConfig, classify};

use crate::{LogSource, ResultSink};

/// Runs one audit cycle: retrieve a snapshot, classify it, report the
/// outcome through the sink.
///
/// A retrieval failure propagates unchanged and leaves the sink untouched.
/// The classification result is also returned so callers can inspect it
/// beyond what the sink records.
pub async fn audit<S, K>(
    source: &mut S,
    sink: &mut K,
    config: &ClassifierConfig,
) -> Result<ClassificationResult, S::Error>
where
    S: LogSource,
    K: ResultSink,
{
    let snapshot = source.fetch_logs().await?;
    tracing::debug!(entries = snapshot.entries.len(), "browser log snapshot retrieved");

    let result = classify(&snapshot.entries, config);

    for message in &result.failures {
        sink.add_failure(message);
    }
    for message in &result.notices {
        sink.add_warning(message);
    }

    if !result.is_clean() {
        tracing::info!(
            failures = result.failures.len(),
            notices = result.notices.len(),
            "console log audit failed the run"
        );
    }

    Ok(result)
}
