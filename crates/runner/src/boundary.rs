use loggate_protocol::LogSnapshot;

/// Source of browser console log snapshots.
///
/// One call returns everything accumulated since the last retrieval. The
/// driver never retries or pages; a failed retrieval is returned unchanged
/// and classification is skipped for that cycle. Timeout handling, if any,
/// belongs inside the implementation.
pub trait LogSource {
    /// Error produced when retrieval fails.
    type Error;

    /// Retrieves the log entries accumulated since the last call.
    fn fetch_logs(&mut self) -> impl Future<Output = Result<LogSnapshot, Self::Error>> + Send;
}

/// Sink for classified results in the host test framework.
///
/// Failures must be reported through whatever primitive marks the current
/// run failed; warnings through the non-fatal annotation primitive.
pub trait ResultSink {
    /// Reports a message as a hard failure of the current run.
    fn add_failure(&mut self, message: &str);

    /// Reports a message as a non-fatal warning.
    fn add_warning(&mut self, message: &str);
}
