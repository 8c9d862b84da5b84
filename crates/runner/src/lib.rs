//! Audit driver wiring a browser log source to a test result sink.
//!
//! One audit cycle retrieves the console log snapshot accumulated since the
//! last check, classifies it, and reports failures and notices through the
//! host test framework's sink. The classifier core stays pure; everything
//! side-effecting lives behind the boundary traits defined here.

mod audit;
mod boundary;
mod options;

pub use audit::audit;
pub use boundary::{LogSource, ResultSink};
pub use options::{AuditOptions, ExcludeSpec};
