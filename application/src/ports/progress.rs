//! Progress notification port
//!
//! Defines the interface for reporting progress around the remote call.

use llm_qa_domain::Model;

/// Callback for progress updates while a question is being answered
///
/// Implementations live in the presentation layer (console spinner, etc.)
pub trait AskProgressNotifier: Send + Sync {
    /// Called right before the remote request is sent
    fn on_request_start(&self, _model: &Model) {}

    /// Called once the remote request finished, successfully or not
    fn on_request_end(&self, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl AskProgressNotifier for NoProgress {}
