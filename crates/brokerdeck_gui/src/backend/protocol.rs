//! Protocol types for the console backend worker.

use brokerdeck_core::models::filter::MessageFilter;
use brokerdeck_core::models::verification::VerificationResponse;

/// Commands issued by the UI thread for the backend worker to execute.
#[derive(Debug)]
pub enum ConsoleCmd {
    /// Dry-run the given filters against a sample message on the management
    /// API. `request_id` ties the eventual event back to the dialog state
    /// that dispatched it.
    VerifyFilters {
        request_id: u64,
        topic: String,
        filters: Vec<MessageFilter>,
        message: String,
    },
}

/// Events produced by the backend worker and polled by the UI thread.
#[derive(Debug)]
pub enum ConsoleEvent {
    /// The management API answered the verification request.
    VerificationFinished {
        request_id: u64,
        response: VerificationResponse,
    },
    /// The verification request itself failed (transport or API error).
    VerificationFailed { request_id: u64, message: String },
}
