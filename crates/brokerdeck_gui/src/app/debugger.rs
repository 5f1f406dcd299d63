//! Filter debugger dialog state and its completion handle.
//!
//! The dialog owns a private copy of the opener's filter list; edits stay
//! local until the user confirms, and the opener only ever observes the
//! committed list through [`DebuggerHandle`].

use crate::backend::{ConsoleCmd, ConsoleEvent};
use brokerdeck_core::models::filter::{format_filter_list, parse_filter_list, MessageFilter};
use brokerdeck_core::models::verification::VERIFICATION_ERROR_STATUS;
use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};
use tracing::debug;

/// Commit value handed back to the dialog opener on explicit confirm.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FilterListCommit {
    pub(crate) filter_list: Vec<MessageFilter>,
}

/// Outcome view of the debugger completion handle.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DebuggerOutcome {
    /// Dialog still open; no decision yet.
    Pending,
    /// User confirmed; carries the edited filter list.
    Committed(FilterListCommit),
    /// Dialog was closed without confirming.
    Dismissed,
}

/// Completion handle returned by [`FilterDebugger::open`].
///
/// Resolves at most once: a commit arrives only on explicit confirm, and a
/// dropped dialog resolves as dismissed.
pub(crate) struct DebuggerHandle {
    outcome_rx: Receiver<FilterListCommit>,
}

impl DebuggerHandle {
    /// Poll the dialog outcome without blocking.
    pub(crate) fn try_outcome(&self) -> DebuggerOutcome {
        match self.outcome_rx.try_recv() {
            Ok(commit) => DebuggerOutcome::Committed(commit),
            Err(TryRecvError::Empty) => DebuggerOutcome::Pending,
            Err(TryRecvError::Disconnected) => DebuggerOutcome::Dismissed,
        }
    }
}

/// Per-dialog state for the filter verification modal.
pub(crate) struct FilterDebugger {
    topic_name: String,
    /// Last successfully parsed filter list; seeds the editor and backs
    /// verification when the text has not been touched since.
    filter_list: Vec<MessageFilter>,
    /// Editable JSON surface shown in the modal.
    pub(crate) filters_text: String,
    /// Editable sample message the filters are evaluated against.
    pub(crate) message: String,
    verification_status: String,
    verification_error: Option<String>,
    verification_in_flight: bool,
    /// Monotonic token generator for verification requests.
    request_seq: u64,
    /// Token of the request allowed to update verification state.
    active_request: Option<u64>,
    stale_responses: u64,
    closed: bool,
    outcome_tx: Option<Sender<FilterListCommit>>,
}

impl FilterDebugger {
    /// Open a dialog for `topic_name` over a private copy of `filters`.
    ///
    /// # Returns
    /// The dialog plus the completion handle its opener polls for the
    /// commit value.
    pub(crate) fn open(
        topic_name: impl Into<String>,
        filters: &[MessageFilter],
    ) -> (Self, DebuggerHandle) {
        let filter_list = filters.to_vec();
        let (outcome_tx, outcome_rx) = bounded(1);
        let dialog = Self {
            topic_name: topic_name.into(),
            filters_text: format_filter_list(&filter_list),
            filter_list,
            message: String::new(),
            verification_status: String::new(),
            verification_error: None,
            verification_in_flight: false,
            request_seq: 0,
            active_request: None,
            stale_responses: 0,
            closed: false,
            outcome_tx: Some(outcome_tx),
        };
        (dialog, DebuggerHandle { outcome_rx })
    }

    pub(crate) fn topic_name(&self) -> &str {
        &self.topic_name
    }

    pub(crate) fn status(&self) -> &str {
        &self.verification_status
    }

    pub(crate) fn error_message(&self) -> Option<&str> {
        self.verification_error.as_deref()
    }

    pub(crate) fn in_flight(&self) -> bool {
        self.verification_in_flight
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed
    }

    fn reset_verification_state(&mut self) {
        self.verification_status.clear();
        self.verification_error = None;
        self.verification_in_flight = false;
    }

    fn fail_locally(&mut self, message: String) {
        self.verification_status = VERIFICATION_ERROR_STATUS.to_string();
        self.verification_error = Some(message);
        self.verification_in_flight = false;
        self.active_request = None;
    }

    /// Parse the editor text, remembering the result as the current list.
    fn parse_editor_filters(&mut self) -> Result<Vec<MessageFilter>, String> {
        match parse_filter_list(&self.filters_text) {
            Ok(filters) => {
                self.filter_list = filters.clone();
                Ok(filters)
            }
            Err(err) => Err(format!("invalid filter JSON: {err}")),
        }
    }

    /// Dispatch a verification request for the current topic, filters, and
    /// sample message.
    ///
    /// Always clears prior result state first. Repeated calls while an
    /// earlier request is outstanding supersede it: only the newest token may
    /// update state when responses arrive.
    pub(crate) fn verify(&mut self, cmd_tx: &Sender<ConsoleCmd>) {
        self.reset_verification_state();

        let filters = match self.parse_editor_filters() {
            Ok(filters) => filters,
            Err(message) => {
                self.fail_locally(message);
                return;
            }
        };

        self.request_seq += 1;
        let request_id = self.request_seq;
        self.active_request = Some(request_id);
        self.verification_in_flight = true;

        let cmd = ConsoleCmd::VerifyFilters {
            request_id,
            topic: self.topic_name.clone(),
            filters,
            message: self.message.clone(),
        };
        if cmd_tx.send(cmd).is_err() {
            self.fail_locally("backend unavailable".to_string());
        }
    }

    /// Apply a backend verification event.
    ///
    /// Responses for superseded requests are counted and dropped so a slow
    /// earlier verification can never overwrite newer state.
    pub(crate) fn handle_event(&mut self, event: ConsoleEvent) {
        let request_id = match &event {
            ConsoleEvent::VerificationFinished { request_id, .. }
            | ConsoleEvent::VerificationFailed { request_id, .. } => *request_id,
        };
        if self.active_request != Some(request_id) {
            self.stale_responses += 1;
            debug!(request_id, "dropping verification response for superseded request");
            return;
        }

        self.active_request = None;
        self.verification_in_flight = false;
        match event {
            ConsoleEvent::VerificationFinished { response, .. } => {
                self.verification_status = response.status;
                self.verification_error = response.error_message;
            }
            ConsoleEvent::VerificationFailed { message, .. } => {
                self.verification_status = VERIFICATION_ERROR_STATUS.to_string();
                self.verification_error = Some(message);
            }
        }
    }

    /// Close the dialog and hand the current filter list to the opener.
    ///
    /// # Returns
    /// `false` when the editor text does not parse as a filter list; the
    /// dialog stays open and shows the parse failure instead.
    pub(crate) fn confirm(&mut self) -> bool {
        let filters = match self.parse_editor_filters() {
            Ok(filters) => filters,
            Err(message) => {
                self.fail_locally(message);
                return false;
            }
        };
        if let Some(outcome_tx) = self.outcome_tx.take() {
            let _ = outcome_tx.send(FilterListCommit {
                filter_list: filters,
            });
        }
        self.closed = true;
        true
    }

    /// Close the dialog without producing a commit value.
    pub(crate) fn dismiss(&mut self) {
        // Dropping the sender resolves the opener's handle as dismissed.
        self.outcome_tx = None;
        self.closed = true;
    }

    #[cfg(test)]
    pub(crate) fn stale_responses(&self) -> u64 {
        self.stale_responses
    }
}
