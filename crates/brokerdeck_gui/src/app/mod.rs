//! Native egui console shell for subscription filter debugging.

mod debugger;
mod state_feedback;
mod style;
mod ui;

use crate::backend::{spawn_backend, BackendHandle, ConsoleEvent};
use brokerdeck_core::models::filter::MessageFilter;
use brokerdeck_core::{Config, FiltersRepository};
use debugger::{DebuggerHandle, DebuggerOutcome, FilterDebugger};
use eframe::egui;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::warn;

const STATUS_TTL: Duration = Duration::from_secs(5);
const TOAST_TTL: Duration = Duration::from_secs(4);
const TOAST_LIMIT: usize = 4;
/// Repaint cadence while a verification round-trip is outstanding.
const IN_FLIGHT_REPAINT: Duration = Duration::from_millis(100);
#[doc = "Default initial window size for the console."]
pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [980.0, 680.0];
#[doc = "Minimum enforced window size to keep the modal usable."]
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [760.0, 540.0];

struct StatusMessage {
    text: String,
    expires_at: Instant,
}

struct ToastMessage {
    text: String,
    expires_at: Instant,
}

/// Native egui console shell.
///
/// Owns the UI state and communicates with the background worker via
/// channels so the `update` loop never blocks on the management API.
pub(crate) struct ConsoleApp {
    backend: BackendHandle,
    management_url: String,
    topic_name: String,
    /// Working filter list for the topic's subscription; replaced only by a
    /// debugger commit.
    subscription_filters: Vec<MessageFilter>,
    debugger: Option<FilterDebugger>,
    debugger_handle: Option<DebuggerHandle>,
    status: Option<StatusMessage>,
    toasts: VecDeque<ToastMessage>,
    style_applied: bool,
}

impl ConsoleApp {
    /// Construct the app shell and spawn its backend worker.
    pub(crate) fn new(config: Config, repository: Arc<dyn FiltersRepository>) -> Self {
        let backend = spawn_backend(repository);
        Self {
            backend,
            management_url: config.management_url,
            topic_name: config.topic,
            subscription_filters: Vec::new(),
            debugger: None,
            debugger_handle: None,
            status: None,
            toasts: VecDeque::with_capacity(TOAST_LIMIT),
            style_applied: false,
        }
    }

    fn debugger_open(&self) -> bool {
        self.debugger
            .as_ref()
            .is_some_and(|dialog| !dialog.is_closed())
    }

    /// Launch the filter debugger over a private copy of the working list.
    fn open_debugger(&mut self) {
        if self.debugger_open() {
            return;
        }
        let (dialog, handle) =
            FilterDebugger::open(self.topic_name.clone(), &self.subscription_filters);
        self.debugger = Some(dialog);
        self.debugger_handle = Some(handle);
    }

    fn apply_event(&mut self, event: ConsoleEvent) {
        match self.debugger.as_mut() {
            Some(dialog) => dialog.handle_event(event),
            // A response can land after the dialog is gone; there is nothing
            // left to update.
            None => warn!("dropping verification event with no open debugger"),
        }
    }

    /// Collect the dialog outcome once it reports closed.
    fn poll_debugger_outcome(&mut self) {
        let closed = self
            .debugger
            .as_ref()
            .is_some_and(|dialog| dialog.is_closed());
        if !closed {
            return;
        }
        self.debugger = None;
        let Some(handle) = self.debugger_handle.take() else {
            return;
        };
        match handle.try_outcome() {
            DebuggerOutcome::Committed(commit) => {
                self.subscription_filters = commit.filter_list;
                self.set_status(format!(
                    "Updated {} filter(s) for {}.",
                    self.subscription_filters.len(),
                    self.topic_name
                ));
            }
            DebuggerOutcome::Dismissed | DebuggerOutcome::Pending => {}
        }
    }
}

impl eframe::App for ConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_style(ctx);
        self.expire_feedback();

        while let Ok(event) = self.backend.evt_rx.try_recv() {
            self.apply_event(event);
        }

        self.render_top_bar(ctx);
        self.render_status_bar(ctx);
        self.render_subscription_panel(ctx);
        self.render_debugger_modal(ctx);
        self.render_toasts(ctx);

        self.poll_debugger_outcome();

        // Worker events arrive off the UI thread; keep repainting so the
        // result is picked up promptly once it lands.
        if self.debugger.as_ref().is_some_and(|dialog| dialog.in_flight()) {
            ctx.request_repaint_after(IN_FLIGHT_REPAINT);
        }
    }
}

#[cfg(test)]
mod tests;
