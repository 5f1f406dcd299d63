//! UI-facing feedback helpers for the status banner and toast queue.

use super::{ConsoleApp, StatusMessage, ToastMessage, STATUS_TTL, TOAST_LIMIT, TOAST_TTL};
use std::time::Instant;

impl ConsoleApp {
    /// Sets the status banner message and mirrors it into the toast queue.
    pub(super) fn set_status(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.status = Some(StatusMessage {
            text: text.clone(),
            expires_at: Instant::now() + STATUS_TTL,
        });
        self.push_toast(text);
    }

    fn push_toast(&mut self, text: String) {
        let now = Instant::now();
        // Repeating feedback refreshes the newest toast instead of stacking.
        if let Some(last) = self.toasts.back_mut() {
            if last.text == text {
                last.expires_at = now + TOAST_TTL;
                return;
            }
        }
        self.toasts.push_back(ToastMessage {
            text,
            expires_at: now + TOAST_TTL,
        });
        while self.toasts.len() > TOAST_LIMIT {
            self.toasts.pop_front();
        }
    }

    /// Drops the status banner and toasts whose TTL elapsed.
    pub(super) fn expire_feedback(&mut self) {
        let now = Instant::now();
        if let Some(status) = &self.status {
            if now >= status.expires_at {
                self.status = None;
            }
        }
        self.toasts.retain(|toast| now < toast.expires_at);
    }
}
