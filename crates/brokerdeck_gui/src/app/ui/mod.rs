//! UI panel modules extracted from the main app update loop.

/// Filter verification modal with static backdrop.
pub(super) mod debugger_modal;
/// Top bar, subscription panel, and bottom status bar.
pub(super) mod panels;
/// Transient toast notifications.
pub(super) mod toasts;
