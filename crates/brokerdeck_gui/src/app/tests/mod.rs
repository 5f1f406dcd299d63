//! Headless app tests that exercise the debugger dialog and shell state.

use super::*;
use crate::backend::{BackendHandle, ConsoleCmd, ConsoleEvent};
use brokerdeck_core::models::filter::MessageFilter;
use brokerdeck_core::models::verification::{VerificationResponse, VERIFICATION_ERROR_STATUS};
use crossbeam_channel::{unbounded, Receiver, Sender};

struct TestHarness {
    app: ConsoleApp,
    cmd_rx: Receiver<ConsoleCmd>,
    evt_tx: Sender<ConsoleEvent>,
}

fn header_filter(key: &str, value: &str) -> MessageFilter {
    MessageFilter::new("header").with_field("match", format!("{key}={value}"))
}

fn make_app() -> TestHarness {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();
    let app = ConsoleApp {
        backend: BackendHandle::from_test_channels(cmd_tx, evt_rx),
        management_url: "http://localhost:8090".to_string(),
        topic_name: "orders.created".to_string(),
        subscription_filters: vec![header_filter("x", "1")],
        debugger: None,
        debugger_handle: None,
        status: None,
        toasts: VecDeque::with_capacity(TOAST_LIMIT),
        style_applied: false,
    };
    TestHarness {
        app,
        cmd_rx,
        evt_tx,
    }
}

fn recv_cmd(rx: &Receiver<ConsoleCmd>) -> ConsoleCmd {
    rx.recv_timeout(Duration::from_millis(200))
        .expect("expected outbound command")
}

/// Opens the debugger and returns a mutable reference to the dialog.
fn open_dialog(harness: &mut TestHarness) -> &mut FilterDebugger {
    harness.app.open_debugger();
    harness.app.debugger.as_mut().expect("debugger open")
}
