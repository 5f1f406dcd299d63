//! Background worker thread for management API access.

use crate::backend::{ConsoleCmd, ConsoleEvent};
use brokerdeck_core::FiltersRepository;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use tracing::error;

/// Handle for sending commands to, and receiving events from, the backend
/// worker.
pub struct BackendHandle {
    pub cmd_tx: Sender<ConsoleCmd>,
    pub evt_rx: Receiver<ConsoleEvent>,
}

impl BackendHandle {
    /// Build a handle around externally owned channels for headless tests.
    #[cfg(test)]
    pub(crate) fn from_test_channels(
        cmd_tx: Sender<ConsoleCmd>,
        evt_rx: Receiver<ConsoleEvent>,
    ) -> Self {
        Self { cmd_tx, evt_rx }
    }
}

/// Spawn the backend worker thread that performs blocking management API
/// calls.
///
/// All I/O stays off the UI thread; the worker replies with [`ConsoleEvent`]
/// values that are polled each frame. Repository failures are absorbed into
/// events and never escape the worker.
///
/// # Panics
/// Panics if the worker thread cannot be spawned.
pub fn spawn_backend(repository: Arc<dyn FiltersRepository>) -> BackendHandle {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded::<ConsoleEvent>();

    thread::Builder::new()
        .name("brokerdeck-backend".to_string())
        .spawn(move || {
            for cmd in cmd_rx.iter() {
                match cmd {
                    ConsoleCmd::VerifyFilters {
                        request_id,
                        topic,
                        filters,
                        message,
                    } => {
                        let event = match repository.verify(&topic, &filters, &message) {
                            Ok(response) => ConsoleEvent::VerificationFinished {
                                request_id,
                                response,
                            },
                            Err(err) => {
                                error!(topic = topic.as_str(), "filter verification failed: {err}");
                                ConsoleEvent::VerificationFailed {
                                    request_id,
                                    message: err.display_message(),
                                }
                            }
                        };
                        let _ = evt_tx.send(event);
                    }
                }
            }
        })
        .expect("spawn backend thread");

    BackendHandle { cmd_tx, evt_rx }
}
