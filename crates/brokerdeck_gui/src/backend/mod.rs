//! Backend worker wiring for the console.
//!
//! This module exposes the command/event protocol plus the worker spawn
//! helper used by the egui UI thread.

mod protocol;
mod worker;

pub use protocol::{ConsoleCmd, ConsoleEvent};
pub use worker::{spawn_backend, BackendHandle};

#[cfg(test)]
mod tests {
    use super::*;
    use brokerdeck_core::models::filter::MessageFilter;
    use brokerdeck_core::models::verification::VerificationResponse;
    use brokerdeck_core::{ConsoleError, FiltersRepository};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Scripted repository double that records calls and replays queued
    /// results.
    struct ScriptedRepository {
        calls: Mutex<Vec<(String, Vec<MessageFilter>, String)>>,
        results: Mutex<VecDeque<Result<VerificationResponse, ConsoleError>>>,
    }

    impl ScriptedRepository {
        fn new(results: Vec<Result<VerificationResponse, ConsoleError>>) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                results: Mutex::new(results.into()),
            })
        }

        fn calls(&self) -> Vec<(String, Vec<MessageFilter>, String)> {
            self.calls.lock().expect("calls lock").clone()
        }
    }

    impl FiltersRepository for ScriptedRepository {
        fn verify(
            &self,
            topic: &str,
            filters: &[MessageFilter],
            message: &str,
        ) -> Result<VerificationResponse, ConsoleError> {
            self.calls.lock().expect("calls lock").push((
                topic.to_string(),
                filters.to_vec(),
                message.to_string(),
            ));
            self.results
                .lock()
                .expect("results lock")
                .pop_front()
                .expect("unscripted verify call")
        }
    }

    fn recv_event(rx: &crossbeam_channel::Receiver<ConsoleEvent>) -> ConsoleEvent {
        rx.recv_timeout(Duration::from_secs(2))
            .expect("expected backend event")
    }

    fn header_filter() -> MessageFilter {
        MessageFilter::new("header").with_field("match", "x=1")
    }

    #[test]
    fn worker_forwards_the_verification_result_with_its_request_id() {
        let repository = ScriptedRepository::new(vec![Ok(VerificationResponse {
            status: "MATCHED".to_string(),
            error_message: None,
        })]);
        let backend = spawn_backend(repository.clone());

        backend
            .cmd_tx
            .send(ConsoleCmd::VerifyFilters {
                request_id: 7,
                topic: "orders.created".to_string(),
                filters: vec![header_filter()],
                message: "{}".to_string(),
            })
            .expect("send verify");

        match recv_event(&backend.evt_rx) {
            ConsoleEvent::VerificationFinished {
                request_id,
                response,
            } => {
                assert_eq!(request_id, 7);
                assert_eq!(response.status, "MATCHED");
                assert_eq!(response.error_message, None);
            }
            other => panic!("unexpected event: {:?}", other),
        }

        let calls = repository.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "orders.created");
        assert_eq!(calls[0].1, vec![header_filter()]);
        assert_eq!(calls[0].2, "{}");
    }

    #[test]
    fn worker_absorbs_repository_failures_into_failed_events() {
        let repository = ScriptedRepository::new(vec![Err(ConsoleError::Api {
            status: 400,
            message: "invalid filter syntax".to_string(),
        })]);
        let backend = spawn_backend(repository);

        backend
            .cmd_tx
            .send(ConsoleCmd::VerifyFilters {
                request_id: 3,
                topic: "orders.created".to_string(),
                filters: Vec::new(),
                message: String::new(),
            })
            .expect("send verify");

        match recv_event(&backend.evt_rx) {
            ConsoleEvent::VerificationFailed {
                request_id,
                message,
            } => {
                assert_eq!(request_id, 3);
                assert_eq!(message, "invalid filter syntax");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn worker_services_commands_in_order() {
        let repository = ScriptedRepository::new(vec![
            Ok(VerificationResponse {
                status: "NOT_MATCHED".to_string(),
                error_message: None,
            }),
            Ok(VerificationResponse {
                status: "MATCHED".to_string(),
                error_message: None,
            }),
        ]);
        let backend = spawn_backend(repository);

        for request_id in [1, 2] {
            backend
                .cmd_tx
                .send(ConsoleCmd::VerifyFilters {
                    request_id,
                    topic: "orders.created".to_string(),
                    filters: vec![header_filter()],
                    message: "{}".to_string(),
                })
                .expect("send verify");
        }

        let first = recv_event(&backend.evt_rx);
        let second = recv_event(&backend.evt_rx);
        match (first, second) {
            (
                ConsoleEvent::VerificationFinished {
                    request_id: 1,
                    response: first_response,
                },
                ConsoleEvent::VerificationFinished {
                    request_id: 2,
                    response: second_response,
                },
            ) => {
                assert_eq!(first_response.status, "NOT_MATCHED");
                assert_eq!(second_response.status, "MATCHED");
            }
            other => panic!("unexpected events: {:?}", other),
        }
    }
}
