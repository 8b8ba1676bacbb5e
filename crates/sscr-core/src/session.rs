//! Single-request controller: validate, extract, hold the result.
//!
//! `submit` takes `&mut self`, so a session can only have one extraction in
//! flight. Any previous result is cleared before the new request starts and
//! is never shown alongside an error.

use tokio::sync::mpsc;

use crate::error::ExtractError;
use crate::extract::Extractor;
use crate::model::ResultRecord;
use crate::retry::{run_with_retry, RetryPolicy};
use crate::url_model::check_url;

/// Where the session stands after its last transition.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Pending,
    Success(ResultRecord),
    Failed(ExtractError),
}

/// Compact notification sent on every state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEvent {
    Idle,
    Pending { url: String },
    Success { roll_number: String },
    Failed { kind: &'static str, message: &'static str },
}

pub struct Session<E> {
    extractor: E,
    retry: RetryPolicy,
    state: RequestState,
    events: Option<mpsc::Sender<StateEvent>>,
}

impl<E: Extractor> Session<E> {
    pub fn new(extractor: E) -> Self {
        Self {
            extractor,
            retry: RetryPolicy::default(),
            state: RequestState::Idle,
            events: None,
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Transitions are also sent to `tx`; a full or closed channel drops the event.
    pub fn with_events(mut self, tx: mpsc::Sender<StateEvent>) -> Self {
        self.events = Some(tx);
        self
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// The result of the last successful request, if it is still current.
    pub fn current(&self) -> Option<&ResultRecord> {
        match &self.state {
            RequestState::Success(rec) => Some(rec),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.transition(RequestState::Idle);
    }

    /// Validates `input`, runs the extractor, and stores the outcome.
    pub async fn submit(&mut self, input: &str) -> Result<&ResultRecord, ExtractError> {
        self.transition(RequestState::Idle);

        let url = match check_url(input) {
            Ok(url) => url,
            Err(e) => {
                tracing::info!(kind = e.kind_str(), "rejected input");
                self.transition(RequestState::Failed(e.clone()));
                return Err(e);
            }
        };

        self.transition(RequestState::Pending);
        self.emit(StateEvent::Pending {
            url: url.to_string(),
        });

        let extractor = &self.extractor;
        let outcome = run_with_retry(&self.retry, || extractor.extract(&url)).await;

        match outcome {
            Ok(record) => {
                tracing::info!(roll_number = %record.roll_number(), "extraction succeeded");
                self.transition(RequestState::Success(record));
                self.current().ok_or_else(|| {
                    ExtractError::ExtractionFailure("result was not retained".into())
                })
            }
            Err(e) => {
                tracing::warn!(kind = e.kind_str(), "extraction failed: {}", e);
                self.transition(RequestState::Failed(e.clone()));
                Err(e)
            }
        }
    }

    fn transition(&mut self, next: RequestState) {
        let event = match &next {
            RequestState::Idle => Some(StateEvent::Idle),
            // Pending carries the URL; emitted by the caller.
            RequestState::Pending => None,
            RequestState::Success(rec) => Some(StateEvent::Success {
                roll_number: rec.roll_number().to_string(),
            }),
            RequestState::Failed(e) => Some(StateEvent::Failed {
                kind: e.kind_str(),
                message: e.user_message(),
            }),
        };
        tracing::debug!(from = state_name(&self.state), to = state_name(&next), "session transition");
        self.state = next;
        if let Some(ev) = event {
            self.emit(ev);
        }
    }

    fn emit(&self, ev: StateEvent) {
        if let Some(tx) = &self.events {
            let _ = tx.try_send(ev);
        }
    }
}

fn state_name(s: &RequestState) -> &'static str {
    match s {
        RequestState::Idle => "idle",
        RequestState::Pending => "pending",
        RequestState::Success(_) => "success",
        RequestState::Failed(_) => "failed",
    }
}
