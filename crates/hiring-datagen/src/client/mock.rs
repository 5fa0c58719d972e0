//! Scripted in-memory engine for tests.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::Mutex;

use super::{EngineApi, MessageCorrelation, Task};
use crate::error::{DatagenError, Result};

/// A call received by the mock, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Message(MessageCorrelation),
    List(Option<String>),
    Claim(String),
    Complete(String),
}

/// Engine whose task listings are queued up front.
///
/// Once the queue is drained every listing is empty.
pub struct MockEngine {
    listings: Mutex<VecDeque<Vec<Task>>>,
    calls: Mutex<Vec<EngineCall>>,
    pub message_status: StatusCode,
    pub claim_status: StatusCode,
    pub complete_status: StatusCode,
    /// Every listing fails with this status.
    pub listing_error: Option<StatusCode>,
    /// Messages fail once this many have been accepted.
    pub message_error_after: Option<usize>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            listings: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            message_status: StatusCode::NO_CONTENT,
            claim_status: StatusCode::NO_CONTENT,
            complete_status: StatusCode::NO_CONTENT,
            listing_error: None,
            message_error_after: None,
        }
    }

    /// Queue the next non-empty listing.
    pub fn with_listing(self, ids: &[&str]) -> Self {
        self.listings
            .lock()
            .unwrap()
            .push_back(ids.iter().map(|id| Task { id: id.to_string() }).collect());
        self
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<MessageCorrelation> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                EngineCall::Message(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: EngineCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl EngineApi for MockEngine {
    async fn correlate_message(&self, message: &MessageCorrelation) -> Result<StatusCode> {
        if let Some(limit) = self.message_error_after {
            if self.messages().len() >= limit {
                return Err(DatagenError::UnexpectedStatus {
                    operation: "correlate message",
                    status: StatusCode::SERVICE_UNAVAILABLE,
                });
            }
        }
        self.record(EngineCall::Message(message.clone()));
        Ok(self.message_status)
    }

    async fn list_tasks(&self, task_definition_key: Option<&str>) -> Result<Vec<Task>> {
        self.record(EngineCall::List(task_definition_key.map(str::to_string)));
        if let Some(status) = self.listing_error {
            return Err(DatagenError::UnexpectedStatus {
                operation: "list tasks",
                status,
            });
        }
        Ok(self.listings.lock().unwrap().pop_front().unwrap_or_default())
    }

    async fn claim_task(&self, task_id: &str, _user_id: &str) -> Result<StatusCode> {
        self.record(EngineCall::Claim(task_id.to_string()));
        Ok(self.claim_status)
    }

    async fn complete_task(&self, task_id: &str) -> Result<StatusCode> {
        self.record(EngineCall::Complete(task_id.to_string()));
        Ok(self.complete_status)
    }
}
