//! Process instance launcher.

use reqwest::StatusCode;

use crate::client::{EngineApi, MessageCorrelation};
use crate::error::Result;
use crate::process::MSG_CANDIDATE_APPLICATION;
use crate::variables::VariableSet;

/// Outcome of a correlation call that reached the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Engine answered 204.
    Accepted,
    /// Engine answered with another status; logged, run continues.
    Unexpected(StatusCode),
}

impl Delivery {
    fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::NO_CONTENT {
            Delivery::Accepted
        } else {
            Delivery::Unexpected(status)
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Delivery::Accepted)
    }
}

/// Starts hiring instances and broadcasts follow-up messages.
pub struct ProcessInstanceLauncher<'a, E: EngineApi + ?Sized> {
    engine: &'a E,
}

impl<'a, E: EngineApi + ?Sized> ProcessInstanceLauncher<'a, E> {
    pub fn new(engine: &'a E) -> Self {
        Self { engine }
    }

    /// Start one process instance carrying `variables`.
    pub async fn launch(&self, variables: VariableSet) -> Result<Delivery> {
        let message = MessageCorrelation::with_variables(MSG_CANDIDATE_APPLICATION, variables);
        let status = self.engine.correlate_message(&message).await?;

        let delivery = Delivery::from_status(status);
        if let Delivery::Unexpected(status) = delivery {
            tracing::warn!(%status, "Starting process instance should answer 204");
        }
        Ok(delivery)
    }

    /// Deliver a payload-free message to every instance waiting for it.
    pub async fn send_event(&self, message_name: &str) -> Result<Delivery> {
        let message = MessageCorrelation::broadcast(message_name);
        let status = self.engine.correlate_message(&message).await?;

        let delivery = Delivery::from_status(status);
        match delivery {
            Delivery::Accepted => tracing::debug!(message_name, "Message correlated"),
            Delivery::Unexpected(status) => tracing::warn!(
                message_name,
                %status,
                "Sending message should answer 204"
            ),
        }
        Ok(delivery)
    }
}
