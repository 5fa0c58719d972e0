//! Engine HTTP client.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::DatagenConfig;
use crate::error::{DatagenError, Result};
use crate::variables::VariableSet;

/// Message correlation request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCorrelation {
    /// Message name declared in the process model.
    pub message_name: String,

    /// Correlate with every waiting execution instead of exactly one.
    pub all: bool,

    /// Variables for the started or resumed instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_variables: Option<VariableSet>,
}

impl MessageCorrelation {
    /// A message that starts an instance carrying `variables`.
    pub fn with_variables(message_name: &str, variables: VariableSet) -> Self {
        Self {
            message_name: message_name.to_string(),
            all: true,
            process_variables: Some(variables),
        }
    }

    /// A payload-free message delivered to every waiting instance.
    pub fn broadcast(message_name: &str) -> Self {
        Self {
            message_name: message_name.to_string(),
            all: true,
            process_variables: None,
        }
    }
}

/// Open user task as listed by the engine. Other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
}

/// Operations the generator needs from the engine.
///
/// Status codes are returned as-is; callers decide which ones are fatal.
#[async_trait]
pub trait EngineApi: Send + Sync {
    /// Correlate a message (`POST /message`).
    async fn correlate_message(&self, message: &MessageCorrelation) -> Result<StatusCode>;

    /// List open tasks of the hiring process, optionally for one task key.
    async fn list_tasks(&self, task_definition_key: Option<&str>) -> Result<Vec<Task>>;

    /// Claim a task for `user_id` (`POST /task/{id}/claim`).
    async fn claim_task(&self, task_id: &str, user_id: &str) -> Result<StatusCode>;

    /// Complete a task without variables (`POST /task/{id}/complete`).
    async fn complete_task(&self, task_id: &str) -> Result<StatusCode>;
}

/// HTTP client for the engine REST API.
///
/// Holds one connection pool for the whole run.
#[derive(Clone)]
pub struct EngineClient {
    client: reqwest::Client,
    engine_url: String,
    process_definition_key: String,
}

impl EngineClient {
    /// Create a new engine client.
    pub fn new(engine_url: &str, process_definition_key: &str) -> Result<Self> {
        Self::build(engine_url, process_definition_key, None)
    }

    /// Create a client from the run configuration.
    pub fn from_config(config: &DatagenConfig) -> Result<Self> {
        Self::build(
            &config.engine_url,
            &config.process_definition_key,
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    fn build(
        engine_url: &str,
        process_definition_key: &str,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            engine_url: engine_url.trim_end_matches('/').to_string(),
            process_definition_key: process_definition_key.to_string(),
        })
    }

    pub fn engine_url(&self) -> &str {
        &self.engine_url
    }
}

#[async_trait]
impl EngineApi for EngineClient {
    async fn correlate_message(&self, message: &MessageCorrelation) -> Result<StatusCode> {
        let response = self
            .client
            .post(format!("{}/message", self.engine_url))
            .json(message)
            .send()
            .await?;

        Ok(response.status())
    }

    async fn list_tasks(&self, task_definition_key: Option<&str>) -> Result<Vec<Task>> {
        let mut query = vec![("processDefinitionKey", self.process_definition_key.as_str())];
        if let Some(key) = task_definition_key {
            query.push(("taskDefinitionKey", key));
        }

        let response = self
            .client
            .get(format!("{}/task", self.engine_url))
            .query(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DatagenError::UnexpectedStatus {
                operation: "list tasks",
                status: response.status(),
            });
        }

        let tasks: Vec<Task> = response.json().await?;
        Ok(tasks)
    }

    async fn claim_task(&self, task_id: &str, user_id: &str) -> Result<StatusCode> {
        let response = self
            .client
            .post(format!("{}/task/{}/claim", self.engine_url, task_id))
            .json(&serde_json::json!({ "userId": user_id }))
            .send()
            .await?;

        Ok(response.status())
    }

    async fn complete_task(&self, task_id: &str) -> Result<StatusCode> {
        let response = self
            .client
            .post(format!("{}/task/{}/complete", self.engine_url, task_id))
            .json(&serde_json::json!({}))
            .send()
            .await?;

        Ok(response.status())
    }
}
