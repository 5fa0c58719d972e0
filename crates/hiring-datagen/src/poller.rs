//! User task completion.
//!
//! The engine keeps creating tasks while instances advance, so one listing is
//! never enough: the poller claims and completes whatever is open, then lists
//! again until the engine reports nothing left.

use reqwest::StatusCode;

use crate::client::{EngineApi, Task};
use crate::error::{DatagenError, Result};

/// Counters for one drain of the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollSummary {
    /// Non-empty listings processed.
    pub rounds: usize,
    /// Tasks claimed and completed with 204.
    pub completed: usize,
    /// Completions answered with another status.
    pub warnings: usize,
}

impl PollSummary {
    pub fn absorb(&mut self, other: PollSummary) {
        self.rounds += other.rounds;
        self.completed += other.completed;
        self.warnings += other.warnings;
    }
}

enum PollState {
    Polling,
    Done,
}

/// Claims and completes open user tasks until none remain.
pub struct TaskCompletionPoller<'a, E: EngineApi + ?Sized> {
    engine: &'a E,
    user_id: String,
}

impl<'a, E: EngineApi + ?Sized> TaskCompletionPoller<'a, E> {
    pub fn new(engine: &'a E, user_id: &str) -> Self {
        Self {
            engine,
            user_id: user_id.to_string(),
        }
    }

    /// Drain every open task of the process.
    pub async fn complete_all(&self) -> Result<PollSummary> {
        self.complete(None).await
    }

    /// Drain open tasks, restricted to one task definition key if given.
    ///
    /// Fails on the first rejected claim or transport error.
    pub async fn complete(&self, task_definition_key: Option<&str>) -> Result<PollSummary> {
        let mut summary = PollSummary::default();
        let mut state = PollState::Polling;

        while let PollState::Polling = state {
            let tasks = self.engine.list_tasks(task_definition_key).await?;
            if tasks.is_empty() {
                state = PollState::Done;
                continue;
            }

            tracing::debug!(
                task_definition_key = task_definition_key.unwrap_or("*"),
                open = tasks.len(),
                "Completing listed tasks"
            );

            summary.rounds += 1;
            for task in &tasks {
                if self.claim_and_complete(task).await? {
                    summary.completed += 1;
                } else {
                    summary.warnings += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Drain the given task keys one after another.
    pub async fn complete_each(&self, task_definition_keys: &[&str]) -> Result<PollSummary> {
        let mut summary = PollSummary::default();
        for key in task_definition_keys {
            summary.absorb(self.complete(Some(*key)).await?);
        }
        Ok(summary)
    }

    /// Returns `false` when the completion was answered with a non-204 status.
    async fn claim_and_complete(&self, task: &Task) -> Result<bool> {
        let status = self.engine.claim_task(&task.id, &self.user_id).await?;
        if status != StatusCode::NO_CONTENT {
            return Err(DatagenError::ClaimRejected {
                task_id: task.id.clone(),
                status,
            });
        }

        let status = self.engine.complete_task(&task.id).await?;
        if status != StatusCode::NO_CONTENT {
            tracing::warn!(task_id = %task.id, %status, "Could not complete user task");
            return Ok(false);
        }

        Ok(true)
    }
}
