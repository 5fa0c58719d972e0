//! Campaign orchestration.
//!
//! A campaign launches a fixed number of instances per scenario, drives them
//! through their user tasks and then runs the cancellation flows stage by
//! stage. Everything runs strictly in sequence.

use rand::Rng;
use std::collections::HashMap;

use crate::client::EngineApi;
use crate::duration::DurationTable;
use crate::error::Result;
use crate::launcher::ProcessInstanceLauncher;
use crate::poller::{PollSummary, TaskCompletionPoller};
use crate::process::{MSG_CANDIDATE_CANCELLED, MSG_CANDIDATE_REPLIED};
use crate::scenario::{CancelStage, Scenario};

/// Instance counts and duration model for a campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignConfig {
    /// Scenarios launched before the first task drain, in launch order.
    pub scenario_counts: Vec<(Scenario, u32)>,

    /// Cancellation flows, in execution order.
    pub cancellation_counts: Vec<(CancelStage, u32)>,

    /// Duration model attached to every instance.
    pub durations: DurationTable,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            scenario_counts: vec![
                (Scenario::HappyPath, 240),
                (Scenario::RejectAfterScreening, 3778),
                (Scenario::RejectAfterPhoneInterview, 2790),
                (Scenario::RejectAfterOnsiteInterview, 1282),
                (Scenario::OfferDeclined, 286),
            ],
            cancellation_counts: vec![
                (CancelStage::AssignHiringManager, 208),
                (CancelStage::ScreenApplication, 1800),
                (CancelStage::PhoneInterview, 360),
                (CancelStage::FirstOnsiteInterview, 78),
                (CancelStage::SecondOnsiteInterview, 55),
                (CancelStage::MakeOffer, 135),
            ],
            durations: DurationTable::default(),
        }
    }
}

impl CampaignConfig {
    /// Total number of instances the campaign starts.
    pub fn total_instances(&self) -> u64 {
        self.scenario_counts
            .iter()
            .map(|(_, n)| u64::from(*n))
            .chain(self.cancellation_counts.iter().map(|(_, n)| u64::from(*n)))
            .sum()
    }
}

/// What a finished campaign did.
#[derive(Debug, Clone, Default)]
pub struct CampaignReport {
    /// Instances launched per scenario.
    pub launched: HashMap<Scenario, u32>,
    /// Start or broadcast messages answered with something other than 204.
    pub message_warnings: usize,
    /// Aggregated task completion counters.
    pub tasks: PollSummary,
}

impl CampaignReport {
    pub fn total_launched(&self) -> u64 {
        self.launched.values().map(|n| u64::from(*n)).sum()
    }
}

/// Runs a campaign against one engine.
pub struct CampaignDriver<'a, E: EngineApi + ?Sized> {
    config: &'a CampaignConfig,
    launcher: ProcessInstanceLauncher<'a, E>,
    poller: TaskCompletionPoller<'a, E>,
}

impl<'a, E: EngineApi + ?Sized> CampaignDriver<'a, E> {
    pub fn new(config: &'a CampaignConfig, engine: &'a E, user_id: &str) -> Self {
        Self {
            config,
            launcher: ProcessInstanceLauncher::new(engine),
            poller: TaskCompletionPoller::new(engine, user_id),
        }
    }

    /// Run the whole campaign.
    ///
    /// Stops at the first fatal error; instances already started stay in the
    /// engine as they are.
    pub async fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<CampaignReport> {
        let mut report = CampaignReport::default();

        for &(scenario, count) in &self.config.scenario_counts {
            self.launch_many(scenario, count, rng, &mut report).await?;
            tracing::info!(%scenario, count, "Finished launching scenario");
        }

        let summary = self.poller.complete_all().await?;
        report.tasks.absorb(summary);
        tracing::info!(
            completed = summary.completed,
            warnings = summary.warnings,
            "Finished user task completion"
        );

        self.send_event(MSG_CANDIDATE_REPLIED, &mut report).await?;
        tracing::info!("Finished candidate replied message");

        for &(stage, count) in &self.config.cancellation_counts {
            self.run_cancellation(stage, count, rng, &mut report).await?;
            tracing::info!(stage = stage.name(), count, "Finished cancellation");
        }

        Ok(report)
    }

    /// Launch `count` cancelling instances, walk them to `stage`, then cancel.
    async fn run_cancellation<R: Rng + ?Sized>(
        &self,
        stage: CancelStage,
        count: u32,
        rng: &mut R,
        report: &mut CampaignReport,
    ) -> Result<()> {
        self.launch_many(Scenario::Cancelled(stage), count, rng, report)
            .await?;

        let keys: Vec<&str> = stage.preceding_tasks().iter().map(|t| t.key()).collect();
        let summary = self.poller.complete_each(&keys).await?;
        report.tasks.absorb(summary);

        self.send_event(MSG_CANDIDATE_CANCELLED, report).await
    }

    async fn launch_many<R: Rng + ?Sized>(
        &self,
        scenario: Scenario,
        count: u32,
        rng: &mut R,
        report: &mut CampaignReport,
    ) -> Result<()> {
        for _ in 0..count {
            let variables = scenario.build(rng, &self.config.durations);
            if !self.launcher.launch(variables).await?.is_accepted() {
                report.message_warnings += 1;
            }
        }
        *report.launched.entry(scenario).or_default() += count;
        Ok(())
    }

    async fn send_event(&self, message_name: &str, report: &mut CampaignReport) -> Result<()> {
        if !self.launcher.send_event(message_name).await?.is_accepted() {
            report.message_warnings += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{EngineCall, MockEngine};
    use crate::process::{MSG_CANDIDATE_APPLICATION, VAR_CANDIDATE_CANCELLED};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use reqwest::StatusCode;

    fn small_config() -> CampaignConfig {
        CampaignConfig {
            scenario_counts: vec![(Scenario::HappyPath, 2), (Scenario::OfferDeclined, 1)],
            cancellation_counts: vec![
                (CancelStage::AssignHiringManager, 1),
                (CancelStage::PhoneInterview, 1),
            ],
            durations: DurationTable::default(),
        }
    }

    fn message_names(engine: &MockEngine) -> Vec<String> {
        engine
            .messages()
            .into_iter()
            .map(|m| m.message_name)
            .collect()
    }

    #[test]
    fn test_default_counts() {
        let config = CampaignConfig::default();
        assert_eq!(config.scenario_counts[0], (Scenario::HappyPath, 240));
        assert_eq!(config.scenario_counts[1], (Scenario::RejectAfterScreening, 3778));
        assert_eq!(
            config.cancellation_counts[1],
            (CancelStage::ScreenApplication, 1800)
        );
        assert_eq!(config.total_instances(), 8_376 + 2_636);
    }

    #[tokio::test]
    async fn test_campaign_sequence() {
        let engine = MockEngine::new().with_listing(&["t1", "t2"]);
        let config = small_config();
        let driver = CampaignDriver::new(&config, &engine, "demo");

        let report = driver.run(&mut StdRng::seed_from_u64(3)).await.unwrap();

        assert_eq!(
            message_names(&engine),
            vec![
                MSG_CANDIDATE_APPLICATION,
                MSG_CANDIDATE_APPLICATION,
                MSG_CANDIDATE_APPLICATION,
                MSG_CANDIDATE_REPLIED,
                MSG_CANDIDATE_APPLICATION,
                MSG_CANDIDATE_CANCELLED,
                MSG_CANDIDATE_APPLICATION,
                MSG_CANDIDATE_CANCELLED,
            ]
        );
        assert_eq!(report.total_launched(), 5);
        assert_eq!(report.launched[&Scenario::HappyPath], 2);
        assert_eq!(report.tasks.completed, 2);
        assert_eq!(report.message_warnings, 0);

        let lists: Vec<_> = engine
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                EngineCall::List(key) => Some(key),
                _ => None,
            })
            .collect();
        assert_eq!(
            lists,
            vec![
                None,
                None,
                Some("HiringManager".to_string()),
                Some("ScreenApplication".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_cancelled_instances_carry_flag() {
        let engine = MockEngine::new();
        let config = small_config();
        let driver = CampaignDriver::new(&config, &engine, "demo");

        driver.run(&mut StdRng::seed_from_u64(11)).await.unwrap();

        let starts: Vec<_> = engine
            .messages()
            .into_iter()
            .filter_map(|m| m.process_variables)
            .collect();
        assert_eq!(starts.len(), 5);
        let cancelled: Vec<_> = starts
            .iter()
            .map(|v| v.flag(VAR_CANDIDATE_CANCELLED).unwrap())
            .collect();
        assert_eq!(cancelled, vec![false, false, false, true, true]);
    }

    #[tokio::test]
    async fn test_happy_path_drains_all_tasks() {
        let engine = MockEngine::new()
            .with_listing(&["assign", "screen"])
            .with_listing(&["phone"])
            .with_listing(&["onsite-1", "onsite-2", "offer"]);
        let config = CampaignConfig {
            scenario_counts: vec![(Scenario::HappyPath, 1)],
            cancellation_counts: vec![],
            durations: DurationTable::default(),
        };
        let driver = CampaignDriver::new(&config, &engine, "demo");

        let report = driver.run(&mut StdRng::seed_from_u64(1)).await.unwrap();

        assert_eq!(report.tasks.completed, 6);
        assert_eq!(report.tasks.rounds, 3);
        // The listing after the final completion came back empty.
        let calls = engine.calls();
        let last_complete = calls
            .iter()
            .rposition(|c| matches!(c, EngineCall::Complete(_)))
            .unwrap();
        assert_eq!(calls[last_complete + 1], EngineCall::List(None));
    }

    #[tokio::test]
    async fn test_message_warnings_are_counted() {
        let mut engine = MockEngine::new();
        engine.message_status = StatusCode::NOT_FOUND;
        let config = small_config();
        let driver = CampaignDriver::new(&config, &engine, "demo");

        let report = driver.run(&mut StdRng::seed_from_u64(2)).await.unwrap();

        // 5 starts, 1 replied, 2 cancellations
        assert_eq!(report.message_warnings, 8);
    }

    #[tokio::test]
    async fn test_claim_failure_aborts_campaign() {
        let mut engine = MockEngine::new().with_listing(&["t1"]);
        engine.claim_status = StatusCode::FORBIDDEN;
        let config = small_config();
        let driver = CampaignDriver::new(&config, &engine, "demo");

        assert!(driver.run(&mut StdRng::seed_from_u64(4)).await.is_err());
        // Nothing after the first drain was sent.
        assert!(!message_names(&engine)
            .iter()
            .any(|m| m == MSG_CANDIDATE_REPLIED));
    }

    #[tokio::test]
    async fn test_failed_listing_aborts_campaign() {
        let mut engine = MockEngine::new();
        engine.listing_error = Some(StatusCode::BAD_GATEWAY);
        let config = CampaignConfig {
            scenario_counts: vec![(Scenario::HappyPath, 3)],
            cancellation_counts: vec![(CancelStage::PhoneInterview, 2)],
            durations: DurationTable::default(),
        };
        let driver = CampaignDriver::new(&config, &engine, "demo");

        let err = driver.run(&mut StdRng::seed_from_u64(8)).await.unwrap_err();

        assert!(matches!(err, crate::error::DatagenError::UnexpectedStatus { .. }));
        // Only the three starts went out before the first drain failed.
        assert_eq!(
            message_names(&engine),
            vec![MSG_CANDIDATE_APPLICATION; 3]
        );
    }

    #[tokio::test]
    async fn test_failed_launch_aborts_campaign() {
        let mut engine = MockEngine::new().with_listing(&["t1"]);
        engine.message_error_after = Some(2);
        let config = small_config();
        let driver = CampaignDriver::new(&config, &engine, "demo");

        assert!(driver.run(&mut StdRng::seed_from_u64(9)).await.is_err());
        assert_eq!(engine.messages().len(), 2);
        // The task list is never drained once a start fails.
        assert!(!engine
            .calls()
            .iter()
            .any(|c| matches!(c, EngineCall::List(_))));
    }
}
