//! Simulated task durations.
//!
//! Each task gets a duration drawn from a normal distribution around a fixed
//! mean. Durations are stored on the instance as `Long` milliseconds.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::process::HiringTask;

pub const SECOND: i64 = 1000;
pub const MINUTE: i64 = 60 * SECOND;
pub const HOUR: i64 = 60 * MINUTE;
pub const DAY: i64 = 24 * HOUR;
pub const WEEK: i64 = 7 * DAY;

/// Mean and standard deviation of a task duration, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskDuration {
    pub mean: i64,
    pub deviation: i64,
}

impl TaskDuration {
    pub const fn new(mean: i64, deviation: i64) -> Self {
        Self { mean, deviation }
    }

    /// Draw a duration for this task.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        DurationSampler::sample(rng, self.mean, self.deviation)
    }
}

/// Gaussian duration model.
pub struct DurationSampler;

impl DurationSampler {
    /// `|round(z * deviation) + mean|` for a standard normal `z`.
    ///
    /// Halves round towards positive infinity. Never negative.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, mean: i64, deviation: i64) -> i64 {
        let z: f64 = StandardNormal.sample(rng);
        let offset = round_half_up(z * deviation as f64) as i64;
        offset.saturating_add(mean).saturating_abs()
    }
}

fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Duration model for every task of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationTable {
    entries: Vec<(HiringTask, TaskDuration)>,
}

impl DurationTable {
    pub fn new(entries: Vec<(HiringTask, TaskDuration)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, task: HiringTask) -> Option<TaskDuration> {
        self.entries
            .iter()
            .find(|(t, _)| *t == task)
            .map(|(_, d)| *d)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(HiringTask, TaskDuration)> {
        self.entries.iter()
    }
}

impl Default for DurationTable {
    fn default() -> Self {
        Self::new(vec![
            (HiringTask::AssignHiringManager, TaskDuration::new(4 * HOUR, 2 * HOUR)),
            (HiringTask::ScreenApplication, TaskDuration::new(4 * DAY, DAY)),
            (HiringTask::ConductPhoneInterview, TaskDuration::new(WEEK, DAY)),
            (HiringTask::ConductFirstOnsiteInterview, TaskDuration::new(4 * DAY, 2 * DAY)),
            (HiringTask::ConductSecondOnsiteInterview, TaskDuration::new(WEEK, DAY)),
            (HiringTask::MakeOffer, TaskDuration::new(DAY + 2 * HOUR, 2 * HOUR)),
            (HiringTask::CandidateReplied, TaskDuration::new(5 * DAY, DAY)),
        ])
    }
}
