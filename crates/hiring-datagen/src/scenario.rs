//! Scenario recipes.
//!
//! Every recipe starts from the happy path and overrides the gateway flags
//! that route the instance towards a specific outcome. All randomness comes
//! from the `Rng` the caller passes in.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use crate::duration::DurationTable;
use crate::process::*;
use crate::variables::{VariableSet, VariableValue};

/// Open positions and the department each one belongs to.
pub const POSITIONS: [(&str, &str); 8] = [
    ("Software Developer", "IT"),
    ("Teamlead", "IT"),
    ("Account Manager", "Sales"),
    ("DevOps Engineer", "IT"),
    ("Sales Representative", "Sales"),
    ("Software Architect", "IT"),
    ("Recruiting Manager", "HR"),
    ("Marketing Manager", "Marketing"),
];

pub const EXPERIENCE_LEVELS: [&str; 4] = ["Associate", "Mid-Senior", "Beginner", "Senior"];

/// Salary expectation range, upper bound exclusive.
pub const SALARY_RANGE: std::ops::Range<i32> = 20_000..100_000;

/// Share of candidates applying from within the country.
pub const DOMESTIC_PROBABILITY: f64 = 0.8;

/// Stage of the process at which a candidate withdraws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancelStage {
    AssignHiringManager,
    ScreenApplication,
    PhoneInterview,
    FirstOnsiteInterview,
    SecondOnsiteInterview,
    MakeOffer,
}

impl CancelStage {
    pub const ALL: [CancelStage; 6] = [
        CancelStage::AssignHiringManager,
        CancelStage::ScreenApplication,
        CancelStage::PhoneInterview,
        CancelStage::FirstOnsiteInterview,
        CancelStage::SecondOnsiteInterview,
        CancelStage::MakeOffer,
    ];

    /// User tasks that have to be completed before instances reach this stage.
    pub fn preceding_tasks(self) -> &'static [HiringTask] {
        static PATH: [HiringTask; 5] = [
            HiringTask::AssignHiringManager,
            HiringTask::ScreenApplication,
            HiringTask::ConductPhoneInterview,
            HiringTask::ConductFirstOnsiteInterview,
            HiringTask::ConductSecondOnsiteInterview,
        ];
        match self {
            // Screening is only reached without a manual assignment, so
            // nothing has to be completed first.
            CancelStage::AssignHiringManager | CancelStage::ScreenApplication => &[],
            CancelStage::PhoneInterview => &PATH[..2],
            CancelStage::FirstOnsiteInterview => &PATH[..3],
            CancelStage::SecondOnsiteInterview => &PATH[..4],
            CancelStage::MakeOffer => &PATH[..5],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CancelStage::AssignHiringManager => "assign-hiring-manager",
            CancelStage::ScreenApplication => "screen-application",
            CancelStage::PhoneInterview => "phone-interview",
            CancelStage::FirstOnsiteInterview => "first-onsite-interview",
            CancelStage::SecondOnsiteInterview => "second-onsite-interview",
            CancelStage::MakeOffer => "make-offer",
        }
    }
}

/// One candidate journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    HappyPath,
    RejectAfterScreening,
    RejectAfterPhoneInterview,
    RejectAfterOnsiteInterview,
    OfferDeclined,
    Cancelled(CancelStage),
}

impl Scenario {
    /// Build the variables for one instance of this scenario.
    pub fn build<R: Rng + ?Sized>(self, rng: &mut R, durations: &DurationTable) -> VariableSet {
        match self {
            Scenario::HappyPath => happy_path(rng, durations),
            Scenario::RejectAfterScreening => reject_after_screening(rng, durations),
            Scenario::RejectAfterPhoneInterview => reject_after_phone_interview(rng, durations),
            Scenario::RejectAfterOnsiteInterview => reject_after_onsite_interview(rng, durations),
            Scenario::OfferDeclined => offer_declined(rng, durations),
            Scenario::Cancelled(stage) => cancelled_at(stage, rng, durations),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::HappyPath => f.write_str("happy-path"),
            Scenario::RejectAfterScreening => f.write_str("reject-after-screening"),
            Scenario::RejectAfterPhoneInterview => f.write_str("reject-after-phone-interview"),
            Scenario::RejectAfterOnsiteInterview => f.write_str("reject-after-onsite-interview"),
            Scenario::OfferDeclined => f.write_str("offer-declined"),
            Scenario::Cancelled(stage) => write!(f, "cancelled-at-{}", stage.name()),
        }
    }
}

/// Candidate goes through every stage and accepts the offer.
pub fn happy_path<R: Rng + ?Sized>(rng: &mut R, durations: &DurationTable) -> VariableSet {
    let mut vars = VariableSet::new();
    for flag in PROCEED_FLAGS {
        vars.set(flag, VariableValue::boolean(true));
    }
    randomize_automatic_assignment(&mut vars, rng);
    randomize_second_onsite_interview(&mut vars, rng);
    add_hiring_information(&mut vars, rng);
    vars.set(VAR_CANDIDATE_CANCELLED, VariableValue::boolean(false));
    add_task_durations(&mut vars, rng, durations);
    vars
}

/// Happy path where a hiring manager has to be assigned by hand.
pub fn manual_hiring_manager_assignment<R: Rng + ?Sized>(
    rng: &mut R,
    durations: &DurationTable,
) -> VariableSet {
    let mut vars = happy_path(rng, durations);
    vars.set(VAR_AUTOMATICALLY_ASSIGNED, VariableValue::boolean(false));
    vars
}

/// Happy path where the hiring manager is assigned automatically.
pub fn automatic_hiring_manager_assignment<R: Rng + ?Sized>(
    rng: &mut R,
    durations: &DurationTable,
) -> VariableSet {
    let mut vars = happy_path(rng, durations);
    vars.set(VAR_AUTOMATICALLY_ASSIGNED, VariableValue::boolean(true));
    vars
}

pub fn reject_after_screening<R: Rng + ?Sized>(
    rng: &mut R,
    durations: &DurationTable,
) -> VariableSet {
    let mut vars = happy_path(rng, durations);
    randomize_automatic_assignment(&mut vars, rng);
    vars.set(VAR_SCREEN_PROCEED, VariableValue::boolean(false));
    vars
}

pub fn reject_after_phone_interview<R: Rng + ?Sized>(
    rng: &mut R,
    durations: &DurationTable,
) -> VariableSet {
    let mut vars = happy_path(rng, durations);
    randomize_automatic_assignment(&mut vars, rng);
    vars.set(VAR_SCREEN_PROCEED, VariableValue::boolean(true));
    vars.set(VAR_PHONE_PROCEED, VariableValue::boolean(false));
    vars
}

pub fn reject_after_onsite_interview<R: Rng + ?Sized>(
    rng: &mut R,
    durations: &DurationTable,
) -> VariableSet {
    let mut vars = happy_path(rng, durations);
    randomize_automatic_assignment(&mut vars, rng);
    vars.set(VAR_SCREEN_PROCEED, VariableValue::boolean(true));
    vars.set(VAR_PHONE_PROCEED, VariableValue::boolean(true));
    randomize_second_onsite_interview(&mut vars, rng);
    vars.set(VAR_MAKE_OFFER, VariableValue::boolean(false));
    vars
}

/// Candidate receives an offer and turns it down.
pub fn offer_declined<R: Rng + ?Sized>(rng: &mut R, durations: &DurationTable) -> VariableSet {
    let mut vars = happy_path(rng, durations);
    vars.set(VAR_OFFER_ACCEPTED, VariableValue::boolean(false));
    vars
}

/// Candidate withdraws while the instance waits at `stage`.
///
/// The cancellation flag is set on the instance that gets launched.
pub fn cancelled_at<R: Rng + ?Sized>(
    stage: CancelStage,
    rng: &mut R,
    durations: &DurationTable,
) -> VariableSet {
    let mut vars = match stage {
        CancelStage::AssignHiringManager => manual_hiring_manager_assignment(rng, durations),
        CancelStage::ScreenApplication => automatic_hiring_manager_assignment(rng, durations),
        _ => happy_path(rng, durations),
    };
    vars.set(VAR_CANDIDATE_CANCELLED, VariableValue::boolean(true));
    vars
}

fn randomize_automatic_assignment<R: Rng + ?Sized>(vars: &mut VariableSet, rng: &mut R) {
    vars.set(VAR_AUTOMATICALLY_ASSIGNED, VariableValue::boolean(rng.gen_bool(0.5)));
}

fn randomize_second_onsite_interview<R: Rng + ?Sized>(vars: &mut VariableSet, rng: &mut R) {
    vars.set(VAR_ONSITE_INTERVIEW, VariableValue::boolean(rng.gen_bool(0.5)));
}

fn add_hiring_information<R: Rng + ?Sized>(vars: &mut VariableSet, rng: &mut R) {
    let (position, department) = POSITIONS[rng.gen_range(0..POSITIONS.len())];
    vars.set(VAR_POSITION, VariableValue::string(position));
    vars.set(VAR_DEPARTMENT, VariableValue::string(department));

    if let Some(level) = EXPERIENCE_LEVELS.choose(rng) {
        vars.set(VAR_JOB_EXPERIENCE_LEVEL, VariableValue::string(*level));
    }

    vars.set(
        VAR_SALARY_EXPECTATION,
        VariableValue::integer(rng.gen_range(SALARY_RANGE)),
    );

    let domestic_type = if rng.gen_bool(DOMESTIC_PROBABILITY) {
        "national"
    } else {
        "international"
    };
    vars.set(VAR_DOMESTIC_TYPE, VariableValue::string(domestic_type));
}

fn add_task_durations<R: Rng + ?Sized>(
    vars: &mut VariableSet,
    rng: &mut R,
    durations: &DurationTable,
) {
    for (task, duration) in durations.iter() {
        vars.set(task.key(), VariableValue::long(duration.sample(rng)));
    }
}
