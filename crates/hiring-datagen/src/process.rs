//! Names defined by the hiring process model deployed in the engine.

use std::fmt;

/// Process definition the generator drives.
pub const PROCESS_DEFINITION_KEY: &str = "hiring-demo";

/// Message that starts a new hiring process instance.
pub const MSG_CANDIDATE_APPLICATION: &str = "candidate_application";
/// Message that cancels every instance waiting for it.
pub const MSG_CANDIDATE_CANCELLED: &str = "candidate_cancelled";
/// Message that resumes instances waiting for the candidate's answer.
pub const MSG_CANDIDATE_REPLIED: &str = "candidate_replied";

// Gateway flags read by the process model.
pub const VAR_AUTOMATICALLY_ASSIGNED: &str = "Task_automatically_assigned";
pub const VAR_SCREEN_PROCEED: &str = "Task_screen_proceed";
pub const VAR_PHONE_PROCEED: &str = "Task_phone_proceed";
pub const VAR_ONSITE_INTERVIEW: &str = "Task_onsite_interview";
pub const VAR_MAKE_OFFER: &str = "Task_make_offer";
pub const VAR_OFFER_ACCEPTED: &str = "Task_offer_accepted";
pub const VAR_CANDIDATE_CANCELLED: &str = "CandidateCancelled";

/// Flags that are all `true` on the happy path.
pub const PROCEED_FLAGS: [&str; 6] = [
    VAR_AUTOMATICALLY_ASSIGNED,
    VAR_SCREEN_PROCEED,
    VAR_PHONE_PROCEED,
    VAR_ONSITE_INTERVIEW,
    VAR_MAKE_OFFER,
    VAR_OFFER_ACCEPTED,
];

// Hiring context.
pub const VAR_POSITION: &str = "Position";
pub const VAR_DEPARTMENT: &str = "Department";
pub const VAR_JOB_EXPERIENCE_LEVEL: &str = "JobExperienceLevel";
pub const VAR_SALARY_EXPECTATION: &str = "SalaryExpectation";
pub const VAR_DOMESTIC_TYPE: &str = "DomesticType";

/// Activities of the hiring process that carry a simulated duration.
///
/// The key is both the task definition key in the engine and the name of the
/// duration variable attached to each instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HiringTask {
    AssignHiringManager,
    ScreenApplication,
    ConductPhoneInterview,
    ConductFirstOnsiteInterview,
    ConductSecondOnsiteInterview,
    MakeOffer,
    CandidateReplied,
}

impl HiringTask {
    /// All tasks in process order.
    pub const ALL: [HiringTask; 7] = [
        HiringTask::AssignHiringManager,
        HiringTask::ScreenApplication,
        HiringTask::ConductPhoneInterview,
        HiringTask::ConductFirstOnsiteInterview,
        HiringTask::ConductSecondOnsiteInterview,
        HiringTask::MakeOffer,
        HiringTask::CandidateReplied,
    ];

    pub fn key(self) -> &'static str {
        match self {
            HiringTask::AssignHiringManager => "HiringManager",
            HiringTask::ScreenApplication => "ScreenApplication",
            HiringTask::ConductPhoneInterview => "ConductPhoneInterview",
            HiringTask::ConductFirstOnsiteInterview => "Conduct1OnsiteInterview",
            HiringTask::ConductSecondOnsiteInterview => "Conduct2OnsiteInterview",
            HiringTask::MakeOffer => "MakeOffer",
            HiringTask::CandidateReplied => "CandidateReplied",
        }
    }
}

impl fmt::Display for HiringTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
