//! Read-only camp projections consumed by the task tools.

use super::challenge::DayChallenge;
use super::flexible;
use super::task::Task;
use serde::{Deserialize, Serialize};

/// Summary of a camp as returned by the camp details endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampSummary {
    pub id: i64,
    #[serde(default, deserialize_with = "flexible::null_as_default")]
    pub name: String,
    /// Upper bound for `day_number`; unknown until the summary has loaded.
    #[serde(default)]
    pub duration_days: Option<u32>,
    /// Cohort selected by default when listing tasks.
    #[serde(default)]
    pub current_cohort_number: Option<u32>,
}

/// Tasks and day challenges are served together by the daily tasks endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTasksBundle {
    #[serde(default, deserialize_with = "flexible::null_as_default")]
    pub tasks: Vec<Task>,
    #[serde(default, deserialize_with = "flexible::null_as_default", alias = "dayChallenges", alias = "challenges")]
    pub day_challenges: Vec<DayChallenge>,
}
