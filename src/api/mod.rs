//! Camp data service interface.
//!
//! Everything campdesk knows about camps lives on the camp REST API. This
//! module defines the operations the sync controller needs from that service
//! as the [`CampApi`] trait, the error type shared by all implementations, and
//! the response shapes that are not plain entities.
//!
//! ## Implementations
//!
//! - [`rest::RestClient`]: reqwest-based client for the real backend
//! - test doubles in `tests/` that keep camp state in memory
//!
//! ## Usage
//!
//! ```rust,no_run
//! use campdesk::api::{rest::RestClient, CampApi};
//! use campdesk::libs::config::ServerConfig;
//!
//! # async fn run(config: ServerConfig) -> anyhow::Result<()> {
//! let client = RestClient::new(&config)?;
//! let camp = client.get_camp_details(12).await?;
//! println!("{} lasts {:?} days", camp.name, camp.duration_days);
//! # Ok(())
//! # }
//! ```

use crate::libs::camp::{CampSummary, DailyTasksBundle};
use crate::libs::challenge::DayChallenge;
use crate::libs::group::{GroupForm, TaskGroup};
use crate::libs::import::{ImportError, ImportFile};
use crate::libs::task::{TaskDraft, TaskPatch};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub mod rest;

/// Failure talking to the camp API.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("server returned {status}: {message}")]
    Http { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("camp API is not configured, run `campdesk init` first")]
    NotConfigured,
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http { status: 404, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Result of a bulk import as reported by the server.
///
/// The server validates every record again; when it rejects some of them the
/// returned `errors` replace whatever the local preview found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportResponse {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default, alias = "imported_count", alias = "count")]
    pub imported: usize,
    #[serde(default)]
    pub errors: Vec<ImportError>,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_true() -> bool {
    true
}

/// An accepted import with nothing else reported.
impl Default for ImportResponse {
    fn default() -> Self {
        Self {
            success: true,
            imported: 0,
            errors: Vec::new(),
            message: None,
        }
    }
}

/// Export formats produced by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerExportFormat {
    Json,
    Csv,
}

impl ServerExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerExportFormat::Json => "json",
            ServerExportFormat::Csv => "csv",
        }
    }
}

/// Export body returned by the server.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportPayload {
    Json(Value),
    Csv(Vec<u8>),
}

/// Operations of the camp data service.
///
/// Methods take `&self` so that several calls can be in flight at once and
/// joined together; implementations must not rely on call order between
/// concurrently issued requests.
#[allow(async_fn_in_trait)]
pub trait CampApi {
    /// Fetches the camp summary (duration, current cohort).
    async fn get_camp_details(&self, camp_id: i64) -> Result<CampSummary, ApiError>;

    /// Fetches tasks and day challenges, optionally for a single cohort.
    async fn get_camp_daily_tasks(&self, camp_id: i64, cohort_number: Option<u32>) -> Result<DailyTasksBundle, ApiError>;

    async fn get_camp_task_groups(&self, camp_id: i64) -> Result<Vec<TaskGroup>, ApiError>;

    /// Creates one or more tasks.
    async fn add_daily_tasks(&self, camp_id: i64, tasks: &[TaskDraft]) -> Result<(), ApiError>;

    /// Partially updates a task; unset fields are left untouched.
    async fn update_daily_task(&self, task_id: i64, fields: &TaskPatch) -> Result<(), ApiError>;

    async fn delete_daily_task(&self, task_id: i64) -> Result<(), ApiError>;

    async fn create_task_group(&self, camp_id: i64, group: &GroupForm) -> Result<(), ApiError>;

    /// Updates a group with a payload built by
    /// [`build_group_update_payload`](crate::libs::group::build_group_update_payload).
    async fn update_task_group(&self, group_id: i64, fields: &Map<String, Value>) -> Result<(), ApiError>;

    /// Deletes a group. Member tasks are unlinked, not deleted.
    async fn delete_task_group(&self, group_id: i64) -> Result<(), ApiError>;

    /// Creates or replaces the challenge of `challenge.day_number`.
    async fn save_camp_day_challenge(&self, camp_id: i64, challenge: &DayChallenge) -> Result<(), ApiError>;

    async fn delete_camp_day_challenge(&self, camp_id: i64, day_number: u32) -> Result<(), ApiError>;

    /// Submits raw task records for import; the server validates them again.
    async fn import_camp_tasks(&self, camp_id: i64, tasks: &[Value], replace_existing: bool) -> Result<ImportResponse, ApiError>;

    /// Uploads a CSV or Excel file; parsing and validation happen server-side.
    async fn import_camp_tasks_file(&self, camp_id: i64, file: &ImportFile) -> Result<ImportResponse, ApiError>;

    async fn export_camp_tasks(&self, camp_id: i64, format: ServerExportFormat) -> Result<ExportPayload, ApiError>;
}
