//! Camp synchronization controller.
//!
//! [`CampSync`] owns the in-memory copy of a camp's tasks, groups and day
//! challenges and is the only writer of that state. Every mutation follows
//! the same protocol:
//!
//! 1. validate locally (no network call when validation fails)
//! 2. issue the mutation; bulk operations fan out one call per item and
//!    wait for all of them (fan-in), whatever their outcome
//! 3. re-fetch the affected collections and replace local state wholesale
//!
//! Reorder and bulk field updates patch the local list optimistically before
//! step 2; the re-fetch in step 3 always replaces that patch.
//!
//! Network failures are stored as a dismissible banner and returned to the
//! caller. Failures inside the task editor and the day challenge editor stay
//! inline in the editor, which remains open.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use campdesk::api::rest::RestClient;
//! use campdesk::libs::sync::CampSync;
//!
//! # async fn run(client: RestClient) -> anyhow::Result<()> {
//! let mut sync = CampSync::new(client, 12);
//! sync.load().await?;
//! let changes = sync.reorder(41, 37).await?;
//! println!("{} tasks moved", changes.len());
//! # Ok(())
//! # }
//! ```

use super::camp::CampSummary;
use super::challenge::DayChallenge;
use super::group::{build_group_update_payload, creates_cycle, GroupForm, TaskGroup};
use super::import::{validate_import_text, ImportError, ImportFile, ImportFileError, ImportReport};
use super::messages::Message;
use super::ordering::{apply_order_changes, compact_day, day_tasks, reorder_within_day, OrderChange};
use super::task::{Task, TaskDraft, TaskPatch};
use crate::api::{ApiError, CampApi, ExportPayload, ImportResponse, ServerExportFormat};
use futures::future::join_all;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{}", .0.join("; "))]
    Invalid(Vec<String>),
    #[error("task {0} not found")]
    TaskNotFound(i64),
    #[error("group {0} not found")]
    GroupNotFound(i64),
    #[error("{failed} of {total} deletions failed")]
    BulkDelete { failed: usize, total: usize },
    #[error("{failed} of {total} updates failed")]
    BulkUpdate { failed: usize, total: usize },
    #[error("no valid tasks to import")]
    NothingToImport,
    #[error("the server rejected {0} imported task(s)")]
    ImportRejected(usize),
    #[error(transparent)]
    ImportFile(#[from] ImportFileError),
    #[error("the task editor is not open")]
    EditorClosed,
}

/// Asks the user to confirm a destructive operation.
pub trait Confirm {
    fn confirm(&self, prompt: &Message) -> bool;
}

/// Fixed answer; used for `--yes` and in tests.
impl Confirm for bool {
    fn confirm(&self, _prompt: &Message) -> bool {
        *self
    }
}

/// Outcome of a confirmation-gated operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The user declined; nothing was sent.
    Declined,
}

/// State of the add/edit task modal. At most one mode is open.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskEditor {
    Closed,
    Adding { error: Option<String> },
    Editing { task: Box<Task>, error: Option<String> },
}

/// State of the day challenge editor.
#[derive(Debug, Clone, PartialEq)]
pub enum ChallengeEditor {
    Closed,
    Open { day_number: u32, error: Option<String> },
}

/// Locally held copy of the server state.
#[derive(Debug, Clone, Default)]
pub struct CampState {
    pub camp: Option<CampSummary>,
    pub tasks: Vec<Task>,
    pub groups: Vec<TaskGroup>,
    pub challenges: Vec<DayChallenge>,
}

pub struct CampSync<A: CampApi> {
    api: A,
    camp_id: i64,
    cohort_number: Option<u32>,
    state: CampState,
    editor: TaskEditor,
    challenge_editor: ChallengeEditor,
    import_preview: Option<ImportReport>,
    banner: Option<String>,
    saving: bool,
}

impl<A: CampApi> CampSync<A> {
    pub fn new(api: A, camp_id: i64) -> Self {
        Self {
            api,
            camp_id,
            cohort_number: None,
            state: CampState::default(),
            editor: TaskEditor::Closed,
            challenge_editor: ChallengeEditor::Closed,
            import_preview: None,
            banner: None,
            saving: false,
        }
    }

    /// Fixes the cohort filter instead of using the camp's current cohort.
    pub fn with_cohort(mut self, cohort_number: Option<u32>) -> Self {
        self.cohort_number = cohort_number;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn camp_id(&self) -> i64 {
        self.camp_id
    }

    pub fn cohort_number(&self) -> Option<u32> {
        self.cohort_number
    }

    pub fn state(&self) -> &CampState {
        &self.state
    }

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    pub fn groups(&self) -> &[TaskGroup] {
        &self.state.groups
    }

    pub fn challenges(&self) -> &[DayChallenge] {
        &self.state.challenges
    }

    pub fn camp(&self) -> Option<&CampSummary> {
        self.state.camp.as_ref()
    }

    /// Camp length once the summary is loaded. Without it day numbers are only
    /// checked against the lower bound.
    pub fn duration_days(&self) -> Option<u32> {
        self.state.camp.as_ref().and_then(|c| c.duration_days)
    }

    pub fn task(&self, task_id: i64) -> Option<&Task> {
        self.state.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn group(&self, group_id: i64) -> Option<&TaskGroup> {
        self.state.groups.iter().find(|g| g.id == group_id)
    }

    pub fn editor(&self) -> &TaskEditor {
        &self.editor
    }

    pub fn challenge_editor(&self) -> &ChallengeEditor {
        &self.challenge_editor
    }

    pub fn import_preview(&self) -> Option<&ImportReport> {
        self.import_preview.as_ref()
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    /// True while a mutation is in flight; triggering actions stay disabled.
    ///
    /// Mutations borrow the controller mutably, so a second one cannot start
    /// before the first has settled.
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    // === LOADING ===

    /// Loads the camp summary, then tasks, challenges and groups.
    ///
    /// The summary's current cohort seeds the cohort filter unless one was set.
    pub async fn load(&mut self) -> Result<(), SyncError> {
        let result = self.load_inner().await;
        self.report(result)
    }

    async fn load_inner(&mut self) -> Result<(), SyncError> {
        let camp = self.api.get_camp_details(self.camp_id).await?;
        if self.cohort_number.is_none() {
            self.cohort_number = camp.current_cohort_number;
        }
        self.state.camp = Some(camp);
        self.refresh_all().await
    }

    /// Switches the cohort filter and reloads the task bundle.
    pub async fn set_cohort(&mut self, cohort_number: Option<u32>) -> Result<(), SyncError> {
        self.cohort_number = cohort_number;
        let result = self.refresh_tasks().await;
        self.report(result)
    }

    /// Replaces tasks and day challenges with the server's bundle.
    pub async fn refresh_tasks(&mut self) -> Result<(), SyncError> {
        let bundle = self.api.get_camp_daily_tasks(self.camp_id, self.cohort_number).await?;
        debug!(tasks = bundle.tasks.len(), challenges = bundle.day_challenges.len(), "task bundle refreshed");
        self.state.tasks = bundle.tasks;
        self.state.challenges = bundle.day_challenges;
        Ok(())
    }

    /// Replaces the group list with the server's.
    pub async fn refresh_groups(&mut self) -> Result<(), SyncError> {
        self.state.groups = self.api.get_camp_task_groups(self.camp_id).await?;
        Ok(())
    }

    async fn refresh_all(&mut self) -> Result<(), SyncError> {
        let (bundle, groups) = futures::join!(
            self.api.get_camp_daily_tasks(self.camp_id, self.cohort_number),
            self.api.get_camp_task_groups(self.camp_id)
        );
        let bundle = bundle?;
        self.state.tasks = bundle.tasks;
        self.state.challenges = bundle.day_challenges;
        self.state.groups = groups?;
        Ok(())
    }

    // === TASKS ===

    /// Creates a single task after validating it.
    pub async fn add_task(&mut self, draft: TaskDraft) -> Result<(), SyncError> {
        self.begin();
        let result = self.add_task_inner(&draft).await;
        self.finish(result)
    }

    async fn add_task_inner(&mut self, draft: &TaskDraft) -> Result<(), SyncError> {
        let errors = draft.validate(self.duration_days());
        if !errors.is_empty() {
            return Err(SyncError::Invalid(errors));
        }
        self.api.add_daily_tasks(self.camp_id, std::slice::from_ref(draft)).await?;
        self.refresh_tasks().await
    }

    /// Partially updates a task.
    pub async fn update_task(&mut self, task_id: i64, patch: TaskPatch) -> Result<(), SyncError> {
        self.begin();
        let result = self.update_task_inner(task_id, &patch).await;
        self.finish(result)
    }

    async fn update_task_inner(&mut self, task_id: i64, patch: &TaskPatch) -> Result<(), SyncError> {
        if self.task(task_id).is_none() {
            return Err(SyncError::TaskNotFound(task_id));
        }
        self.check_patch_day(patch)?;
        self.api.update_daily_task(task_id, patch).await?;
        if patch.group_id.is_some() {
            // Moving a task between groups changes their task counts
            self.refresh_all().await
        } else {
            self.refresh_tasks().await
        }
    }

    /// Deletes one task after confirmation, then closes the gap it leaves.
    pub async fn delete_task(&mut self, task_id: i64, confirm: &impl Confirm) -> Result<Outcome, SyncError> {
        let Some(task) = self.task(task_id) else {
            return self.report(Err(SyncError::TaskNotFound(task_id)));
        };
        if !confirm.confirm(&Message::ConfirmDeleteTask(task.title.clone())) {
            return Ok(Outcome::Declined);
        }

        self.begin();
        let result = async {
            self.api.delete_daily_task(task_id).await?;
            let compaction = self.compact_after_delete(&[task_id]).await;
            self.refresh_tasks().await?;
            compaction
        }
        .await;
        self.finish(result).map(|_| Outcome::Done)
    }

    /// Deletes several tasks concurrently after a single confirmation.
    ///
    /// All deletions run to completion even if some fail; the list is always
    /// refreshed afterwards. Any failure is reported as one aggregate
    /// [`SyncError::BulkDelete`].
    pub async fn bulk_delete(&mut self, task_ids: &[i64], confirm: &impl Confirm) -> Result<Outcome, SyncError> {
        let ids: Vec<i64> = task_ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        if ids.is_empty() {
            return Ok(Outcome::Done);
        }
        if !confirm.confirm(&Message::ConfirmDeleteTasks(ids.len())) {
            return Ok(Outcome::Declined);
        }

        self.begin();
        let result = self.bulk_delete_inner(&ids).await;
        self.finish(result).map(|_| Outcome::Done)
    }

    async fn bulk_delete_inner(&mut self, ids: &[i64]) -> Result<(), SyncError> {
        let api = &self.api;
        let results = join_all(ids.iter().map(|id| api.delete_daily_task(*id))).await;

        let mut deleted = Vec::new();
        for (id, result) in ids.iter().zip(results) {
            match result {
                Ok(()) => deleted.push(*id),
                Err(e) => warn!(task_id = id, error = %e, "task deletion failed"),
            }
        }
        let failed = ids.len() - deleted.len();

        let compaction = self.compact_after_delete(&deleted).await;
        self.refresh_tasks().await?;

        if failed > 0 {
            return Err(SyncError::BulkDelete { failed, total: ids.len() });
        }
        compaction
    }

    /// Applies the same patch to several tasks.
    ///
    /// The local list is patched immediately; the authoritative refresh that
    /// follows replaces it.
    pub async fn bulk_update(&mut self, task_ids: &[i64], patch: TaskPatch) -> Result<(), SyncError> {
        self.begin();
        let result = self.bulk_update_inner(task_ids, &patch).await;
        self.finish(result)
    }

    async fn bulk_update_inner(&mut self, task_ids: &[i64], patch: &TaskPatch) -> Result<(), SyncError> {
        if patch.is_empty() || task_ids.is_empty() {
            return Ok(());
        }
        if let Some(missing) = task_ids.iter().find(|id| self.task(**id).is_none()) {
            return Err(SyncError::TaskNotFound(*missing));
        }
        self.check_patch_day(patch)?;

        for task in self.state.tasks.iter_mut().filter(|t| task_ids.contains(&t.id)) {
            patch.apply(task);
        }

        let api = &self.api;
        let results = join_all(task_ids.iter().map(|id| api.update_daily_task(*id, patch))).await;
        let failed = results.iter().filter(|r| r.is_err()).count();

        self.refresh_tasks().await?;
        if failed > 0 {
            return Err(SyncError::BulkUpdate { failed, total: task_ids.len() });
        }
        Ok(())
    }

    /// Moves `moved_id` onto `target_id` within one day.
    ///
    /// Rejected moves (same task, unknown id, different days) are a no-op and
    /// send nothing. Returns the order changes that were persisted.
    pub async fn reorder(&mut self, moved_id: i64, target_id: i64) -> Result<Vec<OrderChange>, SyncError> {
        let changes = reorder_within_day(&self.state.tasks, moved_id, target_id);
        if changes.is_empty() {
            debug!(moved_id, target_id, "reorder rejected or nothing to change");
            return Ok(changes);
        }

        self.begin();
        apply_order_changes(&mut self.state.tasks, &changes);
        let result = async {
            let failed = self.persist_order_changes(&changes).await;
            self.refresh_tasks().await?;
            if failed > 0 {
                return Err(SyncError::BulkUpdate { failed, total: changes.len() });
            }
            Ok(())
        }
        .await;
        self.finish(result).map(|_| changes)
    }

    /// Duplicates a task onto another day.
    pub async fn copy_to_day(&mut self, task_id: i64, day_number: u32) -> Result<(), SyncError> {
        self.begin();
        let result = self.copy_to_day_inner(task_id, day_number).await;
        self.finish(result)
    }

    async fn copy_to_day_inner(&mut self, task_id: i64, day_number: u32) -> Result<(), SyncError> {
        let task = self.task(task_id).ok_or(SyncError::TaskNotFound(task_id))?;
        // Append after the target day's last task; the server normalizes it
        let order_hint = day_tasks(&self.state.tasks, day_number).len() as u32 + 1;
        let draft = task.copy_to_day(day_number, order_hint);

        let errors = draft.validate(self.duration_days());
        if !errors.is_empty() {
            return Err(SyncError::Invalid(errors));
        }
        self.api.add_daily_tasks(self.camp_id, std::slice::from_ref(&draft)).await?;
        self.refresh_tasks().await
    }

    /// Sends one update per order change concurrently; returns the failure count.
    async fn persist_order_changes(&self, changes: &[OrderChange]) -> usize {
        let patches: Vec<(i64, TaskPatch)> = changes.iter().map(|c| (c.task_id, TaskPatch::order(c.order_in_day))).collect();
        let api = &self.api;
        let results = join_all(patches.iter().map(|(id, patch)| api.update_daily_task(*id, patch))).await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!(failed, total = changes.len(), "some order updates failed");
        }
        failed
    }

    /// Renumbers the days that lost tasks so their order stays dense.
    ///
    /// Fails with [`SyncError::BulkUpdate`] when some renumbering updates were
    /// not saved; the caller refreshes before reporting it.
    async fn compact_after_delete(&mut self, deleted: &[i64]) -> Result<(), SyncError> {
        if deleted.is_empty() {
            return Ok(());
        }
        let days: BTreeSet<u32> = self.state.tasks.iter().filter(|t| deleted.contains(&t.id)).map(|t| t.day_number).collect();
        self.state.tasks.retain(|t| !deleted.contains(&t.id));

        let changes: Vec<OrderChange> = days.into_iter().flat_map(|day| compact_day(&self.state.tasks, day)).collect();
        if changes.is_empty() {
            return Ok(());
        }
        apply_order_changes(&mut self.state.tasks, &changes);
        match self.persist_order_changes(&changes).await {
            0 => Ok(()),
            failed => Err(SyncError::BulkUpdate { failed, total: changes.len() }),
        }
    }

    /// Rejects a patch moving tasks outside the camp's days.
    fn check_patch_day(&self, patch: &TaskPatch) -> Result<(), SyncError> {
        let Some(day) = patch.day_number else {
            return Ok(());
        };
        if day < 1 {
            return Err(SyncError::Invalid(vec!["day_number must be at least 1".to_string()]));
        }
        match self.duration_days() {
            Some(limit) if day > limit => Err(SyncError::Invalid(vec![format!(
                "day_number {} exceeds the camp duration of {} days",
                day, limit
            )])),
            _ => Ok(()),
        }
    }

    // === TASK EDITOR ===

    /// Opens the editor in adding mode, closing any edit in progress.
    pub fn open_add(&mut self) {
        self.editor = TaskEditor::Adding { error: None };
    }

    /// Opens the editor on an existing task, closing any add in progress.
    pub fn open_edit(&mut self, task_id: i64) -> Result<(), SyncError> {
        let task = self.task(task_id).cloned().ok_or(SyncError::TaskNotFound(task_id))?;
        self.editor = TaskEditor::Editing {
            task: Box::new(task),
            error: None,
        };
        Ok(())
    }

    pub fn close_editor(&mut self) {
        self.editor = TaskEditor::Closed;
    }

    /// Submits the open editor.
    ///
    /// On success the editor closes. On failure it stays open in the same
    /// mode with the error attached, and no banner is raised.
    pub async fn submit_editor(&mut self, draft: TaskDraft) -> Result<(), SyncError> {
        let editing = match &self.editor {
            TaskEditor::Closed => return Err(SyncError::EditorClosed),
            TaskEditor::Adding { .. } => None,
            TaskEditor::Editing { task, .. } => Some(task.id),
        };

        self.begin();
        let result = match editing {
            None => self.add_task_inner(&draft).await,
            Some(task_id) => {
                let errors = draft.validate(self.duration_days());
                if errors.is_empty() {
                    self.update_task_inner(task_id, &TaskPatch::from(&draft)).await
                } else {
                    Err(SyncError::Invalid(errors))
                }
            }
        };
        self.saving = false;

        match result {
            Ok(()) => {
                self.editor = TaskEditor::Closed;
                Ok(())
            }
            Err(e) => {
                match &mut self.editor {
                    TaskEditor::Adding { error } | TaskEditor::Editing { error, .. } => *error = Some(e.to_string()),
                    TaskEditor::Closed => {}
                }
                Err(e)
            }
        }
    }

    // === GROUPS ===

    pub async fn add_group(&mut self, form: GroupForm) -> Result<(), SyncError> {
        self.begin();
        let result = async {
            let errors = form.validate();
            if !errors.is_empty() {
                return Err(SyncError::Invalid(errors));
            }
            self.api.create_task_group(self.camp_id, &form).await?;
            self.refresh_groups().await
        }
        .await;
        self.finish(result)
    }

    /// Updates a group. A null parent is left out of the payload entirely.
    pub async fn update_group(&mut self, group_id: i64, form: GroupForm) -> Result<(), SyncError> {
        self.begin();
        let result = self.update_group_inner(group_id, &form).await;
        self.finish(result)
    }

    async fn update_group_inner(&mut self, group_id: i64, form: &GroupForm) -> Result<(), SyncError> {
        if self.group(group_id).is_none() {
            return Err(SyncError::GroupNotFound(group_id));
        }
        let mut errors = form.validate();
        if let Some(parent_id) = form.parent_group_id {
            if parent_id == group_id {
                errors.push("a group cannot be its own parent".to_string());
            } else if creates_cycle(&self.state.groups, group_id, parent_id) {
                errors.push(format!("group {} is nested inside this group and cannot be its parent", parent_id));
            }
        }
        if !errors.is_empty() {
            return Err(SyncError::Invalid(errors));
        }

        self.api.update_task_group(group_id, &build_group_update_payload(form)).await?;
        self.refresh_groups().await
    }

    /// Deletes a group after confirmation. Its tasks become ungrouped, so both
    /// lists are refreshed.
    pub async fn delete_group(&mut self, group_id: i64, confirm: &impl Confirm) -> Result<Outcome, SyncError> {
        let Some(group) = self.group(group_id) else {
            return self.report(Err(SyncError::GroupNotFound(group_id)));
        };
        if !confirm.confirm(&Message::ConfirmDeleteGroup(group.title.clone(), group.tasks_count)) {
            return Ok(Outcome::Declined);
        }

        self.begin();
        let result = async {
            self.api.delete_task_group(group_id).await?;
            self.refresh_all().await
        }
        .await;
        self.finish(result).map(|_| Outcome::Done)
    }

    // === DAY CHALLENGES ===

    pub fn open_challenge(&mut self, day_number: u32) {
        self.challenge_editor = ChallengeEditor::Open { day_number, error: None };
    }

    pub fn close_challenge(&mut self) {
        self.challenge_editor = ChallengeEditor::Closed;
    }

    /// Creates or replaces the challenge of a day.
    ///
    /// Blank title or description is rejected before any network call. On
    /// success the bundle is refreshed and the editor closes; on failure the
    /// editor stays open with the error inline.
    pub async fn save_challenge(&mut self, challenge: DayChallenge) -> Result<(), SyncError> {
        if !matches!(self.challenge_editor, ChallengeEditor::Open { day_number, .. } if day_number == challenge.day_number) {
            self.open_challenge(challenge.day_number);
        }

        let result = if !challenge.is_complete() {
            Err(SyncError::Invalid(vec![Message::ChallengeFieldsRequired.to_string()]))
        } else {
            self.begin();
            let result = async {
                self.api.save_camp_day_challenge(self.camp_id, &challenge.trimmed()).await?;
                self.refresh_tasks().await
            }
            .await;
            self.saving = false;
            result
        };

        match result {
            Ok(()) => {
                self.challenge_editor = ChallengeEditor::Closed;
                Ok(())
            }
            Err(e) => {
                if let ChallengeEditor::Open { error, .. } = &mut self.challenge_editor {
                    *error = Some(e.to_string());
                }
                Err(e)
            }
        }
    }

    pub async fn delete_challenge(&mut self, day_number: u32) -> Result<(), SyncError> {
        self.begin();
        let result = async {
            self.api.delete_camp_day_challenge(self.camp_id, day_number).await?;
            self.refresh_tasks().await
        }
        .await;
        self.finish(result)
    }

    // === IMPORT / EXPORT ===

    /// Validates pasted or loaded JSON and keeps the result as the preview.
    pub fn preview_import(&mut self, text: &str) -> &ImportReport {
        let report = validate_import_text(text, self.duration_days());
        self.import_preview.insert(report)
    }

    pub fn clear_import_preview(&mut self) {
        self.import_preview = None;
    }

    /// Submits the valid records of the current preview.
    ///
    /// Errors returned by the server replace the preview's error list.
    pub async fn submit_import(&mut self, replace_existing: bool) -> Result<ImportResponse, SyncError> {
        let valid_tasks = match &self.import_preview {
            Some(preview) if !preview.valid_tasks.is_empty() => preview.valid_tasks.clone(),
            _ => return self.report(Err(SyncError::NothingToImport)),
        };

        self.begin();
        let result = async {
            let response = self.api.import_camp_tasks(self.camp_id, &valid_tasks, replace_existing).await?;
            self.settle_import(response).await
        }
        .await;
        self.finish(result)
    }

    /// Imports a file: JSON is previewed and submitted, spreadsheets are
    /// uploaded for the server to parse.
    pub async fn import_file(&mut self, file: &ImportFile, replace_existing: bool) -> Result<ImportResponse, SyncError> {
        if file.kind.is_validated_locally() {
            self.preview_import(&file.text());
            return self.submit_import(replace_existing).await;
        }

        self.begin();
        let result = async {
            let response = self.api.import_camp_tasks_file(self.camp_id, file).await?;
            self.settle_import(response).await
        }
        .await;
        self.finish(result)
    }

    async fn settle_import(&mut self, response: ImportResponse) -> Result<ImportResponse, SyncError> {
        if !response.errors.is_empty() {
            self.replace_preview_errors(response.errors.clone());
        } else if response.success {
            self.import_preview = None;
        }

        if response.success || response.imported > 0 {
            self.refresh_tasks().await?;
        }
        if !response.success {
            return Err(SyncError::ImportRejected(response.errors.len()));
        }
        Ok(response)
    }

    fn replace_preview_errors(&mut self, errors: Vec<ImportError>) {
        let preview = self.import_preview.get_or_insert_with(ImportReport::default);
        preview.errors = errors;
    }

    /// Asks the server for an export of all camp tasks.
    pub async fn export(&mut self, format: ServerExportFormat) -> Result<ExportPayload, SyncError> {
        let result = self.api.export_camp_tasks(self.camp_id, format).await.map_err(SyncError::from);
        self.report(result)
    }

    // === HELPERS ===

    fn begin(&mut self) {
        self.saving = true;
    }

    fn finish<T>(&mut self, result: Result<T, SyncError>) -> Result<T, SyncError> {
        self.saving = false;
        self.report(result)
    }

    /// Raises the page-level banner for failures.
    fn report<T>(&mut self, result: Result<T, SyncError>) -> Result<T, SyncError> {
        if let Err(e) = &result {
            self.banner = Some(e.to_string());
        }
        result
    }
}
