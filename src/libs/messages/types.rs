/// Every user-facing text of campdesk.
///
/// Variants carry the values interpolated into the text; the wording lives in
/// the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleServer,
    ConfigModuleCamp,
    ServerNotConfigured,
    CampNotConfigured,

    // === PROMPTS ===
    PromptServerApiUrl,
    PromptServerAuthToken,
    PromptCampId,
    PromptCohortNumber,
    PromptTaskTitle,
    PromptTaskDay,
    PromptTaskType,
    PromptGroupTitle,
    PromptChallengeTitle,
    PromptChallengeDescription,

    // === CAMP MESSAGES ===
    CampHeader(String, i64),
    CampDuration(u32),
    CohortFilter(u32),

    // === TASK MESSAGES ===
    TasksHeader,
    TasksForDayHeader(u32),
    TasksInGroupHeader(String),
    UngroupedTasksHeader,
    NoTasksFound,
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TasksDeletedCount(usize),
    TasksUpdatedCount(usize),
    TaskCopied(String, u32),
    TasksReordered(usize),
    ReorderNothingToDo,
    NoChangesRequested,
    ConfirmDeleteTask(String),
    ConfirmDeleteTasks(usize),

    // === GROUP MESSAGES ===
    GroupsHeader,
    NoGroupsFound,
    GroupCreated(String),
    GroupUpdated(String),
    GroupDeleted(String),
    ConfirmDeleteGroup(String, u32),

    // === DAY CHALLENGE MESSAGES ===
    ChallengesHeader,
    NoChallengesFound,
    NoChallengeForDay(u32),
    ChallengeSaved(u32),
    ChallengeDeleted(u32),
    ChallengeFieldsRequired,

    // === IMPORT MESSAGES ===
    ImportPreviewHeader(usize, usize),
    ImportErrorsHeader,
    ImportDryRun,
    ImportCompleted(usize),
    ImportUploading(String),
    ConfirmReplaceTasks,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    ExportEmpty,

    // === GENERAL ===
    OperationCancelled,
    ValidationFailed(String),
}
