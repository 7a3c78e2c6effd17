//! Display implementation for campdesk messages.
//!
//! All user-facing wording is defined here so commands only pick a
//! [`Message`] variant and pass its parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigModuleServer => "Camp API server".to_string(),
            Message::ConfigModuleCamp => "Default camp".to_string(),
            Message::ServerNotConfigured => "The camp API is not configured. Run `campdesk init` or set CAMPDESK_API_URL".to_string(),
            Message::CampNotConfigured => "No camp selected. Run `campdesk init` or set CAMPDESK_CAMP_ID".to_string(),

            // === PROMPTS ===
            Message::PromptServerApiUrl => "Enter the camp API URL".to_string(),
            Message::PromptServerAuthToken => "Enter your API token (leave empty for none)".to_string(),
            Message::PromptCampId => "Enter the camp ID".to_string(),
            Message::PromptCohortNumber => "Enter the cohort number (leave empty for the current one)".to_string(),
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDay => "Day number".to_string(),
            Message::PromptTaskType => "Task type".to_string(),
            Message::PromptGroupTitle => "Group title".to_string(),
            Message::PromptChallengeTitle => "Challenge title".to_string(),
            Message::PromptChallengeDescription => "Challenge description".to_string(),

            // === CAMP MESSAGES ===
            Message::CampHeader(name, id) => format!("Camp: {} (#{})", name, id),
            Message::CampDuration(days) => format!("Duration: {} days", days),
            Message::CohortFilter(cohort) => format!("Cohort: {}", cohort),

            // === TASK MESSAGES ===
            Message::TasksHeader => "Camp tasks:".to_string(),
            Message::TasksForDayHeader(day) => format!("Tasks for day {}:", day),
            Message::TasksInGroupHeader(title) => format!("Tasks in group '{}':", title),
            Message::UngroupedTasksHeader => "Tasks without a group:".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TasksDeletedCount(count) => format!("Deleted {} task(s)", count),
            Message::TasksUpdatedCount(count) => format!("Updated {} task(s)", count),
            Message::TaskCopied(title, day) => format!("Task '{}' copied to day {}", title, day),
            Message::TasksReordered(count) => format!("Order saved, {} task(s) moved", count),
            Message::ReorderNothingToDo => "Nothing to reorder: both tasks must exist, differ and share a day".to_string(),
            Message::NoChangesRequested => "No changes requested".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::ConfirmDeleteTasks(count) => format!("Delete {} selected task(s)?", count),

            // === GROUP MESSAGES ===
            Message::GroupsHeader => "Task groups:".to_string(),
            Message::NoGroupsFound => "No task groups found".to_string(),
            Message::GroupCreated(title) => format!("Group '{}' created", title),
            Message::GroupUpdated(title) => format!("Group '{}' updated", title),
            Message::GroupDeleted(title) => format!("Group '{}' deleted", title),
            Message::ConfirmDeleteGroup(title, 0) => format!("Delete group '{}'?", title),
            Message::ConfirmDeleteGroup(title, count) => {
                format!("Delete group '{}'? Its {} task(s) will be kept without a group.", title, count)
            }

            // === DAY CHALLENGE MESSAGES ===
            Message::ChallengesHeader => "Day challenges:".to_string(),
            Message::NoChallengesFound => "No day challenges found".to_string(),
            Message::NoChallengeForDay(day) => format!("Day {} has no challenge", day),
            Message::ChallengeSaved(day) => format!("Challenge for day {} saved", day),
            Message::ChallengeDeleted(day) => format!("Challenge for day {} deleted", day),
            Message::ChallengeFieldsRequired => "Challenge title and description are required".to_string(),

            // === IMPORT MESSAGES ===
            Message::ImportPreviewHeader(valid, invalid) => format!("Import preview: {} valid task(s), {} with errors", valid, invalid),
            Message::ImportErrorsHeader => "Rejected records:".to_string(),
            Message::ImportDryRun => "Dry run, nothing was sent".to_string(),
            Message::ImportCompleted(count) => format!("Imported {} task(s)", count),
            Message::ImportUploading(file) => format!("Uploading {} for server-side import", file),
            Message::ConfirmReplaceTasks => "Replace all existing camp tasks with the imported ones?".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Tasks exported to {}", path),
            Message::ExportEmpty => "The camp has no tasks to export".to_string(),

            // === GENERAL ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::ValidationFailed(details) => format!("Validation failed: {}", details),
        };

        write!(f, "{}", text)
    }
}
