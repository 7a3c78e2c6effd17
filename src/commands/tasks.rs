use super::CampArgs;
use crate::{
    api::CampApi,
    libs::{
        messages::Message,
        sync::{CampSync, Outcome},
        task::{TaskDraft, TaskFilter, TaskPatch, TaskType},
        view::View,
    },
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct TasksArgs {
    #[command(flatten)]
    camp: CampArgs,

    #[command(subcommand)]
    command: Option<TasksCommand>,
}

#[derive(Debug, Subcommand)]
enum TasksCommand {
    /// List tasks
    List {
        /// Only tasks of this day
        #[arg(short, long)]
        day: Option<u32>,
        /// Only tasks of this group
        #[arg(short, long, conflicts_with = "ungrouped")]
        group: Option<i64>,
        /// Only tasks without a group
        #[arg(long)]
        ungrouped: bool,
    },
    /// Create a task; missing fields are prompted for
    Add {
        #[command(flatten)]
        fields: TaskFields,
    },
    /// Edit a task; only the given fields change
    Edit {
        /// Task ID
        id: i64,
        #[command(flatten)]
        fields: TaskFields,
    },
    /// Delete one or more tasks
    Delete {
        /// Task IDs
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Move a task onto the position of another task of the same day
    Move {
        /// Task to move
        moved: i64,
        /// Task whose position it takes
        target: i64,
    },
    /// Copy a task to another day
    Copy {
        /// Task ID
        id: i64,
        /// Destination day
        #[arg(short, long)]
        day: u32,
    },
    /// Change fields of several tasks at once
    Set {
        /// Task IDs
        #[arg(required = true)]
        ids: Vec<i64>,
        #[command(flatten)]
        fields: TaskFields,
    },
}

/// Editable task fields accepted on the command line.
#[derive(Debug, Clone, Default, Args)]
pub struct TaskFields {
    /// Day number
    #[arg(long)]
    day: Option<u32>,
    /// Task type (reading, memorization, prayer, tafseer_tabari, tafseer_kathir, youtube, journal)
    #[arg(long = "type")]
    task_type: Option<TaskType>,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    verses_from: Option<u32>,
    #[arg(long)]
    verses_to: Option<u32>,
    #[arg(long)]
    tafseer_link: Option<String>,
    #[arg(long)]
    youtube_link: Option<String>,
    #[arg(long)]
    points: Option<u32>,
    /// Mark the task optional (`--optional false` to make it required)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    optional: Option<bool>,
    /// Estimated time in minutes
    #[arg(long)]
    estimated_time: Option<u32>,
    /// Group ID
    #[arg(long)]
    group: Option<i64>,
}

impl TaskFields {
    /// Overwrites the draft fields that were given.
    pub fn apply_to(&self, draft: &mut TaskDraft) {
        if let Some(day) = self.day {
            draft.day_number = day;
        }
        if let Some(task_type) = &self.task_type {
            draft.task_type = task_type.clone();
        }
        if let Some(title) = &self.title {
            draft.title = title.clone();
        }
        if let Some(description) = &self.description {
            draft.description = description.clone();
        }
        if self.verses_from.is_some() {
            draft.verses_from = self.verses_from;
        }
        if self.verses_to.is_some() {
            draft.verses_to = self.verses_to;
        }
        if self.tafseer_link.is_some() {
            draft.tafseer_link = self.tafseer_link.clone();
        }
        if self.youtube_link.is_some() {
            draft.youtube_link = self.youtube_link.clone();
        }
        if let Some(points) = self.points {
            draft.points = points;
        }
        if let Some(optional) = self.optional {
            draft.is_optional = optional;
        }
        if self.estimated_time.is_some() {
            draft.estimated_time = self.estimated_time;
        }
        if self.group.is_some() {
            draft.group_id = self.group;
        }
    }

    /// Patch carrying only the given fields.
    pub fn to_patch(&self) -> TaskPatch {
        TaskPatch {
            day_number: self.day,
            task_type: self.task_type.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            verses_from: self.verses_from,
            verses_to: self.verses_to,
            tafseer_link: self.tafseer_link.clone(),
            youtube_link: self.youtube_link.clone(),
            points: self.points,
            is_optional: self.optional,
            estimated_time: self.estimated_time,
            group_id: self.group,
            ..TaskPatch::default()
        }
    }
}

pub async fn cmd(args: TasksArgs) -> Result<()> {
    let mut sync = args.camp.connect().await?;
    let prompt = args.camp.prompt();

    match args.command.unwrap_or(TasksCommand::List {
        day: None,
        group: None,
        ungrouped: false,
    }) {
        TasksCommand::List { day, group, ungrouped } => handle_list(&sync, day, group, ungrouped),
        TasksCommand::Add { fields } => handle_add(&mut sync, fields).await,
        TasksCommand::Edit { id, fields } => handle_edit(&mut sync, id, fields).await,
        TasksCommand::Delete { ids } => {
            let outcome = if let [id] = ids.as_slice() {
                let title = sync.task(*id).map(|t| t.title.clone()).unwrap_or_default();
                let outcome = sync.delete_task(*id, &prompt).await?;
                if outcome == Outcome::Done {
                    msg_success!(Message::TaskDeleted(title));
                }
                outcome
            } else {
                let outcome = sync.bulk_delete(&ids, &prompt).await?;
                if outcome == Outcome::Done {
                    msg_success!(Message::TasksDeletedCount(ids.len()));
                }
                outcome
            };
            if outcome == Outcome::Declined {
                msg_info!(Message::OperationCancelled);
            }
            Ok(())
        }
        TasksCommand::Move { moved, target } => {
            let changes = sync.reorder(moved, target).await?;
            if changes.is_empty() {
                msg_warning!(Message::ReorderNothingToDo);
            } else {
                msg_success!(Message::TasksReordered(changes.len()));
            }
            Ok(())
        }
        TasksCommand::Copy { id, day } => {
            sync.copy_to_day(id, day).await?;
            let title = sync.task(id).map(|t| t.title.clone()).unwrap_or_default();
            msg_success!(Message::TaskCopied(title, day));
            Ok(())
        }
        TasksCommand::Set { ids, fields } => {
            let patch = fields.to_patch();
            if patch.is_empty() {
                msg_warning!(Message::NoChangesRequested);
                return Ok(());
            }
            sync.bulk_update(&ids, patch).await?;
            msg_success!(Message::TasksUpdatedCount(ids.len()));
            Ok(())
        }
    }
}

fn handle_list<A: CampApi>(sync: &CampSync<A>, day: Option<u32>, group: Option<i64>, ungrouped: bool) -> Result<()> {
    let (header, filter) = match (day, group, ungrouped) {
        (Some(day), _, _) => (Message::TasksForDayHeader(day), TaskFilter::Day(day)),
        (None, Some(group_id), _) => {
            let title = sync.group(group_id).map(|g| g.title.clone()).unwrap_or_else(|| format!("#{}", group_id));
            (Message::TasksInGroupHeader(title), TaskFilter::Group(group_id))
        }
        (None, None, true) => (Message::UngroupedTasksHeader, TaskFilter::Ungrouped),
        (None, None, false) => (Message::TasksHeader, TaskFilter::All),
    };
    let tasks = filter.select(sync.tasks());

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(header, true);
    View::tasks(&tasks, sync.groups())?;
    Ok(())
}

async fn handle_add<A: CampApi>(sync: &mut CampSync<A>, fields: TaskFields) -> Result<()> {
    let day = match fields.day {
        Some(day) => day,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDay.to_string())
            .default(1)
            .interact_text()?,
    };
    let task_type = match &fields.task_type {
        Some(task_type) => task_type.clone(),
        None => {
            let labels: Vec<String> = TaskType::KNOWN.iter().map(|t| format!("{} ({})", t.as_str(), t.label())).collect();
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskType.to_string())
                .items(&labels)
                .default(0)
                .interact()?;
            TaskType::KNOWN[selection].clone()
        }
    };
    let title = match &fields.title {
        Some(title) => title.clone(),
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .interact_text()?,
    };

    let mut draft = TaskDraft::new(day, task_type, &title);
    fields.apply_to(&mut draft);

    sync.open_add();
    sync.submit_editor(draft).await?;
    msg_success!(Message::TaskCreated(title));
    Ok(())
}

async fn handle_edit<A: CampApi>(sync: &mut CampSync<A>, id: i64, fields: TaskFields) -> Result<()> {
    sync.open_edit(id)?;
    let Some(task) = sync.task(id) else {
        return Ok(());
    };

    let mut draft = TaskDraft::from(task);
    fields.apply_to(&mut draft);
    if draft == TaskDraft::from(task) {
        sync.close_editor();
        msg_warning!(Message::NoChangesRequested);
        return Ok(());
    }

    let title = draft.title.clone();
    sync.submit_editor(draft).await?;
    msg_success!(Message::TaskUpdated(title));
    Ok(())
}
