//! Daily task entity and the payloads used to create and update tasks.
//!
//! A [`Task`] is the server's authoritative record. New tasks are described by
//! a [`TaskDraft`] and partial updates by a [`TaskPatch`]; both serialize to the
//! JSON bodies the camp API expects.

use super::flexible;
use super::group::{tasks_in_group, ungrouped_tasks};
use super::ordering::day_tasks;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker appended to the title of a task duplicated onto another day.
pub const COPY_SUFFIX: &str = " (copy)";

/// Kind of activity a task asks participants to do.
///
/// Unknown kinds coming from the server are preserved in [`TaskType::Other`]
/// so that a newer backend never breaks task listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskType {
    Reading,
    Memorization,
    Prayer,
    TafseerTabari,
    TafseerKathir,
    Youtube,
    Journal,
    Other(String),
}

impl TaskType {
    /// The seven kinds the camp API accepts, in display order.
    pub const KNOWN: [TaskType; 7] = [
        TaskType::Reading,
        TaskType::Memorization,
        TaskType::Prayer,
        TaskType::TafseerTabari,
        TaskType::TafseerKathir,
        TaskType::Youtube,
        TaskType::Journal,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            TaskType::Reading => "reading",
            TaskType::Memorization => "memorization",
            TaskType::Prayer => "prayer",
            TaskType::TafseerTabari => "tafseer_tabari",
            TaskType::TafseerKathir => "tafseer_kathir",
            TaskType::Youtube => "youtube",
            TaskType::Journal => "journal",
            TaskType::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TaskType::Other(_))
    }

    /// Comma separated list of the accepted wire values.
    pub fn known_values() -> String {
        Self::KNOWN.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(", ")
    }

    /// Display label shown in task lists.
    pub fn label(&self) -> &str {
        match self {
            TaskType::Reading => "قراءة",
            TaskType::Memorization => "حفظ",
            TaskType::Prayer => "صلاة",
            TaskType::TafseerTabari => "تفسير الطبري",
            TaskType::TafseerKathir => "تفسير ابن كثير",
            TaskType::Youtube => "فيديو يوتيوب",
            TaskType::Journal => "يوميات",
            TaskType::Other(raw) => raw,
        }
    }
}

impl From<String> for TaskType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "reading" => TaskType::Reading,
            "memorization" => TaskType::Memorization,
            "prayer" => TaskType::Prayer,
            "tafseer_tabari" => TaskType::TafseerTabari,
            "tafseer_kathir" => TaskType::TafseerKathir,
            "youtube" => TaskType::Youtube,
            "journal" => TaskType::Journal,
            _ => TaskType::Other(value),
        }
    }
}

impl From<TaskType> for String {
    fn from(value: TaskType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for TaskType {
    type Err = String;

    /// Parses only the known kinds; used for user input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match TaskType::from(s.trim().to_string()) {
            TaskType::Other(raw) => Err(format!("unknown task type '{}', expected one of: {}", raw, TaskType::known_values())),
            known => Ok(known),
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Looks up the display label for a raw task type value.
///
/// Unknown values are returned unchanged.
pub fn task_type_label(raw: &str) -> String {
    TaskType::from(raw.to_string()).label().to_string()
}

/// Extra link attached to a task (article, playlist, embedded video).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalLink {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub embed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_mode: Option<String>,
}

/// Uploaded file referenced by a task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// A daily task as returned by the camp API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub day_number: u32,
    pub task_type: TaskType,
    pub title: String,
    #[serde(default, deserialize_with = "flexible::null_as_default")]
    pub description: String,
    #[serde(default)]
    pub verses_from: Option<u32>,
    #[serde(default)]
    pub verses_to: Option<u32>,
    #[serde(default)]
    pub tafseer_link: Option<String>,
    #[serde(default)]
    pub youtube_link: Option<String>,
    #[serde(default, deserialize_with = "flexible::deserialize")]
    pub additional_links: Option<Vec<AdditionalLink>>,
    #[serde(default, deserialize_with = "flexible::deserialize")]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(default, deserialize_with = "flexible::null_as_default")]
    pub order_in_day: u32,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_optional: bool,
    #[serde(default, deserialize_with = "flexible::null_as_default")]
    pub points: u32,
    #[serde(default)]
    pub estimated_time: Option<u32>,
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default)]
    pub order_in_group: Option<i32>,
}

impl Task {
    pub fn type_label(&self) -> &str {
        self.task_type.label()
    }

    /// Builds the creation payload for a copy of this task on `day_number`.
    ///
    /// The id is dropped, the title gets [`COPY_SUFFIX`] and `order_in_day`
    /// carries `order_hint`, which the server normalizes.
    pub fn copy_to_day(&self, day_number: u32, order_hint: u32) -> TaskDraft {
        let mut draft = TaskDraft::from(self);
        draft.day_number = day_number;
        draft.order_in_day = Some(order_hint);
        draft.title = format!("{}{}", self.title, COPY_SUFFIX);
        draft
    }
}

/// Fields for a task that does not exist on the server yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub day_number: u32,
    pub task_type: TaskType,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verses_from: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verses_to: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tafseer_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_links: Option<Vec<AdditionalLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_in_day: Option<u32>,
    #[serde(default)]
    pub is_optional: bool,
    #[serde(default)]
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_in_group: Option<i32>,
}

impl TaskDraft {
    pub fn new(day_number: u32, task_type: TaskType, title: &str) -> Self {
        Self {
            day_number,
            task_type,
            title: title.to_string(),
            description: String::new(),
            verses_from: None,
            verses_to: None,
            tafseer_link: None,
            youtube_link: None,
            additional_links: None,
            attachments: None,
            order_in_day: None,
            is_optional: false,
            points: 0,
            estimated_time: None,
            group_id: None,
            order_in_group: None,
        }
    }

    /// Checks the draft before it is sent to the server.
    ///
    /// `duration_days` is the camp length when known; without it any
    /// `day_number >= 1` is accepted. Returns every problem found.
    pub fn validate(&self, duration_days: Option<u32>) -> Vec<String> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("title is required".to_string());
        }
        if self.day_number < 1 {
            errors.push("day_number must be at least 1".to_string());
        }
        if let Some(limit) = duration_days {
            if self.day_number > limit {
                errors.push(format!("day_number {} exceeds the camp duration of {} days", self.day_number, limit));
            }
        }
        if !self.task_type.is_known() {
            errors.push(format!("task_type must be one of: {}", TaskType::known_values()));
        }
        match (self.verses_from, self.verses_to) {
            (Some(from), Some(to)) if from == 0 || to == 0 => errors.push("verse numbers must be positive".to_string()),
            (Some(from), Some(to)) if from > to => errors.push(format!("verses_from ({}) must not exceed verses_to ({})", from, to)),
            (Some(_), None) | (None, Some(_)) => errors.push("verses_from and verses_to must be given together".to_string()),
            _ => {}
        }
        if self.estimated_time == Some(0) {
            errors.push("estimated_time must be a positive number of minutes".to_string());
        }

        errors
    }
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            day_number: task.day_number,
            task_type: task.task_type.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            verses_from: task.verses_from,
            verses_to: task.verses_to,
            tafseer_link: task.tafseer_link.clone(),
            youtube_link: task.youtube_link.clone(),
            additional_links: task.additional_links.clone(),
            attachments: task.attachments.clone(),
            order_in_day: Some(task.order_in_day),
            is_optional: task.is_optional,
            points: task.points,
            estimated_time: task.estimated_time,
            group_id: task.group_id,
            order_in_group: task.order_in_group,
        }
    }
}

/// Partial update of a task. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<TaskType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verses_from: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verses_to: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tafseer_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_links: Option<Vec<AdditionalLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_in_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_optional: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_in_group: Option<i32>,
}

impl TaskPatch {
    pub fn order(order_in_day: u32) -> Self {
        Self {
            order_in_day: Some(order_in_day),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Applies the set fields to a local copy of a task.
    pub fn apply(&self, task: &mut Task) {
        if let Some(day_number) = self.day_number {
            task.day_number = day_number;
        }
        if let Some(task_type) = &self.task_type {
            task.task_type = task_type.clone();
        }
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(verses_from) = self.verses_from {
            task.verses_from = Some(verses_from);
        }
        if let Some(verses_to) = self.verses_to {
            task.verses_to = Some(verses_to);
        }
        if let Some(tafseer_link) = &self.tafseer_link {
            task.tafseer_link = Some(tafseer_link.clone());
        }
        if let Some(youtube_link) = &self.youtube_link {
            task.youtube_link = Some(youtube_link.clone());
        }
        if let Some(additional_links) = &self.additional_links {
            task.additional_links = Some(additional_links.clone());
        }
        if let Some(attachments) = &self.attachments {
            task.attachments = Some(attachments.clone());
        }
        if let Some(order_in_day) = self.order_in_day {
            task.order_in_day = order_in_day;
        }
        if let Some(is_optional) = self.is_optional {
            task.is_optional = is_optional;
        }
        if let Some(points) = self.points {
            task.points = points;
        }
        if let Some(estimated_time) = self.estimated_time {
            task.estimated_time = Some(estimated_time);
        }
        if let Some(group_id) = self.group_id {
            task.group_id = Some(group_id);
        }
        if let Some(order_in_group) = self.order_in_group {
            task.order_in_group = Some(order_in_group);
        }
    }
}

impl From<&TaskDraft> for TaskPatch {
    /// Full replacement of every editable field with the draft's values.
    fn from(draft: &TaskDraft) -> Self {
        Self {
            day_number: Some(draft.day_number),
            task_type: Some(draft.task_type.clone()),
            title: Some(draft.title.clone()),
            description: Some(draft.description.clone()),
            verses_from: draft.verses_from,
            verses_to: draft.verses_to,
            tafseer_link: draft.tafseer_link.clone(),
            youtube_link: draft.youtube_link.clone(),
            additional_links: draft.additional_links.clone(),
            attachments: draft.attachments.clone(),
            order_in_day: draft.order_in_day,
            is_optional: Some(draft.is_optional),
            points: Some(draft.points),
            estimated_time: draft.estimated_time,
            group_id: draft.group_id,
            order_in_group: draft.order_in_group,
        }
    }
}

/// Selects which locally loaded tasks a listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Day(u32),
    Group(i64),
    Ungrouped,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Day(day) => task.day_number == *day,
            TaskFilter::Group(group_id) => task.group_id == Some(*group_id),
            TaskFilter::Ungrouped => task.group_id.is_none(),
        }
    }

    /// Matching tasks in display order: by position within a day, or by
    /// position within the group for [`TaskFilter::Group`].
    pub fn select<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        match self {
            TaskFilter::Day(day) => day_tasks(tasks, *day),
            TaskFilter::Group(group_id) => tasks_in_group(tasks, *group_id),
            TaskFilter::Ungrouped => by_position(ungrouped_tasks(tasks)),
            TaskFilter::All => by_position(tasks.iter().collect()),
        }
    }
}

fn by_position(mut tasks: Vec<&Task>) -> Vec<&Task> {
    tasks.sort_by_key(|t| (t.day_number, t.order_in_day, t.id));
    tasks
}

// MySQL-backed endpoints send booleans as 0/1.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Bool(flag)) => flag,
        Some(serde_json::Value::Number(n)) => n.as_i64().unwrap_or(0) != 0,
        Some(serde_json::Value::String(s)) => matches!(s.as_str(), "1" | "true"),
        _ => false,
    })
}
