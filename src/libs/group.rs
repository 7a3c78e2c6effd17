//! Task groups: folder-like, optionally nested collections of tasks.

use super::flexible;
use super::task::Task;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A task group as returned by the camp API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskGroup {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_group_id: Option<i64>,
    #[serde(default)]
    pub order_in_camp: Option<i32>,
    /// Derived by the server; never sent back.
    #[serde(default, deserialize_with = "flexible::null_as_default")]
    pub tasks_count: u32,
}

/// Editable fields of a group, used for both creation and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupForm {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_group_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_in_camp: Option<i32>,
}

impl GroupForm {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push("group title is required".to_string());
        }
        errors
    }
}

impl From<&TaskGroup> for GroupForm {
    fn from(group: &TaskGroup) -> Self {
        Self {
            title: group.title.clone(),
            description: group.description.clone(),
            parent_group_id: group.parent_group_id,
            order_in_camp: group.order_in_camp,
        }
    }
}

/// Builds the JSON body for a group update.
///
/// All fields are copied, then `parent_group_id` is removed entirely when it
/// is null: the server treats a missing key as "leave as is" and an explicit
/// null differently.
pub fn build_group_update_payload(group: &GroupForm) -> Map<String, Value> {
    let mut payload = match serde_json::to_value(group) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    if matches!(payload.get("parent_group_id"), Some(Value::Null) | None) {
        payload.remove("parent_group_id");
    }
    payload
}

/// A group may be offered as parent of `editing` unless it is the same group.
pub fn is_valid_parent_candidate(candidate: &TaskGroup, editing: &TaskGroup) -> bool {
    candidate.id != editing.id
}

/// Groups that may be selected as parent while editing `editing`.
///
/// With no group being edited (creation) every group is a candidate.
pub fn parent_candidates<'a>(groups: &'a [TaskGroup], editing: Option<&TaskGroup>) -> Vec<&'a TaskGroup> {
    groups
        .iter()
        .filter(|candidate| editing.map_or(true, |editing| is_valid_parent_candidate(candidate, editing)))
        .collect()
}

/// Returns true when making `parent_id` the parent of `group_id` would close a
/// loop in the group tree.
pub fn creates_cycle(groups: &[TaskGroup], group_id: i64, parent_id: i64) -> bool {
    let mut current = Some(parent_id);
    let mut hops = 0;
    while let Some(id) = current {
        if id == group_id {
            return true;
        }
        // A corrupted tree must not spin forever
        hops += 1;
        if hops > groups.len() {
            return true;
        }
        current = groups.iter().find(|g| g.id == id).and_then(|g| g.parent_group_id);
    }
    false
}

/// Tasks belonging to a group, ordered by their position inside it.
pub fn tasks_in_group(tasks: &[Task], group_id: i64) -> Vec<&Task> {
    let mut members: Vec<&Task> = tasks.iter().filter(|t| t.group_id == Some(group_id)).collect();
    members.sort_by_key(|t| (t.order_in_group.unwrap_or(i32::MAX), t.day_number, t.order_in_day));
    members
}

/// Tasks that are not linked to any group.
pub fn ungrouped_tasks(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|t| t.group_id.is_none()).collect()
}
