use super::challenge::DayChallenge;
use super::group::TaskGroup;
use super::import::{ImportError, ImportReport};
use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};
use serde_json::Value;

pub struct View {}

impl View {
    /// Tasks sorted by day and order, with the group title resolved.
    pub fn tasks(tasks: &[&Task], groups: &[TaskGroup]) -> Result<()> {
        let mut sorted = tasks.to_vec();
        sorted.sort_by_key(|t| (t.day_number, t.order_in_day, t.id));

        let mut table = Table::new();
        table.add_row(row!["ID", "DAY", "ORDER", "TYPE", "TITLE", "POINTS", "OPTIONAL", "GROUP"]);
        for task in sorted {
            let group = task
                .group_id
                .map(|id| groups.iter().find(|g| g.id == id).map(|g| g.title.clone()).unwrap_or_else(|| format!("#{}", id)))
                .unwrap_or_default();
            table.add_row(row![
                task.id,
                task.day_number,
                task.order_in_day,
                task.type_label(),
                task.title,
                task.points,
                if task.is_optional { "yes" } else { "" },
                group
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn groups(groups: &[TaskGroup]) -> Result<()> {
        let mut sorted: Vec<&TaskGroup> = groups.iter().collect();
        sorted.sort_by_key(|g| (g.order_in_camp, g.id));

        let mut table = Table::new();
        table.add_row(row!["ID", "TITLE", "PARENT", "ORDER", "TASKS"]);
        for group in sorted {
            let parent = group
                .parent_group_id
                .and_then(|id| groups.iter().find(|g| g.id == id))
                .map(|g| g.title.clone())
                .unwrap_or_default();
            table.add_row(row![group.id, group.title, parent, group.order_in_camp.map(|o| o.to_string()).unwrap_or_default(), group.tasks_count]);
        }
        table.printstd();

        Ok(())
    }

    pub fn challenges(challenges: &[DayChallenge]) -> Result<()> {
        let mut sorted: Vec<&DayChallenge> = challenges.iter().collect();
        sorted.sort_by_key(|c| c.day_number);

        let mut table = Table::new();
        table.add_row(row!["DAY", "TITLE", "DESCRIPTION"]);
        for challenge in sorted {
            table.add_row(row![challenge.day_number, challenge.title, challenge.description]);
        }
        table.printstd();

        Ok(())
    }

    /// Records that passed local validation.
    pub fn import_preview(report: &ImportReport) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["#", "DAY", "TYPE", "TITLE"]);
        for (i, record) in report.valid_tasks.iter().enumerate() {
            table.add_row(row![
                i + 1,
                display_value(record.get("day_number")),
                display_value(record.get("task_type")),
                display_value(record.get("title"))
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn import_errors(errors: &[ImportError]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ROW", "TASK", "ERRORS"]);
        for error in errors {
            let position = if error.index == 0 { "-".to_string() } else { error.index.to_string() };
            table.add_row(row![position, error.task, error.errors.join("\n")]);
        }
        table.printstd();

        Ok(())
    }
}

fn display_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
