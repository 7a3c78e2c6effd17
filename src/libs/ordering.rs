//! Per-day task ordering.
//!
//! Tasks of one camp day carry a dense, 1-based `order_in_day`. Moving a task
//! onto another task of the same day uses array-move semantics: the moved task
//! is taken out and reinserted at the target's index, everything in between
//! shifts by one. Tasks are never reordered across days.
//!
//! All functions here are pure; persisting the resulting [`OrderChange`]s is
//! the caller's job.

use super::task::Task;

/// New position for one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderChange {
    pub task_id: i64,
    pub order_in_day: u32,
}

/// Tasks of `day_number` sorted by their current position.
///
/// Ties (possible before the server settles) are broken by id so the result
/// is deterministic.
pub fn day_tasks(tasks: &[Task], day_number: u32) -> Vec<&Task> {
    let mut day: Vec<&Task> = tasks.iter().filter(|t| t.day_number == day_number).collect();
    day.sort_by_key(|t| (t.order_in_day, t.id));
    day
}

/// Computes the new order of a day after dropping `moved_id` onto `target_id`.
///
/// Returns an empty list when the move is rejected: same task, unknown id, or
/// the two tasks live on different days. Otherwise returns only the tasks
/// whose `order_in_day` actually changes.
///
/// # Examples
///
/// ```rust,ignore
/// // Day 1 holds A(1), B(2), C(3). Dropping C onto A gives C(1), A(2), B(3).
/// let changes = reorder_within_day(&tasks, c.id, a.id);
/// ```
pub fn reorder_within_day(tasks: &[Task], moved_id: i64, target_id: i64) -> Vec<OrderChange> {
    if moved_id == target_id {
        return Vec::new();
    }
    let (Some(moved), Some(target)) = (tasks.iter().find(|t| t.id == moved_id), tasks.iter().find(|t| t.id == target_id)) else {
        return Vec::new();
    };
    if moved.day_number != target.day_number {
        return Vec::new();
    }

    let mut day = day_tasks(tasks, moved.day_number);
    let (Some(from), Some(to)) = (day.iter().position(|t| t.id == moved_id), day.iter().position(|t| t.id == target_id)) else {
        return Vec::new();
    };

    let task = day.remove(from);
    day.insert(to, task);

    renumber(&day)
}

/// Renumbers a day densely from 1 keeping the current relative order.
///
/// Used after deletions, which leave gaps behind.
pub fn compact_day(tasks: &[Task], day_number: u32) -> Vec<OrderChange> {
    renumber(&day_tasks(tasks, day_number))
}

/// Applies order changes to a local task list.
pub fn apply_order_changes(tasks: &mut [Task], changes: &[OrderChange]) {
    for change in changes {
        if let Some(task) = tasks.iter_mut().find(|t| t.id == change.task_id) {
            task.order_in_day = change.order_in_day;
        }
    }
}

/// Returns true when every day in `tasks` is numbered exactly `1..=n`.
pub fn is_dense(tasks: &[Task]) -> bool {
    let mut days: Vec<u32> = tasks.iter().map(|t| t.day_number).collect();
    days.sort_unstable();
    days.dedup();

    days.into_iter().all(|day| {
        let mut orders: Vec<u32> = tasks.iter().filter(|t| t.day_number == day).map(|t| t.order_in_day).collect();
        orders.sort_unstable();
        orders.iter().enumerate().all(|(index, order)| *order as usize == index + 1)
    })
}

fn renumber(day: &[&Task]) -> Vec<OrderChange> {
    day.iter()
        .enumerate()
        .filter_map(|(index, task)| {
            let order_in_day = index as u32 + 1;
            (task.order_in_day != order_in_day).then_some(OrderChange {
                task_id: task.id,
                order_in_day,
            })
        })
        .collect()
}
