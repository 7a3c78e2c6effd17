#[cfg(test)]
mod tests {
    use campdesk::libs::ordering::{apply_order_changes, compact_day, day_tasks, is_dense, reorder_within_day, OrderChange};
    use campdesk::libs::task::Task;
    use serde_json::json;

    fn task(id: i64, day: u32, order: u32) -> Task {
        serde_json::from_value(json!({
            "id": id,
            "day_number": day,
            "task_type": "reading",
            "title": format!("Task {}", id),
            "order_in_day": order,
        }))
        .unwrap()
    }

    /// Day 1: A(1) B(2) C(3), day 2: D(1).
    fn camp() -> Vec<Task> {
        vec![task(10, 1, 1), task(11, 1, 2), task(12, 1, 3), task(20, 2, 1)]
    }

    fn order_of(tasks: &[Task], day: u32) -> Vec<i64> {
        day_tasks(tasks, day).iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_move_last_onto_first() {
        let tasks = camp();
        let changes = reorder_within_day(&tasks, 12, 10);
        assert_eq!(
            changes,
            vec![
                OrderChange { task_id: 12, order_in_day: 1 },
                OrderChange { task_id: 10, order_in_day: 2 },
                OrderChange { task_id: 11, order_in_day: 3 },
            ]
        );
    }

    #[test]
    fn test_move_first_onto_last() {
        let mut tasks = camp();
        let changes = reorder_within_day(&tasks, 10, 12);
        apply_order_changes(&mut tasks, &changes);
        assert_eq!(order_of(&tasks, 1), vec![11, 12, 10]);
        assert!(is_dense(&tasks));
    }

    #[test]
    fn test_adjacent_move_only_touches_two_tasks() {
        let tasks = camp();
        let changes = reorder_within_day(&tasks, 11, 12);
        assert_eq!(changes.len(), 2);
        assert!(changes.iter().all(|c| c.task_id != 10));
    }

    #[test]
    fn test_rejected_moves_are_empty() {
        let tasks = camp();
        assert!(reorder_within_day(&tasks, 10, 10).is_empty());
        assert!(reorder_within_day(&tasks, 10, 99).is_empty());
        assert!(reorder_within_day(&tasks, 99, 10).is_empty());
        // Across days
        assert!(reorder_within_day(&tasks, 10, 20).is_empty());
    }

    #[test]
    fn test_reapplying_changes_is_a_no_op() {
        let mut tasks = camp();
        let changes = reorder_within_day(&tasks, 12, 10);
        apply_order_changes(&mut tasks, &changes);
        let snapshot = tasks.clone();
        apply_order_changes(&mut tasks, &changes);
        assert_eq!(tasks, snapshot);
        assert!(compact_day(&tasks, 1).is_empty());
    }

    #[test]
    fn test_repeating_a_move_swaps_adjacent_tasks() {
        let mut tasks = camp();
        let first = reorder_within_day(&tasks, 12, 10);
        apply_order_changes(&mut tasks, &first);
        assert_eq!(order_of(&tasks, 1), vec![12, 10, 11]);

        // Same input, same output
        assert_eq!(reorder_within_day(&tasks, 12, 10), reorder_within_day(&tasks, 12, 10));

        // The target is now adjacent; moving onto it again swaps the pair back
        let second = reorder_within_day(&tasks, 12, 10);
        assert_eq!(
            second,
            vec![
                OrderChange { task_id: 10, order_in_day: 1 },
                OrderChange { task_id: 12, order_in_day: 2 },
            ]
        );
        apply_order_changes(&mut tasks, &second);
        assert_eq!(order_of(&tasks, 1), vec![10, 12, 11]);
        assert!(is_dense(&tasks));
    }

    #[test]
    fn test_other_days_untouched() {
        let mut tasks = camp();
        let changes = reorder_within_day(&tasks, 12, 10);
        apply_order_changes(&mut tasks, &changes);
        assert_eq!(tasks.iter().find(|t| t.id == 20).unwrap().order_in_day, 1);
    }

    #[test]
    fn test_compact_day_closes_gaps() {
        let mut tasks = vec![task(1, 3, 1), task(2, 3, 4), task(3, 3, 7)];
        assert!(!is_dense(&tasks));

        let changes = compact_day(&tasks, 3);
        assert_eq!(
            changes,
            vec![OrderChange { task_id: 2, order_in_day: 2 }, OrderChange { task_id: 3, order_in_day: 3 }]
        );
        apply_order_changes(&mut tasks, &changes);
        assert!(is_dense(&tasks));
    }

    #[test]
    fn test_day_tasks_breaks_ties_by_id() {
        let tasks = vec![task(5, 1, 1), task(4, 1, 1), task(6, 1, 0)];
        assert_eq!(order_of(&tasks, 1), vec![6, 4, 5]);
    }
}
