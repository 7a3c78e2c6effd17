#[cfg(test)]
mod tests {
    use campdesk::api::{ApiError, CampApi, ExportPayload, ImportResponse, ServerExportFormat};
    use campdesk::libs::camp::{CampSummary, DailyTasksBundle};
    use campdesk::libs::challenge::DayChallenge;
    use campdesk::libs::group::{GroupForm, TaskGroup};
    use campdesk::libs::import::{ImportError, ImportFile, ImportFileKind};
    use campdesk::libs::ordering::{day_tasks, is_dense};
    use campdesk::libs::sync::{CampSync, ChallengeEditor, Outcome, SyncError, TaskEditor};
    use campdesk::libs::task::{Task, TaskDraft, TaskPatch, TaskType};
    use serde_json::{json, Map, Value};
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;

    const CAMP_ID: i64 = 12;

    /// In-memory camp service recording every call it receives.
    struct MockApi {
        camp: CampSummary,
        tasks: RefCell<Vec<Task>>,
        groups: RefCell<Vec<TaskGroup>>,
        challenges: RefCell<Vec<DayChallenge>>,
        calls: RefCell<Vec<String>>,
        group_payloads: RefCell<Vec<Map<String, Value>>>,
        created: RefCell<Vec<TaskDraft>>,
        failing_ids: RefCell<HashSet<i64>>,
        fail_writes: Cell<bool>,
        import_errors: RefCell<Vec<ImportError>>,
        next_id: Cell<i64>,
    }

    impl MockApi {
        fn new(duration_days: u32) -> Self {
            Self {
                camp: CampSummary {
                    id: CAMP_ID,
                    name: "Ramadan camp".to_string(),
                    duration_days: Some(duration_days),
                    current_cohort_number: Some(3),
                },
                tasks: RefCell::new(Vec::new()),
                groups: RefCell::new(Vec::new()),
                challenges: RefCell::new(Vec::new()),
                calls: RefCell::new(Vec::new()),
                group_payloads: RefCell::new(Vec::new()),
                created: RefCell::new(Vec::new()),
                failing_ids: RefCell::new(HashSet::new()),
                fail_writes: Cell::new(false),
                import_errors: RefCell::new(Vec::new()),
                next_id: Cell::new(1000),
            }
        }

        fn with_tasks(self, tasks: Vec<Task>) -> Self {
            *self.tasks.borrow_mut() = tasks;
            self
        }

        fn with_groups(self, groups: Vec<TaskGroup>) -> Self {
            *self.groups.borrow_mut() = groups;
            self
        }

        fn record(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }

        fn calls_to(&self, name: &str) -> Vec<String> {
            self.calls.borrow().iter().filter(|c| c.starts_with(name)).cloned().collect()
        }

        fn check(&self, id: i64) -> Result<(), ApiError> {
            if self.fail_writes.get() || self.failing_ids.borrow().contains(&id) {
                return Err(ApiError::Http {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            Ok(())
        }

        fn insert_draft(&self, draft: &TaskDraft) {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            let mut value = serde_json::to_value(draft).unwrap();
            value["id"] = json!(id);
            self.tasks.borrow_mut().push(serde_json::from_value(value).unwrap());
            self.created.borrow_mut().push(draft.clone());
        }
    }

    impl CampApi for MockApi {
        async fn get_camp_details(&self, camp_id: i64) -> Result<CampSummary, ApiError> {
            self.record(format!("get_camp_details {}", camp_id));
            Ok(self.camp.clone())
        }

        async fn get_camp_daily_tasks(&self, _camp_id: i64, cohort_number: Option<u32>) -> Result<DailyTasksBundle, ApiError> {
            self.record(format!("get_camp_daily_tasks {:?}", cohort_number));
            Ok(DailyTasksBundle {
                tasks: self.tasks.borrow().clone(),
                day_challenges: self.challenges.borrow().clone(),
            })
        }

        async fn get_camp_task_groups(&self, _camp_id: i64) -> Result<Vec<TaskGroup>, ApiError> {
            self.record("get_camp_task_groups".to_string());
            Ok(self.groups.borrow().clone())
        }

        async fn add_daily_tasks(&self, _camp_id: i64, tasks: &[TaskDraft]) -> Result<(), ApiError> {
            self.record(format!("add_daily_tasks {}", tasks.len()));
            self.check(0)?;
            for draft in tasks {
                self.insert_draft(draft);
            }
            Ok(())
        }

        async fn update_daily_task(&self, task_id: i64, fields: &TaskPatch) -> Result<(), ApiError> {
            self.record(format!("update_daily_task {}", task_id));
            self.check(task_id)?;
            if let Some(task) = self.tasks.borrow_mut().iter_mut().find(|t| t.id == task_id) {
                fields.apply(task);
            }
            Ok(())
        }

        async fn delete_daily_task(&self, task_id: i64) -> Result<(), ApiError> {
            self.record(format!("delete_daily_task {}", task_id));
            self.check(task_id)?;
            self.tasks.borrow_mut().retain(|t| t.id != task_id);
            Ok(())
        }

        async fn create_task_group(&self, _camp_id: i64, group: &GroupForm) -> Result<(), ApiError> {
            self.record("create_task_group".to_string());
            self.check(0)?;
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.groups.borrow_mut().push(TaskGroup {
                id,
                title: group.title.clone(),
                description: group.description.clone(),
                parent_group_id: group.parent_group_id,
                order_in_camp: group.order_in_camp,
                tasks_count: 0,
            });
            Ok(())
        }

        async fn update_task_group(&self, group_id: i64, fields: &Map<String, Value>) -> Result<(), ApiError> {
            self.record(format!("update_task_group {}", group_id));
            self.check(group_id)?;
            self.group_payloads.borrow_mut().push(fields.clone());
            if let Some(group) = self.groups.borrow_mut().iter_mut().find(|g| g.id == group_id) {
                if let Some(title) = fields.get("title").and_then(Value::as_str) {
                    group.title = title.to_string();
                }
                if let Some(parent) = fields.get("parent_group_id").and_then(Value::as_i64) {
                    group.parent_group_id = Some(parent);
                }
            }
            Ok(())
        }

        async fn delete_task_group(&self, group_id: i64) -> Result<(), ApiError> {
            self.record(format!("delete_task_group {}", group_id));
            self.check(group_id)?;
            self.groups.borrow_mut().retain(|g| g.id != group_id);
            for task in self.tasks.borrow_mut().iter_mut().filter(|t| t.group_id == Some(group_id)) {
                task.group_id = None;
            }
            Ok(())
        }

        async fn save_camp_day_challenge(&self, _camp_id: i64, challenge: &DayChallenge) -> Result<(), ApiError> {
            self.record(format!("save_camp_day_challenge {}", challenge.day_number));
            self.check(0)?;
            let mut challenges = self.challenges.borrow_mut();
            challenges.retain(|c| c.day_number != challenge.day_number);
            challenges.push(challenge.clone());
            Ok(())
        }

        async fn delete_camp_day_challenge(&self, _camp_id: i64, day_number: u32) -> Result<(), ApiError> {
            self.record(format!("delete_camp_day_challenge {}", day_number));
            self.check(0)?;
            self.challenges.borrow_mut().retain(|c| c.day_number != day_number);
            Ok(())
        }

        async fn import_camp_tasks(&self, _camp_id: i64, tasks: &[Value], replace_existing: bool) -> Result<ImportResponse, ApiError> {
            self.record(format!("import_camp_tasks {} {}", tasks.len(), replace_existing));
            let errors = self.import_errors.borrow().clone();
            if !errors.is_empty() {
                return Ok(ImportResponse {
                    success: false,
                    imported: 0,
                    errors,
                    message: None,
                });
            }
            if replace_existing {
                self.tasks.borrow_mut().clear();
            }
            for record in tasks {
                self.insert_draft(&serde_json::from_value(record.clone()).unwrap());
            }
            Ok(ImportResponse {
                success: true,
                imported: tasks.len(),
                ..ImportResponse::default()
            })
        }

        async fn import_camp_tasks_file(&self, _camp_id: i64, file: &ImportFile) -> Result<ImportResponse, ApiError> {
            self.record(format!("import_camp_tasks_file {}", file.file_name));
            Ok(ImportResponse {
                success: true,
                imported: 2,
                ..ImportResponse::default()
            })
        }

        async fn export_camp_tasks(&self, _camp_id: i64, format: ServerExportFormat) -> Result<ExportPayload, ApiError> {
            self.record(format!("export_camp_tasks {}", format.as_str()));
            Ok(ExportPayload::Json(json!({ "tasks": self.tasks.borrow().len() })))
        }
    }

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

    fn grouped(mut task: Task, group_id: i64) -> Task {
        task.group_id = Some(group_id);
        task
    }

    fn group(id: i64, parent: Option<i64>) -> TaskGroup {
        TaskGroup {
            id,
            title: format!("Group {}", id),
            description: None,
            parent_group_id: parent,
            order_in_camp: None,
            tasks_count: 0,
        }
    }

    async fn loaded(api: MockApi) -> CampSync<MockApi> {
        let mut sync = CampSync::new(api, CAMP_ID);
        sync.load().await.unwrap();
        sync.api().calls.borrow_mut().clear();
        sync
    }

    #[tokio::test]
    async fn test_load_uses_current_cohort() {
        let api = MockApi::new(30).with_tasks(vec![task(1, 1, 1)]).with_groups(vec![group(5, None)]);
        let mut sync = CampSync::new(api, CAMP_ID);
        sync.load().await.unwrap();

        assert_eq!(sync.cohort_number(), Some(3));
        assert_eq!(sync.duration_days(), Some(30));
        assert_eq!(sync.tasks().len(), 1);
        assert_eq!(sync.groups().len(), 1);
        assert_eq!(sync.api().calls_to("get_camp_daily_tasks"), vec!["get_camp_daily_tasks Some(3)".to_string()]);
    }

    #[tokio::test]
    async fn test_explicit_cohort_wins() {
        let mut sync = CampSync::new(MockApi::new(30), CAMP_ID).with_cohort(Some(1));
        sync.load().await.unwrap();
        assert_eq!(sync.cohort_number(), Some(1));

        sync.set_cohort(None).await.unwrap();
        assert_eq!(sync.api().calls_to("get_camp_daily_tasks").last().unwrap(), "get_camp_daily_tasks None");
    }

    #[tokio::test]
    async fn test_bulk_delete_partial_failure() {
        let tasks = vec![task(2, 1, 1), task(5, 1, 2), task(9, 1, 3), task(11, 1, 4)];
        let api = MockApi::new(30).with_tasks(tasks);
        api.failing_ids.borrow_mut().insert(5);
        let mut sync = loaded(api).await;

        let result = sync.bulk_delete(&[2, 5, 9], &true).await;
        assert!(matches!(result, Err(SyncError::BulkDelete { failed: 1, total: 3 })));

        // Every deletion was attempted and the list was refreshed anyway
        assert_eq!(sync.api().calls_to("delete_daily_task").len(), 3);
        assert!(!sync.api().calls_to("get_camp_daily_tasks").is_empty());
        let ids: Vec<i64> = sync.tasks().iter().map(|t| t.id).collect();
        assert!(ids.contains(&5));
        assert!(!ids.contains(&2) && !ids.contains(&9));
        assert!(sync.banner().is_some());
        assert!(!sync.is_saving());
    }

    #[tokio::test]
    async fn test_bulk_delete_declined_sends_nothing() {
        let mut sync = loaded(MockApi::new(30).with_tasks(vec![task(1, 1, 1), task(2, 1, 2)])).await;
        assert_eq!(sync.bulk_delete(&[1, 2], &false).await.unwrap(), Outcome::Declined);
        assert!(sync.api().calls.borrow().is_empty());
        assert_eq!(sync.tasks().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_task_compacts_its_day() {
        let tasks = vec![task(1, 1, 1), task(2, 1, 2), task(3, 1, 3), task(4, 2, 1)];
        let mut sync = loaded(MockApi::new(30).with_tasks(tasks)).await;

        assert_eq!(sync.delete_task(2, &true).await.unwrap(), Outcome::Done);
        assert_eq!(sync.api().calls_to("update_daily_task"), vec!["update_daily_task 3".to_string()]);
        assert!(is_dense(sync.tasks()));
        assert_eq!(sync.tasks().len(), 3);
    }

    #[tokio::test]
    async fn test_failed_compaction_is_reported() {
        let api = MockApi::new(30).with_tasks(vec![task(1, 1, 1), task(2, 1, 2), task(3, 1, 3)]);
        api.failing_ids.borrow_mut().insert(3);
        let mut sync = loaded(api).await;

        let result = sync.delete_task(2, &true).await;
        assert!(matches!(result, Err(SyncError::BulkUpdate { failed: 1, total: 1 })));

        // The deletion went through and the server's gap is what is shown
        assert_eq!(sync.api().calls_to("get_camp_daily_tasks").len(), 1);
        assert_eq!(sync.tasks().len(), 2);
        assert!(!is_dense(sync.tasks()));
        assert!(sync.banner().is_some());
        assert!(!sync.is_saving());
    }

    #[tokio::test]
    async fn test_bulk_delete_reports_compaction_failure() {
        let api = MockApi::new(30).with_tasks(vec![task(1, 1, 1), task(2, 1, 2), task(3, 1, 3), task(4, 1, 4)]);
        api.failing_ids.borrow_mut().insert(4);
        let mut sync = loaded(api).await;

        let result = sync.bulk_delete(&[1, 2], &true).await;
        assert!(matches!(result, Err(SyncError::BulkUpdate { failed: 1, total: 2 })));
        assert_eq!(sync.api().calls_to("delete_daily_task").len(), 2);
        assert_eq!(sync.tasks().len(), 2);
    }

    #[tokio::test]
    async fn test_reorder_persists_changed_positions() {
        let tasks = vec![task(10, 1, 1), task(11, 1, 2), task(12, 1, 3)];
        let mut sync = loaded(MockApi::new(30).with_tasks(tasks)).await;

        let changes = sync.reorder(12, 10).await.unwrap();
        assert_eq!(changes.len(), 3);
        assert_eq!(sync.api().calls_to("update_daily_task").len(), 3);

        let order: Vec<i64> = day_tasks(sync.tasks(), 1).iter().map(|t| t.id).collect();
        assert_eq!(order, vec![12, 10, 11]);
    }

    #[tokio::test]
    async fn test_reorder_across_days_is_ignored() {
        let mut sync = loaded(MockApi::new(30).with_tasks(vec![task(1, 1, 1), task(2, 2, 1)])).await;
        assert!(sync.reorder(1, 2).await.unwrap().is_empty());
        assert!(sync.api().calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_reorder_failure_is_overridden_by_refresh() {
        let tasks = vec![task(10, 1, 1), task(11, 1, 2)];
        let api = MockApi::new(30).with_tasks(tasks);
        api.fail_writes.set(true);
        let mut sync = loaded(api).await;

        assert!(matches!(sync.reorder(11, 10).await, Err(SyncError::BulkUpdate { failed: 2, total: 2 })));
        // The optimistic order was replaced by the server's
        let order: Vec<i64> = day_tasks(sync.tasks(), 1).iter().map(|t| t.id).collect();
        assert_eq!(order, vec![10, 11]);
    }

    #[tokio::test]
    async fn test_day_zero_patch_is_rejected_without_duration() {
        let mut api = MockApi::new(30).with_tasks(vec![task(1, 1, 1), task(2, 1, 2)]);
        api.camp.duration_days = None;
        let mut sync = loaded(api).await;
        assert_eq!(sync.duration_days(), None);

        let patch = TaskPatch {
            day_number: Some(0),
            ..TaskPatch::default()
        };
        assert!(matches!(sync.update_task(1, patch.clone()).await, Err(SyncError::Invalid(_))));
        assert!(matches!(sync.bulk_update(&[1, 2], patch).await, Err(SyncError::Invalid(_))));
        assert!(sync.api().calls_to("update_daily_task").is_empty());

        // Without a known duration any later day is accepted
        let patch = TaskPatch {
            day_number: Some(90),
            ..TaskPatch::default()
        };
        sync.update_task(1, patch).await.unwrap();
        assert_eq!(sync.api().calls_to("update_daily_task"), vec!["update_daily_task 1".to_string()]);
    }

    #[tokio::test]
    async fn test_add_task_validation_blocks_network() {
        let mut sync = loaded(MockApi::new(30)).await;
        let result = sync.add_task(TaskDraft::new(31, TaskType::Reading, "Too late")).await;
        assert!(matches!(result, Err(SyncError::Invalid(_))));
        assert!(sync.api().calls_to("add_daily_tasks").is_empty());
    }

    #[tokio::test]
    async fn test_editor_modes_are_exclusive() {
        let mut sync = loaded(MockApi::new(30).with_tasks(vec![task(1, 1, 1)])).await;

        sync.open_add();
        sync.open_edit(1).unwrap();
        assert!(matches!(sync.editor(), TaskEditor::Editing { task, .. } if task.id == 1));

        sync.open_add();
        assert!(matches!(sync.editor(), TaskEditor::Adding { error: None }));

        sync.close_editor();
        assert!(matches!(sync.submit_editor(TaskDraft::new(1, TaskType::Prayer, "x")).await, Err(SyncError::EditorClosed)));
    }

    #[tokio::test]
    async fn test_editor_keeps_errors_inline() {
        let mut sync = loaded(MockApi::new(30).with_tasks(vec![task(1, 1, 1)])).await;
        sync.open_edit(1).unwrap();

        let mut draft = TaskDraft::from(&sync.tasks()[0]);
        draft.title = "   ".to_string();
        assert!(sync.submit_editor(draft).await.is_err());
        assert!(matches!(sync.editor(), TaskEditor::Editing { error: Some(_), .. }));
        assert!(sync.banner().is_none());

        let mut draft = TaskDraft::from(&sync.tasks()[0]);
        draft.title = "Renamed".to_string();
        sync.submit_editor(draft).await.unwrap();
        assert_eq!(*sync.editor(), TaskEditor::Closed);
        assert_eq!(sync.tasks()[0].title, "Renamed");
    }

    #[tokio::test]
    async fn test_copy_to_day_appends_copy() {
        let tasks = vec![task(1, 1, 1), task(2, 2, 1), task(3, 2, 2)];
        let mut sync = loaded(MockApi::new(30).with_tasks(tasks)).await;

        sync.copy_to_day(1, 2).await.unwrap();
        let created = sync.api().created.borrow().clone();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].day_number, 2);
        assert_eq!(created[0].order_in_day, Some(3));
        assert_eq!(created[0].title, "Task 1 (copy)");
        assert_eq!(sync.tasks().len(), 4);
    }

    #[tokio::test]
    async fn test_bulk_update_applies_patch() {
        let mut sync = loaded(MockApi::new(30).with_tasks(vec![task(1, 1, 1), task(2, 1, 2), task(3, 1, 3)])).await;
        let patch = TaskPatch {
            is_optional: Some(true),
            points: Some(5),
            ..TaskPatch::default()
        };
        sync.bulk_update(&[1, 3], patch).await.unwrap();

        let optional: Vec<i64> = sync.tasks().iter().filter(|t| t.is_optional).map(|t| t.id).collect();
        assert_eq!(optional, vec![1, 3]);
        assert!(matches!(sync.bulk_update(&[99], TaskPatch::order(1)).await, Err(SyncError::TaskNotFound(99))));
    }

    #[tokio::test]
    async fn test_delete_group_refreshes_tasks_and_groups() {
        let tasks = vec![grouped(task(1, 1, 1), 7), task(2, 1, 2)];
        let mut sync = loaded(MockApi::new(30).with_tasks(tasks).with_groups(vec![group(7, None)])).await;

        assert_eq!(sync.delete_group(7, &true).await.unwrap(), Outcome::Done);
        assert!(sync.groups().is_empty());
        assert!(sync.tasks().iter().all(|t| t.group_id.is_none()));
        assert_eq!(sync.api().calls_to("get_camp_task_groups").len(), 1);
        assert_eq!(sync.api().calls_to("get_camp_daily_tasks").len(), 1);
    }

    #[tokio::test]
    async fn test_update_group_rejects_cycles() {
        let groups = vec![group(1, None), group(2, Some(1))];
        let mut sync = loaded(MockApi::new(30).with_groups(groups)).await;

        let form = GroupForm {
            parent_group_id: Some(2),
            ..GroupForm::new("Group 1")
        };
        assert!(matches!(sync.update_group(1, form).await, Err(SyncError::Invalid(_))));

        let form = GroupForm {
            parent_group_id: Some(1),
            ..GroupForm::new("Group 1")
        };
        assert!(matches!(sync.update_group(1, form).await, Err(SyncError::Invalid(_))));
        assert!(sync.api().calls_to("update_task_group").is_empty());
    }

    #[tokio::test]
    async fn test_update_group_omits_null_parent() {
        let mut sync = loaded(MockApi::new(30).with_groups(vec![group(1, None)])).await;
        sync.update_group(1, GroupForm::new("Renamed")).await.unwrap();

        let payloads = sync.api().group_payloads.borrow().clone();
        assert!(!payloads[0].contains_key("parent_group_id"));
        assert_eq!(sync.groups()[0].title, "Renamed");
    }

    #[tokio::test]
    async fn test_blank_challenge_is_rejected_locally() {
        let mut sync = loaded(MockApi::new(30)).await;

        let result = sync.save_challenge(DayChallenge::new(2, "  ", "Give charity")).await;
        assert!(matches!(result, Err(SyncError::Invalid(_))));
        assert!(sync.api().calls.borrow().is_empty());
        assert!(matches!(sync.challenge_editor(), ChallengeEditor::Open { day_number: 2, error: Some(_) }));
        assert!(sync.banner().is_none());
    }

    #[tokio::test]
    async fn test_challenge_save_and_delete() {
        let mut sync = loaded(MockApi::new(30)).await;
        sync.open_challenge(4);

        sync.save_challenge(DayChallenge::new(4, " Fast ", "Fast the day")).await.unwrap();
        assert_eq!(*sync.challenge_editor(), ChallengeEditor::Closed);
        assert_eq!(sync.challenges()[0].title, "Fast");

        sync.delete_challenge(4).await.unwrap();
        assert!(sync.challenges().is_empty());
    }

    #[tokio::test]
    async fn test_challenge_failure_stays_inline() {
        let api = MockApi::new(30);
        api.fail_writes.set(true);
        let mut sync = loaded(api).await;

        assert!(sync.save_challenge(DayChallenge::new(1, "Fast", "Fast the day")).await.is_err());
        assert!(matches!(sync.challenge_editor(), ChallengeEditor::Open { error: Some(_), .. }));
        assert!(sync.banner().is_none());
    }

    #[tokio::test]
    async fn test_import_server_errors_replace_preview() {
        let api = MockApi::new(30);
        let server_errors = vec![ImportError {
            index: 1,
            task: "Read".to_string(),
            errors: vec!["duplicate task".to_string()],
        }];
        *api.import_errors.borrow_mut() = server_errors.clone();
        let mut sync = loaded(api).await;

        let text = r#"[
            { "day_number": 1, "task_type": "reading", "title": "Read" },
            { "day_number": 1, "task_type": "bogus", "title": "Broken" }
        ]"#;
        let preview = sync.preview_import(text);
        assert_eq!(preview.valid_tasks.len(), 1);
        assert_eq!(preview.errors[0].task, "Broken");

        assert!(matches!(sync.submit_import(false).await, Err(SyncError::ImportRejected(1))));
        assert_eq!(sync.import_preview().unwrap().errors, server_errors);
        assert_eq!(sync.api().calls_to("import_camp_tasks"), vec!["import_camp_tasks 1 false".to_string()]);
    }

    #[tokio::test]
    async fn test_import_success_refreshes_tasks() {
        let mut sync = loaded(MockApi::new(30).with_tasks(vec![task(1, 1, 1)])).await;
        sync.preview_import(r#"{ "tasks": [ { "day_number": 2, "task_type": "journal", "title": "Write" } ] }"#);

        let response = sync.submit_import(true).await.unwrap();
        assert_eq!(response.imported, 1);
        assert!(sync.import_preview().is_none());
        assert_eq!(sync.tasks().len(), 1);
        assert_eq!(sync.tasks()[0].title, "Write");
    }

    #[tokio::test]
    async fn test_import_without_valid_records() {
        let mut sync = loaded(MockApi::new(30)).await;
        sync.preview_import("not json");
        assert!(matches!(sync.submit_import(false).await, Err(SyncError::NothingToImport)));
        assert!(sync.api().calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_spreadsheet_is_uploaded_untouched() {
        let mut sync = loaded(MockApi::new(30)).await;
        let file = ImportFile {
            file_name: "plan.xlsx".to_string(),
            kind: ImportFileKind::Xlsx,
            bytes: vec![0x50, 0x4b],
        };

        let response = sync.import_file(&file, false).await.unwrap();
        assert_eq!(response.imported, 2);
        assert_eq!(sync.api().calls_to("import_camp_tasks_file"), vec!["import_camp_tasks_file plan.xlsx".to_string()]);
        assert!(sync.import_preview().is_none());
    }

    #[tokio::test]
    async fn test_banner_can_be_dismissed() {
        let api = MockApi::new(30).with_tasks(vec![task(1, 1, 1)]);
        api.fail_writes.set(true);
        let mut sync = loaded(api).await;

        assert!(sync.delete_task(1, &true).await.is_err());
        assert!(sync.banner().is_some());
        sync.dismiss_banner();
        assert!(sync.banner().is_none());
    }
}
