#[cfg(test)]
mod tests {
    use campdesk::api::ExportPayload;
    use campdesk::libs::challenge::DayChallenge;
    use campdesk::libs::export::{ExportFormat, Exporter};
    use campdesk::libs::group::TaskGroup;
    use campdesk::libs::task::Task;
    use serde_json::json;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            serde_json::from_value(json!({
                "id": 2, "day_number": 1, "task_type": "prayer", "title": "Qiyam", "order_in_day": 2, "group_id": 9
            }))
            .unwrap(),
            serde_json::from_value(json!({
                "id": 1, "day_number": 1, "task_type": "reading", "title": "Read", "order_in_day": 1,
                "verses_from": 1, "verses_to": 7, "estimated_time": 15
            }))
            .unwrap(),
        ]
    }

    #[test]
    fn test_default_file_name() {
        let exporter = Exporter::new(ExportFormat::Excel, 12, None);
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("campdesk_export_12_"));
        assert!(name.ends_with(".xlsx"));
        assert_eq!(ExportFormat::Csv.extension(), "csv");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_json_payload_is_pretty_printed(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("tasks.json");
        let exporter = Exporter::new(ExportFormat::Json, 12, Some(path.clone()));
        exporter.write_payload(&ExportPayload::Json(json!({ "tasks": [ { "id": 1 } ] }))).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["tasks"][0]["id"], json!(1));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_payload_is_written_unchanged(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("tasks.csv");
        let body = "id,title\n1,Read\n".as_bytes().to_vec();
        Exporter::new(ExportFormat::Csv, 12, Some(path.clone())).write_payload(&ExportPayload::Csv(body.clone())).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), body);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_excel_workbook(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("tasks.xlsx");
        let groups = vec![TaskGroup {
            id: 9,
            title: "Night".to_string(),
            description: None,
            parent_group_id: None,
            order_in_camp: None,
            tasks_count: 1,
        }];
        let challenges = vec![DayChallenge::new(1, "Fast", "Fast the day")];

        Exporter::new(ExportFormat::Excel, 12, Some(path.clone()))
            .write_excel(&sample_tasks(), &groups, &challenges)
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // xlsx files are zip archives
        assert_eq!(&bytes[..2], b"PK");
    }
}
