//! Export of camp tasks to files.
//!
//! JSON and CSV exports are produced by the camp API and written as received
//! (JSON is re-indented). Excel workbooks are rendered locally from the loaded
//! tasks with one sheet for tasks and one for day challenges.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use campdesk::libs::export::{ExportFormat, Exporter};
//!
//! # async fn run(sync: &mut campdesk::libs::sync::CampSync<campdesk::api::rest::RestClient>) -> anyhow::Result<()> {
//! let exporter = Exporter::new(ExportFormat::Excel, sync.camp_id(), None);
//! let path = exporter.export(sync).await?;
//! println!("written to {}", path.display());
//! # Ok(())
//! # }
//! ```

use super::challenge::DayChallenge;
use super::group::TaskGroup;
use super::sync::CampSync;
use super::task::Task;
use crate::api::{CampApi, ExportPayload, ServerExportFormat};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Color, Format, Workbook};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const TASK_COLUMNS: [&str; 13] = [
    "ID",
    "Day",
    "Order",
    "Type",
    "Title",
    "Description",
    "Verses",
    "Points",
    "Optional",
    "Estimated time (min)",
    "Group",
    "Tafseer link",
    "YouTube link",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Server-produced JSON, pretty-printed.
    Json,
    /// Server-produced CSV, written unchanged.
    Csv,
    /// Workbook rendered locally.
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "xlsx",
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter. Without `output_path` the file is named
    /// `campdesk_export_<camp>_<timestamp>.<ext>` in the working directory.
    pub fn new(format: ExportFormat, camp_id: i64, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "campdesk_export_{}_{}.{}",
                camp_id,
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });
        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Exports the camp's tasks and returns the written path.
    pub async fn export<A: CampApi>(&self, sync: &mut CampSync<A>) -> Result<PathBuf> {
        match self.format {
            ExportFormat::Json => {
                let payload = sync.export(ServerExportFormat::Json).await?;
                self.write_payload(&payload)?;
            }
            ExportFormat::Csv => {
                let payload = sync.export(ServerExportFormat::Csv).await?;
                self.write_payload(&payload)?;
            }
            ExportFormat::Excel => self.write_excel(sync.tasks(), sync.groups(), sync.challenges())?,
        }
        Ok(self.output_path.clone())
    }

    /// Writes a server export to the output file.
    pub fn write_payload(&self, payload: &ExportPayload) -> Result<()> {
        let mut file = File::create(&self.output_path)?;
        match payload {
            ExportPayload::Json(value) => file.write_all(serde_json::to_string_pretty(value)?.as_bytes())?,
            ExportPayload::Csv(bytes) => file.write_all(bytes)?,
        }
        Ok(())
    }

    /// Renders tasks (sorted by day and order) and day challenges to a workbook.
    pub fn write_excel(&self, tasks: &[Task], groups: &[TaskGroup], challenges: &[DayChallenge]) -> Result<()> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold().set_background_color(Color::Gray);

        let mut sorted: Vec<&Task> = tasks.iter().collect();
        sorted.sort_by_key(|t| (t.day_number, t.order_in_day, t.id));

        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Tasks")?;
        for (col, title) in TASK_COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }

        for (i, task) in sorted.iter().enumerate() {
            let row = i as u32 + 1;
            let group = task
                .group_id
                .and_then(|id| groups.iter().find(|g| g.id == id))
                .map(|g| g.title.as_str())
                .unwrap_or("");
            let verses = match (task.verses_from, task.verses_to) {
                (Some(from), Some(to)) => format!("{}-{}", from, to),
                _ => String::new(),
            };

            worksheet.write_number(row, 0, task.id as f64)?;
            worksheet.write_number(row, 1, task.day_number as f64)?;
            worksheet.write_number(row, 2, task.order_in_day as f64)?;
            worksheet.write_string(row, 3, task.type_label())?;
            worksheet.write_string(row, 4, &task.title)?;
            worksheet.write_string(row, 5, &task.description)?;
            worksheet.write_string(row, 6, &verses)?;
            worksheet.write_number(row, 7, task.points as f64)?;
            worksheet.write_string(row, 8, if task.is_optional { "yes" } else { "no" })?;
            if let Some(minutes) = task.estimated_time {
                worksheet.write_number(row, 9, minutes as f64)?;
            }
            worksheet.write_string(row, 10, group)?;
            worksheet.write_string(row, 11, task.tafseer_link.as_deref().unwrap_or(""))?;
            worksheet.write_string(row, 12, task.youtube_link.as_deref().unwrap_or(""))?;
        }
        worksheet.autofit();

        if !challenges.is_empty() {
            let mut sorted: Vec<&DayChallenge> = challenges.iter().collect();
            sorted.sort_by_key(|c| c.day_number);

            let worksheet = workbook.add_worksheet();
            worksheet.set_name("Day challenges")?;
            worksheet.write_string_with_format(0, 0, "Day", &header_format)?;
            worksheet.write_string_with_format(0, 1, "Title", &header_format)?;
            worksheet.write_string_with_format(0, 2, "Description", &header_format)?;
            for (i, challenge) in sorted.iter().enumerate() {
                let row = i as u32 + 1;
                worksheet.write_number(row, 0, challenge.day_number as f64)?;
                worksheet.write_string(row, 1, &challenge.title)?;
                worksheet.write_string(row, 2, &challenge.description)?;
            }
            worksheet.autofit();
        }

        workbook.save(&self.output_path)?;
        Ok(())
    }
}
