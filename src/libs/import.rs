//! Task import: preview validation and import file handling.
//!
//! JSON batches are validated locally before they are submitted so the user
//! sees an itemized list of problems. The preview is advisory only: the
//! server validates again on submission and its verdict replaces the local
//! one. Spreadsheet files are not inspected here at all; they are uploaded
//! as-is and validated by the server.
//!
//! ## Accepted JSON shapes
//!
//! ```text
//! [ { "day_number": 1, "task_type": "reading", "title": "..." }, ... ]
//! { "tasks": [ { ... }, ... ] }
//! ```
//!
//! Validation never fails: malformed input is reported as a single synthetic
//! error entry.

use super::task::TaskType;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Task label used for a malformed JSON document.
pub const PARSE_ERROR_LABEL: &str = "Parse Error";
/// Task label used when the document is valid JSON but not a task list.
pub const FORMAT_ERROR_LABEL: &str = "Invalid Format";
/// Task label used for records without a usable title.
pub const UNTITLED_LABEL: &str = "Untitled task";

/// Problems found in one imported record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportError {
    /// 1-based position of the record; 0 for document-level errors.
    #[serde(default, alias = "row")]
    pub index: usize,
    /// Title of the record, or a placeholder.
    #[serde(default, alias = "title")]
    pub task: String,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Partition of an import batch into submittable records and rejected ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Valid records, exactly as supplied (extra fields are kept).
    pub valid_tasks: Vec<Value>,
    pub errors: Vec<ImportError>,
}

impl ImportReport {
    fn document_error(task: &str, message: String) -> Self {
        Self {
            valid_tasks: Vec::new(),
            errors: vec![ImportError {
                index: 0,
                task: task.to_string(),
                errors: vec![message],
            }],
        }
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validates raw import text (pasted JSON or the content of a `.json` file).
pub fn validate_import_text(text: &str, duration_days: Option<u32>) -> ImportReport {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => validate_import_value(&value, duration_days),
        Err(e) => ImportReport::document_error(PARSE_ERROR_LABEL, e.to_string()),
    }
}

/// Validates an already parsed import document.
///
/// `duration_days` is the camp length when known. Without it any
/// `day_number >= 1` passes.
pub fn validate_import_value(value: &Value, duration_days: Option<u32>) -> ImportReport {
    let records = match value.get("tasks") {
        Some(tasks) => tasks,
        None => value,
    };
    let Some(records) = records.as_array() else {
        return ImportReport::document_error(FORMAT_ERROR_LABEL, "data must be an array of tasks".to_string());
    };

    let mut report = ImportReport::default();
    for (position, record) in records.iter().enumerate() {
        let errors = validate_record(record, duration_days);
        if errors.is_empty() {
            report.valid_tasks.push(record.clone());
        } else {
            report.errors.push(ImportError {
                index: position + 1,
                task: record_label(record),
                errors,
            });
        }
    }

    tracing::debug!(valid = report.valid_tasks.len(), invalid = report.errors.len(), "import preview validated");
    report
}

fn validate_record(record: &Value, duration_days: Option<u32>) -> Vec<String> {
    let mut errors = Vec::new();

    match number_field(record, "day_number") {
        Some(day) if day >= 1.0 => {
            if let Some(limit) = duration_days {
                if day > f64::from(limit) {
                    errors.push(format!("day_number {} exceeds the camp duration of {} days", day, limit));
                }
            }
        }
        _ => errors.push("day_number is required and must be at least 1".to_string()),
    }

    match record.get("task_type").and_then(Value::as_str) {
        Some(raw) if TaskType::from(raw.to_string()).is_known() => {}
        Some(raw) if !raw.is_empty() => {
            errors.push(format!("task_type '{}' is invalid, must be one of: {}", raw, TaskType::known_values()));
        }
        _ => errors.push(format!("task_type is required, must be one of: {}", TaskType::known_values())),
    }

    if !has_text(record, "title") {
        errors.push("title is required".to_string());
    }

    errors
}

// Hand-written files often carry numbers as strings.
fn number_field(record: &Value, key: &str) -> Option<f64> {
    match record.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn has_text(record: &Value, key: &str) -> bool {
    record.get(key).and_then(Value::as_str).is_some_and(|s| !s.trim().is_empty())
}

fn record_label(record: &Value) -> String {
    match record.get("title").and_then(Value::as_str).map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => UNTITLED_LABEL.to_string(),
    }
}

/// Import file formats recognised by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFileKind {
    Json,
    Csv,
    Xlsx,
    Xls,
}

impl ImportFileKind {
    /// Classifies a file name by extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let extension = Path::new(file_name).extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Xlsx),
            "xls" => Some(Self::Xls),
            _ => None,
        }
    }

    /// JSON is validated locally; spreadsheets go to the server untouched.
    pub fn is_validated_locally(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Xls => "application/vnd.ms-excel",
        }
    }
}

#[derive(Debug, Error)]
pub enum ImportFileError {
    #[error("unsupported import file '{0}', expected .json, .csv, .xlsx or .xls")]
    Unsupported(String),
    #[error("failed to read import file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// An import file loaded into memory.
#[derive(Debug, Clone)]
pub struct ImportFile {
    pub file_name: String,
    pub kind: ImportFileKind,
    pub bytes: Vec<u8>,
}

impl ImportFile {
    pub fn read(path: &Path) -> Result<Self, ImportFileError> {
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default().to_string();
        let kind = ImportFileKind::from_file_name(&file_name).ok_or_else(|| ImportFileError::Unsupported(path.display().to_string()))?;
        let bytes = fs::read(path).map_err(|source| ImportFileError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self { file_name, kind, bytes })
    }

    /// File content as text, lossily decoded; used for JSON previews.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}
