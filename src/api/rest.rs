//! reqwest client for the camp REST API.
//!
//! Responses may come bare or wrapped in a `{ "success": ..., "data": ... }`
//! envelope, and collections may be nested under a named key
//! (`{ "groups": [...] }`); [`extract`] accepts all of these.

use super::{ApiError, CampApi, ExportPayload, ImportResponse, ServerExportFormat};
use crate::libs::camp::{CampSummary, DailyTasksBundle};
use crate::libs::challenge::DayChallenge;
use crate::libs::config::ServerConfig;
use crate::libs::data_storage::{APP_NAME, APP_VERSION};
use crate::libs::group::{GroupForm, TaskGroup};
use crate::libs::import::ImportFile;
use crate::libs::task::{TaskDraft, TaskPatch};
use reqwest::{header, multipart, Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CAMPS_PATH: &str = "camps";
const DAILY_TASKS_PATH: &str = "camps/daily-tasks";
const TASK_GROUPS_PATH: &str = "camps/task-groups";

#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl RestClient {
    pub fn new(config: &ServerConfig) -> Result<Self, ApiError> {
        if config.api_url.trim().is_empty() {
            return Err(ApiError::NotConfigured);
        }
        let client = Client::builder()
            .user_agent(format!("{}/{}", APP_NAME, APP_VERSION))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            auth_token: Some(config.auth_token.clone()).filter(|t| !t.is_empty()),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path);
        debug!("camp api request: {} {}", method, url);
        let builder = self.client.request(method, url);
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends a request and decodes the body, looking under `key` if present.
    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder, key: Option<&str>) -> Result<T, ApiError> {
        let body = self.send(builder).await?;
        Ok(serde_json::from_value(extract(body, key))?)
    }

    /// Sends a request and returns the JSON body, failing on non-2xx.
    async fn send(&self, builder: RequestBuilder) -> Result<Value, ApiError> {
        let res = builder.send().await?;
        let status = res.status();
        let text = res.text().await?;
        debug!(status = status.as_u16(), "camp api response");

        let body = if text.trim().is_empty() { Value::Null } else { serde_json::from_str(&text).unwrap_or(Value::String(text)) };
        if status.is_success() {
            Ok(body)
        } else {
            Err(http_error(status, &body))
        }
    }

    /// Import endpoints report rejected records with a 4xx status and an
    /// `errors` list; that is a result, not a failure.
    async fn send_import(&self, builder: RequestBuilder) -> Result<ImportResponse, ApiError> {
        let res = builder.send().await?;
        let status = res.status();
        let body: Value = res.json().await.unwrap_or(Value::Null);
        debug!(status = status.as_u16(), "camp api import response");

        let payload = extract(body.clone(), None);
        if status.is_success() {
            return Ok(accepted_import(payload));
        }
        if status.is_client_error() {
            if let Ok(mut response) = serde_json::from_value::<ImportResponse>(payload) {
                if !response.errors.is_empty() {
                    response.success = false;
                    return Ok(response);
                }
            }
        }
        Err(http_error(status, &body))
    }
}

impl CampApi for RestClient {
    async fn get_camp_details(&self, camp_id: i64) -> Result<CampSummary, ApiError> {
        self.fetch(self.request(Method::GET, &format!("{}/{}", CAMPS_PATH, camp_id)), Some("camp")).await
    }

    async fn get_camp_daily_tasks(&self, camp_id: i64, cohort_number: Option<u32>) -> Result<DailyTasksBundle, ApiError> {
        let mut builder = self.request(Method::GET, &format!("{}/{}/daily-tasks", CAMPS_PATH, camp_id));
        if let Some(cohort) = cohort_number {
            builder = builder.query(&[("cohort_number", cohort)]);
        }
        self.fetch(builder, None).await
    }

    async fn get_camp_task_groups(&self, camp_id: i64) -> Result<Vec<TaskGroup>, ApiError> {
        self.fetch(self.request(Method::GET, &format!("{}/{}/task-groups", CAMPS_PATH, camp_id)), Some("groups")).await
    }

    async fn add_daily_tasks(&self, camp_id: i64, tasks: &[TaskDraft]) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, &format!("{}/{}/daily-tasks", CAMPS_PATH, camp_id)).json(&json!({ "tasks": tasks }));
        self.send(builder).await.map(|_| ())
    }

    async fn update_daily_task(&self, task_id: i64, fields: &TaskPatch) -> Result<(), ApiError> {
        let builder = self.request(Method::PUT, &format!("{}/{}", DAILY_TASKS_PATH, task_id)).json(fields);
        self.send(builder).await.map(|_| ())
    }

    async fn delete_daily_task(&self, task_id: i64) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, &format!("{}/{}", DAILY_TASKS_PATH, task_id))).await.map(|_| ())
    }

    async fn create_task_group(&self, camp_id: i64, group: &GroupForm) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, &format!("{}/{}/task-groups", CAMPS_PATH, camp_id)).json(group);
        self.send(builder).await.map(|_| ())
    }

    async fn update_task_group(&self, group_id: i64, fields: &Map<String, Value>) -> Result<(), ApiError> {
        let builder = self.request(Method::PUT, &format!("{}/{}", TASK_GROUPS_PATH, group_id)).json(fields);
        self.send(builder).await.map(|_| ())
    }

    async fn delete_task_group(&self, group_id: i64) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, &format!("{}/{}", TASK_GROUPS_PATH, group_id))).await.map(|_| ())
    }

    async fn save_camp_day_challenge(&self, camp_id: i64, challenge: &DayChallenge) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, &format!("{}/{}/day-challenges", CAMPS_PATH, camp_id)).json(challenge);
        self.send(builder).await.map(|_| ())
    }

    async fn delete_camp_day_challenge(&self, camp_id: i64, day_number: u32) -> Result<(), ApiError> {
        let path = format!("{}/{}/day-challenges/{}", CAMPS_PATH, camp_id, day_number);
        self.send(self.request(Method::DELETE, &path)).await.map(|_| ())
    }

    async fn import_camp_tasks(&self, camp_id: i64, tasks: &[Value], replace_existing: bool) -> Result<ImportResponse, ApiError> {
        let body = json!({ "tasks": tasks, "replace_existing": replace_existing });
        self.send_import(self.request(Method::POST, &format!("{}/{}/tasks/import", CAMPS_PATH, camp_id)).json(&body)).await
    }

    async fn import_camp_tasks_file(&self, camp_id: i64, file: &ImportFile) -> Result<ImportResponse, ApiError> {
        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(file.kind.mime_type())?;
        let form = multipart::Form::new().part("file", part);
        self.send_import(self.request(Method::POST, &format!("{}/{}/tasks/import-file", CAMPS_PATH, camp_id)).multipart(form)).await
    }

    async fn export_camp_tasks(&self, camp_id: i64, format: ServerExportFormat) -> Result<ExportPayload, ApiError> {
        let builder = self
            .request(Method::GET, &format!("{}/{}/tasks/export", CAMPS_PATH, camp_id))
            .query(&[("format", format.as_str())]);

        match format {
            ServerExportFormat::Json => Ok(ExportPayload::Json(extract(self.send(builder).await?, None))),
            ServerExportFormat::Csv => {
                // CSV is streamed back as-is, not as JSON
                let res = builder.header(header::ACCEPT, "text/csv").send().await?;
                let status = res.status();
                if !status.is_success() {
                    let body: Value = res.json().await.unwrap_or(Value::Null);
                    return Err(http_error(status, &body));
                }
                Ok(ExportPayload::Csv(res.bytes().await?.to_vec()))
            }
        }
    }
}

/// Unwraps the response envelope and an optional named collection.
pub fn extract(body: Value, key: Option<&str>) -> Value {
    let body = match body {
        Value::Object(mut map) if map.contains_key("data") => map.remove("data").unwrap_or(Value::Null),
        other => other,
    };
    match (body, key) {
        (Value::Object(mut map), Some(key)) if map.contains_key(key) => map.remove(key).unwrap_or(Value::Null),
        (body, _) => body,
    }
}

/// Decodes a 2xx import body; an empty or unexpected body still means the
/// server accepted the import.
fn accepted_import(payload: Value) -> ImportResponse {
    match payload {
        Value::Object(_) => serde_json::from_value(payload).unwrap_or_default(),
        _ => ImportResponse::default(),
    }
}

fn http_error(status: StatusCode, body: &Value) -> ApiError {
    let message = ["message", "error"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .map(str::to_string)
        .or_else(|| body.as_str().map(str::to_string))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());

    ApiError::Http {
        status: status.as_u16(),
        message,
    }
}
