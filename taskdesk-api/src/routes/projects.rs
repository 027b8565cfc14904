/// Project surface (project-scoped): project and task CRUD
///
/// A single endpoint dispatching on the `action` query parameter. List
/// actions answer bare JSON arrays; write actions answer success
/// envelopes. This surface grew up independently of the todo surface and
/// keeps its own task model.
///
/// # Endpoint
///
/// ```text
/// GET  /api/projects?action=get_projects
/// GET  /api/projects?action=get_tasks[&status=pending]
/// POST /api/projects?action=create_project       {"project_name": "..."}
/// POST /api/projects?action=create_task          {"project_id": 1, "task_name": "...", ...}
/// POST /api/projects?action=update_task          {"id": 1, "project_id": 1, "task_name": "...", ...}
/// POST /api/projects?action=delete_task&id=1
/// ```

use crate::{
    app::AppState,
    envelope,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use taskdesk_shared::models::{
    project::Project,
    project_task::{ProjectTaskFields, ProjectTaskRow},
};

/// Actions understood by the project surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectAction {
    GetProjects,
    CreateProject,
    GetTasks,
    CreateTask,
    UpdateTask,
    DeleteTask,
}

/// Project creation request
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub project_name: String,
}

/// The task column set shared by create and full-replace update.
///
/// `project_id` and `task_name` are required; the rest fall back to their
/// declared defaults (`null`, `"pending"`, `""`). An explicit JSON `null`
/// counts as absent for the defaulted fields, matching how the surface has
/// always behaved.
#[derive(Debug, Deserialize)]
pub struct TaskPayload {
    pub project_id: i64,
    pub task_name: String,

    #[serde(default)]
    pub hours: Option<f64>,

    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub comment: Option<String>,
}

impl TaskPayload {
    /// Applies the surface's defaults and produces the full column set.
    fn into_fields(self) -> ProjectTaskFields {
        ProjectTaskFields {
            project_id: self.project_id,
            task_name: self.task_name,
            hours: self.hours,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status.unwrap_or_else(|| "pending".to_string()),
            comment: self.comment.unwrap_or_default(),
        }
    }
}

/// Project surface dispatcher
///
/// Maps the `action` query parameter onto [`ProjectAction`] and hands the
/// query parameters and optional JSON body to the matching handler. A
/// missing or unknown action is rejected before any handler runs.
pub async fn dispatch(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    body: Option<Json<JsonValue>>,
) -> ApiResult<Response> {
    let action = params
        .get("action")
        .ok_or_else(|| ApiError::BadRequest("Invalid action".to_string()))?;

    let action: ProjectAction = serde_json::from_value(JsonValue::String(action.clone()))
        .map_err(|_| ApiError::BadRequest("Invalid action".to_string()))?;

    let body = body.map(|Json(v)| v).unwrap_or(JsonValue::Null);

    match action {
        ProjectAction::GetProjects => get_projects(&state).await,
        ProjectAction::CreateProject => create_project(&state, body).await,
        ProjectAction::GetTasks => get_tasks(&state, &params).await,
        ProjectAction::CreateTask => create_task(&state, body).await,
        ProjectAction::UpdateTask => update_task(&state, body).await,
        ProjectAction::DeleteTask => delete_task(&state, &params).await,
    }
}

/// Lists all projects as a bare array.
async fn get_projects(state: &AppState) -> ApiResult<Response> {
    let projects = Project::list(&state.db).await?;
    Ok(Json(projects).into_response())
}

/// Creates a project.
///
/// `project_name` must be present and non-empty after trimming; the
/// trimmed value is what gets stored, so the list endpoint never shows
/// padded names.
async fn create_project(state: &AppState, body: JsonValue) -> ApiResult<Response> {
    let req: CreateProjectRequest = serde_json::from_value(body)
        .map_err(|_| ApiError::BadRequest("Project name required".to_string()))?;

    let project_name = req.project_name.trim();
    if project_name.is_empty() {
        return Err(ApiError::BadRequest("Project name required".to_string()));
    }

    let id = Project::create(&state.db, project_name).await?;

    Ok(envelope::created("Project created", id).into_response())
}

/// Lists tasks joined with their project name as a bare array,
/// optionally filtered by exact `status` equality.
async fn get_tasks(state: &AppState, params: &HashMap<String, String>) -> ApiResult<Response> {
    let status = params.get("status").map(String::as_str);

    let tasks = ProjectTaskRow::list(&state.db, status).await?;

    Ok(Json(tasks).into_response())
}

/// Creates a task under a project and reports the generated id.
async fn create_task(state: &AppState, body: JsonValue) -> ApiResult<Response> {
    let payload: TaskPayload = serde_json::from_value(body)
        .map_err(|_| ApiError::BadRequest("Required fields missing".to_string()))?;

    let id = ProjectTaskRow::create(&state.db, payload.into_fields()).await?;

    Ok(envelope::created("Task created", id).into_response())
}

/// Full-record replace of a task, keyed by `id`.
///
/// Every column is rewritten from the payload; absent optional fields take
/// the same defaults as create. There is no partial-patch semantics.
async fn update_task(state: &AppState, body: JsonValue) -> ApiResult<Response> {
    let id = body
        .get("id")
        .filter(|v| !v.is_null())
        .cloned()
        .ok_or_else(|| ApiError::BadRequest("Task ID required".to_string()))?;
    let id: i64 = serde_json::from_value(id)
        .map_err(|_| ApiError::BadRequest("Task ID must be an integer".to_string()))?;

    let payload: TaskPayload = serde_json::from_value(body)
        .map_err(|_| ApiError::BadRequest("Required fields missing".to_string()))?;

    ProjectTaskRow::replace(&state.db, id, payload.into_fields()).await?;

    Ok(envelope::message("Task updated").into_response())
}

/// Deletes a task by the `id` query parameter.
///
/// Deleting an id that does not exist still reports success; the
/// operation is idempotent by construction.
async fn delete_task(state: &AppState, params: &HashMap<String, String>) -> ApiResult<Response> {
    let id = params
        .get("id")
        .ok_or_else(|| ApiError::BadRequest("Task ID required".to_string()))?;
    let id: i64 = id
        .parse()
        .map_err(|_| ApiError::BadRequest("Task ID must be an integer".to_string()))?;

    ProjectTaskRow::delete(&state.db, id).await?;

    Ok(envelope::message("Task deleted").into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_parses_snake_case() {
        let action: ProjectAction = serde_json::from_value(json!("get_projects")).unwrap();
        assert_eq!(action, ProjectAction::GetProjects);

        let action: ProjectAction = serde_json::from_value(json!("delete_task")).unwrap();
        assert_eq!(action, ProjectAction::DeleteTask);
    }

    #[test]
    fn test_action_rejects_unknown() {
        assert!(serde_json::from_value::<ProjectAction>(json!("truncate")).is_err());
        assert!(serde_json::from_value::<ProjectAction>(json!("")).is_err());
    }

    #[test]
    fn test_task_payload_defaults() {
        let payload: TaskPayload =
            serde_json::from_value(json!({"project_id": 1, "task_name": "Wireframes"})).unwrap();
        let fields = payload.into_fields();

        assert_eq!(fields.status, "pending");
        assert_eq!(fields.comment, "");
        assert!(fields.hours.is_none());
        assert!(fields.start_date.is_none());
        assert!(fields.end_date.is_none());
    }

    #[test]
    fn test_task_payload_null_status_falls_back() {
        let payload: TaskPayload = serde_json::from_value(json!({
            "project_id": 1,
            "task_name": "Wireframes",
            "status": null,
            "comment": null
        }))
        .unwrap();
        let fields = payload.into_fields();

        assert_eq!(fields.status, "pending");
        assert_eq!(fields.comment, "");
    }

    #[test]
    fn test_task_payload_explicit_values_survive() {
        let payload: TaskPayload = serde_json::from_value(json!({
            "project_id": 2,
            "task_name": "QA pass",
            "hours": 3.5,
            "start_date": "2025-03-01",
            "end_date": "2025-03-02",
            "status": "active",
            "comment": "blocked on review"
        }))
        .unwrap();
        let fields = payload.into_fields();

        assert_eq!(fields.hours, Some(3.5));
        assert_eq!(fields.status, "active");
        assert_eq!(fields.comment, "blocked on review");
    }

    #[test]
    fn test_task_payload_requires_project_id_and_name() {
        assert!(serde_json::from_value::<TaskPayload>(json!({"task_name": "x"})).is_err());
        assert!(serde_json::from_value::<TaskPayload>(json!({"project_id": 1})).is_err());
        // Ids are strictly integers, not numeric strings.
        assert!(serde_json::from_value::<TaskPayload>(
            json!({"project_id": "1", "task_name": "x"})
        )
        .is_err());
    }
}
