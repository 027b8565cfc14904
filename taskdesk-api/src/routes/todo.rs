/// Todo surface (user-scoped): register, login, per-user tasks
///
/// A single endpoint dispatching on an action carried in the JSON body.
/// The action deserializes into [`TodoAction`]; unknown strings never reach
/// a handler.
///
/// # Endpoint
///
/// ```text
/// POST /api/todo
/// Content-Type: application/json
///
/// {"action": "login", "username": "bob", "password": "..."}
/// ```
///
/// # Actions
///
/// | action | required fields | success payload |
/// |---|---|---|
/// | `register` | username, email, password | `message` |
/// | `login` | username, password | `user: {id, username}` |
/// | `get_tasks` | user_id | `tasks: [...]` |
/// | `create_task` | user_id, title, description, status, start_date, end_date | `message` |

use crate::{
    app::AppState,
    envelope,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use taskdesk_shared::{
    auth::password,
    models::{
        todo_task::{CreateTodoTask, TodoTask},
        user::{CreateUser, User},
    },
};

/// Actions understood by the todo surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoAction {
    Register,
    Login,
    GetTasks,
    CreateTask,
}

/// Register request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Task listing request
#[derive(Debug, Deserialize)]
pub struct GetTasksRequest {
    pub user_id: i64,
}

/// Task creation request. Every field is required.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Deserializes an action's request from the dispatch body.
///
/// Validation is presence-only: a field is satisfied when it is provided
/// and non-null. Any miss short-circuits with the action's own
/// required-fields message.
fn parse_request<T: DeserializeOwned>(body: JsonValue, missing_msg: &str) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|_| ApiError::BadRequest(missing_msg.to_string()))
}

/// Todo surface dispatcher
///
/// Reads the `action` field from the body, maps it onto [`TodoAction`],
/// and hands the rest of the body to the matching handler. Execution halts
/// at the first error envelope.
pub async fn dispatch(
    State(state): State<AppState>,
    body: Option<Json<JsonValue>>,
) -> ApiResult<Json<JsonValue>> {
    // A missing or unparseable body is the same as a body with no action.
    let body = body.map(|Json(v)| v).unwrap_or(JsonValue::Null);

    let action = body
        .get("action")
        .filter(|v| !v.is_null())
        .cloned()
        .ok_or_else(|| ApiError::BadRequest("Missing 'action' parameter".to_string()))?;

    let action: TodoAction = serde_json::from_value(action)
        .map_err(|_| ApiError::BadRequest("Invalid action".to_string()))?;

    match action {
        TodoAction::Register => register(&state, body).await,
        TodoAction::Login => login(&state, body).await,
        TodoAction::GetTasks => get_tasks(&state, body).await,
        TodoAction::CreateTask => create_task(&state, body).await,
    }
}

/// Registers a new user.
///
/// Rejects when a user with the same username OR email already exists
/// (case-sensitive exact match), otherwise stores an Argon2id hash of the
/// password. The response never carries the hash or any other sensitive
/// data.
async fn register(state: &AppState, body: JsonValue) -> ApiResult<Json<JsonValue>> {
    let req: RegisterRequest = parse_request(body, "All fields are required!")?;

    if User::exists_by_username_or_email(&state.db, &req.username, &req.email).await? {
        return Err(ApiError::Conflict("User already exists!".to_string()));
    }

    let password_hash = password::hash_password(&req.password)?;

    User::create(
        &state.db,
        CreateUser {
            username: req.username,
            email: req.email,
            password_hash,
        },
    )
    .await?;

    Ok(envelope::message("User registered successfully"))
}

/// Authenticates a user by username and password.
///
/// A missing user and a wrong password are indistinguishable to the
/// client: both answer a generic `Invalid credentials`, so the endpoint
/// cannot be used to enumerate usernames. On success only the user's id
/// and username are returned.
async fn login(state: &AppState, body: JsonValue) -> ApiResult<Json<JsonValue>> {
    let req: LoginRequest = parse_request(body, "Username and password are required!")?;

    let user = User::find_by_username(&state.db, &req.username)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let valid = password::verify_password(&req.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    Ok(envelope::payload("user", user.identity()))
}

/// Lists one user's tasks, ordered by start date ascending.
async fn get_tasks(state: &AppState, body: JsonValue) -> ApiResult<Json<JsonValue>> {
    let req: GetTasksRequest = parse_request(body, "User ID required!")?;

    let tasks = TodoTask::list_for_user(&state.db, req.user_id).await?;

    Ok(envelope::payload("tasks", tasks))
}

/// Creates a task owned by the given user.
async fn create_task(state: &AppState, body: JsonValue) -> ApiResult<Json<JsonValue>> {
    let req: CreateTaskRequest =
        parse_request(body, "All fields are required for creating a task!")?;

    TodoTask::create(
        &state.db,
        CreateTodoTask {
            user_id: req.user_id,
            title: req.title,
            description: req.description,
            start_date: req.start_date,
            end_date: req.end_date,
            status: req.status,
        },
    )
    .await?;

    Ok(envelope::message("Task created successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_parses_snake_case() {
        let action: TodoAction = serde_json::from_value(json!("get_tasks")).unwrap();
        assert_eq!(action, TodoAction::GetTasks);

        let action: TodoAction = serde_json::from_value(json!("register")).unwrap();
        assert_eq!(action, TodoAction::Register);
    }

    #[test]
    fn test_action_rejects_unknown() {
        assert!(serde_json::from_value::<TodoAction>(json!("drop_tables")).is_err());
        assert!(serde_json::from_value::<TodoAction>(json!("GET_TASKS")).is_err());
        assert!(serde_json::from_value::<TodoAction>(json!(42)).is_err());
    }

    #[test]
    fn test_register_request_requires_all_fields() {
        let body = json!({"action": "register", "username": "bob", "email": "b@x.io"});
        let result: Result<RegisterRequest, _> = parse_request(body, "All fields are required!");
        assert!(result.is_err());
    }

    #[test]
    fn test_register_request_rejects_null_field() {
        // Presence-only validation still means non-null.
        let body = json!({"username": "bob", "email": "b@x.io", "password": null});
        let result: Result<RegisterRequest, _> = parse_request(body, "All fields are required!");
        assert!(result.is_err());
    }

    #[test]
    fn test_register_request_ignores_action_field() {
        let body = json!({
            "action": "register",
            "username": "bob",
            "email": "b@x.io",
            "password": "pw"
        });
        let req: RegisterRequest = parse_request(body, "All fields are required!").unwrap();
        assert_eq!(req.username, "bob");
    }

    #[test]
    fn test_create_task_request_parses_dates() {
        let body = json!({
            "user_id": 3,
            "title": "t",
            "description": "d",
            "status": "open",
            "start_date": "2025-02-01",
            "end_date": "2025-02-03"
        });
        let req: CreateTaskRequest = parse_request(body, "msg").unwrap();
        assert_eq!(req.user_id, 3);
        assert_eq!(
            req.start_date,
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_get_tasks_request_requires_integer_user_id() {
        let body = json!({"user_id": "not-a-number"});
        let result: Result<GetTasksRequest, _> = parse_request(body, "User ID required!");
        assert!(result.is_err());
    }
}
