/// User-scoped task model (todo surface)
///
/// Every todo task belongs to a user; listing is always scoped to one
/// user and ordered by `start_date` ascending.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE todo_tasks (
///     id BIGSERIAL PRIMARY KEY,
///     user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     title TEXT NOT NULL,
///     description TEXT NOT NULL,
///     start_date DATE NOT NULL,
///     end_date DATE NOT NULL,
///     status TEXT NOT NULL
/// );
/// ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A todo task as returned to its owner.
///
/// `user_id` is not part of the payload; the list is already scoped to the
/// requesting user.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TodoTask {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Free-form status string; the todo surface imposes no state machine.
    pub status: String,
}

/// Input for creating a new todo task. All fields are required.
#[derive(Debug, Clone)]
pub struct CreateTodoTask {
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
}

impl TodoTask {
    /// Inserts a new todo task and returns its generated id.
    pub async fn create(pool: &PgPool, data: CreateTodoTask) -> Result<i64, sqlx::Error> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO todo_tasks (user_id, title, description, start_date, end_date, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(data.user_id)
        .bind(data.title)
        .bind(data.description)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.status)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Lists one user's tasks, ordered by start date ascending.
    pub async fn list_for_user(pool: &PgPool, user_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, TodoTask>(
            r#"
            SELECT id, title, description, start_date, end_date, status
            FROM todo_tasks
            WHERE user_id = $1
            ORDER BY start_date ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }
}
