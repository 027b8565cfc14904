/// Project-scoped task model (project surface)
///
/// Distinct from [`todo_task`](super::todo_task): different owner key,
/// different fields, different mutation surface (full replace + delete).
///
/// # Schema
///
/// ```sql
/// CREATE TABLE project_tasks (
///     id BIGSERIAL PRIMARY KEY,
///     project_id BIGINT NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
///     task_name TEXT NOT NULL,
///     hours DOUBLE PRECISION,
///     start_date DATE,
///     end_date DATE,
///     status TEXT NOT NULL DEFAULT 'pending',
///     comment TEXT NOT NULL DEFAULT ''
/// );
/// ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A project task joined with its project's name, as returned by listing.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProjectTaskRow {
    pub id: i64,
    pub project_id: i64,
    pub task_name: String,
    pub hours: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub comment: String,

    /// Surfaced from the joined `projects` row.
    pub project_name: String,
}

/// Field set written by both create and full-replace update.
#[derive(Debug, Clone)]
pub struct ProjectTaskFields {
    pub project_id: i64,
    pub task_name: String,
    pub hours: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub comment: String,
}

impl ProjectTaskRow {
    /// Inserts a new project task and returns its generated id.
    pub async fn create(pool: &PgPool, data: ProjectTaskFields) -> Result<i64, sqlx::Error> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO project_tasks
                (project_id, task_name, hours, start_date, end_date, status, comment)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(data.project_id)
        .bind(data.task_name)
        .bind(data.hours)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.status)
        .bind(data.comment)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Lists tasks joined with their project name, in primary-key order,
    /// optionally filtered by exact status equality.
    pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<Self>, sqlx::Error> {
        // Two prepared variants instead of splicing a WHERE clause into the
        // query text.
        let tasks = match status {
            Some(status) => {
                sqlx::query_as::<_, ProjectTaskRow>(
                    r#"
                    SELECT t.id, t.project_id, t.task_name, t.hours,
                           t.start_date, t.end_date, t.status, t.comment,
                           p.project_name
                    FROM project_tasks t
                    JOIN projects p ON t.project_id = p.id
                    WHERE t.status = $1
                    ORDER BY t.id
                    "#,
                )
                .bind(status)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ProjectTaskRow>(
                    r#"
                    SELECT t.id, t.project_id, t.task_name, t.hours,
                           t.start_date, t.end_date, t.status, t.comment,
                           p.project_name
                    FROM project_tasks t
                    JOIN projects p ON t.project_id = p.id
                    ORDER BY t.id
                    "#,
                )
                .fetch_all(pool)
                .await?
            }
        };

        Ok(tasks)
    }

    /// Full-record replace keyed by id: every column is rewritten.
    ///
    /// Returns the number of rows affected (0 when the id does not exist).
    pub async fn replace(
        pool: &PgPool,
        id: i64,
        data: ProjectTaskFields,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE project_tasks
            SET project_id = $2,
                task_name  = $3,
                hours      = $4,
                start_date = $5,
                end_date   = $6,
                status     = $7,
                comment    = $8
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(data.project_id)
        .bind(data.task_name)
        .bind(data.hours)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.status)
        .bind(data.comment)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes by id. Deleting an absent id affects zero rows and is not
    /// an error.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_serializes_nullable_fields() {
        let row = ProjectTaskRow {
            id: 3,
            project_id: 1,
            task_name: "Wireframes".to_string(),
            hours: None,
            start_date: None,
            end_date: None,
            status: "pending".to_string(),
            comment: String::new(),
            project_name: "Redesign".to_string(),
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["hours"], serde_json::Value::Null);
        assert_eq!(json["status"], "pending");
        assert_eq!(json["comment"], "");
        assert_eq!(json["project_name"], "Redesign");
    }
}
