/// Project model (project surface)
///
/// # Schema
///
/// ```sql
/// CREATE TABLE projects (
///     id BIGSERIAL PRIMARY KEY,
///     project_name TEXT NOT NULL
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Project row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    pub project_name: String,
}

impl Project {
    /// Inserts a new project and returns its generated id.
    ///
    /// Callers validate and trim `project_name` before this point; the
    /// value is stored as given.
    pub async fn create(pool: &PgPool, project_name: &str) -> Result<i64, sqlx::Error> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO projects (project_name)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(project_name)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Lists all projects in primary-key order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, project_name
            FROM projects
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(projects)
    }
}
