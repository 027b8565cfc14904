/// User model and database operations
///
/// Users exist for the todo surface: registration checks username/email
/// uniqueness, login fetches the stored hash by username. Both lookups are
/// case-sensitive exact matches (plain TEXT equality).
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id BIGSERIAL PRIMARY KEY,
///     username TEXT NOT NULL UNIQUE,
///     email TEXT NOT NULL UNIQUE,
///     password_hash TEXT NOT NULL
/// );
/// ```

use serde::Serialize;
use sqlx::PgPool;

/// User account row
///
/// The password is stored only as an Argon2id hash. The hash must never be
/// serialized into a response payload; handlers return [`UserIdentity`]
/// instead.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,

    /// Username (unique, case-sensitive)
    pub username: String,

    /// Email address (unique, case-sensitive)
    pub email: String,

    /// Argon2id password hash
    pub password_hash: String,
}

/// The subset of a user that is safe to return to clients.
/// Serialize-only; nothing ever parses one back in.
#[derive(Debug, Clone, Serialize)]
pub struct UserIdentity {
    pub id: i64,
    pub username: String,
}

/// Input for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,

    /// Argon2id password hash (never the plaintext password)
    pub password_hash: String,
}

impl User {
    /// Inserts a new user and returns its generated id.
    ///
    /// # Errors
    ///
    /// Fails on a unique-constraint violation (username or email taken) or
    /// a connection error.
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<i64, sqlx::Error> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(data.username)
        .bind(data.email)
        .bind(data.password_hash)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Finds a user by exact username.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Checks whether a user with the given username OR email exists.
    ///
    /// Used by registration to reject duplicates before inserting.
    pub async fn exists_by_username_or_email(
        pool: &PgPool,
        username: &str,
        email: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as(
            r#"
            SELECT id FROM users
            WHERE username = $1 OR email = $2
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(row.is_some())
    }

    /// The client-safe view of this user.
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            id: self.id,
            username: self.username.clone(),
        }
    }
}
