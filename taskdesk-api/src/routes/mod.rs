/// API route handlers
///
/// One module per surface:
///
/// - `health`: Health check endpoint
/// - `todo`: Todo surface (register, login, per-user tasks)
/// - `projects`: Project surface (projects and project-scoped tasks)

pub mod health;
pub mod projects;
pub mod todo;
