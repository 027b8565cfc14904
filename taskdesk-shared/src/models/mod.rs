/// Database record types, one module per table.
///
/// Note that `todo_task` and `project_task` are deliberately distinct
/// record types. The two API surfaces evolved separately and their task
/// schemas share no owner key and few fields; unifying them would change
/// observable behavior on both surfaces.

pub mod project;
pub mod project_task;
pub mod todo_task;
pub mod user;
