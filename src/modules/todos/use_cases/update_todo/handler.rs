use crate::modules::todos::adapters::outbound::todo_store::TodoStore;
use crate::modules::todos::core::errors::TodoError;
use crate::modules::todos::core::todo::{Todo, TodoPatch};

/// Applies `patch` to the todo with `id`. An explicitly supplied empty title
/// is accepted here, unlike on create.
pub async fn update_todo(
    store: &dyn TodoStore,
    id: &str,
    patch: TodoPatch,
) -> Result<Todo, TodoError> {
    match store.update(id, patch).await {
        Some(todo) => {
            tracing::info!(todo_id = %todo.id, completed = todo.completed, "todo updated");
            Ok(todo)
        }
        None => {
            tracing::debug!(todo_id = id, "todo not found");
            Err(TodoError::NotFound)
        }
    }
}
