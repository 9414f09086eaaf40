use crate::modules::todos::adapters::outbound::todo_store::TodoStore;
use crate::modules::todos::core::errors::TodoError;

pub async fn delete_todo(store: &dyn TodoStore, id: &str) -> Result<(), TodoError> {
    match store.remove(id).await {
        Some(todo) => {
            tracing::info!(todo_id = %todo.id, "todo deleted");
            Ok(())
        }
        None => {
            tracing::debug!(todo_id = id, "todo not found");
            Err(TodoError::NotFound)
        }
    }
}
