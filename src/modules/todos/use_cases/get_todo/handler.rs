use crate::modules::todos::adapters::outbound::todo_store::TodoStore;
use crate::modules::todos::core::errors::TodoError;
use crate::modules::todos::core::todo::Todo;

pub async fn get_todo(store: &dyn TodoStore, id: &str) -> Result<Todo, TodoError> {
    store.find(id).await.ok_or_else(|| {
        tracing::debug!(todo_id = id, "todo not found");
        TodoError::NotFound
    })
}
