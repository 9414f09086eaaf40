use crate::modules::todos::adapters::outbound::todo_store::TodoStore;
use crate::modules::todos::core::todo::Todo;

pub async fn list_todos(store: &dyn TodoStore) -> Vec<Todo> {
    let todos = store.list().await;
    tracing::debug!(count = todos.len(), "listed todos");
    todos
}
