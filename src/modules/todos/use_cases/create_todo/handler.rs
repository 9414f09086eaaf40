use crate::modules::todos::adapters::outbound::todo_store::TodoStore;
use crate::modules::todos::core::errors::TodoError;
use crate::modules::todos::core::todo::Todo;
use crate::modules::todos::use_cases::create_todo::command::CreateTodo;
use crate::modules::todos::use_cases::create_todo::decide::decide_create;

pub async fn create_todo(store: &dyn TodoStore, command: CreateTodo) -> Result<Todo, TodoError> {
    let todo = decide_create(command)
        .inspect_err(|error| tracing::debug!(%error, "create rejected"))?;
    store.insert(todo.clone()).await;
    tracing::info!(todo_id = %todo.id, "todo created");
    Ok(todo)
}
