// In memory to-do store.
//
// Purpose
// - Hold every to-do for the lifetime of the process; nothing survives a restart.
//
// Responsibilities
// - Keep insertion order, look records up by a linear scan on id.
// - Serialize writers behind a single lock so request handlers never interleave mutations.

use crate::modules::todos::adapters::outbound::todo_store::TodoStore;
use crate::modules::todos::core::todo::{Todo, TodoPatch};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn list(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    async fn find(&self, id: &str) -> Option<Todo> {
        self.todos
            .read()
            .await
            .iter()
            .find(|todo| todo.id == id)
            .cloned()
    }

    async fn insert(&self, todo: Todo) {
        self.todos.write().await.push(todo);
    }

    async fn update(&self, id: &str, patch: TodoPatch) -> Option<Todo> {
        let mut guard = self.todos.write().await;
        let todo = guard.iter_mut().find(|todo| todo.id == id)?;
        todo.apply(patch);
        Some(todo.clone())
    }

    async fn remove(&self, id: &str) -> Option<Todo> {
        let mut guard = self.todos.write().await;
        let index = guard.iter().position(|todo| todo.id == id)?;
        Some(guard.remove(index))
    }
}
