use crate::modules::todos::core::todo::{Todo, TodoPatch};
use async_trait::async_trait;

/// Ordered collection of to-dos, kept in insertion order.
///
/// Each mutation is applied atomically: no other call observes a
/// half-applied insert, patch or removal.
#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn list(&self) -> Vec<Todo>;
    async fn find(&self, id: &str) -> Option<Todo>;
    async fn insert(&self, todo: Todo);
    async fn update(&self, id: &str, patch: TodoPatch) -> Option<Todo>;
    async fn remove(&self, id: &str) -> Option<Todo>;
}
