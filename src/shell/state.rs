use crate::modules::todos::adapters::outbound::todo_store::TodoStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore + Send + Sync>,
}
