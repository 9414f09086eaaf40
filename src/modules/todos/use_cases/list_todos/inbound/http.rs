use axum::{Json, extract::State};

use crate::modules::todos::core::todo::Todo;
use crate::modules::todos::use_cases::list_todos::handler::list_todos;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(list_todos(&*state.store).await)
}
