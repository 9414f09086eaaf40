use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::todos::core::errors::TodoError;
use crate::modules::todos::core::todo::Todo;
use crate::modules::todos::use_cases::get_todo::handler::get_todo;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, TodoError> {
    get_todo(&*state.store, &id).await.map(Json)
}
