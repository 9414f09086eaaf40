use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::modules::todos::core::errors::TodoError;
use crate::modules::todos::use_cases::delete_todo::handler::delete_todo;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, TodoError> {
    delete_todo(&*state.store, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
