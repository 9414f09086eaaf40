use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::modules::todos::adapters::outbound::todo_store::TodoStore;
use crate::modules::todos::core::errors::TodoError;
use crate::modules::todos::core::todo::{Todo, TodoPatch};
use crate::modules::todos::use_cases::update_todo::handler::update_todo;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TodoPatch>, JsonRejection>,
) -> Result<Json<Todo>, TodoError> {
    let patch = match body {
        Ok(Json(patch)) => patch,
        Err(JsonRejection::MissingJsonContentType(_)) => TodoPatch::default(),
        Err(JsonRejection::JsonDataError(rejection)) => {
            tracing::debug!(rejection = %rejection.body_text(), "update body rejected");
            if state.store.find(&id).await.is_none() {
                return Err(TodoError::NotFound);
            }
            return Err(TodoError::InvalidBody);
        }
        Err(rejection) => {
            tracing::debug!(rejection = %rejection.body_text(), "update body rejected");
            return Err(TodoError::InvalidBody);
        }
    };

    update_todo(&*state.store, &id, patch).await.map(Json)
}
