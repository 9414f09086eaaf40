use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::modules::todos::core::errors::TodoError;
use crate::modules::todos::core::todo::Todo;
use crate::modules::todos::use_cases::create_todo::command::CreateTodo;
use crate::modules::todos::use_cases::create_todo::handler::create_todo;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), TodoError> {
    let command = match body {
        Ok(Json(command)) => command,
        Err(JsonRejection::MissingJsonContentType(_)) => CreateTodo::default(),
        Err(rejection) => {
            tracing::debug!(rejection = %rejection.body_text(), "create body rejected");
            return Err(TodoError::InvalidBody);
        }
    };

    let todo = create_todo(&*state.store, command).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}
