use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::todos::core::errors::TodoError;

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl TodoError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TodoError::TitleRequired | TodoError::TitleNotText | TodoError::InvalidBody => {
                StatusCode::BAD_REQUEST
            }
            TodoError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(MessageBody {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
