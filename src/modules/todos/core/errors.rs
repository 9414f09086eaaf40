use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Title must be a string")]
    TitleNotText,

    #[error("To-do not found")]
    NotFound,

    #[error("Invalid request body")]
    InvalidBody,
}
