use serde_json::Value;

use crate::modules::todos::core::errors::TodoError;
use crate::modules::todos::core::todo::Todo;
use crate::modules::todos::use_cases::create_todo::command::CreateTodo;

pub fn decide_create(command: CreateTodo) -> Result<Todo, TodoError> {
    match command.title {
        Some(Value::String(title)) if !title.is_empty() => Ok(Todo::new(title)),
        None | Some(Value::Null) | Some(Value::String(_)) | Some(Value::Bool(false)) => {
            Err(TodoError::TitleRequired)
        }
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(TodoError::TitleRequired),
        Some(_) => Err(TodoError::TitleNotText),
    }
}
