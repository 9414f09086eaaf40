use serde::Deserialize;
use serde_json::Value;

/// `title` stays untyped so falsy JSON values (`false`, `0`, `null`, `""`)
/// can be told apart from a title of the wrong type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: Option<Value>,
}
