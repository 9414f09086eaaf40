use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::todos::use_cases::create_todo::inbound::http as create_http;
use crate::modules::todos::use_cases::delete_todo::inbound::http as delete_http;
use crate::modules::todos::use_cases::get_todo::inbound::http as get_http;
use crate::modules::todos::use_cases::list_todos::inbound::http as list_http;
use crate::modules::todos::use_cases::update_todo::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(list_http::handle).post(create_http::handle))
        .route(
            "/todos/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
