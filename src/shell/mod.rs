// Composition root for the todos service.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate the in-memory store and share it through the application state.
// - Route HTTP requests to the use case handlers.

pub mod config;
pub mod http;
pub mod state;
