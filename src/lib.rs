use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

#[cfg(test)]
mod test_support;

use crate::config::{BackendType, Config};
use crate::models::storage::{BookStore, InMemoryBackend, JsonFileBackend};
use crate::routes::{
    books::{create_book, delete_book, list_available_books, list_books, update_book},
    health::health_check,
};

pub type Backend = Arc<dyn BookStore + Send + Sync>;

pub fn build_backend(config: &Config) -> Backend {
    match config.backend {
        BackendType::File => Arc::new(JsonFileBackend::new(&config.books_file)),
        BackendType::Memory => Arc::new(InMemoryBackend::new()),
    }
}

pub fn app(backend: Backend) -> Router {
    Router::new()
        .route("/status", get(health_check))
        .route("/books", get(list_books).post(create_book))
        .route("/books/available", get(list_available_books))
        .route("/books/:id", put(update_book).delete(delete_book))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(backend)
}
