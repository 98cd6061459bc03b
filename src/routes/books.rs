use crate::error::{
    ApiError, CREATE_FAILED, DELETE_FAILED, INVALID_ID, INVALID_PAYLOAD, READ_FAILED,
    UPDATE_FAILED,
};
use crate::models::book::{Book, BookId, BookPatch, NewBook};
use crate::services::books;
use crate::Backend;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

fn parse_id(raw: &str) -> Result<BookId, ApiError> {
    raw.parse::<BookId>()
        .map_err(|_| ApiError::Validation(INVALID_ID))
}

/// Only JSON objects are accepted, so positional arrays never match a struct.
fn parse_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|_| ApiError::Validation(INVALID_PAYLOAD))?;
    if !value.is_object() {
        return Err(ApiError::Validation(INVALID_PAYLOAD));
    }
    serde_json::from_value(value).map_err(|_| ApiError::Validation(INVALID_PAYLOAD))
}

fn parse_patch(body: &[u8]) -> Result<BookPatch, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(BookPatch::default());
    }
    parse_object(body)
}

pub async fn list_books(State(backend): State<Backend>) -> Result<Json<Vec<Book>>, ApiError> {
    books::list_books(backend.as_ref())
        .await
        .map(Json)
        .map_err(|e| ApiError::from_service(e, READ_FAILED))
}

pub async fn list_available_books(
    State(backend): State<Backend>,
) -> Result<Json<Vec<Book>>, ApiError> {
    books::list_available_books(backend.as_ref())
        .await
        .map(Json)
        .map_err(|e| ApiError::from_service(e, READ_FAILED))
}

pub async fn create_book(
    State(backend): State<Backend>,
    body: Bytes,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let new_book: NewBook = parse_object(&body)?;

    let book = books::create_book(backend.as_ref(), new_book)
        .await
        .map_err(|e| ApiError::from_service(e, CREATE_FAILED))?;

    info!("Created book {}", book.id);
    Ok((StatusCode::CREATED, Json(book)))
}

pub async fn update_book(
    Path(raw_id): Path<String>,
    State(backend): State<Backend>,
    body: Bytes,
) -> Result<Json<Book>, ApiError> {
    let id = parse_id(&raw_id)?;
    let patch = parse_patch(&body)?;

    let book = books::update_book(backend.as_ref(), id, patch)
        .await
        .map_err(|e| ApiError::from_service(e, UPDATE_FAILED))?;

    info!("Updated book {}", id);
    Ok(Json(book))
}

pub async fn delete_book(
    Path(raw_id): Path<String>,
    State(backend): State<Backend>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_id(&raw_id)?;

    let book = books::delete_book(backend.as_ref(), id)
        .await
        .map_err(|e| ApiError::from_service(e, DELETE_FAILED))?;

    info!("Deleted book {}", id);
    Ok(Json(book))
}
