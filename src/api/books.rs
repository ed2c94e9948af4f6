//! Book endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookQuery, BookRequest},
};

use super::{BookId, ValidatedJson, ValidatedQuery};

/// List all books
pub async fn list_books(State(state): State<crate::AppState>) -> Json<Vec<Book>> {
    Json(state.services.books.list().await)
}

/// Get a book by ID
pub async fn get_book(
    State(state): State<crate::AppState>,
    BookId(id): BookId,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Filter books by `rating` and/or `published_year`
pub async fn filter_books(
    State(state): State<crate::AppState>,
    ValidatedQuery(query): ValidatedQuery<BookQuery>,
) -> Json<Vec<Book>> {
    Json(state.services.books.filter(&query).await)
}

/// Create a new book
pub async fn create_book(
    State(state): State<crate::AppState>,
    ValidatedJson(request): ValidatedJson<BookRequest>,
) -> (StatusCode, Json<Book>) {
    let created = state.services.books.create(request).await;
    (StatusCode::CREATED, Json(created))
}

/// Replace the book whose id is given in the body
pub async fn update_book(
    State(state): State<crate::AppState>,
    ValidatedJson(request): ValidatedJson<BookRequest>,
) -> AppResult<StatusCode> {
    state.services.books.update(request).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a book
pub async fn delete_book(
    State(state): State<crate::AppState>,
    BookId(id): BookId,
) -> AppResult<StatusCode> {
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET`/`DELETE /books/update_book`: the static update route shadows
/// `/books/:book_id`, so answer as that route would for a non-integer id
pub async fn reject_update_book_id() -> AppError {
    AppError::Validation("book_id must be an integer, got \"update_book\"".to_string())
}
