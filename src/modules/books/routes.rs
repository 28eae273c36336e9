//! HTTP handlers for the catalog and review endpoints.

use std::{future::Future, time::Duration};

use anyhow::Context;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use bookstore_http::{
    error::{AppError, AppResult},
    extract::LenientJson,
};

use super::models::{Book, DeleteReviewRequest, Review, ReviewRequest};
use super::store::BookStore;

/// Shared handler state for the books module
#[derive(Debug, Clone)]
pub struct BooksState {
    pub store: BookStore,
    /// Delay applied by `/async-books`
    pub async_delay: Duration,
}

/// Build the books router
pub fn router(state: BooksState) -> Router {
    Router::new()
        .route("/books", get(list_books))
        .route("/books/isbn/{isbn}", get(book_by_isbn))
        .route("/books/author/{author}", get(books_by_author))
        .route("/books/title/{title}", get(books_by_title))
        .route(
            "/books/review/{isbn}",
            get(book_reviews).post(add_review).delete(delete_review),
        )
        .route("/async-books", get(list_books_delayed))
        .route("/promise-books/isbn/{isbn}", get(deferred_book_by_isbn))
        .route("/async-books/author/{author}", get(deferred_books_by_author))
        .route("/async-books/title/{title}", get(deferred_books_by_title))
        .with_state(state)
}

/// Run a catalog read on its own task. A task that fails to complete becomes
/// a 500 carrying `failure` as its message.
async fn deferred<T, F>(failure: &'static str, read: F) -> AppResult<T>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(read)
        .await
        .context(failure)
        .map_err(AppError::from)
}

async fn list_books(State(state): State<BooksState>) -> Json<Vec<Book>> {
    Json(state.store.all().await)
}

async fn book_by_isbn(
    State(state): State<BooksState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Book>> {
    state
        .store
        .find_by_isbn(&isbn)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found("Book not found"))
}

async fn books_by_author(
    State(state): State<BooksState>,
    Path(author): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.store.find_by_author(&author).await;
    if books.is_empty() {
        return Err(AppError::not_found("No books found for this author"));
    }
    Ok(Json(books))
}

async fn books_by_title(
    State(state): State<BooksState>,
    Path(title): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.store.find_by_title(&title).await;
    if books.is_empty() {
        return Err(AppError::not_found("No books found with this title"));
    }
    Ok(Json(books))
}

async fn book_reviews(
    State(state): State<BooksState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Vec<Review>>> {
    state
        .store
        .reviews(&isbn)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found("No reviews found"))
}

async fn add_review(
    State(state): State<BooksState>,
    Path(isbn): Path<String>,
    LenientJson(request): LenientJson<ReviewRequest>,
) -> AppResult<&'static str> {
    let count = state
        .store
        .add_review(&isbn, Review::from(request))
        .await
        .ok_or_else(|| AppError::not_found("Book not found"))?;

    tracing::debug!(%isbn, reviews = count, "review added");
    Ok("Review added successfully")
}

async fn delete_review(
    State(state): State<BooksState>,
    Path(isbn): Path<String>,
    LenientJson(request): LenientJson<DeleteReviewRequest>,
) -> AppResult<&'static str> {
    let removed = state
        .store
        .delete_reviews(&isbn, request.username.as_ref())
        .await
        .ok_or_else(|| AppError::not_found("Book not found"))?;

    tracing::debug!(%isbn, removed, "reviews deleted");
    Ok("Review deleted")
}

async fn list_books_delayed(State(state): State<BooksState>) -> AppResult<Json<Vec<Book>>> {
    let store = state.store.clone();
    let delay = state.async_delay;

    let books = deferred("Error fetching books", async move {
        tokio::time::sleep(delay).await;
        store.all().await
    })
    .await?;

    Ok(Json(books))
}

async fn deferred_book_by_isbn(
    State(state): State<BooksState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Book>> {
    let store = state.store.clone();

    deferred("Error fetching book", async move { store.find_by_isbn(&isbn).await })
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Book not found"))
}

// No match is an empty 200 here, unlike `/books/author/{author}`.
async fn deferred_books_by_author(
    State(state): State<BooksState>,
    Path(author): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let store = state.store.clone();

    let books = deferred("Error fetching books by author", async move {
        store.find_by_author(&author).await
    })
    .await?;

    Ok(Json(books))
}

async fn deferred_books_by_title(
    State(state): State<BooksState>,
    Path(title): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let store = state.store.clone();

    let books = deferred("Error fetching books by title", async move {
        store.find_by_title(&title).await
    })
    .await?;

    Ok(Json(books))
}
