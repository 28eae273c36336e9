//! Registration and login handlers.

use axum::{extract::State, http::StatusCode, routing::post, Router};
use bookstore_http::{
    error::{AppError, AppResult},
    extract::LenientJson,
};

use super::models::{Credentials, User};
use super::store::UserStore;

/// Build the users router
pub fn router(store: UserStore) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(store)
}

async fn register(
    State(store): State<UserStore>,
    LenientJson(credentials): LenientJson<Credentials>,
) -> AppResult<(StatusCode, &'static str)> {
    if !store.register(User::from(credentials)).await {
        return Err(AppError::conflict("User already exists"));
    }

    let users = store.len().await;
    tracing::debug!(users, "user registered");
    Ok((StatusCode::CREATED, "User registered successfully"))
}

async fn login(
    State(store): State<UserStore>,
    LenientJson(credentials): LenientJson<Credentials>,
) -> AppResult<&'static str> {
    let authenticated = store
        .authenticate(credentials.username.as_ref(), credentials.password.as_ref())
        .await;

    if !authenticated {
        return Err(AppError::unauthorized("Invalid credentials"));
    }
    Ok("Login successful")
}
