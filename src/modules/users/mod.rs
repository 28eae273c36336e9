pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use bookstore_kernel::{InitCtx, Module};
use serde_json::json;

use store::UserStore;

/// Users module: registration and login against plain-text credentials
pub struct UsersModule {
    store: UserStore,
}

impl UsersModule {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }
}

#[async_trait]
impl Module for UsersModule {
    fn name(&self) -> &'static str {
        "users"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "users module initialized"
        );
        tracing::warn!(
            module = self.name(),
            "passwords are stored and compared in plain text; do not reuse real credentials"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let credentials = json!({
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/Credentials" }
                }
            }
        });
        let text = |description: &str| {
            json!({
                "description": description,
                "content": {
                    "text/plain": {
                        "schema": { "$ref": "#/components/schemas/ErrorMessage" }
                    }
                }
            })
        };

        Some(json!({
            "paths": {
                "/register": {
                    "post": {
                        "summary": "Register a user",
                        "tags": ["Users"],
                        "requestBody": credentials.clone(),
                        "responses": {
                            "201": text("User registered successfully"),
                            "400": text("User already exists")
                        }
                    }
                },
                "/login": {
                    "post": {
                        "summary": "Check a user's credentials",
                        "tags": ["Users"],
                        "requestBody": credentials,
                        "responses": {
                            "200": text("Login successful"),
                            "401": text("Invalid credentials")
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Credentials": {
                        "type": "object",
                        "properties": {
                            "username": { "type": "string" },
                            "password": { "type": "string" }
                        }
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "users module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let users = self.store.len().await;
        tracing::info!(
            module = self.name(),
            users,
            "users module stopped"
        );
        Ok(())
    }
}

/// Create the users module with an empty user collection
pub fn create_module() -> Arc<UsersModule> {
    Arc::new(UsersModule::new(UserStore::new()))
}
