pub mod models;
pub mod routes;
pub mod store;

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use axum::Router;
use bookstore_kernel::{InitCtx, Module};
use serde_json::json;

use routes::BooksState;
use store::BookStore;

/// Books module: catalog lookups and per-book reviews
pub struct BooksModule {
    state: BooksState,
}

impl BooksModule {
    pub fn new(store: BookStore, async_delay: Duration) -> Self {
        Self {
            state: BooksState { store, async_delay },
        }
    }

    pub fn store(&self) -> &BookStore {
        &self.state.store
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let books = self.state.store.len().await;
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            books,
            async_delay = ?self.state.async_delay,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.state.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(openapi_fragment())
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

fn path_param(name: &str, description: &str) -> serde_json::Value {
    json!({
        "name": name,
        "in": "path",
        "required": true,
        "description": description,
        "schema": { "type": "string" }
    })
}

fn text_response(description: &str) -> serde_json::Value {
    json!({
        "description": description,
        "content": {
            "text/plain": {
                "schema": { "$ref": "#/components/schemas/ErrorMessage" }
            }
        }
    })
}

fn json_response(description: &str, schema: serde_json::Value) -> serde_json::Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": schema }
        }
    })
}

fn openapi_fragment() -> serde_json::Value {
    let book = json!({ "$ref": "#/components/schemas/Book" });
    let books = json!({ "type": "array", "items": { "$ref": "#/components/schemas/Book" } });
    let reviews = json!({ "type": "array", "items": { "$ref": "#/components/schemas/Review" } });
    let isbn = path_param("isbn", "ISBN of the book");
    let author = path_param("author", "Exact author name");
    let title = path_param("title", "Case-sensitive title substring");

    json!({
        "paths": {
            "/books": {
                "get": {
                    "summary": "List books",
                    "tags": ["Books"],
                    "responses": {
                        "200": json_response("Every book in catalog order", books.clone())
                    }
                }
            },
            "/books/isbn/{isbn}": {
                "get": {
                    "summary": "Get a book by ISBN",
                    "tags": ["Books"],
                    "parameters": [isbn.clone()],
                    "responses": {
                        "200": json_response("The book", book.clone()),
                        "404": text_response("Book not found")
                    }
                }
            },
            "/books/author/{author}": {
                "get": {
                    "summary": "List books by author",
                    "tags": ["Books"],
                    "parameters": [author.clone()],
                    "responses": {
                        "200": json_response("Matching books", books.clone()),
                        "404": text_response("No books found for this author")
                    }
                }
            },
            "/books/title/{title}": {
                "get": {
                    "summary": "List books whose title contains a substring",
                    "tags": ["Books"],
                    "parameters": [title.clone()],
                    "responses": {
                        "200": json_response("Matching books", books.clone()),
                        "404": text_response("No books found with this title")
                    }
                }
            },
            "/books/review/{isbn}": {
                "get": {
                    "summary": "List reviews of a book",
                    "tags": ["Reviews"],
                    "parameters": [isbn.clone()],
                    "responses": {
                        "200": json_response("Reviews in submission order", reviews),
                        "404": text_response("No reviews found")
                    }
                },
                "post": {
                    "summary": "Add a review",
                    "tags": ["Reviews"],
                    "parameters": [isbn.clone()],
                    "requestBody": {
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/ReviewRequest" }
                            }
                        }
                    },
                    "responses": {
                        "200": text_response("Review added successfully"),
                        "404": text_response("Book not found")
                    }
                },
                "delete": {
                    "summary": "Delete every review by a user",
                    "tags": ["Reviews"],
                    "parameters": [isbn.clone()],
                    "requestBody": {
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/DeleteReviewRequest" }
                            }
                        }
                    },
                    "responses": {
                        "200": text_response("Review deleted"),
                        "404": text_response("Book not found")
                    }
                }
            },
            "/async-books": {
                "get": {
                    "summary": "List books after an artificial delay",
                    "tags": ["Async"],
                    "responses": {
                        "200": json_response("Every book in catalog order", books.clone()),
                        "500": text_response("Error fetching books")
                    }
                }
            },
            "/promise-books/isbn/{isbn}": {
                "get": {
                    "summary": "Get a book by ISBN on a deferred task",
                    "tags": ["Async"],
                    "parameters": [isbn],
                    "responses": {
                        "200": json_response("The book", book),
                        "404": text_response("Book not found")
                    }
                }
            },
            "/async-books/author/{author}": {
                "get": {
                    "summary": "List books by author on a deferred task; no match is an empty array",
                    "tags": ["Async"],
                    "parameters": [author],
                    "responses": {
                        "200": json_response("Matching books, possibly none", books.clone()),
                        "500": text_response("Error fetching books by author")
                    }
                }
            },
            "/async-books/title/{title}": {
                "get": {
                    "summary": "List books by title substring on a deferred task; no match is an empty array",
                    "tags": ["Async"],
                    "parameters": [title],
                    "responses": {
                        "200": json_response("Matching books, possibly none", books),
                        "500": text_response("Error fetching books by title")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Book": {
                    "type": "object",
                    "properties": {
                        "isbn": { "type": "string", "description": "Unique identifier for the book" },
                        "title": { "type": "string" },
                        "author": { "type": "string" },
                        "reviews": {
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/Review" }
                        }
                    },
                    "required": ["isbn", "title", "author", "reviews"]
                },
                "Review": {
                    "type": "object",
                    "properties": {
                        "username": { "type": "string" },
                        "review": { "type": "string" }
                    }
                },
                "ReviewRequest": {
                    "type": "object",
                    "properties": {
                        "username": { "type": "string" },
                        "review": { "type": "string" }
                    }
                },
                "DeleteReviewRequest": {
                    "type": "object",
                    "properties": {
                        "username": { "type": "string" }
                    }
                }
            }
        }
    })
}

/// Create the books module over the seeded catalog
pub fn create_module(async_delay: Duration) -> Arc<BooksModule> {
    Arc::new(BooksModule::new(BookStore::seeded(), async_delay))
}
