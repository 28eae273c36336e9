//! In-memory book catalog.

use std::sync::Arc;

use bookstore_http::extract::strict_eq;
use serde_json::Value;
use tokio::sync::RwLock;

use super::models::{Book, Review};

/// Cloneable handle to the book catalog.
///
/// Clones share the same underlying collection. Books keep their insertion
/// order and ISBNs are unique; only review sequences change after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct BookStore {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BookStore {
    /// Create a catalog from the given books. Later duplicates of an ISBN are dropped.
    pub fn new(books: Vec<Book>) -> Self {
        let mut unique: Vec<Book> = Vec::with_capacity(books.len());
        for book in books {
            if unique.iter().any(|existing| existing.isbn == book.isbn) {
                tracing::warn!(isbn = %book.isbn, "ignoring duplicate ISBN in catalog seed");
                continue;
            }
            unique.push(book);
        }

        Self {
            books: Arc::new(RwLock::new(unique)),
        }
    }

    /// The catalog the service starts with.
    pub fn seeded() -> Self {
        Self::new(vec![
            Book::new("20061", "Book One", "Author R"),
            Book::new("20031", "Book Two", "Author D"),
        ])
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }

    /// Snapshot of every book in insertion order.
    pub async fn all(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn find_by_isbn(&self, isbn: &str) -> Option<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.isbn == isbn)
            .cloned()
    }

    /// Books whose author equals `author` exactly.
    pub async fn find_by_author(&self, author: &str) -> Vec<Book> {
        self.books
            .read()
            .await
            .iter()
            .filter(|book| book.author == author)
            .cloned()
            .collect()
    }

    /// Books whose title contains `title` (case-sensitive).
    pub async fn find_by_title(&self, title: &str) -> Vec<Book> {
        self.books
            .read()
            .await
            .iter()
            .filter(|book| book.title.contains(title))
            .cloned()
            .collect()
    }

    /// Reviews of the book, or `None` when the ISBN is unknown.
    pub async fn reviews(&self, isbn: &str) -> Option<Vec<Review>> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.isbn == isbn)
            .map(|book| book.reviews.clone())
    }

    /// Append a review. Returns the book's new review count, or `None` when
    /// the ISBN is unknown.
    pub async fn add_review(&self, isbn: &str, review: Review) -> Option<usize> {
        let mut books = self.books.write().await;
        let book = books.iter_mut().find(|book| book.isbn == isbn)?;
        book.reviews.push(review);
        Some(book.reviews.len())
    }

    /// Remove every review whose username strictly equals `username`; an
    /// absent username matches reviews submitted without one. Returns how
    /// many were removed, or `None` when the ISBN is unknown.
    pub async fn delete_reviews(&self, isbn: &str, username: Option<&Value>) -> Option<usize> {
        let mut books = self.books.write().await;
        let book = books.iter_mut().find(|book| book.isbn == isbn)?;
        let before = book.reviews.len();
        book.reviews
            .retain(|review| !strict_eq(review.username.as_ref(), username));
        Some(before - book.reviews.len())
    }
}
