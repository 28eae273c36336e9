use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A catalog entry. The ISBN identifies the book and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    /// Reviews in the order they were added
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Book {
    pub fn new(isbn: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            reviews: Vec::new(),
        }
    }
}

/// A user-submitted comment on a book.
///
/// Fields keep whatever JSON value the request sent. Fields missing from the
/// request stay absent and are omitted from the JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<Value>,
}

/// Body of `POST /books/review/{isbn}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewRequest {
    pub username: Option<Value>,
    pub review: Option<Value>,
}

impl From<ReviewRequest> for Review {
    fn from(request: ReviewRequest) -> Self {
        Self {
            username: request.username,
            review: request.review,
        }
    }
}

/// Body of `DELETE /books/review/{isbn}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteReviewRequest {
    pub username: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn book_serializes_with_empty_reviews() {
        let book = Book::new("20061", "Book One", "Author R");
        assert_eq!(
            serde_json::to_value(&book).unwrap(),
            json!({"isbn": "20061", "title": "Book One", "author": "Author R", "reviews": []})
        );
    }

    #[test]
    fn absent_review_fields_are_omitted() {
        let review = Review::from(ReviewRequest {
            username: Some(json!("alice")),
            review: None,
        });
        assert_eq!(serde_json::to_value(&review).unwrap(), json!({"username": "alice"}));
    }

    #[test]
    fn review_keeps_non_string_values() {
        let review = Review::from(ReviewRequest {
            username: Some(json!(7)),
            review: Some(json!({"stars": 5})),
        });
        assert_eq!(
            serde_json::to_value(&review).unwrap(),
            json!({"username": 7, "review": {"stars": 5}})
        );
    }
}
