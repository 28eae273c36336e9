//! In-memory user collection.

use std::sync::Arc;

use bookstore_http::extract::strict_eq;
use serde_json::Value;
use tokio::sync::RwLock;

use super::models::User;

/// Cloneable handle to the registered users. Usernames are unique under
/// strict equality; an absent username counts as one value.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// Add the user unless the username is taken. Returns whether it was added.
    pub async fn register(&self, user: User) -> bool {
        let mut users = self.users.write().await;
        if users
            .iter()
            .any(|existing| strict_eq(existing.username.as_ref(), user.username.as_ref()))
        {
            return false;
        }
        users.push(user);
        true
    }

    /// Whether a user matches both fields exactly.
    pub async fn authenticate(&self, username: Option<&Value>, password: Option<&Value>) -> bool {
        self.users.read().await.iter().any(|user| {
            strict_eq(user.username.as_ref(), username) && strict_eq(user.password.as_ref(), password)
        })
    }
}
