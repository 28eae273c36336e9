use serde::Deserialize;
use serde_json::Value;

/// A registered account. The password is kept in plain text, as sent.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub username: Option<Value>,
    pub password: Option<Value>,
}

/// Body of `POST /register` and `POST /login`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    pub username: Option<Value>,
    pub password: Option<Value>,
}

impl From<Credentials> for User {
    fn from(credentials: Credentials) -> Self {
        Self {
            username: credentials.username,
            password: credentials.password,
        }
    }
}
