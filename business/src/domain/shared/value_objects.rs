use serde::{Deserialize, Serialize};

/// Owner recorded on requests that do not name one.
pub const DEFAULT_USER_ID: &str = "default_user";

/// Opaque user identifier supplied by the caller.
/// It is stored as-is and never checked against a user registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Uses `raw` when it holds something other than whitespace, the default owner otherwise.
    pub fn or_default(raw: Option<String>) -> Self {
        match raw {
            Some(id) if !id.trim().is_empty() => Self(id),
            _ => Self::default(),
        }
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self(DEFAULT_USER_ID.to_string())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
