//! User records and the request/response shapes built around them

use serde::{Deserialize, Serialize};

/// A user held by a repository. The id is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
}

impl User {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Fixed sample profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl UserProfile {
    pub fn sample() -> Self {
        Self {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        }
    }
}

/// Body carrying a single name. Both `name` and `Name` keys are accepted;
/// a missing or null name is kept as `None` so validation can reject it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRequest {
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
}

impl NameRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Create body for the service-backed user routes; a missing name falls back to `noname`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default = "CreateUserRequest::default_name", alias = "Name")]
    pub name: String,
}

impl CreateUserRequest {
    pub const DEFAULT_NAME: &'static str = "noname";

    fn default_name() -> String {
        Self::DEFAULT_NAME.to_string()
    }
}

impl Default for CreateUserRequest {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdResponse {
    pub user_id: i32,
    pub message: String,
}

impl UserIdResponse {
    pub fn retrieved(user_id: i32) -> Self {
        Self {
            user_id,
            message: format!("User with ID {} retrieved.", user_id),
        }
    }
}
