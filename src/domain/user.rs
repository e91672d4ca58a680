//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity.
///
/// The password is stored as given; it is never serialized back to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "luke@tatooine.org")]
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[schema(example = true)]
    pub is_active: bool,
}

/// Fields required to create a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
}

/// Partial user update: only present fields are written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserPatch {
    /// Check whether the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}
