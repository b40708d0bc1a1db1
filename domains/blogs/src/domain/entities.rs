//! Domain entities for the Bloglist blogs domain
//!
//! Each entity maps one-to-one onto a database row. Serialization rules
//! matter here: the credential hash is part of the row but never part of
//! any API response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bloglist_common::{Error, Result};

/// Minimum username length at registration
pub const MIN_USERNAME_LEN: usize = 3;

/// Minimum password length at registration
pub const MIN_PASSWORD_LEN: usize = 3;

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    /// Salted one-way hash of the registration password. Excluded from
    /// every serialized representation.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user from an already-hashed credential
    pub fn new(username: String, name: Option<String>, password_hash: String) -> Result<Self> {
        if username.len() < MIN_USERNAME_LEN {
            return Err(Error::Validation(format!(
                "username must be at least {} characters long",
                MIN_USERNAME_LEN
            )));
        }

        let now = Utc::now();
        Ok(User {
            id: Uuid::new_v4(),
            username,
            name,
            password_hash,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Blog entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,
    /// Owning user, fixed at creation
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Check whether a user is the owner of this blog
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

/// Minimal owner projection attached to blog listings. Never carries
/// the credential hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
        }
    }
}
