//! Identity read model used by the auth layer

use serde::Serialize;
use uuid::Uuid;

/// Authenticated user identity — the lightweight subset of User the
/// auth layer resolves from a verified token. Never carries the
/// credential hash.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct AuthIdentity {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
}
