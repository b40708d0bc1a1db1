//! Concrete authentication backend
//!
//! Wraps `PgPool` + `AuthConfig` and owns the identity lookup query.
//! Uses runtime `sqlx::query_as` (not macros) so the crate builds
//! without a live database.

use sqlx::PgPool;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::types::AuthIdentity;

/// Concrete authentication backend.
///
/// Wraps a database pool and auth configuration. Resolves verified
/// tokens to stored user identities.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    pool: PgPool,
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(pool: PgPool, config: AuthConfig) -> Self {
        Self { pool, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Find user identity by ID (lightweight subset of User)
    pub(crate) async fn find_user(&self, id: Uuid) -> Result<Option<AuthIdentity>, AuthError> {
        let user: Option<AuthIdentity> = sqlx::query_as(
            r#"
            SELECT id, username, name
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %id, "Failed to load user");
            AuthError::UserLoadError
        })?;

        Ok(user)
    }

    /// Resolve a bearer token to a stored user identity.
    ///
    /// Signature, expiry, subject decoding, and the identity lookup all
    /// fail with the same 401 response.
    pub(crate) async fn authenticate(&self, token: &str) -> Result<AuthIdentity, AuthError> {
        let claims = crate::jwt::validate_token(token, &self.config)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidUserId)?;

        self.find_user(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}
