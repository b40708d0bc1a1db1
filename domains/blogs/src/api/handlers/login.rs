//! Login API handler
//!
//! - POST /api/login - Exchange credentials for a session token

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use bloglist_auth::issue_token;
use bloglist_common::{verify_password, Error, Result, ValidatedJson};

use crate::api::middleware::BlogsState;

/// Request for credential exchange
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response carrying a freshly issued session token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: Option<String>,
}

/// **POST /api/login**
///
/// Unknown username and wrong password fail identically so the response
/// does not reveal which credential was wrong.
pub async fn login(
    State(state): State<BlogsState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let user = state
        .repos
        .users
        .find_by_username(&request.username)
        .await?
        .filter(|user| verify_password(&request.password, &user.password_hash))
        .ok_or_else(|| Error::Authentication("invalid username or password".to_string()))?;

    let token = issue_token(user.id, &user.username, state.auth.config())
        .map_err(|_| Error::Internal("failed to issue token".to_string()))?;

    tracing::debug!(user_id = %user.id, "Session token issued");

    Ok(Json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    }))
}
