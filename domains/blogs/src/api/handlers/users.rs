//! User resource API handlers
//!
//! - GET /api/users - List users with their blogs expanded
//! - POST /api/users - Register a new user

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use bloglist_common::{hash_password, Error, Result, ValidatedJson};

use crate::api::middleware::BlogsState;
use crate::domain::entities::{Blog, User};

/// Request for user registration.
///
/// `username` and `password` are optional at the wire level so that a
/// missing field produces the contractual message instead of a generic
/// deserialization error; length rules run on whatever is present.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, message = "username must be at least 3 characters long"))]
    pub username: Option<String>,

    pub name: Option<String>,

    #[validate(length(min = 3, message = "password must be at least 3 characters long"))]
    pub password: Option<String>,
}

/// User listing entry with owned blogs expanded
#[derive(Debug, Serialize)]
pub struct UserWithBlogs {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub blogs: Vec<Blog>,
}

impl UserWithBlogs {
    fn new(user: User, blogs: Vec<Blog>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            blogs,
        }
    }
}

/// **GET /api/users**
///
/// Returns all users with their owned blogs expanded. The credential
/// hash never appears in the response.
pub async fn list_users(State(state): State<BlogsState>) -> Result<Json<Vec<UserWithBlogs>>> {
    let users = state.repos.users.list_with_blogs().await?;

    Ok(Json(
        users
            .into_iter()
            .map(|(user, blogs)| UserWithBlogs::new(user, blogs))
            .collect(),
    ))
}

/// **POST /api/users**
///
/// Registers a new user. The plaintext password is hashed immediately
/// and never persisted or returned.
pub async fn create_user(
    State(state): State<BlogsState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let (username, password) = match (request.username, request.password) {
        (Some(username), Some(password)) => (username, password),
        _ => {
            return Err(Error::Validation(
                "username and password are required".to_string(),
            ));
        }
    };

    if state
        .repos
        .users
        .find_by_username(&username)
        .await?
        .is_some()
    {
        return Err(Error::Validation(format!(
            "username `{}` is already taken",
            username
        )));
    }

    let password_hash = hash_password(&password)?;
    let user = User::new(username, request.name, password_hash)?;
    let created = state.repos.users.create(&user).await?;

    tracing::info!(user_id = %created.id, username = %created.username, "User registered");

    Ok((StatusCode::CREATED, Json(created)))
}
