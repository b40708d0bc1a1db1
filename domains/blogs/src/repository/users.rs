//! User repository

use std::collections::HashMap;

use crate::domain::entities::{Blog, User};
use bloglist_common::{Error, Result};
use sqlx::PgPool;
use uuid::Uuid;

/// Map an insert failure to a domain error.
///
/// A unique-constraint violation on `username` becomes a validation
/// error naming the duplicate value; anything else passes through as
/// a database error.
fn map_create_error(e: sqlx::Error, username: &str) -> Error {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return Error::Validation(format!("username `{}` is already taken", username));
        }
    }
    Error::Database(e)
}

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, username, name, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, username, name, password_hash, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Persist a new user.
    ///
    /// The unique index on `username` is the authoritative uniqueness
    /// check; a violation surfaces as a validation error naming the
    /// duplicate value, not as an overwrite.
    pub async fn create(&self, user: &User) -> Result<User> {
        let created: User = sqlx::query_as(
            r#"
            INSERT INTO users (id, username, name, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING id, username, name, password_hash, created_at, updated_at
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.name)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_create_error(e, &user.username))?;

        Ok(created)
    }

    /// List all users with their owned blogs expanded
    pub async fn list_with_blogs(&self) -> Result<Vec<(User, Vec<Blog>)>> {
        let users: Vec<User> = sqlx::query_as(
            r#"
            SELECT id, username, name, password_hash, created_at, updated_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let blogs: Vec<Blog> = sqlx::query_as(
            r#"
            SELECT id, title, author, url, likes, user_id, created_at, updated_at
            FROM blogs
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_owner: HashMap<Uuid, Vec<Blog>> = HashMap::new();
        for blog in blogs {
            by_owner.entry(blog.user_id).or_default().push(blog);
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let owned = by_owner.remove(&user.id).unwrap_or_default();
                (user, owned)
            })
            .collect())
    }
}
