//! Repository implementations for the blogs domain

pub mod blogs;
pub mod users;

use sqlx::PgPool;

pub use blogs::{BlogRepository, BlogWithOwnerRow, NewBlog};
pub use users::UserRepository;

/// Combined repository access for the blogs domain
#[derive(Clone)]
pub struct BlogsRepositories {
    pub blogs: BlogRepository,
    pub users: UserRepository,
}

impl BlogsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            blogs: BlogRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }
}
