//! Blogs domain state and auth backend integration

use crate::repository::BlogsRepositories;
use axum::extract::FromRef;
use bloglist_auth::AuthBackend;

/// Application state for the blogs domain
#[derive(Clone)]
pub struct BlogsState {
    pub repos: BlogsRepositories,
    pub auth: AuthBackend,
}

impl FromRef<BlogsState> for AuthBackend {
    fn from_ref(state: &BlogsState) -> Self {
        state.auth.clone()
    }
}
