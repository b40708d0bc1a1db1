//! JWT claims types

use serde::{Deserialize, Serialize};

/// Claims carried by a Bloglist session token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Username at issue time
    pub username: String,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
    /// Audience, when configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    /// Issuer, when configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}
