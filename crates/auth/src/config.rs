//! Token signing settings

/// Settings shared by token issuance (login) and validation (the
/// bearer gate).
///
/// Both paths must use the same secret or every request is a 401.
/// `issuer` and `audience` are stamped into new tokens and enforced
/// on validation only when set.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}
