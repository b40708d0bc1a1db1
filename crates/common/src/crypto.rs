//! Cryptographic utilities shared across Bloglist crates
//!
//! Provides password hashing and verification using SHA-256 with random salts
//! and constant-time comparison to prevent timing attacks.

use sha2::{Digest, Sha256};

/// Salt length in bytes for newly hashed passwords
const SALT_LEN: usize = 16;

/// Hash a plaintext password with a fresh random salt.
///
/// The stored hash format is `hex(salt):hex(sha256(password || salt))`.
/// The plaintext never leaves this function.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let mut salt = [0u8; SALT_LEN];
    getrandom::getrandom(&mut salt)
        .map_err(|e| anyhow::anyhow!("failed to generate salt: {}", e))?;

    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt);
    let hash = hasher.finalize();

    Ok(format!("{}:{}", hex::encode(salt), hex::encode(hash)))
}

/// Verify a candidate password against a stored hash using constant-time comparison.
pub fn verify_password(candidate: &str, stored_hash: &str) -> bool {
    // Parse stored hash: salt:hash
    let parts: Vec<&str> = stored_hash.split(':').collect();
    if parts.len() != 2 {
        return false;
    }

    let salt = match hex::decode(parts[0]) {
        Ok(salt) => salt,
        Err(_) => return false,
    };

    let hash = match hex::decode(parts[1]) {
        Ok(hash) => hash,
        Err(_) => return false,
    };

    // Compute hash of candidate password with stored salt
    let mut hasher = Sha256::new();
    hasher.update(candidate.as_bytes());
    hasher.update(&salt);
    let candidate_hash = hasher.finalize();

    // Constant-time comparison to prevent timing attacks
    if hash.len() != candidate_hash.len() {
        return false;
    }

    let mut result = 0u8;
    for (a, b) in hash.iter().zip(candidate_hash.iter()) {
        result |= a ^ b;
    }
    result == 0
}
