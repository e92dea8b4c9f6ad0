use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    Hash(String),
}

/// Hash a plaintext secret with bcrypt at the configured work factor. Each
/// call salts independently, so equal inputs produce different hashes.
pub fn hash_secret(secret: &str, cost: u32) -> Result<String, PasswordError> {
    bcrypt::hash(secret, cost).map_err(|e| PasswordError::Hash(e.to_string()))
}

/// Verify a plaintext secret against a stored bcrypt hash. A mismatch (or an
/// unreadable stored hash) is simply `false`; the caller maps it to the same
/// authentication failure as an unknown identity.
pub fn verify_secret(secret: &str, hash: &str) -> bool {
    bcrypt::verify(secret, hash).unwrap_or(false)
}
