//! Password hashing.
//!
//! bcrypt is CPU bound, so hashing and verification run on tokio's blocking
//! pool instead of an async worker thread.

use crate::server::error::AppError;

/// Hashes a password with bcrypt's default cost.
///
/// # Returns
/// - `Ok(String)` - The bcrypt hash
/// - `Err(AppError::HashErr)` - bcrypt rejected the input
/// - `Err(AppError::TaskErr)` - The blocking task did not complete
pub async fn hash_password(password: String) -> Result<String, AppError> {
    let hash =
        tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST)).await??;

    Ok(hash)
}

/// Checks a password against a stored bcrypt hash.
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;

    Ok(matches)
}
