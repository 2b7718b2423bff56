//! Account registration, password verification and linked-profile storage.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use payloads::Credentials;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Username and password are required")]
    MissingCredentials,
    #[error("Username already exists")]
    UsernameTaken,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Trim the username and require both fields to be non-empty.
///
/// # Errors
///
/// Returns [`AccountError::MissingCredentials`] when either field is blank.
pub fn validate_credentials(creds: &Credentials) -> Result<(&str, &str), AccountError> {
    let username = creds.username.trim();
    if username.is_empty() || creds.password.is_empty() {
        return Err(AccountError::MissingCredentials);
    }
    Ok((username, creds.password.as_str()))
}

/// Hash a password with Argon2id and a random salt (PHC string format).
///
/// # Errors
///
/// Returns [`AccountError::Hash`] if the hasher rejects its parameters.
pub fn hash_password(password: &str) -> Result<String, AccountError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AccountError::Hash(e.to_string()))
}

/// Check a password against a stored PHC hash. Malformed hashes never match.
#[must_use]
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash)
        .is_ok_and(|parsed| Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

/// Create an account. Returns the new user's id.
///
/// # Errors
///
/// Returns [`AccountError::UsernameTaken`] on a duplicate username.
pub async fn register(pool: &PgPool, username: &str, password: &str) -> Result<Uuid, AccountError> {
    let password_hash = hash_password(password)?;
    let row = sqlx::query("INSERT INTO users (username, password_hash) VALUES ($1, $2) RETURNING id")
        .bind(username)
        .bind(password_hash)
        .fetch_one(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => AccountError::UsernameTaken,
            other => AccountError::Db(other),
        })?;
    Ok(row.get("id"))
}

/// Verify credentials and return the matching user's id.
///
/// # Errors
///
/// Returns [`AccountError::InvalidCredentials`] for an unknown user or a
/// wrong password.
pub async fn authenticate(pool: &PgPool, username: &str, password: &str) -> Result<Uuid, AccountError> {
    let row = sqlx::query("SELECT id, password_hash FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?
        .ok_or(AccountError::InvalidCredentials)?;

    let stored: String = row.get("password_hash");
    if !verify_password(password, &stored) {
        return Err(AccountError::InvalidCredentials);
    }
    Ok(row.get("id"))
}

/// The external coding-profile username linked to an account, if any.
pub async fn linked_username(pool: &PgPool, user_id: Uuid) -> Result<Option<String>, sqlx::Error> {
    let row = sqlx::query("SELECT leetcode_username FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.and_then(|r| r.get::<Option<String>, _>("leetcode_username")))
}

/// Link (or relink) an external coding-profile username.
pub async fn set_linked_username(pool: &PgPool, user_id: Uuid, leetcode_username: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET leetcode_username = $2 WHERE id = $1")
        .bind(user_id)
        .bind(leetcode_username)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "accounts_test.rs"]
mod tests;
