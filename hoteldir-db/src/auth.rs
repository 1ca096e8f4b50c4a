//! Password hashing and credential checks.
//!
//! Passwords are stored as salted Argon2id PHC strings. Nothing in this
//! module logs or returns a plaintext password.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use hoteldir_catalog::{NewUser, User, ValidationError};
use rusqlite::Connection;
use thiserror::Error;

use crate::operations::{self, OperationError};

#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password. The two are not distinguished.
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Invalid input: {0}")]
    Invalid(#[from] ValidationError),
    #[error("Username already exists")]
    DuplicateUsername,
    #[error("Email already registered")]
    DuplicateEmail,
    #[error("Password hashing failed: {0}")]
    Hash(String),
    #[error(transparent)]
    Database(#[from] OperationError),
}

impl From<rusqlite::Error> for AuthError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.into())
    }
}

/// Hash a password with a fresh random salt.
///
/// Two calls with the same password produce different strings.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hash(e.to_string()))
}

/// Check a password against a stored hash. A malformed hash never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            log::debug!("Stored password hash is malformed: {e}");
            false
        }
    }
}

/// Look up a user by username and check their password.
pub fn authenticate(conn: &Connection, username: &str, password: &str) -> Result<User, AuthError> {
    match operations::find_user_by_username(conn, username)? {
        Some(user) if verify_password(password, &user.password_hash) => {
            log::debug!("User '{}' authenticated", user.username);
            Ok(user)
        }
        _ => Err(AuthError::InvalidCredentials),
    }
}

/// Create a non-admin account.
///
/// The `is_admin` flag on `new_user` is ignored. Uniqueness of username and
/// email is checked before anything is written.
pub fn register_user(conn: &Connection, new_user: &NewUser) -> Result<User, AuthError> {
    new_user.validate()?;

    let tx = conn.unchecked_transaction()?;
    if operations::find_user_by_username(&tx, &new_user.username)?.is_some() {
        return Err(AuthError::DuplicateUsername);
    }
    if operations::find_user_by_email(&tx, &new_user.email)?.is_some() {
        return Err(AuthError::DuplicateEmail);
    }

    let hash = hash_password(&new_user.password)?;
    let id = operations::insert_user(&tx, &new_user.username, &new_user.email, &hash, false)?;
    let user = operations::get_user(&tx, id)?.ok_or(OperationError::not_found("user", id))?;
    tx.commit()?;

    log::info!("Registered user '{}'", user.username);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("secret1").unwrap();
        let b = hash_password("secret1").unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("$argon2id$"));
        assert!(verify_password("secret1", &a));
        assert!(verify_password("secret1", &b));
        assert!(!verify_password("secret2", &a));
    }

    #[test]
    fn malformed_hash_never_matches() {
        assert!(!verify_password("anything", "not-a-hash"));
        assert!(!verify_password("", ""));
    }
}
