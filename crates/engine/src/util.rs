//! Internal helpers for password hashing and session tokens.
//!
//! These utilities are **not** part of the public API.

use base64::Engine as _;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Hash a password with a fresh random salt, stored as `salt$hexdigest`.
pub(crate) fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    format!("{salt}${}", digest(&salt, password))
}

/// Check a password against a stored `salt$hexdigest` value.
pub(crate) fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, expected)) => digest(salt, password) == expected,
        None => false,
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Opaque session token: random UUID bytes, base64 url-safe without padding.
pub(crate) fn new_token() -> String {
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(Uuid::new_v4().as_bytes())
}
