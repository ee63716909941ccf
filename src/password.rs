//! Password hashing wrappers.
//!
//! bcrypt with a fixed cost factor of 10. The plaintext travels in a
//! [`Password`] wrapper whose buffer is zeroized on drop and which never
//! prints its contents.
//!
//! ```rust
//! use envelope_errors::password::{compare_password, hash_password, Password};
//!
//! let hash = hash_password(&Password::from("correct horse")).unwrap();
//! assert!(compare_password(&hash, &Password::from("correct horse")));
//! assert!(!compare_password(&hash, &Password::from("battery staple")));
//! ```

use std::fmt;
use zeroize::Zeroizing;

/// bcrypt cost factor used for every new hash.
pub const HASH_COST: u32 = 10;

/// Plaintext password, zeroized on drop.
#[derive(Clone)]
pub struct Password(Zeroizing<String>);

impl Password {
    #[inline]
    pub fn new(plaintext: String) -> Self {
        Self(Zeroizing::new(plaintext))
    }

    /// Borrow the plaintext. Keep the borrow short.
    #[inline]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for Password {
    fn from(plaintext: String) -> Self {
        Self::new(plaintext)
    }
}

impl From<&str> for Password {
    fn from(plaintext: &str) -> Self {
        Self::new(plaintext.to_owned())
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<REDACTED>)")
    }
}

/// Failure while producing a hash.
#[derive(Debug)]
pub enum PasswordError {
    /// The bcrypt primitive rejected the input.
    Hash(bcrypt::BcryptError),
    /// The blocking worker running the hash did not complete.
    #[cfg(feature = "tokio")]
    Worker(tokio::task::JoinError),
}

impl fmt::Display for PasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hash(_) => f.write_str("password hashing failed"),
            #[cfg(feature = "tokio")]
            Self::Worker(_) => f.write_str("password hashing worker failed"),
        }
    }
}

impl std::error::Error for PasswordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Hash(e) => Some(e),
            #[cfg(feature = "tokio")]
            Self::Worker(e) => Some(e),
        }
    }
}

impl From<bcrypt::BcryptError> for PasswordError {
    fn from(error: bcrypt::BcryptError) -> Self {
        Self::Hash(error)
    }
}

/// Hash a password with bcrypt at [`HASH_COST`].
///
/// # Errors
///
/// Returns [`PasswordError::Hash`] if bcrypt rejects the input.
pub fn hash_password(password: &Password) -> Result<String, PasswordError> {
    Ok(bcrypt::hash(password.expose(), HASH_COST)?)
}

/// Check a password against a stored hash.
///
/// A malformed hash counts as a mismatch.
pub fn compare_password(hash: &str, password: &Password) -> bool {
    match bcrypt::verify(password.expose(), hash) {
        Ok(matches) => matches,
        Err(error) => {
            tracing::debug!(%error, "stored password hash could not be verified");
            false
        }
    }
}

/// Hash on the blocking pool so the async executor is not stalled.
///
/// # Errors
///
/// Returns [`PasswordError::Worker`] if the blocking task panics or is
/// cancelled, otherwise the same errors as [`hash_password`].
#[cfg(feature = "tokio")]
pub async fn hash_password_async(password: Password) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(PasswordError::Worker)?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_uses_fixed_cost() {
        let hash = hash_password(&Password::from("s3cret")).unwrap();
        assert!(hash.starts_with("$2b$10$"), "{hash}");
    }

    #[test]
    fn compare_accepts_match_rejects_mismatch() {
        let hash = hash_password(&Password::from("s3cret")).unwrap();
        assert!(compare_password(&hash, &Password::from("s3cret")));
        assert!(!compare_password(&hash, &Password::from("S3cret")));
    }

    #[test]
    fn compare_rejects_malformed_hash() {
        assert!(!compare_password("not-a-hash", &Password::from("s3cret")));
    }

    #[test]
    fn debug_is_redacted() {
        let rendered = format!("{:?}", Password::from("hunter2"));
        assert!(!rendered.contains("hunter2"));
    }

    #[cfg(feature = "tokio")]
    #[tokio::test]
    async fn async_hash_verifies() {
        let hash = hash_password_async(Password::from("async")).await.unwrap();
        assert!(compare_password(&hash, &Password::from("async")));
    }
}
