// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication services.
//!
//! There is no embedded shared secret here: the credential check sits
//! behind a trait so a real identity provider can be substituted without
//! touching the session machinery. The default implementation verifies
//! against a bcrypt hash supplied at startup.

use crate::error::AuthError;
use std::collections::HashMap;
use time::{Duration, PrimitiveDateTime};

/// A pluggable credential check.
///
/// Implementations decide what a valid credential is: a bcrypt hash, an
/// external identity provider, a test stub.
pub trait CredentialVerifier: Send + Sync {
    /// Checks a password attempt.
    ///
    /// # Errors
    ///
    /// Returns an error if the verifier itself fails (as opposed to the
    /// credential simply not matching).
    fn verify(&self, password: &str) -> Result<bool, AuthError>;
}

/// Verifies credentials against a bcrypt hash.
pub struct BcryptVerifier {
    hash: String,
}

impl BcryptVerifier {
    /// Creates a verifier over an existing bcrypt hash.
    #[must_use]
    pub fn new(hash: &str) -> Self {
        Self {
            hash: hash.to_string(),
        }
    }

    /// Hashes a plaintext password and creates a verifier over it.
    ///
    /// Intended for first-run provisioning; steady-state deployments pass
    /// the stored hash to `new`.
    ///
    /// # Errors
    ///
    /// Returns an error if hashing fails.
    pub fn from_password(password: &str) -> Result<Self, AuthError> {
        let hash: String =
            bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| AuthError::VerifierFailure {
                reason: e.to_string(),
            })?;
        Ok(Self { hash })
    }
}

impl CredentialVerifier for BcryptVerifier {
    fn verify(&self, password: &str) -> Result<bool, AuthError> {
        bcrypt::verify(password, &self.hash).map_err(|e| AuthError::VerifierFailure {
            reason: e.to_string(),
        })
    }
}

/// Session-based authentication over a pluggable credential check.
pub struct AuthenticationService {
    verifier: Box<dyn CredentialVerifier>,
    sessions: HashMap<String, PrimitiveDateTime>,
}

impl AuthenticationService {
    /// Session lifetime from login.
    const SESSION_EXPIRATION: Duration = Duration::hours(12);

    /// Creates a service over the given verifier.
    #[must_use]
    pub fn new(verifier: Box<dyn CredentialVerifier>) -> Self {
        Self {
            verifier,
            sessions: HashMap::new(),
        }
    }

    /// Authenticates a password attempt and opens a session.
    ///
    /// # Arguments
    ///
    /// * `password` - The password attempt
    /// * `now` - The login instant, used to compute expiry
    ///
    /// # Returns
    ///
    /// The session token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` on a non-matching password,
    /// or the verifier's own failure.
    pub fn login(&mut self, password: &str, now: PrimitiveDateTime) -> Result<String, AuthError> {
        if !self.verifier.verify(password)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token: String = Self::generate_session_token();
        self.sessions
            .insert(token.clone(), now + Self::SESSION_EXPIRATION);
        Ok(token)
    }

    /// Validates a session token.
    ///
    /// Expired sessions are removed as a side effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is unknown or expired.
    pub fn validate_session(
        &mut self,
        token: &str,
        now: PrimitiveDateTime,
    ) -> Result<(), AuthError> {
        let expires_at: PrimitiveDateTime = *self
            .sessions
            .get(token)
            .ok_or(AuthError::SessionNotFound)?;

        if now > expires_at {
            self.sessions.remove(token);
            return Err(AuthError::SessionExpired);
        }
        Ok(())
    }

    /// Closes a session. Unknown tokens are ignored.
    pub fn logout(&mut self, token: &str) {
        self.sessions.remove(token);
    }

    /// Generates a session token from entropy.
    fn generate_session_token() -> String {
        format!("session_{:032x}", rand::random::<u128>())
    }
}
