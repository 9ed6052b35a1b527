// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use room_desk_domain::DomainError;

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The supplied password did not match.
    InvalidCredentials,
    /// No session exists for the supplied token.
    SessionNotFound,
    /// The session exists but has expired.
    SessionExpired,
    /// The credential verifier itself failed.
    VerifierFailure {
        /// The reason the verifier failed.
        reason: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "Invalid credentials"),
            Self::SessionNotFound => write!(f, "Session not found"),
            Self::SessionExpired => write!(f, "Session expired"),
            Self::VerifierFailure { reason } => {
                write!(f, "Credential verifier failed: {reason}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain errors and represent the form-boundary
/// contract: nothing invalid ever reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::AuthenticationFailed {
            reason: err.to_string(),
        }
    }
}

/// Translates a domain validation error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
pub(crate) fn translate_domain_error(err: DomainError) -> ApiError {
    let field: &str = match &err {
        DomainError::UnderAge { .. } => "age",
        DomainError::EmptyField { field } => *field,
        DomainError::CheckOutNotAfterCheckIn { .. } => "checkOutDate",
        DomainError::InvalidMultiplier { .. } => "multiplier",
        DomainError::NegativePrice { .. } => "price",
        DomainError::DateParse { .. } | DomainError::DateArithmetic { .. } => "date",
        DomainError::TimeParse { .. } => "time",
        DomainError::InvalidStatus(_) => "status",
    };
    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}
