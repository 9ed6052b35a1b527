// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reveal-code policy validation.
//!
//! This module enforces the format of the shared reveal code configured at
//! startup.

use thiserror::Error;

/// Reveal-code policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PinPolicyError {
    /// The code has the wrong length.
    #[error("Reveal code must be exactly {expected} digits long")]
    WrongLength { expected: usize },

    /// The code contains non-digit characters.
    #[error("Reveal code must contain digits only")]
    NotNumeric,
}

/// Reveal-code policy configuration.
pub struct PinPolicy {
    /// Required code length.
    pub length: usize,
}

impl Default for PinPolicy {
    fn default() -> Self {
        Self { length: 6 }
    }
}

impl PinPolicy {
    /// Validates a reveal code against the policy.
    ///
    /// # Errors
    ///
    /// Returns a `PinPolicyError` if the code does not meet policy
    /// requirements.
    pub fn validate(&self, pin: &str) -> Result<(), PinPolicyError> {
        if pin.chars().count() != self.length {
            return Err(PinPolicyError::WrongLength {
                expected: self.length,
            });
        }
        if !pin.chars().all(|c| c.is_ascii_digit()) {
            return Err(PinPolicyError::NotNumeric);
        }
        Ok(())
    }
}
