// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guest-data masking and at-rest obfuscation.
//!
//! None of this is a security control. The at-rest transform is a
//! reversible XOR with a shared key, and the reveal gate is an exact-match
//! numeric code: together they keep guest identities out of casual sight
//! (on screen, in the persisted blob, over someone's shoulder), nothing
//! more. A deployment with a genuine data-protection requirement must
//! replace this module with access-controlled storage and per-user
//! secrets; the key and code are injected here precisely so that swap has
//! a single seam.
//!
//! ## Contract
//!
//! - `open(seal(x)) == x` for every string, empty and multi-byte included.
//! - Masking replaces name, id number, address, and phone; age passes
//!   through untouched.
//! - Reveal state is caller-local: every fresh listing starts obscured.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use room_desk_domain::Person;

#[cfg(test)]
mod tests;

/// Errors that can occur while opening sealed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivacyError {
    /// The sealed value is not valid base64.
    NotBase64(String),
    /// The unsealed bytes are not valid UTF-8.
    NotUtf8(String),
}

impl std::fmt::Display for PrivacyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotBase64(msg) => write!(f, "Sealed value is not valid base64: {msg}"),
            Self::NotUtf8(msg) => write!(f, "Unsealed bytes are not valid UTF-8: {msg}"),
        }
    }
}

impl std::error::Error for PrivacyError {}

/// Replaces a value with `x` filler of at least six characters,
/// preserving longer lengths.
#[must_use]
pub fn mask_full(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    "x".repeat(text.chars().count().max(6))
}

/// Masks the middle of a value, keeping the first and last two
/// characters.
#[must_use]
pub fn mask_partial(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let count: usize = text.chars().count();
    if count <= 4 {
        return String::from("xxxx");
    }
    let start: String = text.chars().take(2).collect();
    let end: String = text.chars().skip(count - 2).collect();
    let middle: String = "x".repeat((count - 4).max(2));
    format!("{start}{middle}{end}")
}

/// Returns a display copy of a person with every identifying field
/// masked. Age is not sensitive and passes through.
#[must_use]
pub fn obscure_person(person: &Person) -> Person {
    Person {
        full_name: mask_full(&person.full_name),
        id_number: mask_full(&person.id_number),
        address: mask_full(&person.address),
        phone: person.phone.as_deref().map(mask_full),
        age: person.age,
    }
}

/// The reversible at-rest transform: byte-wise XOR with a cycling key,
/// then base64.
#[derive(Debug, Clone)]
pub struct AtRestCodec {
    key: Vec<u8>,
}

impl AtRestCodec {
    /// Creates a codec over the given shared key.
    #[must_use]
    pub fn new(key: &str) -> Self {
        Self {
            key: key.as_bytes().to_vec(),
        }
    }

    fn xor(&self, bytes: &[u8]) -> Vec<u8> {
        bytes
            .iter()
            .zip(self.key.iter().cycle())
            .map(|(byte, key_byte)| byte ^ key_byte)
            .collect()
    }

    /// Seals a value for storage. Empty input stays empty.
    #[must_use]
    pub fn seal(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        STANDARD.encode(self.xor(text.as_bytes()))
    }

    /// Opens a sealed value. Empty input stays empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not base64 or does not unseal to
    /// valid UTF-8 (a sign it was sealed with a different key).
    pub fn open(&self, sealed: &str) -> Result<String, PrivacyError> {
        if sealed.is_empty() {
            return Ok(String::new());
        }
        let bytes: Vec<u8> = STANDARD
            .decode(sealed)
            .map_err(|e| PrivacyError::NotBase64(e.to_string()))?;
        String::from_utf8(self.xor(&bytes)).map_err(|e| PrivacyError::NotUtf8(e.to_string()))
    }

    /// Seals every identifying field of a person. Age is stored in the
    /// clear.
    #[must_use]
    pub fn seal_person(&self, person: &Person) -> Person {
        Person {
            full_name: self.seal(&person.full_name),
            id_number: self.seal(&person.id_number),
            address: self.seal(&person.address),
            phone: person.phone.as_deref().map(|phone| self.seal(phone)),
            age: person.age,
        }
    }

    /// Opens every identifying field of a sealed person.
    ///
    /// # Errors
    ///
    /// Returns an error if any field fails to open.
    pub fn open_person(&self, person: &Person) -> Result<Person, PrivacyError> {
        Ok(Person {
            full_name: self.open(&person.full_name)?,
            id_number: self.open(&person.id_number)?,
            address: self.open(&person.address)?,
            phone: match person.phone.as_deref() {
                Some(phone) => Some(self.open(phone)?),
                None => None,
            },
            age: person.age,
        })
    }
}

/// A source of PIN attempts, implemented by the UI layer.
///
/// The prompt blocks only the calling flow; the rest of the application
/// stays responsive while an attempt is being collected.
pub trait UnlockPrompt {
    /// Collects one PIN attempt. `None` means the user cancelled.
    fn read_pin(&mut self) -> impl Future<Output = Option<String>> + Send;
}

/// The shared-code gate in front of the reveal action.
#[derive(Debug, Clone)]
pub struct PinGate {
    pin: String,
}

impl PinGate {
    /// Creates a gate over the given shared code.
    #[must_use]
    pub fn new(pin: &str) -> Self {
        Self {
            pin: pin.to_string(),
        }
    }

    /// Checks one attempt against the shared code.
    #[must_use]
    pub fn verify(&self, input: &str) -> bool {
        input.trim() == self.pin
    }

    /// Prompts until the user enters the correct code or cancels.
    ///
    /// Resolves `true` only on an exact match and `false` on cancel.
    /// Wrong attempts simply re-prompt: no lockout counter, no retry
    /// limit.
    pub async fn request_unlock<P>(&self, prompt: &mut P) -> bool
    where
        P: UnlockPrompt + Send,
    {
        loop {
            match prompt.read_pin().await {
                None => return false,
                Some(attempt) if self.verify(&attempt) => return true,
                Some(_) => {}
            }
        }
    }
}
