//! Password Value Object
//!
//! Passwords are stored and compared as given. They never appear in
//! responses, `Debug` output or logs.
//!
//! ## Invariants
//! - Length: 8..=20 characters
//! - ASCII letters, digits and ASCII punctuation only

use std::fmt;

use super::validation::{Field, ValidationError, length_within, one_or_more};

/// Minimum length for password (in characters)
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum length for password (in characters)
pub const PASSWORD_MAX_LENGTH: usize = 20;

/// Validated password
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(input: impl Into<String>) -> Result<Self, ValidationError> {
        let input = input.into();

        if !length_within(&input, PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH) {
            return Err(ValidationError::InvalidLength(Field::Password));
        }
        if !one_or_more(&input, |c| {
            c.is_ascii_alphanumeric() || c.is_ascii_punctuation()
        }) {
            return Err(ValidationError::InvalidCharacterPattern(Field::Password));
        }

        Ok(Self(input))
    }

    /// Create from database values (assumes already validated)
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    /// Raw value, for the storage layer only
    #[inline]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}
