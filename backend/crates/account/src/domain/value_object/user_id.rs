//! User ID Value Object
//!
//! The user id is the sole identity key of an account, chosen by the
//! user at signup and immutable afterwards.
//!
//! ## Invariants
//! - Length: 6..=20 characters
//! - ASCII letters and digits only

use std::fmt;

use super::validation::{Field, ValidationError, length_within};

/// Minimum length for user id (in characters)
pub const USER_ID_MIN_LENGTH: usize = 6;

/// Maximum length for user id (in characters)
pub const USER_ID_MAX_LENGTH: usize = 20;

/// Validated user id
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Validate raw input
    ///
    /// Length is checked before the character set.
    pub fn new(input: impl Into<String>) -> Result<Self, ValidationError> {
        let input = input.into();

        if !length_within(&input, USER_ID_MIN_LENGTH, USER_ID_MAX_LENGTH) {
            return Err(ValidationError::InvalidLength(Field::UserId));
        }
        if !input.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidCharacterPattern(Field::UserId));
        }

        Ok(Self(input))
    }

    /// Create from database values (assumes already validated)
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserId").field(&self.0).finish()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
