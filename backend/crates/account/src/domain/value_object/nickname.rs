//! Nickname Value Object
//!
//! Display name of a user. Defaults to the user id at signup and can be
//! changed afterwards.
//!
//! ## Invariants
//! - Length: at most 30 characters
//! - At least one character, none of them an ASCII control character

use std::fmt;

use super::user_id::UserId;
use super::validation::{Field, ValidationError, is_printable, length_within, one_or_more};

/// Maximum length for nickname (in characters)
pub const NICKNAME_MAX_LENGTH: usize = 30;

/// Validated nickname
#[derive(Clone, PartialEq, Eq)]
pub struct Nickname(String);

impl Nickname {
    /// Validate raw input
    ///
    /// The length bound admits the empty string, but the character rule
    /// requires at least one character, so `""` fails as a pattern error.
    pub fn new(input: impl Into<String>) -> Result<Self, ValidationError> {
        let input = input.into();

        if !length_within(&input, 0, NICKNAME_MAX_LENGTH) {
            return Err(ValidationError::InvalidLength(Field::Nickname));
        }
        if !one_or_more(&input, is_printable) {
            return Err(ValidationError::InvalidCharacterPattern(Field::Nickname));
        }

        Ok(Self(input))
    }

    /// Default nickname for a freshly created account
    pub fn from_user_id(user_id: &UserId) -> Self {
        Self(user_id.as_str().to_string())
    }

    /// Create from database values (assumes already validated)
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Nickname").field(&self.0).finish()
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
