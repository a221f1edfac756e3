//! Comment Value Object
//!
//! Free-form profile text. Absent until the user sets it.
//!
//! ## Invariants
//! - Length: at most 100 characters
//! - At least one character, none of them an ASCII control character

use std::fmt;

use super::validation::{Field, ValidationError, is_printable, length_within, one_or_more};

/// Maximum length for comment (in characters)
pub const COMMENT_MAX_LENGTH: usize = 100;

/// Validated comment
#[derive(Clone, PartialEq, Eq)]
pub struct Comment(String);

impl Comment {
    pub fn new(input: impl Into<String>) -> Result<Self, ValidationError> {
        let input = input.into();

        if !length_within(&input, 0, COMMENT_MAX_LENGTH) {
            return Err(ValidationError::InvalidLength(Field::Comment));
        }
        if !one_or_more(&input, is_printable) {
            return Err(ValidationError::InvalidCharacterPattern(Field::Comment));
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
}

impl fmt::Debug for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Comment").field(&self.0).finish()
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
