//! Field validation vocabulary shared by all user value objects.
//!
//! Every rule is a full-string match: a single offending character
//! anywhere rejects the whole value.

use std::fmt;

/// User field subject to validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    UserId,
    Password,
    Nickname,
    Comment,
}

impl Field {
    /// Wire name of the field
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::UserId => "user_id",
            Field::Password => "password",
            Field::Nickname => "nickname",
            Field::Comment => "comment",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason a field value was rejected
///
/// The `Display` output is the user-facing cause sent back to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid length for {0}")]
    InvalidLength(Field),

    #[error("invalid character pattern for {0}")]
    InvalidCharacterPattern(Field),
}

/// Length in characters lies within `[min, max]`
#[inline]
pub(crate) fn length_within(input: &str, min: usize, max: usize) -> bool {
    let length = input.chars().count();
    (min..=max).contains(&length)
}

/// Non-empty and every character satisfies `allowed`
#[inline]
pub(crate) fn one_or_more(input: &str, allowed: impl Fn(char) -> bool) -> bool {
    !input.is_empty() && input.chars().all(allowed)
}

/// Not an ASCII control character (`U+0000..=U+001F` or `U+007F`)
///
/// C1 controls such as `U+0085` are accepted.
#[inline]
pub(crate) fn is_printable(c: char) -> bool {
    !c.is_ascii_control()
}
