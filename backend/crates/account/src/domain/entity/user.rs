//! User Entity
//!
//! The stored account: identity, credentials and public profile.

use crate::domain::value_object::{
    comment::Comment, nickname::Nickname, password::Password, user_id::UserId,
};

/// User entity
///
/// `password` is only read by the storage layer and never leaves the
/// service in a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Identity key (immutable)
    pub user_id: UserId,
    /// Credential checked by Basic authentication (immutable)
    pub password: Password,
    /// Display name, defaults to the user id
    pub nickname: Nickname,
    /// Optional profile text
    pub comment: Option<Comment>,
}

impl User {
    /// Create a new user with the default nickname and no comment
    pub fn new(user_id: UserId, password: Password) -> Self {
        let nickname = Nickname::from_user_id(&user_id);

        Self {
            user_id,
            password,
            nickname,
            comment: None,
        }
    }

    /// Whether this user is the owner of the given identifier
    pub fn is(&self, user_id: &str) -> bool {
        self.user_id.as_str() == user_id
    }

    pub fn set_nickname(&mut self, nickname: Nickname) {
        self.nickname = nickname;
    }

    pub fn set_comment(&mut self, comment: Comment) {
        self.comment = Some(comment);
    }
}
