//! Get Profile Use Case
//!
//! Reads the public profile of any user for an authenticated caller.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AccountError, AccountResult};

/// Public profile of a user
#[derive(Debug, PartialEq, Eq)]
pub struct ProfileOutput {
    pub user_id: String,
    pub nickname: String,
    pub comment: Option<String>,
}

impl From<User> for ProfileOutput {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id.into_inner(),
            nickname: user.nickname.as_str().to_string(),
            comment: user.comment.map(|c| c.as_str().to_string()),
        }
    }
}

/// Get profile use case
pub struct GetProfileUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> GetProfileUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Any authenticated caller may read any profile.
    pub async fn execute(&self, caller: &User, user_id: &str) -> AccountResult<ProfileOutput> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AccountError::UserNotFound)?;

        tracing::debug!(caller = %caller.user_id, user_id = %user.user_id, "Profile read");

        Ok(user.into())
    }
}
