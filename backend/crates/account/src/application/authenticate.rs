//! Authenticate Use Case
//!
//! Resolves Basic credentials to a stored user. Runs on every protected
//! request; nothing is cached between requests.

use std::sync::Arc;

use platform::basic_auth::Credentials;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AccountError, AccountResult};

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Find the user owning these credentials
    ///
    /// Unknown user and wrong password are the same failure.
    pub async fn execute(&self, credentials: &Credentials) -> AccountResult<User> {
        self.user_repo
            .find_by_user_id_and_password(credentials.user_id(), credentials.password())
            .await?
            .ok_or(AccountError::AuthenticationFailed)
    }
}
