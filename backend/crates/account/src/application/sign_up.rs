//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{password::Password, user_id::UserId};
use crate::error::{AccountError, AccountResult};

/// Sign up input
///
/// Fields are optional so that a missing key is reported as a
/// validation failure instead of a parse error.
pub struct SignUpInput {
    pub user_id: Option<String>,
    pub password: Option<String>,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub user_id: String,
    pub nickname: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Validate and persist a new account
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// presence, uniqueness, user id rules, password rules.
    pub async fn execute(&self, input: SignUpInput) -> AccountResult<SignUpOutput> {
        let (Some(user_id), Some(password)) = (input.user_id, input.password) else {
            return Err(AccountError::MissingSignUpFields);
        };

        if self.user_repo.exists_by_id(&user_id).await? {
            return Err(AccountError::UserIdTaken);
        }

        let user_id = UserId::new(user_id).map_err(AccountError::InvalidSignUp)?;
        let password = Password::new(password).map_err(AccountError::InvalidSignUp)?;

        let saved = self.user_repo.save(&User::new(user_id, password)).await?;

        tracing::info!(user_id = %saved.user_id, "Account created");

        Ok(SignUpOutput {
            user_id: saved.user_id.into_inner(),
            nickname: saved.nickname.as_str().to_string(),
        })
    }
}
