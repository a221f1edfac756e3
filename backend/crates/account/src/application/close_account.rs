//! Close Account Use Case
//!
//! Deletes the caller's own account. There is no way to close someone
//! else's account.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AccountResult;

/// Close account use case
pub struct CloseAccountUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> CloseAccountUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, caller: User) -> AccountResult<()> {
        self.user_repo.delete_by_id(caller.user_id.as_str()).await?;

        tracing::info!(user_id = %caller.user_id, "Account closed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{password::Password, user_id::UserId};
    use crate::infra::memory::InMemoryUserRepository;

    #[tokio::test]
    async fn test_deletes_only_caller() {
        let repo = InMemoryUserRepository::new();
        let alice = User::new(
            UserId::new("alice1").unwrap(),
            Password::new("password1").unwrap(),
        );
        let bob = User::new(
            UserId::new("bob123").unwrap(),
            Password::new("password2").unwrap(),
        );
        repo.save(&alice).await.unwrap();
        repo.save(&bob).await.unwrap();

        CloseAccountUseCase::new(Arc::new(repo.clone()))
            .execute(alice.clone())
            .await
            .unwrap();

        assert!(!repo.exists_by_id("alice1").await.unwrap());
        assert!(repo.exists_by_id("bob123").await.unwrap());
    }

    #[tokio::test]
    async fn test_closing_twice_succeeds() {
        let repo = InMemoryUserRepository::new();
        let alice = User::new(
            UserId::new("alice1").unwrap(),
            Password::new("password1").unwrap(),
        );
        repo.save(&alice).await.unwrap();

        let use_case = CloseAccountUseCase::new(Arc::new(repo));
        use_case.execute(alice.clone()).await.unwrap();
        assert!(use_case.execute(alice).await.is_ok());
    }
}
