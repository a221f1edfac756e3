//! Update Profile Use Case
//!
//! Changes the nickname and/or comment of the caller's own account.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{comment::Comment, nickname::Nickname};
use crate::error::{AccountError, AccountResult};

/// Update profile input
///
/// `sets_user_id` / `sets_password` record whether the request body
/// mentioned those keys at all, whatever their value.
#[derive(Debug, Default)]
pub struct UpdateProfileInput {
    pub sets_user_id: bool,
    pub sets_password: bool,
    pub nickname: Option<String>,
    pub comment: Option<String>,
}

/// Fields actually applied by the update
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateProfileOutput {
    pub nickname: Option<String>,
    pub comment: Option<String>,
}

/// Update profile use case
pub struct UpdateProfileUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UpdateProfileUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Resolve the target and check the caller may modify it
    ///
    /// Existence is checked before ownership, so an unknown target is a
    /// 404 even for a caller who could never own it.
    pub async fn authorize(&self, caller: &User, user_id: &str) -> AccountResult<User> {
        let target = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AccountError::UserNotFound)?;

        if !caller.is(user_id) {
            return Err(AccountError::UpdateForbidden);
        }

        Ok(target)
    }

    /// Validate the input against an authorized target and persist it
    ///
    /// Nickname is validated before comment; the first failure aborts
    /// the whole update and nothing is saved.
    pub async fn apply(
        &self,
        mut target: User,
        input: UpdateProfileInput,
    ) -> AccountResult<UpdateProfileOutput> {
        if input.sets_user_id || input.sets_password {
            return Err(AccountError::ImmutableField);
        }
        if input.nickname.is_none() && input.comment.is_none() {
            return Err(AccountError::NothingToUpdate);
        }

        let mut applied = UpdateProfileOutput::default();

        if let Some(nickname) = input.nickname {
            let nickname = Nickname::new(nickname).map_err(AccountError::InvalidUpdate)?;
            applied.nickname = Some(nickname.as_str().to_string());
            target.set_nickname(nickname);
        }
        if let Some(comment) = input.comment {
            let comment = Comment::new(comment).map_err(AccountError::InvalidUpdate)?;
            applied.comment = Some(comment.as_str().to_string());
            target.set_comment(comment);
        }

        let saved = self.user_repo.save(&target).await?;

        tracing::info!(
            user_id = %saved.user_id,
            nickname_changed = applied.nickname.is_some(),
            comment_changed = applied.comment.is_some(),
            "Profile updated"
        );

        Ok(applied)
    }

    pub async fn execute(
        &self,
        caller: &User,
        user_id: &str,
        input: UpdateProfileInput,
    ) -> AccountResult<UpdateProfileOutput> {
        let target = self.authorize(caller, user_id).await?;
        self.apply(target, input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::validation::{Field, ValidationError};
    use crate::domain::value_object::{password::Password, user_id::UserId};
    use crate::infra::memory::InMemoryUserRepository;

    fn user(id: &str) -> User {
        User::new(UserId::new(id).unwrap(), Password::new("password1").unwrap())
    }

    async fn setup() -> (InMemoryUserRepository, UpdateProfileUseCase<InMemoryUserRepository>) {
        let repo = InMemoryUserRepository::new();
        repo.save(&user("alice1")).await.unwrap();
        repo.save(&user("bob123")).await.unwrap();
        let use_case = UpdateProfileUseCase::new(Arc::new(repo.clone()));
        (repo, use_case)
    }

    #[tokio::test]
    async fn test_updates_both_fields() {
        let (repo, use_case) = setup().await;
        let input = UpdateProfileInput {
            nickname: Some("Alice".into()),
            comment: Some("hi".into()),
            ..Default::default()
        };

        let output = use_case.execute(&user("alice1"), "alice1", input).await.unwrap();
        assert_eq!(output.nickname.as_deref(), Some("Alice"));
        assert_eq!(output.comment.as_deref(), Some("hi"));

        let stored = repo.find_by_id("alice1").await.unwrap().unwrap();
        assert_eq!(stored.nickname.as_str(), "Alice");
        assert_eq!(stored.comment.as_ref().map(Comment::as_str), Some("hi"));
    }

    #[tokio::test]
    async fn test_reports_only_applied_fields() {
        let (_, use_case) = setup().await;
        let input = UpdateProfileInput {
            comment: Some("hi".into()),
            ..Default::default()
        };

        let output = use_case.execute(&user("alice1"), "alice1", input).await.unwrap();
        assert_eq!(
            output,
            UpdateProfileOutput {
                nickname: None,
                comment: Some("hi".into()),
            }
        );
    }

    #[tokio::test]
    async fn test_not_found_before_forbidden() {
        let (_, use_case) = setup().await;
        let result = use_case
            .execute(&user("alice1"), "ghost1", UpdateProfileInput::default())
            .await;
        assert!(matches!(result, Err(AccountError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_other_users_profile_forbidden() {
        let (_, use_case) = setup().await;
        let input = UpdateProfileInput {
            nickname: Some("Bobby".into()),
            ..Default::default()
        };
        let result = use_case.execute(&user("alice1"), "bob123", input).await;
        assert!(matches!(result, Err(AccountError::UpdateForbidden)));
    }

    #[tokio::test]
    async fn test_immutable_fields() {
        let (_, use_case) = setup().await;
        for (sets_user_id, sets_password) in [(true, false), (false, true), (true, true)] {
            let input = UpdateProfileInput {
                sets_user_id,
                sets_password,
                nickname: Some("Alice".into()),
                ..Default::default()
            };
            let result = use_case.execute(&user("alice1"), "alice1", input).await;
            assert!(matches!(result, Err(AccountError::ImmutableField)));
        }
    }

    #[tokio::test]
    async fn test_nothing_to_update() {
        let (_, use_case) = setup().await;
        let result = use_case
            .execute(&user("alice1"), "alice1", UpdateProfileInput::default())
            .await;
        assert!(matches!(result, Err(AccountError::NothingToUpdate)));
    }

    #[tokio::test]
    async fn test_nickname_failure_short_circuits() {
        let (repo, use_case) = setup().await;
        let input = UpdateProfileInput {
            nickname: Some("a".repeat(31)),
            comment: Some("bad\ncomment".into()),
            ..Default::default()
        };

        let result = use_case.execute(&user("alice1"), "alice1", input).await;
        assert!(matches!(
            result,
            Err(AccountError::InvalidUpdate(ValidationError::InvalidLength(Field::Nickname)))
        ));

        let stored = repo.find_by_id("alice1").await.unwrap().unwrap();
        assert_eq!(stored.nickname.as_str(), "alice1");
        assert!(stored.comment.is_none());
    }

    #[tokio::test]
    async fn test_comment_failure_discards_valid_nickname() {
        let (repo, use_case) = setup().await;
        let input = UpdateProfileInput {
            nickname: Some("Alice".into()),
            comment: Some("bad\ncomment".into()),
            ..Default::default()
        };

        let result = use_case.execute(&user("alice1"), "alice1", input).await;
        assert!(matches!(
            result,
            Err(AccountError::InvalidUpdate(ValidationError::InvalidCharacterPattern(
                Field::Comment
            )))
        ));

        let stored = repo.find_by_id("alice1").await.unwrap().unwrap();
        assert_eq!(stored.nickname.as_str(), "alice1");
    }
}
