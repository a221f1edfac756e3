//! PostgreSQL Repository Implementation

use sqlx::PgPool;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    comment::Comment, nickname::Nickname, password::Password, user_id::UserId,
};
use crate::error::AccountResult;

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn exists_by_id(&self, user_id: &str) -> AccountResult<bool> {
        if !storable(user_id) {
            return Ok(false);
        }

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE user_id = $1)",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_by_id(&self, user_id: &str) -> AccountResult<Option<User>> {
        if !storable(user_id) {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                password,
                nickname,
                comment
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_by_user_id_and_password(
        &self,
        user_id: &str,
        password: &str,
    ) -> AccountResult<Option<User>> {
        if !storable(user_id) || !storable(password) {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                password,
                nickname,
                comment
            FROM users
            WHERE user_id = $1 AND password = $2
            "#,
        )
        .bind(user_id)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn save(&self, user: &User) -> AccountResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (
                user_id,
                password,
                nickname,
                comment
            ) VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE SET
                password = EXCLUDED.password,
                nickname = EXCLUDED.nickname,
                comment = EXCLUDED.comment
            RETURNING
                user_id,
                password,
                nickname,
                comment
            "#,
        )
        .bind(user.user_id.as_str())
        .bind(user.password.expose())
        .bind(user.nickname.as_str())
        .bind(user.comment.as_ref().map(Comment::as_str))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_user())
    }

    async fn delete_by_id(&self, user_id: &str) -> AccountResult<()> {
        if !storable(user_id) {
            return Ok(());
        }

        let deleted = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::debug!(user_id = %user_id, rows = deleted, "Deleted user row");

        Ok(())
    }
}

/// PostgreSQL text cannot hold NUL, so such a value matches no row
fn storable(value: &str) -> bool {
    !value.contains('\0')
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: String,
    password: String,
    nickname: String,
    comment: Option<String>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_db(self.user_id),
            password: Password::from_db(self.password),
            nickname: Nickname::from_db(self.nickname),
            comment: self.comment.map(Comment::from_db),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    fn unreachable_repo() -> PgUserRepository {
        // Never connects: every call below returns before touching the pool
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://account@127.0.0.1:1/account")
            .unwrap();
        PgUserRepository::new(pool)
    }

    #[test]
    fn test_storable() {
        assert!(storable("alice1"));
        assert!(storable(""));
        assert!(!storable("abc\0def"));
    }

    #[tokio::test]
    async fn test_nul_lookups_match_nothing() {
        let repo = unreachable_repo();

        assert!(!repo.exists_by_id("abc\0def").await.unwrap());
        assert!(repo.find_by_id("abc\0def").await.unwrap().is_none());
        assert!(
            repo.find_by_user_id_and_password("alice\0x", "password1")
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            repo.find_by_user_id_and_password("alice1", "pass\0word1")
                .await
                .unwrap()
                .is_none()
        );
        repo.delete_by_id("abc\0def").await.unwrap();
    }
}
