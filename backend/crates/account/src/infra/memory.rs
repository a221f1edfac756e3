//! In-Memory Repository Implementation
//!
//! Process-local store used by tests and by the `memory` storage
//! backend. Contents are lost on restart.

use std::collections::HashMap;
use std::sync::Arc;

use platform::crypto::constant_time_eq;
use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AccountResult;

/// In-memory user repository
///
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn exists_by_id(&self, user_id: &str) -> AccountResult<bool> {
        Ok(self.users.read().await.contains_key(user_id))
    }

    async fn find_by_id(&self, user_id: &str) -> AccountResult<Option<User>> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn find_by_user_id_and_password(
        &self,
        user_id: &str,
        password: &str,
    ) -> AccountResult<Option<User>> {
        let users = self.users.read().await;
        let user = users
            .get(user_id)
            .filter(|u| constant_time_eq(u.password.expose().as_bytes(), password.as_bytes()))
            .cloned();
        Ok(user)
    }

    async fn save(&self, user: &User) -> AccountResult<User> {
        self.users
            .write()
            .await
            .insert(user.user_id.as_str().to_string(), user.clone());
        Ok(user.clone())
    }

    async fn delete_by_id(&self, user_id: &str) -> AccountResult<()> {
        self.users.write().await.remove(user_id);
        Ok(())
    }
}
