//! Repository Traits
//!
//! Interface for account persistence. Implementations are in the
//! infrastructure layer.
//!
//! Lookups take the raw identifier as received from the client; an
//! identifier that could never have been stored simply finds nothing.

use crate::domain::entity::user::User;
use crate::error::AccountResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Check if a user with this id exists
    async fn exists_by_id(&self, user_id: &str) -> AccountResult<bool>;

    /// Find user by id
    async fn find_by_id(&self, user_id: &str) -> AccountResult<Option<User>>;

    /// Find the user matching both id and password
    async fn find_by_user_id_and_password(
        &self,
        user_id: &str,
        password: &str,
    ) -> AccountResult<Option<User>>;

    /// Insert or replace a user, returning the stored state
    async fn save(&self, user: &User) -> AccountResult<User>;

    /// Delete a user by id (no-op when absent)
    async fn delete_by_id(&self, user_id: &str) -> AccountResult<()>;
}
