//! Account Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository trait
//! - `application/` - Use cases and application services
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Endpoints
//! - `POST /signup` - create an account (no auth)
//! - `GET /users/{user_id}` - read any profile
//! - `PATCH /users/{user_id}` - change own nickname and/or comment
//! - `POST /close` - delete own account
//!
//! ## Security Model
//! - Every protected request re-authenticates with HTTP Basic credentials
//! - Unknown user and wrong password are indistinguishable (401)
//! - Passwords are stored as given and never leave the service
//!   in a response body or log line

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AccountConfig;
pub use error::{AccountError, AccountResult};
pub use infra::{memory::InMemoryUserRepository, postgres::PgUserRepository};
pub use presentation::router::{account_router, account_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
