//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod close_account;
pub mod config;
pub mod get_profile;
pub mod sign_up;
pub mod update_profile;

// Re-exports
pub use authenticate::AuthenticateUseCase;
pub use close_account::CloseAccountUseCase;
pub use config::AccountConfig;
pub use get_profile::{GetProfileUseCase, ProfileOutput};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use update_profile::{UpdateProfileInput, UpdateProfileOutput, UpdateProfileUseCase};
