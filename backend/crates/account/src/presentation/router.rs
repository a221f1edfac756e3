//! Account Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AccountAppState};
use crate::presentation::middleware::basic_challenge;

/// Create the Account router with PostgreSQL repository
pub fn account_router(repo: PgUserRepository, config: AccountConfig) -> Router {
    account_router_generic(repo, config)
}

/// Create a generic Account router for any repository implementation
pub fn account_router_generic<R>(repo: R, config: AccountConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AccountAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route(
            "/users/{user_id}",
            get(handlers::get_profile::<R>).patch(handlers::update_profile::<R>),
        )
        .route("/close", post(handlers::close_account::<R>))
        .layer(middleware::map_response_with_state(
            Arc::new(config),
            basic_challenge,
        ))
        .with_state(state)
}
