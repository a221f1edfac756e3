//! Account Middleware

use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::Response;
use std::sync::Arc;

use crate::application::config::AccountConfig;

/// Add a Basic `WWW-Authenticate` challenge to every 401 response
pub async fn basic_challenge(
    State(config): State<Arc<AccountConfig>>,
    mut response: Response,
) -> Response {
    if response.status() != StatusCode::UNAUTHORIZED
        || response.headers().contains_key(header::WWW_AUTHENTICATE)
    {
        return response;
    }

    match HeaderValue::from_str(&config.basic_challenge()) {
        Ok(value) => {
            response.headers_mut().insert(header::WWW_AUTHENTICATE, value);
        }
        Err(e) => {
            tracing::error!(error = %e, realm = %config.realm, "Realm is not a valid header value");
        }
    }

    response
}
