//! Account Error Types
//!
//! This module provides account-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::validation::ValidationError;

/// Envelope message for every failed signup
pub const SIGN_UP_FAILED: &str = "Account creation failed";

/// Envelope message for every rejected profile update body
pub const UPDATE_FAILED: &str = "User updation failed";

/// Envelope message for bodies that cannot be parsed at all
pub const INVALID_BODY: &str = "Invalid request body";

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
///
/// The `Display` text of client errors is exactly what the client sees,
/// either as the envelope message or as its cause.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Signup body lacks `user_id` or `password`
    #[error("required user_id and password")]
    MissingSignUpFields,

    /// Signup with an id that is already stored
    #[error("already same user_id is used")]
    UserIdTaken,

    /// Signup field failed validation
    #[error("{0}")]
    InvalidSignUp(ValidationError),

    /// No user matches the supplied Basic credentials
    #[error("Authentication Failed")]
    AuthenticationFailed,

    /// Target user does not exist
    #[error("No User found")]
    UserNotFound,

    /// Authenticated caller is not the target user
    #[error("No Permission for Update")]
    UpdateForbidden,

    /// Update body tries to change `user_id` or `password`
    #[error("not updatable user_id and password")]
    ImmutableField,

    /// Update body has neither `nickname` nor `comment`
    #[error("required nickname or comment")]
    NothingToUpdate,

    /// Update field failed validation
    #[error("{0}")]
    InvalidUpdate(ValidationError),

    /// Body is not a JSON object of the expected shape
    #[error("{0}")]
    MalformedBody(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AccountError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::MissingSignUpFields
            | AccountError::UserIdTaken
            | AccountError::InvalidSignUp(_)
            | AccountError::ImmutableField
            | AccountError::NothingToUpdate
            | AccountError::InvalidUpdate(_)
            | AccountError::MalformedBody(_) => ErrorKind::BadRequest,
            AccountError::AuthenticationFailed => ErrorKind::Unauthorized,
            AccountError::UpdateForbidden => ErrorKind::Forbidden,
            AccountError::UserNotFound => ErrorKind::NotFound,
            AccountError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Validation-style failures become `{message, cause}`; the others
    /// carry their text as the message alone.
    pub fn into_app_error(self) -> AppError {
        let cause = self.to_string();
        match self {
            AccountError::MissingSignUpFields
            | AccountError::UserIdTaken
            | AccountError::InvalidSignUp(_) => {
                AppError::bad_request(SIGN_UP_FAILED).with_cause(cause)
            }
            AccountError::ImmutableField
            | AccountError::NothingToUpdate
            | AccountError::InvalidUpdate(_) => {
                AppError::bad_request(UPDATE_FAILED).with_cause(cause)
            }
            AccountError::MalformedBody(_) => AppError::bad_request(INVALID_BODY).with_cause(cause),
            AccountError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), cause),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::AuthenticationFailed => {
                tracing::warn!("Authentication failed");
            }
            AccountError::UpdateForbidden => {
                tracing::warn!("Profile update on another user's account rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Account request rejected");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::validation::Field;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let test_cases: Vec<(AccountError, StatusCode)> = vec![
            (AccountError::MissingSignUpFields, StatusCode::BAD_REQUEST),
            (AccountError::UserIdTaken, StatusCode::BAD_REQUEST),
            (
                AccountError::InvalidSignUp(ValidationError::InvalidLength(Field::UserId)),
                StatusCode::BAD_REQUEST,
            ),
            (AccountError::AuthenticationFailed, StatusCode::UNAUTHORIZED),
            (AccountError::UserNotFound, StatusCode::NOT_FOUND),
            (AccountError::UpdateForbidden, StatusCode::FORBIDDEN),
            (AccountError::ImmutableField, StatusCode::BAD_REQUEST),
            (AccountError::NothingToUpdate, StatusCode::BAD_REQUEST),
            (
                AccountError::MalformedBody("expected value".into()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.kind().status_code(), expected_status.as_u16());
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_sign_up_envelope() {
        let err = AccountError::InvalidSignUp(ValidationError::InvalidCharacterPattern(
            Field::Password,
        ))
        .into_app_error();
        assert_eq!(err.message(), SIGN_UP_FAILED);
        assert_eq!(err.cause(), Some("invalid character pattern for password"));
    }

    #[test]
    fn test_update_envelope() {
        let err = AccountError::ImmutableField.into_app_error();
        assert_eq!(err.message(), UPDATE_FAILED);
        assert_eq!(err.cause(), Some("not updatable user_id and password"));
    }

    #[test]
    fn test_message_only_envelope() {
        let err = AccountError::AuthenticationFailed.into_app_error();
        assert_eq!(err.message(), "Authentication Failed");
        assert!(err.cause().is_none());

        let err = AccountError::UserNotFound.into_app_error();
        assert_eq!(err.message(), "No User found");

        let err = AccountError::UpdateForbidden.into_app_error();
        assert_eq!(err.message(), "No Permission for Update");
    }
}
