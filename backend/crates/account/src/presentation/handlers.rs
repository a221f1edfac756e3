//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use std::sync::Arc;

use platform::basic_auth::extract_basic_credentials;

use crate::application::{
    AuthenticateUseCase, CloseAccountUseCase, GetProfileUseCase, SignUpInput, SignUpUseCase,
    UpdateProfileInput, UpdateProfileUseCase,
};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AccountError, AccountResult};
use crate::presentation::dto::{
    CloseAccountResponse, ProfileResponse, SignUpRequest, SignUpResponse, UpdateProfileRequest,
    UpdateProfileResponse,
};

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup
pub async fn sign_up<R>(
    State(state): State<AccountAppState<R>>,
    body: Result<Json<SignUpRequest>, JsonRejection>,
) -> AccountResult<Json<SignUpResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body.map_err(malformed_body)?;

    let use_case = SignUpUseCase::new(state.repo.clone());

    let input = SignUpInput {
        user_id: req.user_id,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(output.into()))
}

// ============================================================================
// Get Profile
// ============================================================================

/// GET /users/{user_id}
pub async fn get_profile<R>(
    State(state): State<AccountAppState<R>>,
    path: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
) -> AccountResult<Json<ProfileResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let caller = authenticate(&state, &headers).await?;
    let Path(user_id) = path.map_err(unknown_target)?;

    let use_case = GetProfileUseCase::new(state.repo.clone());
    let output = use_case.execute(&caller, &user_id).await?;

    Ok(Json(output.into()))
}

// ============================================================================
// Update Profile
// ============================================================================

/// PATCH /users/{user_id}
///
/// The body is only looked at once the caller is known to own the
/// target, so a malformed body never hides a 401, 404 or 403.
pub async fn update_profile<R>(
    State(state): State<AccountAppState<R>>,
    path: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
    body: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> AccountResult<Json<UpdateProfileResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let caller = authenticate(&state, &headers).await?;
    let Path(user_id) = path.map_err(unknown_target)?;

    let use_case = UpdateProfileUseCase::new(state.repo.clone());
    let target = use_case.authorize(&caller, &user_id).await?;

    let Json(req) = body.map_err(malformed_body)?;

    let input = UpdateProfileInput {
        sets_user_id: req.user_id,
        sets_password: req.password,
        nickname: req.nickname,
        comment: req.comment,
    };

    let output = use_case.apply(target, input).await?;

    Ok(Json(output.into()))
}

// ============================================================================
// Close Account
// ============================================================================

/// POST /close
pub async fn close_account<R>(
    State(state): State<AccountAppState<R>>,
    headers: HeaderMap,
) -> AccountResult<Json<CloseAccountResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let caller = authenticate(&state, &headers).await?;

    let use_case = CloseAccountUseCase::new(state.repo.clone());
    use_case.execute(caller).await?;

    Ok(Json(CloseAccountResponse::default()))
}

// ============================================================================
// Helpers
// ============================================================================

/// Resolve the caller from the `Authorization` header
///
/// Header problems and credential mismatches end in the same 401.
async fn authenticate<R>(state: &AccountAppState<R>, headers: &HeaderMap) -> AccountResult<User>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let credentials = extract_basic_credentials(headers).map_err(|e| {
        tracing::debug!(reason = %e, "Unusable Authorization header");
        AccountError::AuthenticationFailed
    })?;

    let use_case = AuthenticateUseCase::new(state.repo.clone());
    use_case.execute(&credentials).await
}

/// A path segment that is not a valid id can name no stored user
fn unknown_target(rejection: PathRejection) -> AccountError {
    tracing::debug!(reason = %rejection.body_text(), "Unusable user_id path segment");
    AccountError::UserNotFound
}

fn malformed_body(rejection: JsonRejection) -> AccountError {
    AccountError::MalformedBody(rejection.body_text())
}
