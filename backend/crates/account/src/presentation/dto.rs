//! API DTOs (Data Transfer Objects)
//!
//! Response DTOs have no password field, so a password can never be
//! serialized into a response body.

use serde::{Deserialize, Deserializer, Serialize};

use crate::application::{ProfileOutput, SignUpOutput, UpdateProfileOutput};

pub const SIGN_UP_SUCCEEDED: &str = "Account successfully created";
pub const PROFILE_FOUND: &str = "User details by user_id";
pub const UPDATE_SUCCEEDED: &str = "User successfully updated";
pub const CLOSE_SUCCEEDED: &str = "Account and user successfully removed";

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
///
/// Both fields are optional at this level so that a missing key is
/// reported as a validation cause rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignUpRequest {
    pub user_id: Option<String>,
    pub password: Option<String>,
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
pub struct SignUpResponse {
    pub message: &'static str,
    pub user: SignedUpUser,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignedUpUser {
    pub user_id: String,
    pub nickname: String,
}

impl From<SignUpOutput> for SignUpResponse {
    fn from(output: SignUpOutput) -> Self {
        Self {
            message: SIGN_UP_SUCCEEDED,
            user: SignedUpUser {
                user_id: output.user_id,
                nickname: output.nickname,
            },
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Profile response
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub message: &'static str,
    pub user: ProfileBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileBody {
    pub user_id: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl From<ProfileOutput> for ProfileResponse {
    fn from(output: ProfileOutput) -> Self {
        Self {
            message: PROFILE_FOUND,
            user: ProfileBody {
                user_id: output.user_id,
                nickname: output.nickname,
                comment: output.comment,
            },
        }
    }
}

// ============================================================================
// Update Profile
// ============================================================================

/// Update profile request
///
/// `user_id` and `password` only record whether the key was sent; any
/// value, `null` included, counts as present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default, deserialize_with = "key_present")]
    pub user_id: bool,
    #[serde(default, deserialize_with = "key_present")]
    pub password: bool,
    pub nickname: Option<String>,
    pub comment: Option<String>,
}

fn key_present<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    serde::de::IgnoredAny::deserialize(deserializer)?;
    Ok(true)
}

/// Update profile response
#[derive(Debug, Clone, Serialize)]
pub struct UpdateProfileResponse {
    pub message: &'static str,
    pub user: UpdatedFields,
}

/// Only the fields the update applied
#[derive(Debug, Clone, Serialize)]
pub struct UpdatedFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl From<UpdateProfileOutput> for UpdateProfileResponse {
    fn from(output: UpdateProfileOutput) -> Self {
        Self {
            message: UPDATE_SUCCEEDED,
            user: UpdatedFields {
                nickname: output.nickname,
                comment: output.comment,
            },
        }
    }
}

// ============================================================================
// Close Account
// ============================================================================

/// Close account response
#[derive(Debug, Clone, Serialize)]
pub struct CloseAccountResponse {
    pub message: &'static str,
}

impl Default for CloseAccountResponse {
    fn default() -> Self {
        Self {
            message: CLOSE_SUCCEEDED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_request_detects_immutable_keys() {
        let req: UpdateProfileRequest =
            serde_json::from_value(json!({ "user_id": null, "password": 12 })).unwrap();
        assert!(req.user_id);
        assert!(req.password);
        assert!(req.nickname.is_none());

        let req: UpdateProfileRequest =
            serde_json::from_value(json!({ "nickname": "Alice" })).unwrap();
        assert!(!req.user_id);
        assert!(!req.password);
        assert_eq!(req.nickname.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_update_request_null_field_is_absent() {
        let req: UpdateProfileRequest =
            serde_json::from_value(json!({ "nickname": null, "comment": "hi" })).unwrap();
        assert!(req.nickname.is_none());
        assert_eq!(req.comment.as_deref(), Some("hi"));
    }

    #[test]
    fn test_update_request_rejects_non_string_nickname() {
        let result = serde_json::from_value::<UpdateProfileRequest>(json!({ "nickname": 1 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_sign_up_request_ignores_unknown_keys() {
        let req: SignUpRequest = serde_json::from_value(
            json!({ "user_id": "alice1", "password": "password1", "nickname": "x" }),
        )
        .unwrap();
        assert_eq!(req.user_id.as_deref(), Some("alice1"));
    }

    #[test]
    fn test_profile_response_omits_missing_comment() {
        let response = ProfileResponse::from(ProfileOutput {
            user_id: "alice1".into(),
            nickname: "alice1".into(),
            comment: None,
        });
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(
            value,
            json!({
                "message": "User details by user_id",
                "user": { "user_id": "alice1", "nickname": "alice1" }
            })
        );
    }

    #[test]
    fn test_update_response_lists_applied_fields_only() {
        let response = UpdateProfileResponse::from(UpdateProfileOutput {
            nickname: None,
            comment: Some("hi".into()),
        });
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(
            value,
            json!({ "message": "User successfully updated", "user": { "comment": "hi" } })
        );
    }
}
