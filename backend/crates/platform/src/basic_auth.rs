//! HTTP Basic Authentication
//!
//! Parses `Authorization: Basic <base64(user_id:password)>` into
//! [`Credentials`]. Every malformed input is reported as a
//! [`BasicAuthError`]; callers decide how to answer it (usually 401).

use axum::http::{HeaderMap, header};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::from_base64;

/// Scheme prefix, matched case-sensitively
pub const BASIC_SCHEME_PREFIX: &str = "Basic ";

/// Decoded Basic credentials
///
/// Both fields are wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    user_id: String,
    password: String,
}

impl Credentials {
    pub fn new(user_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
        }
    }

    #[inline]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[inline]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user_id", &self.user_id)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Reasons a Basic `Authorization` header cannot yield credentials
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BasicAuthError {
    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Authorization header is not visible ASCII")]
    InvalidHeaderValue,

    #[error("Authorization scheme is not Basic")]
    UnsupportedScheme,

    #[error("Credentials are not valid base64")]
    InvalidBase64,

    #[error("Credentials are not valid UTF-8")]
    InvalidUtf8,

    #[error("Credentials must be in the form user_id:password")]
    MissingSeparator,
}

/// Parse a raw `Authorization` header value
///
/// Strips the `"Basic "` prefix, trims surrounding whitespace, decodes
/// base64 to UTF-8 and splits on the first `:`. A password may therefore
/// contain `:` itself.
pub fn parse_basic_authorization(value: &str) -> Result<Credentials, BasicAuthError> {
    let encoded = value
        .strip_prefix(BASIC_SCHEME_PREFIX)
        .ok_or(BasicAuthError::UnsupportedScheme)?;

    let decoded = from_base64(encoded.trim()).map_err(|_| BasicAuthError::InvalidBase64)?;
    let decoded = String::from_utf8(decoded).map_err(|_| BasicAuthError::InvalidUtf8)?;

    let (user_id, password) = decoded
        .split_once(':')
        .ok_or(BasicAuthError::MissingSeparator)?;

    Ok(Credentials::new(user_id, password))
}

/// Extract Basic credentials from request headers
pub fn extract_basic_credentials(headers: &HeaderMap) -> Result<Credentials, BasicAuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BasicAuthError::MissingHeader)?
        .to_str()
        .map_err(|_| BasicAuthError::InvalidHeaderValue)?;

    parse_basic_authorization(value)
}

/// Build a header value for the given credentials
pub fn basic_authorization_value(user_id: &str, password: &str) -> String {
    let raw = format!("{}:{}", user_id, password);
    format!("{}{}", BASIC_SCHEME_PREFIX, crate::crypto::to_base64(raw.as_bytes()))
}
