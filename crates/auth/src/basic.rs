//! HTTP Basic authentication (`Authorization: Basic <base64(user:pass)>`).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

use crate::Credentials;

/// Username/password pair as supplied by the client.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl core::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BasicAuthError {
    #[error("missing authorization header")]
    Missing,

    #[error("authorization scheme is not basic")]
    UnsupportedScheme,

    #[error("basic credentials are not valid base64/utf-8")]
    InvalidEncoding,

    #[error("basic credentials have no ':' separator")]
    MissingSeparator,

    #[error("invalid username or password")]
    Rejected,
}

impl BasicAuthError {
    /// Undecodable payloads are client errors (400); everything else is a 401.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::InvalidEncoding)
    }
}

/// Parse the raw value of an `Authorization` header.
///
/// The scheme is matched case-insensitively. The password is everything after
/// the first `:` so it may itself contain colons.
pub fn parse_basic(header: &str) -> Result<BasicCredentials, BasicAuthError> {
    let (scheme, payload) = header
        .trim()
        .split_once(' ')
        .ok_or(BasicAuthError::UnsupportedScheme)?;

    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(BasicAuthError::UnsupportedScheme);
    }

    let decoded = STANDARD
        .decode(payload.trim())
        .map_err(|_| BasicAuthError::InvalidEncoding)?;
    let decoded = String::from_utf8(decoded).map_err(|_| BasicAuthError::InvalidEncoding)?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or(BasicAuthError::MissingSeparator)?;

    Ok(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Authenticate an optional `Authorization` header value against `expected`.
///
/// Returns the authenticated username on success.
pub fn authenticate(header: Option<&str>, expected: &Credentials) -> Result<String, BasicAuthError> {
    let header = header.ok_or(BasicAuthError::Missing)?;
    let supplied = parse_basic(header)?;

    if expected.matches(&supplied.username, &supplied.password) {
        Ok(supplied.username)
    } else {
        Err(BasicAuthError::Rejected)
    }
}
