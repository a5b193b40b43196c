//! Bearer token extraction from request headers.

use actix_web::http::header::{self, HeaderMap};
use thiserror::Error;

/// Scheme prefix expected on the `Authorization` header value. The keyword
/// is case-sensitive and followed by exactly one space.
const BEARER_PREFIX: &str = "Bearer ";

/// Reasons a bearer token could not be extracted from a request.
///
/// The display texts double as client-facing rejection messages, so they are
/// part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// No `Authorization` header was present
    #[error("no auth method found")]
    MissingAuthHeader,

    /// The header was present but carried no token
    #[error("token not found")]
    EmptyToken,

    /// The header value did not use the `Bearer ` scheme
    #[error("token format error")]
    MalformedScheme,
}

/// Extract the bearer token from a request's header collection.
///
/// On success, returns the substring following the `Bearer ` prefix
/// unmodified; no trimming or decoding is applied.
pub fn extract_token(headers: &HeaderMap) -> Result<&str, TokenError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(TokenError::MissingAuthHeader)?;

    // Header values are not guaranteed to be UTF-8; anything else cannot
    // start with the expected scheme.
    let value = value.to_str().map_err(|_| TokenError::MalformedScheme)?;

    if value.is_empty() {
        return Err(TokenError::EmptyToken);
    }

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(TokenError::MalformedScheme)?;

    if token.is_empty() {
        return Err(TokenError::EmptyToken);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::HeaderValue;

    fn headers_with(value: HeaderValue) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, value);
        headers
    }

    #[test]
    fn missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(extract_token(&headers), Err(TokenError::MissingAuthHeader));
    }

    #[test]
    fn empty_value() {
        let headers = headers_with(HeaderValue::from_static(""));
        assert_eq!(extract_token(&headers), Err(TokenError::EmptyToken));
    }

    #[test]
    fn wrong_scheme() {
        let headers = headers_with(HeaderValue::from_static("Basic xyz"));
        assert_eq!(extract_token(&headers), Err(TokenError::MalformedScheme));
    }

    #[test]
    fn scheme_keyword_is_case_sensitive() {
        let headers = headers_with(HeaderValue::from_static("bearer abc123"));
        assert_eq!(extract_token(&headers), Err(TokenError::MalformedScheme));
    }

    #[test]
    fn bare_keyword_without_space() {
        let headers = headers_with(HeaderValue::from_static("Bearer"));
        assert_eq!(extract_token(&headers), Err(TokenError::MalformedScheme));
    }

    #[test]
    fn empty_token_after_prefix() {
        let headers = headers_with(HeaderValue::from_static("Bearer "));
        assert_eq!(extract_token(&headers), Err(TokenError::EmptyToken));
    }

    #[test]
    fn valid_token() {
        let headers = headers_with(HeaderValue::from_static("Bearer abc123"));
        assert_eq!(extract_token(&headers), Ok("abc123"));
    }

    #[test]
    fn token_is_not_trimmed() {
        let headers = headers_with(HeaderValue::from_static("Bearer  padded "));
        assert_eq!(extract_token(&headers), Ok(" padded "));
    }

    #[test]
    fn non_utf8_value() {
        let headers = headers_with(HeaderValue::from_bytes(b"Bearer \xff\xfe").unwrap());
        assert_eq!(extract_token(&headers), Err(TokenError::MalformedScheme));
    }

    #[test]
    fn error_messages_match_wire_contract() {
        assert_eq!(
            TokenError::MissingAuthHeader.to_string(),
            "no auth method found"
        );
        assert_eq!(TokenError::EmptyToken.to_string(), "token not found");
        assert_eq!(TokenError::MalformedScheme.to_string(), "token format error");
    }
}
