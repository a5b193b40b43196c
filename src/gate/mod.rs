//! The authentication gate.
//!
//! Wraps protected routes so that every request must carry a bearer token
//! accepted by the remote authentication service before the inner handler
//! runs. The gate resolves every failure into exactly one structured JSON
//! response; nothing propagates to the wrapped handler or the server's
//! generic error path.

pub mod middleware;
pub mod token;
pub mod verifier;

pub use middleware::AuthGate;
pub use token::{extract_token, TokenError};
pub use verifier::{Rejection, RemoteVerifier, StatusBody, Verdict};

/// Application-level status codes shared with the remote authentication
/// service. These values are a stable wire contract and must not change.
pub mod codes {
    /// The token was accepted
    pub const SUCCESS: i32 = 0;

    /// The token is missing, malformed, or was rejected by the verifier
    pub const INVALID_TOKEN: i32 = 301;

    /// The session is stale; only ever emitted by the remote service
    pub const LOGIN_AGAIN_NEEDED: i32 = 302;

    /// The verification call itself failed
    pub const INTERNAL_ERROR: i32 = 500;

    /// The remote service could not reach its user store; pass-through only
    pub const DATABASE_FAILURE: i32 = 501;
}
