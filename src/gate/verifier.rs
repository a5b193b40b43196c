//! Remote token verification client.
//!
//! The gate does not validate tokens itself; it forwards them to an external
//! authentication service and maps the reply onto a local verdict. The call
//! is a single attempt with no retry.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::gate::codes;
use crate::utils::mask_token;

/// Path of the verification endpoint on the authentication service
pub const VERIFY_PATH: &str = "/auth/auth_jwt";

/// Request body sent to the verification endpoint.
///
/// The `id` field is a fixed placeholder: the remote service derives the
/// identity from the token itself.
#[derive(Debug, Serialize)]
struct VerifyRequest<'a> {
    id: u64,
    jwt: &'a str,
    verify: bool,
}

/// Shared `{message, code}` payload.
///
/// Decoded from the verification service's replies and embedded as the
/// `data` member of rejection responses. Absent fields decode to their
/// zero values, matching the service's own encoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBody {
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub code: i32,
}

/// JSON envelope written to clients on every rejection
#[derive(Debug, Serialize, Deserialize)]
pub struct RejectionEnvelope {
    pub data: StatusBody,
}

/// A terminal decision to reject the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// HTTP status line of the rejection response
    pub status: StatusCode,

    /// Application-level status code (see [`codes`])
    pub code: i32,

    /// Human-readable message copied into the response body
    pub message: String,
}

impl Rejection {
    /// Rejection for a request whose credential could not be extracted
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            code: codes::INVALID_TOKEN,
            message: message.into(),
        }
    }

    /// Rejection for a verification call that failed outright
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: codes::INTERNAL_ERROR,
            message: message.into(),
        }
    }

    /// Render the rejection as the structured JSON response written to the
    /// client. This is the only response the gate ever writes.
    pub fn to_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(RejectionEnvelope {
            data: StatusBody {
                message: self.message.clone(),
                code: self.code,
            },
        })
    }
}

/// Outcome of gating one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Forward the request to the wrapped handler
    Allow,

    /// Stop and write the rejection response
    Reject(Rejection),
}

/// Client for the remote verification endpoint.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct RemoteVerifier {
    client: reqwest::Client,
    verify_url: String,
}

impl RemoteVerifier {
    /// Create a verifier for the authentication service at the given base URL
    pub fn new(auth_server_url: impl AsRef<str>) -> Self {
        Self {
            client: reqwest::Client::new(),
            verify_url: format!("{}{}", auth_server_url.as_ref(), VERIFY_PATH),
        }
    }

    /// URL of the verification endpoint
    pub fn verify_url(&self) -> &str {
        &self.verify_url
    }

    /// Ask the remote service whether the token is valid.
    ///
    /// Every failure mode resolves into a [`Verdict`]; this call never
    /// returns an error to the caller.
    pub async fn verify(&self, token: &str) -> Verdict {
        debug!(
            "Verifying token {} against {}",
            mask_token(token),
            self.verify_url
        );

        let body = VerifyRequest {
            id: 0,
            jwt: token,
            verify: true,
        };

        let response = match self.client.post(&self.verify_url).json(&body).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Token verification call failed: {}", e);
                return Verdict::Reject(Rejection::internal(e.to_string()));
            }
        };

        let status = response.status();

        // Body-level transport failures and decode failures arrive through
        // the same error here; its message names the actual cause.
        let reply: StatusBody = match response.json().await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Failed to decode verification response: {}", e);
                return Verdict::Reject(Rejection::internal(e.to_string()));
            }
        };

        if reply.code != codes::SUCCESS {
            info!("Token rejected by verifier: {}", reply.message);
            // The remote service's own HTTP status choice is preserved.
            let status = StatusCode::from_u16(status.as_u16())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return Verdict::Reject(Rejection {
                status,
                code: reply.code,
                message: reply.message,
            });
        }

        Verdict::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header;
    use serde_json::json;

    #[test]
    fn verify_request_wire_shape() {
        let body = VerifyRequest {
            id: 0,
            jwt: "abc123",
            verify: true,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"id": 0, "jwt": "abc123", "verify": true})
        );
    }

    #[test]
    fn status_body_defaults_missing_fields() {
        let reply: StatusBody = serde_json::from_str("{}").unwrap();
        assert_eq!(reply, StatusBody::default());

        let reply: StatusBody = serde_json::from_str(r#"{"code": 301}"#).unwrap();
        assert_eq!(reply.code, 301);
        assert_eq!(reply.message, "");
    }

    #[test]
    fn rejection_envelope_is_nested_under_data() {
        let envelope = RejectionEnvelope {
            data: StatusBody {
                message: "invalid".to_string(),
                code: 301,
            },
        };
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"data": {"message": "invalid", "code": 301}})
        );
    }

    #[test]
    fn verify_url_is_base_plus_path() {
        let verifier = RemoteVerifier::new("http://auth.internal:8090");
        assert_eq!(
            verifier.verify_url(),
            "http://auth.internal:8090/auth/auth_jwt"
        );
    }

    #[actix_web::test]
    async fn rejection_renders_json_response() {
        let rejection = Rejection::unauthorized("no auth method found");
        let response = rejection.to_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );

        let body = actix_web::body::to_bytes(response.into_body())
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["data"]["code"], 301);
        assert_eq!(value["data"]["message"], "no auth method found");
    }

    #[test]
    fn internal_rejection_maps_to_500() {
        let rejection = Rejection::internal("connection refused");
        assert_eq!(rejection.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(rejection.code, codes::INTERNAL_ERROR);
    }
}
