//! actix-web middleware implementing the authentication gate.
//!
//! [`AuthGate`] wraps a scope or route so that the inner service only runs
//! after the bearer token on the request has been accepted by the remote
//! authentication service. Every rejection path writes exactly one JSON
//! response and never invokes the inner service.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use futures_util::future::LocalBoxFuture;
use tracing::info;

use crate::gate::token::extract_token;
use crate::gate::verifier::{Rejection, RemoteVerifier, Verdict};

/// Middleware factory gating requests on remote token verification.
///
/// ```rust,no_run
/// use actix_web::{web, App, HttpResponse};
/// use auth_gate::AuthGate;
///
/// let app = App::new().service(
///     web::scope("/api")
///         .wrap(AuthGate::new("http://127.0.0.1:8090"))
///         .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct AuthGate {
    verifier: RemoteVerifier,
}

impl AuthGate {
    /// Create a gate backed by the authentication service at the given base URL
    pub fn new(auth_server_url: impl AsRef<str>) -> Self {
        Self {
            verifier: RemoteVerifier::new(auth_server_url),
        }
    }

    /// Create a gate from an existing verifier
    pub fn with_verifier(verifier: RemoteVerifier) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthGateMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service: Rc::new(service),
            verifier: self.verifier.clone(),
        }))
    }
}

/// The wrapping service produced by [`AuthGate`]
pub struct AuthGateMiddleware<S> {
    service: Rc<S>,
    verifier: RemoteVerifier,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = self.verifier.clone();

        Box::pin(async move {
            let verdict = match extract_token(req.headers()) {
                Ok(token) => verifier.verify(token).await,
                Err(e) => {
                    info!("Failed to extract bearer token: {}", e);
                    Verdict::Reject(Rejection::unauthorized(e.to_string()))
                }
            };

            match verdict {
                Verdict::Allow => {
                    // The inner handler owns the response from here on.
                    service.call(req).await.map(|res| res.map_into_left_body())
                }
                Verdict::Reject(rejection) => {
                    let (req, _) = req.into_parts();
                    let response = rejection.to_response().map_into_right_body();
                    Ok(ServiceResponse::new(req, response))
                }
            }
        })
    }
}
