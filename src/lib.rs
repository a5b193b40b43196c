//! # Auth Gate
//!
//! An HTTP authentication gateway middleware for actix-web.
//!
//! The gate sits in front of protected request handlers. For every incoming
//! request it extracts a bearer token from the `Authorization` header, asks a
//! remote authentication service to verify it, and only then lets the wrapped
//! handler run. Rejected requests receive a structured JSON error envelope;
//! accepted requests pass through unmodified.
//!
//! ## Features
//!
//! - **Drop-in middleware**: wrap any actix-web scope or route with [`AuthGate`]
//! - **Remote verification**: tokens are checked against an external
//!   authentication service over HTTP, no local key material required
//! - **Stable wire contract**: application status codes and the rejection
//!   envelope are shared with the verification service
//! - **Production ready**: structured logging, TOML configuration, and a CLI
//!   for running a standalone gateway
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use actix_web::{web, App, HttpResponse, HttpServer};
//! use auth_gate::AuthGate;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     HttpServer::new(|| {
//!         App::new().service(
//!             web::scope("/api")
//!                 .wrap(AuthGate::new("http://127.0.0.1:8090"))
//!                 .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
//!         )
//!     })
//!     .bind(("127.0.0.1", 8080))?
//!     .run()
//!     .await
//! }
//! ```

pub mod config;
pub mod error;
pub mod gate;
pub mod server;
pub mod utils;

// Re-export main types for convenience
pub use config::Config;
pub use error::{GateError, Result};
pub use gate::{codes, extract_token, AuthGate, Rejection, RemoteVerifier, TokenError, Verdict};
pub use server::GatewayServer;

/// Default server information
pub const SERVER_NAME: &str = "auth-gate";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
