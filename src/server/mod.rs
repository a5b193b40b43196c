//! Standalone gateway server.
//!
//! Hosts an actix-web server with an open health endpoint and a set of
//! sample routes guarded by [`AuthGate`]. Applications embedding the gate
//! as a library wrap their own routes instead.

pub mod handlers;

use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::gate::AuthGate;

/// Standalone gateway server
pub struct GatewayServer {
    config: Config,
}

impl GatewayServer {
    /// Create a new gateway server with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the server configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the server until it is shut down
    pub async fn run(self) -> Result<()> {
        let auth_url = self.config.auth.server_url.clone();
        let bind_addr = format!(
            "{}:{}",
            self.config.http.bind_address, self.config.http.port
        );

        info!("Starting gateway on {}", bind_addr);
        info!("Verifying tokens against {}", auth_url);

        let mut server = HttpServer::new(move || {
            App::new()
                .route("/health", web::get().to(handlers::health))
                .service(
                    web::scope("/api")
                        .wrap(AuthGate::new(&auth_url))
                        .route("/ping", web::get().to(handlers::ping))
                        .route("/echo", web::post().to(handlers::echo)),
                )
        })
        .bind(&bind_addr)?;

        if self.config.server.workers > 0 {
            server = server.workers(self.config.server.workers);
        }

        server.run().await?;

        info!("Gateway stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_config() {
        let mut config = Config::default();
        config.auth.server_url = String::new();
        assert!(GatewayServer::new(config).is_err());
    }

    #[test]
    fn accepts_default_config() {
        let server = GatewayServer::new(Config::default()).unwrap();
        assert_eq!(server.config().http.port, 8080);
    }
}
