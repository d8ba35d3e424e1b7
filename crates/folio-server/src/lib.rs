//! HTTP server for Folio site functions.
//!
//! This crate hosts the two request handlers of the portfolio site on axum:
//! - `/api/contact`: validates and acknowledges contact-form submissions
//! - `/api/placeholder/...`: redirects to a stock image or renders a
//!   placeholder SVG sized from the URL
//!
//! Both handlers are stateless. The only shared state is the immutable
//! placeholder configuration.
//!
//! # Quick Start
//!
//! ```ignore
//! use folio_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 8788,
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use folio_config::PlaceholderConfig;

pub use app::create_router;
pub use error::ContactError;
pub use handlers::placeholder::{IMAGE_TABLE, PlaceholderRequest, image_url, render_svg};
pub use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Placeholder image settings.
    pub placeholder: PlaceholderConfig,
    /// Enable verbose output.
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8788,
            placeholder: PlaceholderConfig::default(),
            verbose: false,
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        placeholder: config.placeholder,
        verbose: config.verbose,
    });

    let app = create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from Folio config.
///
/// # Arguments
///
/// * `config` - Folio configuration
/// * `verbose` - Enable verbose output
#[must_use]
pub fn server_config_from_config(config: &folio_config::Config, verbose: bool) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        placeholder: config.placeholder.clone(),
        verbose,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_from_config() {
        let mut config = folio_config::Config::default();
        config.server.host = "0.0.0.0".to_owned();
        config.server.port = 9000;
        config.placeholder.default_width = 640;

        let server_config = server_config_from_config(&config, true);

        assert_eq!(server_config.host, "0.0.0.0");
        assert_eq!(server_config.port, 9000);
        assert_eq!(server_config.placeholder.default_width, 640);
        assert!(server_config.verbose);
    }
}
