//! Server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated
//! here.

use std::path::PathBuf;

use anyhow::Result;

use vetrec_core::OwnerService;
use vetrec_db::setup_database;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the web adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the SQLite database file.
    pub db_path: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default values.
    pub fn with_defaults() -> Self {
        Self {
            port: 8080,
            db_path: PathBuf::from("vetrec.db"),
            cors: CorsConfig::default(),
        }
    }

    /// Set the database path.
    #[must_use]
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the web adapter.
///
/// Holds all initialized services for the server. Handlers reach it
/// through `AppState`.
pub struct AppContext {
    /// Owner service over the persistence port.
    pub owners: OwnerService,
}

/// Bootstrap the application context.
///
/// Wires the database pool into the repository and the repository into
/// the service. Nothing outside this function touches the pool.
pub async fn bootstrap(config: &ServerConfig) -> Result<AppContext> {
    tracing::info!(
        target: "vetrec.paths",
        database_path = %config.db_path.display(),
        "bootstrap resolved paths"
    );

    let pool = setup_database(&config.db_path).await?;
    let owners = OwnerService::new(vetrec_db::owner_repository(pool));

    Ok(AppContext { owners })
}

/// Bootstrap and run the HTTP server until shutdown.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("vetrec server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
