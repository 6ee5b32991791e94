//! Server entry point.

use clap::Parser;

use vetrec_axum::{ServerConfig, start_server};

#[derive(Parser)]
#[command(name = "vetrec-server", about = "Veterinary clinic owner records service")]
struct Args {
    /// Port for the HTTP server
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Path to the SQLite database file
    #[arg(long, default_value = "vetrec.db")]
    db: std::path::PathBuf,

    /// Allowed CORS origin (repeatable); all origins allowed when omitted
    #[arg(long = "allow-origin")]
    allow_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let mut config = ServerConfig::with_defaults().with_db_path(args.db);
    config.port = args.port;
    if !args.allow_origins.is_empty() {
        config = config.with_allowed_origins(args.allow_origins);
    }

    start_server(config).await
}
