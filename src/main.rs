use clap::Parser;
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;
use tokio::net::TcpListener;
use tracing::{info, warn, Level};

use customer_server::config::AppConfig;
use customer_server::startup::{build_router, setup_backend, AppState};

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(name = "customer-server")]
#[command(about = "Customer record CRUD service")]
struct Args {
    /// Configuration file path (default: config.yaml)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Port to listen on (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides config file)
    #[arg(long)]
    host: Option<String>,
}

fn load_config(args: &Args) -> Result<(AppConfig, bool), Box<dyn std::error::Error>> {
    if args.config == DEFAULT_CONFIG_PATH && !Path::new(DEFAULT_CONFIG_PATH).exists() {
        return Ok((AppConfig::default_config(), true));
    }

    let config = AppConfig::load_from_file(&args.config)
        .map_err(|e| format!("Failed to load configuration: {}", e))?;
    Ok((config, false))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let (mut app_config, using_defaults) = load_config(&args)?;

    let level = Level::from_str(&app_config.logging.level).unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    if using_defaults {
        warn!("No {} found, using in-memory SQLite defaults", DEFAULT_CONFIG_PATH);
    } else {
        info!("Configuration loaded from {}", args.config);
    }

    // Override with command line arguments if provided
    if let Some(port) = args.port {
        app_config.server.port = port;
    }
    if let Some(host) = args.host {
        app_config.server.host = host;
    }

    let backend = setup_backend(&app_config).await?;

    let host: std::net::IpAddr = app_config.server.host.parse().unwrap_or_else(|_| {
        warn!(
            "Invalid host address: {}, using 127.0.0.1",
            app_config.server.host
        );
        [127, 0, 0, 1].into()
    });
    let addr = SocketAddr::from((host, app_config.server.port));

    let app = build_router(AppState::new(backend, app_config));

    info!("Customer server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
