//! Repository catalog HTTP server
//!
//! Serves the five catalog endpoints over a single in-memory store created
//! at process start.

use clap::Parser;
use std::{net::IpAddr, sync::Arc};
use tracing::info;

use repotrack::{
    AppState, CatalogService, InMemoryRepositoryStore, ServerConfig, create_router,
};

#[derive(Parser, Debug)]
#[command(name = "repotrack-server")]
#[command(about = "In-memory repository catalog server")]
struct Args {
    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Server port
    #[arg(short, long, default_value = "3333")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt().init();

    let config = ServerConfig::new(args.host, args.port);

    let store = Arc::new(InMemoryRepositoryStore::new());
    let catalog = Arc::new(CatalogService::new(store));
    let app = create_router(AppState::new(catalog));

    let addr = config.socket_addr();
    info!("Starting repotrack server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
