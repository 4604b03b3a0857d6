//! NDA Review API Server
//!
//! Provides REST endpoints for first-pass NDA triage:
//!
//! - Document upload and review (PDF/DOCX)
//! - Health check
//!
//! Each request is independent: the uploaded bytes are extracted to text,
//! the rule evaluator runs once, and nothing is retained afterwards.

use anyhow::Result;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

mod api;
mod error;

/// Command-line arguments for the review server
#[derive(Parser, Debug)]
#[command(name = "review-api")]
#[command(about = "NDA review service: upload a PDF or DOCX, get clause suggestions")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("review_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::router().layer(TraceLayer::new_for_http()).layer(cors);

    let host: IpAddr = args.host.parse()?;
    let addr = SocketAddr::from((host, args.port));
    info!("Starting NDA review API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
