//! Workspace Gateway HTTP Server
//!
//! Serves the compiled gateway frontend plus a small read-only API over
//! the embedded product catalog.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway_catalog::Catalog;
use gateway_server::build_app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // The catalog is embedded configuration; refuse to serve one that
    // fails its invariants.
    let catalog = Catalog::builtin();
    catalog.validate()?;

    tracing::info!("Serving {} products:", catalog.len());
    for product in catalog.iter() {
        tracing::info!("  • {} [{}]", product.name, product.status.label());
    }

    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());
    let app = build_app(catalog, &static_dir);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 Workspace gateway running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET /health       - Health check");
    tracing::info!("  GET /api/catalog  - Product catalog");
    tracing::info!("  GET /             - Gateway frontend");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
