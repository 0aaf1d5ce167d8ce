use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::storage::SqliteStore;

pub mod routes;

/// Server state
///
/// One store connection for the whole process, opened at startup and
/// serialized behind an async mutex. SQLite's own locking is the only
/// safety net for racing writes.
pub struct AppState {
    pub store: Mutex<SqliteStore>,
}

pub async fn start_server(port: u16, database_path: PathBuf) -> anyhow::Result<()> {
    let store = SqliteStore::open(&database_path)?;
    let state = Arc::new(AppState {
        store: Mutex::new(store),
    });

    let app = Router::new()
        .route(
            "/products",
            post(routes::create_product).get(routes::list_products),
        )
        .route(
            "/products/{id}",
            get(routes::get_product)
                .put(routes::update_product)
                .delete(routes::delete_product),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {} (database: {:?})", addr, database_path);
    println!("🌍 Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
