//! Library API Server
//!
//! A small catalog service for books: create, read, update, delete and
//! paginated search, backed by PostgreSQL.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::PostgresBookRepository;
use app::BookService;
use config::Config;
use domain::ports::BookRepository;

/// Application state shared across all handlers
///
/// Generic over the book repository so tests can serve the router from an
/// in-memory store.
pub struct AppState<BR: BookRepository> {
    pub book_service: Arc<BookService<BR>>,
    pub config: Config,
}

impl<BR: BookRepository> Clone for AppState<BR> {
    fn clone(&self) -> Self {
        Self {
            book_service: self.book_service.clone(),
            config: self.config.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router for the given state
pub fn build_router<BR: BookRepository + 'static>(state: AppState<BR>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Book catalog
        .route(
            "/api/books",
            post(handlers::create_book::<BR>).get(handlers::find_books::<BR>),
        )
        .route(
            "/api/books/:id",
            get(handlers::get_book::<BR>)
                .put(handlers::update_book::<BR>)
                .delete(handlers::delete_book::<BR>),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,library_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Library API...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let book_repo = Arc::new(PostgresBookRepository::new(db));
    if config.auto_create_schema {
        book_repo
            .ensure_schema()
            .await
            .context("Failed to create books table")?;
        tracing::info!("Books schema ready");
    }

    // Create application services
    let book_service = Arc::new(BookService::new(book_repo));

    let state = AppState {
        book_service,
        config: config.clone(),
    };

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
