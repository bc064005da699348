//! # campusctl: Campus Control Layer
//!
//! `campusctl` is a small student-management web API. It records departments,
//! course offerings ("formations"), students, and the enrollment links
//! between them, plus a side list of recommended books populated by scraping
//! a public catalogue and optionally summarized through an external
//! text-generation service.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for
//! the HTTP layer and uses SQLite (via SQLx) for persistence.
//!
//! ### Request Flow
//!
//! An HTTP request is routed to a handler in [`api::handlers`], which
//! acquires one pooled database connection, performs its reads/writes through
//! the repositories in [`db::handlers`], and returns a serialized DTO from
//! [`api::models`]. The connection is released when the handler returns,
//! success or failure. The scraper and summarizer endpoints additionally
//! perform outbound HTTP calls (see [`catalogue`]) before touching the
//! database; no timeouts are configured on those calls, so a hanging remote
//! stalls the request that triggered it.
//!
//! ### Core Components
//!
//! The **API layer** ([`api`]) exposes CRUD-style routes for the academic
//! entities, a password-check `POST /login` (no session or token is issued),
//! and the book pipeline (`POST /scrape-books`, `GET /recommendations`,
//! `GET /books/summary`).
//!
//! The **database layer** ([`db`]) uses the repository pattern: one
//! repository per table, wrapping a `&mut SqliteConnection`, with driver
//! errors categorized in [`db::errors`]. Migrations run at startup via
//! [`migrator`].
//!
//! The **catalogue pipeline** ([`catalogue`]) walks the paginated listing
//! with `scraper` CSS selectors, buffers all records in memory and persists
//! them in one bulk insert; the summarizer fetches one book page, extracts
//! title/description and forwards them to an OpenAI-compatible
//! chat-completions endpoint.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use campusctl::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = campusctl::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     campusctl::telemetry::init_telemetry()?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.

pub mod api;
pub mod auth;
pub mod catalogue;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod telemetry;
pub mod types;

#[cfg(test)]
mod test_utils;

use crate::openapi::ApiDoc;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use bon::Builder;
pub use config::Config;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, info, instrument, Level};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

/// Application state shared across all request handlers.
///
/// - `db`: SQLite connection pool
/// - `config`: configuration loaded from file/environment
/// - `http`: shared outbound HTTP client for the catalogue and summarizer
#[derive(Clone, Builder)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Config,
    pub http: reqwest::Client,
}

/// Get the campusctl database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Open the connection pool and bring the schema up to date.
async fn setup_database(config: &Config) -> anyhow::Result<SqlitePool> {
    // Foreign keys are enforced: an insert referencing a missing row fails
    // with a constraint violation, which the error layer maps to 400.
    let options = SqliteConnectOptions::from_str(&config.database_url)?.foreign_keys(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    migrator().run(&pool).await?;

    Ok(pool)
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let mut origins = Vec::new();
    for origin in &config.cors.allowed_origins {
        // Url renders with a trailing slash; the Origin header carries none
        origins.push(origin.as_str().trim_end_matches('/').parse::<HeaderValue>()?);
    }

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

/// Build the main application router with all endpoints and middleware.
///
/// This constructs the complete Axum router with:
/// - The academic entity routes and the login check
/// - The book pipeline routes
/// - Interactive API docs at `/docs`
/// - CORS configuration and tracing middleware
#[instrument(skip_all)]
pub fn build_router(state: &AppState) -> anyhow::Result<Router> {
    let api_routes = Router::new()
        .route("/departements", get(api::handlers::departements::list_departements))
        .route("/departements", post(api::handlers::departements::create_departement))
        .route("/formations", get(api::handlers::formations::list_formations))
        .route("/formations", post(api::handlers::formations::create_formation))
        .route("/students", get(api::handlers::students::list_students))
        .route("/students", post(api::handlers::students::create_student))
        .route("/students/{id}", get(api::handlers::students::get_student))
        .route(
            "/students/{id}/formations",
            get(api::handlers::students::list_student_formations),
        )
        .route("/login", post(api::handlers::auth::login))
        .route("/inscriptions", post(api::handlers::inscriptions::enroll))
        .route("/scrape-books", post(api::handlers::books::scrape_books))
        .route("/recommendations", get(api::handlers::books::get_recommendations))
        .route("/books/summary", get(api::handlers::books::get_book_summary))
        .with_state(state.clone());

    let router = Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .merge(api_routes)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    // Create CORS layer from config
    let cors_layer = create_cors_layer(&state.config)?;

    let router = router.layer(cors_layer).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    Ok(router)
}

/// Main application struct that owns all resources and lifecycle.
///
/// # Lifecycle
///
/// 1. **Create**: [`Application::new`] opens the pool, runs migrations and
///    builds the router
/// 2. **Serve**: [`Application::serve`] binds the TCP port and handles
///    requests until the shutdown future resolves
pub struct Application {
    router: Router,
    config: Config,
    pool: SqlitePool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting campus control layer with configuration: {:#?}", config);

        let pool = setup_database(&config).await?;

        // Shared outbound client for the catalogue and the summarizer. No
        // timeout is configured; a hanging remote stalls the calling request.
        let http = reqwest::Client::builder().user_agent("Mozilla/5.0").build()?;

        let state = AppState::builder()
            .db(pool.clone())
            .config(config.clone())
            .http(http)
            .build();

        let router = build_router(&state)?;

        Ok(Self { router, config, pool })
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "Campus control layer listening on http://{}, docs at http://localhost:{}/docs",
            bind_addr, self.config.port
        );

        // Run the server with graceful shutdown
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        // Close database connections
        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::test_utils::create_test_app;
    use sqlx::SqlitePool;

    #[sqlx::test]
    #[test_log::test]
    async fn test_healthz_endpoint(pool: SqlitePool) {
        let app = create_test_app(pool).await;

        let response = app.get("/healthz").await;
        response.assert_status_ok();
        response.assert_text("OK");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_openapi_document_is_served(pool: SqlitePool) {
        let app = create_test_app(pool).await;

        let response = app.get("/docs").await;
        response.assert_status_ok();
    }
}
