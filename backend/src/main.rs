mod db;
mod handlers;
mod models;
mod schema;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use crate::db::DbPool;
use shared::protocol::{
    DASHBOARD_DATA_PATH, DEFAULT_PAGE_SIZE, HEALTH_PATH, MAX_PAGE_SIZE, MENTIONS_PATH,
};
use std::{env, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug, Clone)]
#[command(name = "mentions-backend")]
#[command(about = "Mentions dashboard backend server")]
struct Args {
    /// Path to frontend dist directory to serve
    #[arg(long, default_value = "frontend/dist")]
    frontend_dist: String,

    /// Do not apply pending database migrations on startup
    #[arg(long)]
    skip_migrations: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: DbPool,
    /// Largest `limit` a dashboard query may ask for
    pub max_page_size: i64,
}

/// API routes, without static file serving
fn api_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(handlers::health::health))
        .route(DASHBOARD_DATA_PATH, get(handlers::dashboard::dashboard_data))
        .route(MENTIONS_PATH, post(handlers::mentions::create_mention))
        .with_state(app_state)
}

fn max_page_size_from_env() -> i64 {
    parse_max_page_size(env::var("DASHBOARD_MAX_PAGE_SIZE").ok().as_deref())
}

/// Page size cap from its raw setting. Never below the dashboard's own page
/// size, so a full dashboard page is always possible.
fn parse_max_page_size(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return MAX_PAGE_SIZE;
    };
    match raw.trim().parse::<i64>() {
        Ok(size) if size >= DEFAULT_PAGE_SIZE => size,
        Ok(size) if size > 0 => {
            tracing::warn!(
                "DASHBOARD_MAX_PAGE_SIZE={} is below the dashboard page size, using {}",
                size,
                DEFAULT_PAGE_SIZE
            );
            DEFAULT_PAGE_SIZE
        }
        _ => {
            tracing::warn!(
                "Ignoring invalid DASHBOARD_MAX_PAGE_SIZE={:?}, using {}",
                raw,
                MAX_PAGE_SIZE
            );
            MAX_PAGE_SIZE
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Create database pool
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = db::create_pool(&database_url)?;

    if args.skip_migrations {
        tracing::warn!("Skipping database migrations");
    } else {
        let applied = db::run_migrations(&pool)?;
        for migration in &applied {
            tracing::info!("Applied migration {}", migration);
        }
    }

    let app_state = Arc::new(AppState {
        db_pool: pool,
        max_page_size: max_page_size_from_env(),
    });

    // Setup CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = api_router(app_state);

    // Serve frontend static files if path exists
    if std::path::Path::new(&args.frontend_dist).exists() {
        tracing::info!("Serving frontend from: {}", args.frontend_dist);
        app = app.fallback_service(ServeDir::new(&args.frontend_dist));
    } else {
        tracing::warn!("Frontend dist not found at: {}", args.frontend_dist);
    }

    let app = app.layer(cors).layer(TraceLayer::new_for_http());

    // Run the server
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use diesel::r2d2::ConnectionManager;
    use tower::ServiceExt;

    /// A pool that never connects; enough for routes rejected before any query
    fn state() -> Arc<AppState> {
        let manager = ConnectionManager::new("postgres://localhost:1/unreachable");
        let pool = diesel::r2d2::Pool::builder()
            .min_idle(Some(0))
            .build_unchecked(manager);
        Arc::new(AppState {
            db_pool: pool,
            max_page_size: MAX_PAGE_SIZE,
        })
    }

    #[test]
    fn test_max_page_size_setting() {
        assert_eq!(parse_max_page_size(None), MAX_PAGE_SIZE);
        assert_eq!(parse_max_page_size(Some("500")), 500);
        assert_eq!(parse_max_page_size(Some(" 250 ")), 250);
        assert_eq!(parse_max_page_size(Some("abc")), MAX_PAGE_SIZE);
        assert_eq!(parse_max_page_size(Some("0")), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_max_page_size_not_below_dashboard_page() {
        assert_eq!(parse_max_page_size(Some("20")), DEFAULT_PAGE_SIZE);
        assert_eq!(parse_max_page_size(Some("100")), DEFAULT_PAGE_SIZE);
    }

    #[tokio::test]
    async fn test_health() {
        let response = api_router(state())
            .oneshot(Request::get(HEALTH_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let health: shared::HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "ok");
    }

    #[tokio::test]
    async fn test_malformed_date_is_bad_request() {
        let uri = format!(
            "{}?platform=&start_date=last-week&end_date=&source_id=&limit=100&offset=0",
            DASHBOARD_DATA_PATH
        );
        let response = api_router(state())
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_negative_offset_is_bad_request() {
        let uri = format!("{}?limit=100&offset=-100", DASHBOARD_DATA_PATH);
        let response = api_router(state())
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_ingest_without_platform_is_bad_request() {
        let body = r#"{"platform": "", "mention_datetime": "2024-01-05T10:00:00Z"}"#;
        let response = api_router(state())
            .oneshot(
                Request::post(MENTIONS_PATH)
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
