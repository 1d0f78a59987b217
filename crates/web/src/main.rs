use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use storage::{MemoryStore, SheetsStore, TabularStore, TrackerService};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod session;

use config::{Config, StoreBackend};

#[derive(OpenApi)]
#[openapi(
    paths(
        features::session::handlers::login,
        features::session::handlers::get_session,
        features::session::handlers::logout,
        features::exercises::handlers::list_exercises,
        features::exercises::handlers::get_exercise,
        features::exercises::handlers::create_exercise,
        features::progress::handlers::list_progress,
        features::progress::handlers::log_progress,
        features::progress::handlers::update_progress,
        features::progress::handlers::most_recent_workout,
    ),
    components(
        schemas(
            features::session::handlers::LoginRequest,
            features::session::handlers::SessionResponse,
            storage::dto::exercise::CreateExerciseRequest,
            storage::dto::exercise::CreateExerciseResult,
            storage::dto::common::ActionResult,
            storage::dto::progress::LogProgressRequest,
            storage::dto::progress::UpdateProgressRequest,
            storage::models::Exercise,
            storage::models::ProgressEntry,
            storage::models::WorkoutSet,
        )
    ),
    tags(
        (name = "session", description = "Cookie session endpoints"),
        (name = "exercises", description = "Per-user exercise endpoints"),
        (name = "progress", description = "Per-user workout progress endpoints"),
    )
)]
struct ApiDoc;

fn build_store(config: &Config) -> Arc<dyn TabularStore> {
    match config.store_backend {
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::Sheets => match config.sheets_base_url.as_deref() {
            Some(base_url) => Arc::new(SheetsStore::with_base_url(
                config.spreadsheet_id.as_str(),
                config.sheets_token.as_str(),
                base_url,
            )),
            None => Arc::new(SheetsStore::new(
                config.spreadsheet_id.as_str(),
                config.sheets_token.as_str(),
            )),
        },
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting GymLog API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let store = build_store(&config);
    tracing::info!(backend = ?config.store_backend, "Tabular store ready");

    let tracker = TrackerService::new(store);

    let app = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .nest("/api/session", features::session::routes::routes())
        .nest(
            "/api/exercises",
            features::exercises::routes::routes()
                .merge(features::progress::routes::exercise_routes()),
        )
        .nest("/api/workouts", features::progress::routes::workout_routes())
        .layer(CorsLayer::very_permissive())
        .with_state(tracker);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
