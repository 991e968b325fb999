use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::query_athletes,
        features::athletes::handlers::list_athletes_paginated,
        features::athletes::handlers::get_athlete,
        features::athletes::handlers::create_athlete,
        features::athletes::handlers::update_athlete,
    ),
    components(
        schemas(
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::models::Athlete,
        )
    ),
    tags(
        (name = "athletes", description = "Athlete registry endpoints"),
    )
)]
struct ApiDoc;

pub fn app(db: Database) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/athletes", features::athletes::routes::routes())
        .layer(CorsLayer::permissive())
        .with_state(db)
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

    tracing::info!("Starting athlete registry API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let db = if config.seed_demo_data {
        tracing::info!("Seeding demo athletes");
        Database::with_demo_data().context("Failed to seed demo athletes")?
    } else {
        Database::new()
    };

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app(db)).await?;

    Ok(())
}
