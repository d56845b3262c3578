mod model;
mod server;

use tower_http::cors::CorsLayer;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    if let Err(err) = run().await {
        tracing::error!("Server failed: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    tracing::info!("Connected to database with URI: {}", config.database_url);

    let addr = format!("0.0.0.0:{}", config.port);
    let app = router::router()
        .with_state(AppState::new(
            db,
            config.jwt_secret.clone(),
            config.app_url.clone(),
        ))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Car rental backend listening on {}", addr);
    tracing::info!("API root: {}/api/v1", config.app_url);

    axum::serve(listener, app).await?;

    Ok(())
}
