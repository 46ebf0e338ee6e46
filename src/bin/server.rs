//! Trivia server: reads settings from the environment, prepares the schema, serves the API.

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use trivia_api::{app, ensure_schema, seed_categories, AppState, PgStore, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trivia_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;

    ensure_schema(&pool).await?;
    if settings.seed_categories {
        seed_categories(&pool).await?;
    }

    let state = AppState::new(PgStore::new(pool));
    let router = app(state, settings.body_limit);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
