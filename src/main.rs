mod model;
mod server;

use crate::server::{
    config::Config, error::AppError, router, startup, state::AppState, util::jwt::JwtKeys,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    startup::bootstrap_tenant(&db, &config).await?;

    let jwt = JwtKeys::new(&config.jwt_secret, config.jwt_expiry_seconds);
    let app = router::router()
        .with_state(AppState::new(db, jwt))
        .layer(session);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
