mod config;
mod routes;
mod seed;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let directory = state::Directory::seeded();
    tracing::info!(activities = directory.activities.len(), "activity directory seeded");
    let state = state::AppState::new(directory);

    if !config.static_dir.is_dir() {
        tracing::warn!(path = %config.static_dir.display(), "static directory missing, front-end will 404");
    }

    let app = routes::app(state, &config.static_dir);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "activities listening");
    axum::serve(listener, app).await.expect("server failed");
}
