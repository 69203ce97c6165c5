mod config;
mod routes;

#[tokio::main]
async fn main() {
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    tracing_subscriber::fmt::init();
    if dotenv_loaded {
        tracing::debug!(".env loaded");
    }

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    if !config.assets_dir.is_dir() {
        tracing::warn!(dir = %config.assets_dir.display(), "assets directory missing; stylesheet and images will 404");
    }

    let app = match routes::app(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router setup failed");
            std::process::exit(1);
        }
    };

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");

    tracing::info!(%addr, "greenfelt listening");
    axum::serve(listener, app).await.expect("server failed");
}
