use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};
use wellness_app::{AppState, Config, prompt::run_assistant, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let (assistant_tx, assistant_rx) = mpsc::unbounded_channel();
    tokio::spawn(run_assistant(assistant_rx));

    let app = router(AppState::new(&config, assistant_tx));

    let addr = config.addr();
    info!(
        cycle_length = config.cycle_length,
        meditation_minutes = config.meditation_minutes,
        "listening on http://{addr}"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
