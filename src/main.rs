use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;

mod api;
mod cli;
mod docs;
mod env;
mod health;
mod http;
mod logging;
mod meta;
mod root;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = cli::Args::parse();
    logging::init(&args)?;
    env::init();
    tracing::info!(
        title = meta::TITLE,
        description = meta::DESCRIPTION,
        version = meta::VERSION,
        "Starting server."
    );

    let router = http::router::new();
    let listener = TcpListener::bind(args.listen_address).await?;
    tracing::info!("Listening on http://{}", args.listen_address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("Failed to listen for SIGTERM: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::warn!("Received Ctrl+C, shutting down."),
        _ = terminate => tracing::warn!("Received SIGTERM, shutting down."),
    }
}
