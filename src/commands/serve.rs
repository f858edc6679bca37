use anyhow::{Context, Result};
use notecraft::{
    api::{AppState, HttpServer},
    config::Config,
    model::create_backend,
    share::InMemoryShareStore,
    transform::TransformService,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::{signal, sync::broadcast};
use tracing::{info, warn};

pub async fn serve(config: Config, listen: Option<String>) -> Result<()> {
    let mut http_config = config.http.clone();
    if let Some(listen) = listen {
        http_config.listen_addr = listen;
    }

    let backend = create_backend(&config.model).context("Failed to create model backend")?;
    let transform = TransformService::new(backend, config.transform.clone());
    let state = AppState::new(transform, Arc::new(InMemoryShareStore::new()));

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let server = HttpServer::new(http_config, state);
    let mut server_task = tokio::spawn(async move { server.run(shutdown_rx).await });

    // Wait for shutdown signal (Ctrl+C or SIGTERM), or for the server to exit on its own
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = wait_for_sigterm() => {
            info!("Received SIGTERM, shutting down");
        }
        result = &mut server_task => {
            return result.context("HTTP server task panicked")?;
        }
    }

    let _ = shutdown_tx.send(());

    let abort = server_task.abort_handle();
    match tokio::time::timeout(Duration::from_secs(5), server_task).await {
        Ok(result) => result.context("HTTP server task panicked")?,
        Err(_) => {
            warn!("HTTP server did not shut down within 5s, aborting");
            abort.abort();
            Ok(())
        }
    }
}

#[cfg(unix)]
async fn wait_for_sigterm() {
    use tokio::signal::unix::{signal, SignalKind};
    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            warn!("Failed to register SIGTERM handler: {}. Falling back to pending future.", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_sigterm() {
    std::future::pending::<()>().await
}
