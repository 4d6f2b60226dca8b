//! HTTP server initialization and runtime setup.
//!
//! Handles cache setup, DNS resolver construction, listener binding and the
//! Axum server lifecycle for both listeners.

use crate::application::services::Resolver;
use crate::config::Config;
use crate::domain::entities::RedirectRecord;
use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache};
use crate::infrastructure::dns::HickoryTxtSource;
use crate::routes::{app_router, ask_router};
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory cache with background sweeper (or NullCache when disabled)
/// - DNS resolver from the system configuration
/// - Redirect listener, plus the ask listener when configured
///
/// On Ctrl-C (or SIGTERM on Unix) both listeners stop accepting, in-flight
/// requests finish, then the cache sweeper is stopped.
///
/// # Errors
///
/// Returns an error if:
/// - The DNS resolver cannot be created
/// - A listener fails to bind
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let memory_cache = config.cache_enabled.then(|| {
        Arc::new(MemoryCache::<RedirectRecord>::with_sweeper(
            config.cache_ttl(),
            config.cache_cleanup_interval(),
        ))
    });

    let cache: Arc<dyn CacheService<RedirectRecord>> = match &memory_cache {
        Some(memory) => {
            tracing::info!("Cache enabled (memory)");
            memory.clone()
        }
        None => {
            tracing::info!("Cache disabled (NullCache)");
            Arc::new(NullCache::new())
        }
    };

    let txt_source =
        HickoryTxtSource::from_system_conf().context("Failed to initialise DNS resolver")?;

    let resolver = Resolver::new(config.resolver_config(), cache, Arc::new(txt_source));
    let state = AppState::new(Arc::new(resolver));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received");
        let _ = shutdown_tx.send(true);
    });

    let redirect_server = serve(
        "redirect",
        &config.listen_addr,
        app_router(state.clone()),
        shutdown_rx.clone(),
    );

    match &config.ask_listen_addr {
        Some(ask_addr) => {
            let ask_server = serve("ask", ask_addr, ask_router(state), shutdown_rx);
            tokio::try_join!(redirect_server, ask_server)?;
        }
        None => redirect_server.await?,
    }

    if let Some(memory) = memory_cache {
        memory.shutdown().await;
        tracing::info!("Cache sweeper stopped");
    }

    tracing::info!("Server stopped");
    Ok(())
}

async fn serve(
    name: &'static str,
    addr: &str,
    router: Router,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {name} listener on {addr}"))?;
    tracing::info!("{} listener on http://{}", name, listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            let _ = shutdown.wait_for(|stop| *stop).await;
        })
        .await
        .with_context(|| format!("{name} listener failed"))?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
