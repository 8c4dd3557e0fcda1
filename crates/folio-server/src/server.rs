//! Wiring configuration into running services

use crate::config::{EmailBackend, EmailConfig, SiteConfig, StoreBackend, StoreConfig};
use crate::error::{ConfigError, ServerError};
use crate::routes::{routes, AppState};
use folio_content::{
    CachedStore, DocumentStore, FileStore, FirestoreStore, MemoryStore, StoreContentSource,
};
use folio_page::{EmailJsDelivery, LogOnlyDelivery, PageComposer};
use folio_sections::EmailDelivery;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Open the configured content store, with the read cache when enabled
///
/// # Errors
/// - `ServerError::Config` if the bundle backend has no path
/// - `ServerError::Store` if the bundle cannot be loaded
pub async fn open_store(config: &StoreConfig) -> Result<Arc<dyn DocumentStore>, ServerError> {
    let store: Arc<dyn DocumentStore> = match config.backend {
        StoreBackend::Files => Arc::new(FileStore::new(config.dir.clone())),
        StoreBackend::Bundle => {
            let path = config.bundle.as_deref().ok_or_else(|| {
                ConfigError::invalid("store.bundle", "required for the bundle backend")
            })?;
            Arc::new(MemoryStore::load_bundle(path).await?)
        }
        StoreBackend::Firestore => Arc::new(FirestoreStore::new(config.firestore.clone())),
    };

    if config.cache_ttl_secs == 0 {
        return Ok(store);
    }
    Ok(Arc::new(CachedStore::new(
        store,
        Duration::from_secs(config.cache_ttl_secs),
    )))
}

/// Build the configured delivery backend
#[must_use]
pub fn open_delivery(config: &EmailConfig) -> Arc<dyn EmailDelivery> {
    match config.backend {
        EmailBackend::Log => Arc::new(LogOnlyDelivery),
        EmailBackend::EmailJs => Arc::new(EmailJsDelivery::new(config.emailjs.clone())),
    }
}

/// Build the page composer for a configuration
///
/// # Errors
/// Returns `ServerError` if the store cannot be opened.
pub async fn open_composer(config: &SiteConfig) -> Result<PageComposer, ServerError> {
    let store = open_store(&config.store).await?;
    let settings = config.page_settings();
    info!(
        store = store.name(),
        numbering = %settings.policy,
        metadata = %settings.strategy,
        render_wait_ms = config.server.render_wait_ms,
        "content source ready"
    );
    if !settings.theme.toggle_enabled {
        info!(mode = settings.theme.mode.css_class(), "theme toggle disabled, theme is fixed");
    }
    Ok(PageComposer::new(
        Arc::new(StoreContentSource::new(store)),
        settings,
    ))
}

/// Build the shared request state
///
/// # Errors
/// Returns `ServerError` if the store cannot be opened.
pub async fn build_state(config: &SiteConfig) -> Result<AppState, ServerError> {
    let composer = open_composer(config).await?;
    let delivery = open_delivery(&config.email);
    info!(backend = delivery.name(), "contact delivery ready");
    Ok(AppState::new(composer, delivery))
}

/// Run the HTTP server until interrupted
///
/// # Errors
/// Returns `ServerError` if startup fails or the address cannot be bound.
pub async fn serve(config: SiteConfig) -> Result<(), ServerError> {
    let state = build_state(&config).await?;
    let addr = config.server.bind;

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for shutdown signal");
            std::future::pending::<()>().await;
        }
        info!("shutting down");
    };

    let (bound, server) = warp::serve(routes(state))
        .try_bind_with_graceful_shutdown(addr, shutdown)
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!(addr = %bound, version = crate::VERSION, "folio listening");
    server.await;
    Ok(())
}
