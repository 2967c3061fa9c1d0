use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tracing::info;

use crate::backend::{AppBackend, BackendFactory};
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::logging::logging_middleware;
use crate::resource::customer;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn AppBackend>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(backend: Arc<dyn AppBackend>, config: AppConfig) -> Self {
        Self {
            backend,
            config: Arc::new(config),
        }
    }
}

/// Connect the configured backend, check it and create the customer table.
pub async fn setup_backend(config: &AppConfig) -> AppResult<Arc<dyn AppBackend>> {
    let backend_config = config.database_backend_config()?;

    info!(
        "Setting up {:?} backend ({})",
        backend_config.database_type,
        backend_config.redacted_url()
    );

    let backend = BackendFactory::create(&backend_config).await?;
    backend.health_check().await?;
    backend.init_schema().await?;

    Ok(backend)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/customer",
            get(customer::list_customers).post(customer::create_customer),
        )
        .route(
            "/customer/{id}",
            get(customer::get_customer)
                .put(customer::update_customer)
                .delete(customer::delete_customer),
        )
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// Build the complete application for `config`, backend included.
pub async fn build_app(config: AppConfig) -> AppResult<Router> {
    let backend = setup_backend(&config).await?;
    Ok(build_router(AppState::new(backend, config)))
}
