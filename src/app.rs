use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use tower_http::trace::TraceLayer;

use crate::{
    config::AppConfig,
    database::{self, PgProductStore},
    error::Result,
    repository::ProductRepository,
    routes,
};

#[derive(Clone)]
pub struct AppState {
    pub products: ProductRepository,
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    let store = Arc::new(PgProductStore::new(pool));
    let products = ProductRepository::new(store, config.catalog);

    tracing::info!(
        "Product lookups use name match '{}' and serial match '{}'",
        products.catalog().name_match,
        products.catalog().serial_match
    );

    Ok(router(AppState { products }, config.server.max_body_size))
}

pub fn router(state: AppState, max_body_size: usize) -> Router {
    routes::create_router()
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
