use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::ProviderChain;

/// Shared application state injected into all route handlers via Axum
/// extractors. Constructed once in main and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: Arc<ProviderChain>,
}
