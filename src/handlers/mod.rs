pub mod search;

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::features::search::Dictionary;

/// Read-only lookup API over a loaded dictionary.
pub fn api_router(dict: Arc<Dictionary>) -> Router {
    let search_api_router = Router::new()
        .route("/lookup", get(search::search::lookup_api))
        .route("/lookup/first", get(search::search::first_entry_api))
        .route("/contains", get(search::search::contains_api))
        .route("/stats", get(search::search::stats_api))
        .with_state(dict);

    Router::new().nest("/api", search_api_router)
}
