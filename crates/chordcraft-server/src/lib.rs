#![forbid(unsafe_code)]
//! HTTP surface of chordcraft: the progression CRUD routes, the theory-table
//! endpoint, and the embedded single-page composer UI.

use axum::routing::get;
use axum::Router;
use chordcraft_store::ProgressionStore;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tokio::sync::Mutex;

mod config;
mod http;

pub use config::{ServerConfig, DEFAULT_DATA_PATH, DEFAULT_PORT};

pub const CRATE_NAME: &str = "chordcraft-server";

/// Shared handler state. The store sits behind one async mutex, so mutations
/// are serialized and the last write wins.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<ProgressionStore>>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: ProgressionStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::index_handler))
        .route("/health", get(http::handlers::health_handler))
        .route(
            "/api/progressions",
            get(http::handlers::list_progressions_handler)
                .post(http::handlers::save_progression_handler),
        )
        .route(
            "/api/progressions/:name",
            get(http::handlers::get_progression_handler)
                .delete(http::handlers::delete_progression_handler),
        )
        .route("/api/theory/chords", get(http::handlers::theory_chords_handler))
        .route(
            "/api/shapes",
            get(http::handlers::list_shapes_handler).post(http::handlers::create_shape_handler),
        )
        .with_state(state)
}
