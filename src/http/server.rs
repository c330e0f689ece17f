use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{http::routes, store::ArticleStore};

/// Shared handle given to every handler. The store lives as long as the
/// server that owns this state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ArticleStore>,
}

impl AppState {
    pub fn new(store: ArticleStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/articles/{name}", get(routes::get_article))
        .route("/api/articles/{name}/upvote", post(routes::upvote))
        .route("/api/articles/{name}/add-comment", post(routes::add_comment))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
