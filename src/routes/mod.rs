use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

mod contact;
mod health;

use crate::config::Config;
use crate::email::Dispatcher;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub dispatcher: Arc<dyn Dispatcher>,
}

pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(health::root))
        .route("/api/contact", post(contact::action))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Only the configured origins may call the API from a browser; methods
/// and headers mirror what the form actually sends.
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
