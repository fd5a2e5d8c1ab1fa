pub mod config;
pub mod email;
pub mod error;
pub mod routes;
pub mod server;

pub use config::Config;
pub use routes::AppState;

use std::sync::Arc;

/// Create the app router without binding a listener, for integration
/// tests driving it through `tower::ServiceExt`.
pub fn create_app(config: Config, dispatcher: Arc<dyn email::Dispatcher>) -> axum::Router {
    routes::router(AppState { config, dispatcher })
}
