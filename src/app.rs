use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::routes;
use crate::state::AppState;

pub fn create_app(config: &Config) -> Router {
    let state = AppState::new(config.environment.clone());

    routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
