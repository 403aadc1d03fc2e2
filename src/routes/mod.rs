pub mod health;
pub mod home;
pub mod version;

use axum::extract::State;
use axum::http::{Method, Uri};
use axum::routing::{on, MethodFilter};
use axum::Router;

use crate::config::Environment;
use crate::error::AppError;
use crate::state::AppState;

pub use health::health;
pub use home::home;
pub use version::version;

pub type Handler = fn(&Environment) -> String;

/// A `(method, path)` pair bound to the handler that renders its body.
#[derive(Clone)]
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub handler: Handler,
}

pub fn table() -> Vec<Route> {
    vec![
        Route {
            method: Method::GET,
            path: "/",
            handler: home,
        },
        Route {
            method: Method::GET,
            path: "/health",
            handler: health,
        },
        Route {
            method: Method::GET,
            path: "/version",
            handler: version,
        },
    ]
}

pub fn router() -> Router<AppState> {
    let mut router = Router::new();

    for route in table() {
        let Ok(filter) = MethodFilter::try_from(route.method.clone()) else {
            tracing::warn!("Skipping {} {}: unsupported method", route.method, route.path);
            continue;
        };

        let handler = route.handler;
        router = router.route(
            route.path,
            on(filter, move |State(state): State<AppState>| async move {
                handler(state.environment())
            }),
        );
    }

    router.fallback(not_found)
}

async fn not_found(method: Method, uri: Uri) -> AppError {
    tracing::debug!("No route for {} {}", method, uri.path());
    AppError::RouteNotFound {
        method,
        path: uri.path().to_string(),
    }
}
