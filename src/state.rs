use crate::config::Environment;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    environment: Arc<Environment>,
}

impl AppState {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment: Arc::new(environment),
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }
}
