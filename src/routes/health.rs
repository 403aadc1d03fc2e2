use crate::config::Environment;

/// Liveness probe. The label lets a load balancer tell the blue and green stacks apart.
pub fn health(environment: &Environment) -> String {
    format!("OK - {}", environment.app_env)
}
