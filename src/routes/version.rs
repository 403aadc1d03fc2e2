use crate::config::Environment;

pub fn version(environment: &Environment) -> String {
    format!(
        "Version: {} - Env: {}",
        environment.build_number, environment.app_env
    )
}
