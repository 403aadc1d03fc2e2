use crate::config::Environment;

pub fn home(environment: &Environment) -> String {
    format!("Hello from {} environment!", environment.app_env)
}
