use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Deployment values captured once at startup and shared read-only by every request.
///
/// A variable missing from the process environment is stored as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub app_env: String,
    pub build_number: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_HOST);

        let port = lookup("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let environment = Environment {
            app_env: lookup("APP_ENV").unwrap_or_default(),
            build_number: lookup("BUILD_NUMBER").unwrap_or_default(),
        };

        Self {
            host,
            port,
            environment,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None);

        assert_eq!(config.bind_addr(), "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.environment, Environment::default());
        assert!(config.environment.app_env.is_empty());
        assert!(config.environment.build_number.is_empty());
    }

    #[test]
    fn reads_environment_and_listener_settings() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("APP_ENV", "blue"),
            ("BUILD_NUMBER", "117"),
        ]));

        assert_eq!(config.bind_addr(), "127.0.0.1:9090".parse::<SocketAddr>().unwrap());
        assert_eq!(config.environment.app_env, "blue");
        assert_eq!(config.environment.build_number, "117");
    }

    #[test]
    fn unparsable_listener_settings_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "not-an-ip"),
            ("PORT", "99999"),
        ]));

        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn empty_values_are_kept_verbatim() {
        let config = Config::from_lookup(lookup_from(&[
            ("APP_ENV", ""),
            ("BUILD_NUMBER", " 7 "),
        ]));

        assert_eq!(config.environment.app_env, "");
        assert_eq!(config.environment.build_number, " 7 ");
    }
}
