use crate::units::data_items::DATA_ITEMS_PATH;
use std::{env, str::FromStr, time::Duration};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REFRESH_SECS: u64 = 60;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Full URL the data-item refresher polls.
    pub endpoint: String,
    pub refresh_period: Duration,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or unparsable values fall
    /// back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parsed(&lookup, "PORT").unwrap_or(DEFAULT_PORT);
        let endpoint = lookup("TICKER_ENDPOINT")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| format!("http://127.0.0.1:{port}{DATA_ITEMS_PATH}"));
        let refresh_secs = parsed::<u64>(&lookup, "TICKER_REFRESH_SECS")
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REFRESH_SECS);
        let timeout_secs = parsed::<u64>(&lookup, "TICKER_REQUEST_TIMEOUT_SECS")
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            port,
            endpoint,
            refresh_period: Duration::from_secs(refresh_secs),
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|value| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_local_endpoint() {
        let config = config(&[]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.endpoint, "http://127.0.0.1:8080/api/current-data");
        assert_eq!(config.refresh_period, Duration::from_secs(60));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn endpoint_follows_port_unless_overridden() {
        assert_eq!(
            config(&[("PORT", "9000")]).endpoint,
            "http://127.0.0.1:9000/api/current-data"
        );
        assert_eq!(
            config(&[("PORT", "9000"), ("TICKER_ENDPOINT", "http://panel/api/current-data")])
                .endpoint,
            "http://panel/api/current-data"
        );
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config(&[("PORT", "http"), ("TICKER_REFRESH_SECS", "0")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.refresh_period, Duration::from_secs(60));
    }
}
