/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Base URL of the studio API (default: `http://localhost:8080`).
    pub studio_api_url: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Timeout for each call to the studio API in seconds (default: `10`).
    pub upstream_timeout_secs: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                  |
    /// |-------------------------|--------------------------|
    /// | `HOST`                  | `0.0.0.0`                |
    /// | `PORT`                  | `3000`                   |
    /// | `STUDIO_API_URL`        | `http://localhost:8080`  |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                     |
    /// | `UPSTREAM_TIMEOUT_SECS` | `10`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_var(&lookup, "PORT", "u16", 3000u16)?;

        let studio_api_url =
            lookup("STUDIO_API_URL").unwrap_or_else(|| "http://localhost:8080".into());

        let request_timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "u64", 30u64)?;

        let upstream_timeout_secs = parse_var(&lookup, "UPSTREAM_TIMEOUT_SECS", "u64", 10u64)?;

        Ok(Self {
            host,
            port,
            studio_api_url,
            request_timeout_secs,
            upstream_timeout_secs,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.studio_api_url, "http://localhost:8080");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.upstream_timeout_secs, 10);
    }

    #[test]
    fn overrides_are_read() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "8088"),
            ("STUDIO_API_URL", "http://studio.internal"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8088);
        assert_eq!(config.studio_api_url, "http://studio.internal");
        assert_eq!(config.upstream_timeout_secs, 3);
    }

    #[test]
    fn invalid_number_fails_fast() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { var: "PORT", .. });
        assert!(err.to_string().contains("eighty"));
    }
}
