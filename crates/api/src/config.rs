use axum::http::HeaderValue;

/// Default bind port, matching the port clients of the service expect.
pub const DEFAULT_PORT: u16 = 3008;

/// Default database location: `psNotes.db` in the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://psNotes.db";

/// Errors raised while reading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    InvalidNumber {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid CORS origin '{0}'")]
    InvalidOrigin(String),
}

/// Which origins the CORS layer admits.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    /// `*`: any origin, without credentials.
    Any,
    /// An explicit allow-list; credentials are permitted.
    List(Vec<HeaderValue>),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3008`).
    pub port: u16,
    /// SQLite connection URL (default: `sqlite://psNotes.db`).
    pub database_url: String,
    /// Upper bound on pooled SQLite connections (default: `5`).
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default               |
    /// |------------------------|-----------------------|
    /// | `HOST`                 | `0.0.0.0`             |
    /// | `PORT`                 | `3008`                |
    /// | `DATABASE_URL`         | `sqlite://psNotes.db` |
    /// | `DB_MAX_CONNECTIONS`   | `5`                   |
    /// | `CORS_ORIGINS`         | `*`                   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_number(&lookup, "PORT", "u16", DEFAULT_PORT)?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let db_max_connections = parse_number(&lookup, "DB_MAX_CONNECTIONS", "u32", 5)?;

        let cors_origins =
            parse_cors_origins(&lookup("CORS_ORIGINS").unwrap_or_else(|| "*".into()))?;

        let request_timeout_secs = parse_number(&lookup, "REQUEST_TIMEOUT_SECS", "u64", 30)?;

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
        })
    }
}

fn parse_number<F, T>(
    lookup: &F,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
            var,
            expected,
            value,
        }),
    }
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|o| {
            HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidOrigin(o.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3008);
        assert_eq!(config.database_url, "sqlite://psNotes.db");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.cors_origins, CorsOrigins::Any);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn overrides_are_read() {
        let config = load(&[
            ("PORT", "8080"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("CORS_ORIGINS", "http://localhost:5173, http://example.com"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_matches!(config.cors_origins, CorsOrigins::List(ref o) if o.len() == 2);
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert_matches!(
            load(&[("PORT", "not-a-port")]),
            Err(ConfigError::InvalidNumber { var: "PORT", .. })
        );
    }

    #[test]
    fn wildcard_anywhere_means_any_origin() {
        let config = load(&[("CORS_ORIGINS", "http://a.test,*")]).unwrap();
        assert_eq!(config.cors_origins, CorsOrigins::Any);
    }

    #[test]
    fn invalid_origin_is_rejected() {
        assert_matches!(
            load(&[("CORS_ORIGINS", "http://bad\norigin")]),
            Err(ConfigError::InvalidOrigin(_))
        );
    }
}
