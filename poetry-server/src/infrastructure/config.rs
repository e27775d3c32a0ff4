use actix_web::http::header::HeaderValue;
use serde::Deserialize;

pub const DEFAULT_DATABASE_NAME: &str = "poetry";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "*";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Absent until someone sets `MONGODB_URI`; the first database access
    /// then fails instead of the process refusing to start.
    #[serde(default)]
    pub mongodb_uri: Option<String>,
    pub database_name: String,
    pub allowed_origin: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".into());
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".into())
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid PORT: {}", e))?;
        let mongodb_uri = lookup("MONGODB_URI").filter(|s| !s.trim().is_empty());
        let database_name = lookup("MONGODB_DB")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_NAME.into());
        let allowed_origin = lookup("ALLOWED_ORIGIN")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.into());
        HeaderValue::from_str(&allowed_origin)
            .map_err(|e| anyhow::anyhow!("invalid ALLOWED_ORIGIN: {}", e))?;

        Ok(Self {
            host,
            port,
            mongodb_uri,
            database_name,
            allowed_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.mongodb_uri, None);
        assert_eq!(config.database_name, "poetry");
        assert_eq!(config.allowed_origin, "*");
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "3000"),
            ("MONGODB_URI", "mongodb://localhost:27017"),
            ("MONGODB_DB", "verses"),
            ("ALLOWED_ORIGIN", "https://poems.example"),
        ])
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(
            config.mongodb_uri.as_deref(),
            Some("mongodb://localhost:27017")
        );
        assert_eq!(config.database_name, "verses");
        assert_eq!(config.allowed_origin, "https://poems.example");
    }

    #[test]
    fn blank_connection_string_counts_as_missing() {
        let config = config_from(&[("MONGODB_URI", "  ")]).unwrap();
        assert!(config.mongodb_uri.is_none());
    }

    #[test]
    fn origin_must_be_a_valid_header_value() {
        let err = config_from(&[("ALLOWED_ORIGIN", "https://bad\norigin")]).unwrap_err();
        assert!(err.to_string().contains("invalid ALLOWED_ORIGIN"));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("invalid PORT"));
    }
}
