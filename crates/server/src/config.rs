use std::path::PathBuf;

use serde::Deserialize;

use pipeline::{DEFAULT_MIN_SCORE, DEFAULT_RECOMMENDATIONS, DEFAULT_SUGGESTION_LIMIT};

/// Prefix for every environment variable read by [`ServerConfig`]
pub const ENV_PREFIX: &str = "MOVIE_RECS_";

/// Server configuration loaded from `MOVIE_RECS_*` environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Recommendations shown when the request doesn't specify a count
    #[serde(default = "default_count")]
    pub default_count: usize,

    /// Largest count the UI and API accept
    #[serde(default = "default_max_count")]
    pub max_count: usize,

    /// Candidate pool for "did you mean" suggestions
    #[serde(default = "default_suggest_limit")]
    pub suggest_limit: usize,

    /// Suggestions must score strictly above this (0-100)
    #[serde(default = "default_suggest_min_score")]
    pub suggest_min_score: u8,

    /// Optional `.json` / `.dat` catalog replacing the built-in movies
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_count() -> usize {
    DEFAULT_RECOMMENDATIONS
}

fn default_max_count() -> usize {
    10
}

fn default_suggest_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

fn default_suggest_min_score() -> u8 {
    DEFAULT_MIN_SCORE
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            default_count: default_count(),
            max_count: default_max_count(),
            suggest_limit: default_suggest_limit(),
            suggest_min_score: default_suggest_min_score(),
            catalog_path: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables (and `.env`, if present)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::prefixed(ENV_PREFIX)
            .from_env::<ServerConfig>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()
    }

    /// Load configuration from explicit `(NAME, value)` pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::prefixed(ENV_PREFIX)
            .from_iter::<_, ServerConfig>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()
    }

    /// `host:port`, ready for `TcpListener::bind`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Clamp a requested count into `1..=max_count`
    pub fn clamp_count(&self, count: usize) -> usize {
        count.clamp(1, self.max_count)
    }

    fn validate(self) -> anyhow::Result<Self> {
        if self.max_count == 0 {
            anyhow::bail!("max_count must be at least 1");
        }
        if self.default_count == 0 || self.default_count > self.max_count {
            anyhow::bail!(
                "default_count must be between 1 and {}, got {}",
                self.max_count,
                self.default_count
            );
        }
        if self.suggest_min_score > 100 {
            anyhow::bail!("suggest_min_score must be at most 100, got {}", self.suggest_min_score);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_vars(Vec::new()).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr(), "127.0.0.1:3000");
        assert_eq!(config.default_count, 5);
        assert_eq!(config.suggest_min_score, 50);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_vars(vars(&[
            ("MOVIE_RECS_PORT", "8080"),
            ("MOVIE_RECS_HOST", "0.0.0.0"),
            ("MOVIE_RECS_CATALOG_PATH", "movies.json"),
            ("UNRELATED", "ignored"),
        ]))
        .unwrap();

        assert_eq!(config.addr(), "0.0.0.0:8080");
        assert_eq!(config.catalog_path, Some(PathBuf::from("movies.json")));
    }

    #[test]
    fn test_invalid_counts_rejected() {
        assert!(ServerConfig::from_vars(vars(&[("MOVIE_RECS_DEFAULT_COUNT", "11")])).is_err());
        assert!(ServerConfig::from_vars(vars(&[("MOVIE_RECS_MAX_COUNT", "0")])).is_err());
        assert!(ServerConfig::from_vars(vars(&[("MOVIE_RECS_PORT", "not-a-port")])).is_err());
    }

    #[test]
    fn test_clamp_count() {
        let config = ServerConfig::default();
        assert_eq!(config.clamp_count(0), 1);
        assert_eq!(config.clamp_count(7), 7);
        assert_eq!(config.clamp_count(99), 10);
    }
}
