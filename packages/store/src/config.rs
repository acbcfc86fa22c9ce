//! # Application configuration: `postboard.toml`
//!
//! The only setting is the base URL of the hosted JSON database. It can come from
//! three places, checked in this order by [`PostboardConfig::load`]:
//!
//! 1. the `POSTBOARD_DATABASE_URL` environment variable (native builds, after
//!    loading a `.env` file if present),
//! 2. a `postboard.toml` file in the working directory (native builds),
//! 3. `POSTBOARD_DATABASE_URL` as it was set when the crate was compiled. Web
//!    builds have no environment at runtime, so this is how they get a URL.
//!
//! ## Structure
//!
//! ```toml
//! [database]
//! url = "https://my-project-default-rtdb.firebaseio.com"
//! ```
//!
//! All structs derive `Default`, so a missing or empty file means "no URL", and
//! callers fall back to the in-memory store.

use serde::{Deserialize, Serialize};

/// Name of the environment variable holding the database URL.
pub const DATABASE_URL_VAR: &str = "POSTBOARD_DATABASE_URL";

/// Top-level configuration stored in `postboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PostboardConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Remote store settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Base URL of the JSON database, without the `/posts.json` suffix.
    #[serde(default)]
    pub url: Option<String>,
}

impl PostboardConfig {
    /// Create a config pointing at the given database.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            database: DatabaseConfig {
                url: Some(url.into()),
            },
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "postboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Configured database URL with surrounding whitespace and trailing slashes
    /// removed; `None` when unset or blank.
    pub fn database_url(&self) -> Option<&str> {
        self.database
            .url
            .as_deref()
            .map(|u| u.trim().trim_end_matches('/'))
            .filter(|u| !u.is_empty())
    }

    /// Resolve the configuration for the running platform.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Ok(url) = std::env::var(DATABASE_URL_VAR) {
                return Self::new(url);
            }
            match std::fs::read_to_string(Self::filename()) {
                Ok(text) => match Self::from_toml(&text) {
                    Ok(config) if config.database_url().is_some() => return config,
                    Ok(_) => {}
                    Err(e) => tracing::warn!("ignoring invalid {}: {e}", Self::filename()),
                },
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => tracing::warn!("could not read {}: {e}", Self::filename()),
            }
        }

        Self::compiled()
    }

    /// URL baked in at compile time, if any.
    pub fn compiled() -> Self {
        match option_env!("POSTBOARD_DATABASE_URL") {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_database_url() {
        let config = PostboardConfig::from_toml(
            "[database]\nurl = \"https://demo-default-rtdb.firebaseio.com/\"\n",
        )
        .unwrap();
        assert_eq!(
            config.database_url(),
            Some("https://demo-default-rtdb.firebaseio.com")
        );
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = PostboardConfig::from_toml("").unwrap();
        assert_eq!(config, PostboardConfig::default());
        assert!(config.database_url().is_none());
    }

    #[test]
    fn test_blank_url_is_unset() {
        let config = PostboardConfig::new("   ");
        assert!(config.database_url().is_none());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = PostboardConfig::new("https://demo.firebaseio.com");
        let text = config.to_toml().unwrap();
        assert!(text.contains("[database]"));
        assert_eq!(PostboardConfig::from_toml(&text).unwrap(), config);
    }
}
