//! Runtime configuration.
//!
//! Settings come from `config/default.toml` (optional), then environment
//! variables (a `.env` file is loaded first), then command-line flags.
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1"
//! port = 5000
//! database = "data/cafes.db"
//!
//! [auth]
//! admin_api_key = "change-me"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use cafe_web::WebConfig;

/// Environment variable holding the admin key for deletes.
pub const ENV_ADMIN_API_KEY: &str = "CAFE_ADMIN_API_KEY";
/// Environment variable overriding the database path.
pub const ENV_DATABASE: &str = "CAFE_DATABASE";
/// Environment variable overriding the listen port.
pub const ENV_PORT: &str = "CAFE_PORT";

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CafeConfig {
    pub server: ServerSection,
    pub auth: AuthSection,
}

/// `[server]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: String,
    pub port: u16,
    pub database: PathBuf,
}

impl Default for ServerSection {
    fn default() -> Self {
        let web = WebConfig::default();
        Self {
            bind: web.bind_addr,
            port: web.port,
            database: PathBuf::from("data/cafes.db"),
        }
    }
}

/// `[auth]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthSection {
    pub admin_api_key: Option<String>,
}

impl CafeConfig {
    /// Load `path`, falling back to defaults if the file does not exist.
    ///
    /// A file that exists but does not parse is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(key) = lookup(ENV_ADMIN_API_KEY) {
            self.auth.admin_api_key = Some(key);
        }
        if let Some(database) = lookup(ENV_DATABASE) {
            self.server.database = PathBuf::from(database);
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .parse()
                .with_context(|| format!("{ENV_PORT} is not a valid port: {port}"))?;
        }
        Ok(())
    }

    /// The subset handed to the web server.
    pub fn web_config(&self) -> WebConfig {
        WebConfig {
            bind_addr: self.server.bind.clone(),
            port: self.server.port,
            admin_api_key: self.auth.admin_api_key.clone(),
        }
    }
}
