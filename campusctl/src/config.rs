//! Application configuration management.
//!
//! Configuration is loaded from a YAML file with environment variable
//! overrides. The configuration file path defaults to `config.yaml` but can
//! be specified via `-f` flag or `CAMPUSCTL_CONFIG` environment variable.
//!
//! ## Loading Priority
//!
//! Configuration sources are merged in the following order (later sources
//! override earlier ones):
//!
//! 1. **YAML config file** - Base configuration (default: `config.yaml`)
//! 2. **Environment variables** - Variables prefixed with `CAMPUSCTL_`
//! 3. **DATABASE_URL** - Special case: overrides `database_url` if set
//!
//! For nested config values, use double underscores in environment
//! variables. For example, `CAMPUSCTL_SUMMARIZER__MODEL=gpt-4o-mini` sets the
//! `summarizer.model` field.
//!
//! ## Example
//!
//! ```bash
//! # Override server port
//! CAMPUSCTL_PORT=8082
//!
//! # Point the database somewhere else
//! DATABASE_URL="sqlite://data/campus.db?mode=rwc"
//!
//! # Summarizer credentials
//! CAMPUSCTL_SUMMARIZER__API_KEY="sk-..."
//! ```

use clap::Parser;
use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::Error;

/// Simple CLI args - just for specifying config file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short = 'f', long, env = "CAMPUSCTL_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Validate configuration and exit without starting the server.
    /// Useful for CI/CD pipelines to catch config errors before deployment.
    #[arg(long)]
    pub validate: bool,
}

/// Main application configuration.
///
/// This is the root configuration structure loaded from YAML and environment
/// variables. All fields have sensible defaults defined in the `Default`
/// implementation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// HTTP server host to bind to (e.g., "0.0.0.0" for all interfaces)
    pub host: String,
    /// HTTP server port to bind to
    pub port: u16,
    /// SQLite connection string; `mode=rwc` creates the file on first start
    pub database_url: String,
    /// Origins allowed to call the API from a browser
    pub cors: CorsConfig,
    /// Public book catalogue scraped for recommendations
    pub catalogue: CatalogueConfig,
    /// Outbound summarization service
    pub summarizer: SummarizerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    pub allowed_origins: Vec<Url>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            // Local frontend dev servers
            allowed_origins: vec![
                Url::parse("http://localhost:3000").expect("static URL"),
                Url::parse("http://localhost:4200").expect("static URL"),
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogueConfig {
    /// Base URL of the catalogue site; the scraper starts at
    /// `{base_url}catalogue/page-1.html` and the summarizer only accepts
    /// book URLs under `{base_url}catalogue/`.
    pub base_url: Url,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://books.toscrape.com/").expect("static URL"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummarizerConfig {
    /// OpenAI-compatible API base, e.g. "https://api.openai.com/v1/"
    pub api_base: Url,
    /// Bearer token for the summarization endpoint
    pub api_key: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Fixed sampling temperature
    pub temperature: f32,
    /// Fixed output length cap
    pub max_tokens: u32,
    /// Fixed instructional system role
    pub system_prompt: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            api_base: Url::parse("https://api.openai.com/v1/").expect("static URL"),
            api_key: String::new(),
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            max_tokens: 150,
            system_prompt: "Tu es un assistant qui résume des livres.".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8082,
            database_url: "sqlite://campus.db?mode=rwc".to_string(),
            cors: CorsConfig::default(),
            catalogue: CatalogueConfig::default(),
            summarizer: SummarizerConfig::default(),
        }
    }
}

impl Config {
    fn figment(args: &Args) -> Figment {
        Figment::new()
            .merge(Yaml::file(&args.config))
            .merge(Env::prefixed("CAMPUSCTL_").split("__"))
    }

    pub fn load(args: &Args) -> Result<Self, figment::Error> {
        let mut config: Self = Self::figment(args).extract()?;

        // DATABASE_URL wins over both the file and the prefixed variables
        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database_url = url;
        }

        config
            .validate()
            .map_err(|e| figment::Error::from(e.to_string()))?;
        Ok(config)
    }

    /// Validate the configuration for consistency and required fields
    pub fn validate(&self) -> Result<(), Error> {
        if self.database_url.is_empty() {
            return Err(Error::Internal {
                operation: "Config validation: database_url must not be empty".to_string(),
            });
        }

        if self.summarizer.model.is_empty() {
            return Err(Error::Internal {
                operation: "Config validation: summarizer.model must not be empty".to_string(),
            });
        }

        if !(0.0..=2.0).contains(&self.summarizer.temperature) {
            return Err(Error::Internal {
                operation: format!(
                    "Config validation: summarizer.temperature must be within [0, 2], got {}",
                    self.summarizer.temperature
                ),
            });
        }

        if self.summarizer.max_tokens == 0 {
            return Err(Error::Internal {
                operation: "Config validation: summarizer.max_tokens must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Address the HTTP listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
