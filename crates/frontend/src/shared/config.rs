//! Runtime configuration of the dashboard.
//!
//! `config.toml` is served next to `index.html`, so deployments can point the
//! dashboard at another API or change credentials without rebuilding the wasm
//! bundle. Missing or invalid files fall back to [`AppConfig::default`], which
//! carries no credentials.

use gloo_net::http::Request;
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

/// Where the config file is looked up, relative to the page
pub const CONFIG_URL: &str = "config.toml";

pub const DEFAULT_BASE_URL: &str = "https://desafio-wa-back.luizloyola.com.br/";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },
    #[error("HTTP {status} while fetching {url}")]
    Status { url: String, status: u16 },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

fn default_log_level() -> String {
    "debug".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                username: String::new(),
                password: String::new(),
            },
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ApiConfig {
    /// Basic auth pair; an empty username means anonymous requests
    pub fn credentials(&self) -> Option<(&str, &str)> {
        if self.username.is_empty() {
            None
        } else {
            Some((self.username.as_str(), self.password.as_str()))
        }
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Debug)
    }
}

pub fn parse_config(raw: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(raw)?;
    Ok(config)
}

async fn fetch_config(url: &str) -> Result<AppConfig, ConfigError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ConfigError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    if !response.ok() {
        return Err(ConfigError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let text = response.text().await.map_err(|e| ConfigError::Fetch {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    parse_config(&text)
}

/// Load `config.toml`, falling back to the defaults
pub async fn load_config() -> AppConfig {
    match fetch_config(CONFIG_URL).await {
        Ok(config) => {
            log::info!("Loaded config from {}", CONFIG_URL);
            config
        }
        Err(e) => {
            log::warn!("{}; using default configuration", e);
            AppConfig::default()
        }
    }
}
