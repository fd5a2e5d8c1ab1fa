use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Process-wide configuration: loaded once at startup, immutable
/// thereafter, passed explicitly to the handlers and the dispatcher.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Layered load: optional `config.toml` (or an explicit path), then
    /// `FOLIO_*` environment variables (`FOLIO_EMAIL__API_KEY`, ...).
    pub fn load(path: Option<String>) -> Result<Self, ConfigError> {
        let file = match &path {
            Some(p) => File::with_name(p),
            None => File::with_name("config").required(false),
        };

        ConfigBuilder::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("FOLIO")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    /// Provider API key; SendGrid keys are `SG.`-prefixed. Empty means
    /// unconfigured: the server starts but every dispatch fails with a
    /// configuration error.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_to_address")]
    pub to_address: String,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// Log and discard instead of talking to the provider.
    #[serde(default)]
    pub mock: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            from_address: default_from_address(),
            to_address: default_to_address(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            mock: false,
        }
    }
}

fn default_from_address() -> String {
    "noreply@folio.localhost".to_string()
}

fn default_to_address() -> String {
    "owner@folio.localhost".to_string()
}

fn default_smtp_host() -> String {
    "smtp.sendgrid.net".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://127.0.0.1:5500".to_string(),
        "http://localhost:5500".to_string(),
    ]
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
