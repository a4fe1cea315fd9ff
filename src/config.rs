//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file, then applies
//! environment overrides for bind addresses and the asset root. Third-party API
//! keys are read from the environment only. `AppConfig` is the root
//! configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

// =============================================================================
// Application Identity
// =============================================================================

/// Application name reported by `/api/config`
pub const APP_NAME: &str = "LifeFit AI";

/// Front-end configuration version reported by `/api/config`
pub const APP_VERSION: &str = "1.0.0";

/// Title used by the panel page and the about panel
pub const APP_TITLE: &str = formatcp!("{} v{}", APP_NAME, APP_VERSION);

// =============================================================================
// Default Bindings and Paths
// =============================================================================

/// Default bind host for both servers
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port for the static asset server
pub const DEFAULT_HTTP_PORT: u16 = 7860;

/// Default port for the panel UI server
pub const DEFAULT_UI_PORT: u16 = 7861;

/// Default directory holding the pre-built front-end
pub const DEFAULT_STATIC_DIR: &str = "build/web";

/// Entry document served for `/` and for unmatched paths
pub const DEFAULT_INDEX_FILE: &str = "index.html";

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "lifefit=debug,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Seconds to wait for in-flight requests on shutdown
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_UI_HOST: &str = "UI_HOST";
pub const ENV_UI_PORT: &str = "UI_PORT";
pub const ENV_STATIC_DIR: &str = "STATIC_DIR";

pub const ENV_DEEPSEEK_API_KEY: &str = "DEEPSEEK_API_KEY";
pub const ENV_VOICE_RECOGNITION_API_KEY: &str = "VOICE_RECOGNITION_API_KEY";
pub const ENV_VOICE_RECOGNITION_SECRET_KEY: &str = "VOICE_RECOGNITION_SECRET_KEY";
pub const ENV_NLP_API_KEY: &str = "NLP_API_KEY";
pub const ENV_WEATHER_API_KEY: &str = "WEATHER_API_KEY";
pub const ENV_WEATHER_API_URL: &str = "WEATHER_API_URL";
pub const ENV_GEOCODING_API_KEY: &str = "GEOCODING_API_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Static asset server binding
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Panel UI server binding and display settings
    #[serde(default)]
    pub ui: UiConfig,
    /// Pre-built front-end location
    #[serde(default)]
    pub assets: AssetsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Third-party keys, environment only
    #[serde(skip)]
    pub api_keys: ApiKeys,
}

/// HTTP server configuration for the static asset server
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

/// Panel UI server binding and page title
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "UiConfig::default_port")]
    pub port: u16,
    /// Site title shown in the page header. Defaults to the application title.
    pub site_name: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: Self::default_port(),
            site_name: None,
        }
    }
}

impl UiConfig {
    fn default_port() -> u16 {
        DEFAULT_UI_PORT
    }

    /// Site title, falling back to the application title
    pub fn site_name(&self) -> &str {
        self.site_name.as_deref().unwrap_or(APP_TITLE)
    }
}

/// Location of the pre-built single-page front-end
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Directory served as the web root
    #[serde(default = "AssetsConfig::default_root")]
    pub root: PathBuf,
    /// Entry document, relative to `root`
    #[serde(default = "AssetsConfig::default_index")]
    pub index: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
            index: Self::default_index(),
        }
    }
}

impl AssetsConfig {
    fn default_root() -> PathBuf {
        PathBuf::from(DEFAULT_STATIC_DIR)
    }

    fn default_index() -> String {
        DEFAULT_INDEX_FILE.to_string()
    }

    /// Full path of the entry document
    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.index)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Keys and endpoints for third-party services.
///
/// Loaded so deployments can provide them, but no code path calls out to these
/// services. Values are empty when the variable is unset.
#[derive(Clone, Default)]
pub struct ApiKeys {
    pub deepseek_api_key: String,
    pub voice_recognition_api_key: String,
    pub voice_recognition_secret_key: String,
    pub nlp_api_key: String,
    pub weather_api_key: String,
    pub weather_api_url: String,
    pub geocoding_api_key: String,
}

impl ApiKeys {
    /// Read every key through `lookup`, treating missing variables as empty.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).unwrap_or_default();
        Self {
            deepseek_api_key: get(ENV_DEEPSEEK_API_KEY),
            voice_recognition_api_key: get(ENV_VOICE_RECOGNITION_API_KEY),
            voice_recognition_secret_key: get(ENV_VOICE_RECOGNITION_SECRET_KEY),
            nlp_api_key: get(ENV_NLP_API_KEY),
            weather_api_key: get(ENV_WEATHER_API_KEY),
            weather_api_url: get(ENV_WEATHER_API_URL),
            geocoding_api_key: get(ENV_GEOCODING_API_KEY),
        }
    }

    /// Variable names paired with whether a value was provided
    pub fn presence(&self) -> [(&'static str, bool); 7] {
        [
            (ENV_DEEPSEEK_API_KEY, !self.deepseek_api_key.is_empty()),
            (ENV_VOICE_RECOGNITION_API_KEY, !self.voice_recognition_api_key.is_empty()),
            (ENV_VOICE_RECOGNITION_SECRET_KEY, !self.voice_recognition_secret_key.is_empty()),
            (ENV_NLP_API_KEY, !self.nlp_api_key.is_empty()),
            (ENV_WEATHER_API_KEY, !self.weather_api_key.is_empty()),
            (ENV_WEATHER_API_URL, !self.weather_api_url.is_empty()),
            (ENV_GEOCODING_API_KEY, !self.geocoding_api_key.is_empty()),
        ]
    }
}

// Secrets stay out of logs and panic messages.
impl fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, set) in self.presence() {
            map.entry(&name, &if set { "<set>" } else { "<unset>" });
        }
        map.finish()
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl AppConfig {
    /// Load configuration from `path` and the process environment.
    ///
    /// A missing file is only tolerated when `path` is the default location.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = if !path.exists() && path == Path::new(DEFAULT_CONFIG_PATH) {
            AppConfig::default()
        } else {
            let contents = std::fs::read_to_string(path)?;
            Self::from_toml(&contents)?
        };

        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Parse configuration from TOML text without consulting the environment.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.http.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.http.port = parse_port(ENV_PORT, &port)?;
        }
        if let Some(host) = lookup(ENV_UI_HOST) {
            self.ui.host = host;
        }
        if let Some(port) = lookup(ENV_UI_PORT) {
            self.ui.port = parse_port(ENV_UI_PORT, &port)?;
        }
        if let Some(dir) = lookup(ENV_STATIC_DIR) {
            self.assets.root = PathBuf::from(dir);
        }
        self.api_keys = ApiKeys::from_lookup(&lookup);
        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.assets.index.is_empty() {
            return Err(ConfigError::Validation(
                "assets.index must name the entry document".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_port(name: &str, value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Validation(format!("{name} is not a valid port: {value:?}")))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
