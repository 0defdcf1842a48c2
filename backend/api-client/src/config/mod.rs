//! Client configuration, stored as TOML.

use crate::auth::{BearerAuthenticator, CookieAuthenticator, DEFAULT_COOKIE_NAME};
use crate::error::config::ConfigError;
use crate::{ApiClient, ClientError};

use common::{ErrorLocation, RedactedSecret};

use std::env;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "mealplan.toml";
pub const CONFIG_DIR_NAME: &str = "mealplan";
pub const BASE_URL_ENV: &str = "MEALPLAN_API_URL";
pub const DEFAULT_TOKEN_ENV: &str = "MEALPLAN_API_TOKEN";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    #[default]
    None,
    Cookie,
    Bearer,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthConfig {
    #[serde(default)]
    pub method: AuthMethod,
    #[serde(default = "default_token_env")]
    pub token_env: String,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            method: AuthMethod::default(),
            token_env: default_token_env(),
            cookie_name: default_cookie_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            auth: AuthConfig::default(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}
fn default_cookie_name() -> String {
    DEFAULT_COOKIE_NAME.to_string()
}

impl ClientConfig {
    /// `{platform config dir}/mealplan`.
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME))
            .ok_or_else(|| ConfigError::DirectoryNotFound {
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Load `{config_dir}/mealplan.toml`, then apply `MEALPLAN_API_URL`.
    ///
    /// A missing file yields defaults. A file that exists but does not parse
    /// or validate is an error.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(|e| {
                warn!("Failed to read config file {}: {}", config_path.display(), e);
                ConfigError::ReadError {
                    location: ErrorLocation::from(Location::caller()),
                    path: config_path.clone(),
                    source: e,
                }
            })?;

            let config: ClientConfig = toml::from_str(&contents).map_err(|e| {
                warn!("Failed to parse config TOML {}: {}", config_path.display(), e);
                ConfigError::ParseError {
                    location: ErrorLocation::from(Location::caller()),
                    path: config_path.clone(),
                    reason: e.to_string(),
                }
            })?;

            info!("Config loaded from {}", config_path.display());
            config
        } else {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            Self::default()
        };

        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                debug!("{BASE_URL_ENV} overrides base_url");
                config.base_url = base_url.trim().to_string();
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Save to `{config_dir}/mealplan.toml` via temp file and rename.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{CONFIG_FILE_NAME}.tmp"));

        let contents = toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, contents).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid base_url: {}", self.base_url),
            });
        }

        if url::Url::parse(&self.base_url).is_err() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("base_url does not parse: {}", self.base_url),
            });
        }

        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid timeout_secs: {} (must be {MIN_TIMEOUT_SECS}-{MAX_TIMEOUT_SECS})",
                    self.timeout_secs
                ),
            });
        }

        if self.auth.method != AuthMethod::None && self.auth.token_env.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "auth.token_env cannot be empty when auth is enabled".to_string(),
            });
        }

        if self.auth.method == AuthMethod::Cookie && self.auth.cookie_name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "auth.cookie_name cannot be empty for cookie auth".to_string(),
            });
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Read the credential named by `auth.token_env`, loading `.env` first.
    ///
    /// `Ok(None)` when auth is disabled.
    pub fn resolve_credential(&self) -> Result<Option<RedactedSecret>, ConfigError> {
        if self.auth.method == AuthMethod::None {
            return Ok(None);
        }

        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded .env from {}", path.display()),
            Err(e) if e.not_found() => debug!("No .env file found"),
            Err(e) => warn!("Failed to load .env: {e}"),
        }

        let missing = || ConfigError::MissingCredential {
            location: ErrorLocation::from(Location::caller()),
            env_var: self.auth.token_env.clone(),
        };

        let value = env::var(&self.auth.token_env).map_err(|_| missing())?;
        let secret = RedactedSecret::non_empty(&self.auth.token_env, value).map_err(|_| missing())?;

        info!(
            "Loaded credential from {} ({} chars)",
            self.auth.token_env,
            secret.len()
        );
        Ok(Some(secret))
    }

    /// A client for `base_url` with the configured timeout and credentials.
    pub fn build_client(&self) -> Result<ApiClient, ConfigError> {
        let client = ApiClient::with_timeout(&self.base_url, self.timeout())
            .map_err(|e: ClientError| ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: e.to_string(),
            })?;

        let client = match (self.auth.method, self.resolve_credential()?) {
            (AuthMethod::Cookie, Some(secret)) => client.with_authenticator(
                CookieAuthenticator::new(self.auth.cookie_name.clone(), secret),
            ),
            (AuthMethod::Bearer, Some(secret)) => {
                client.with_authenticator(BearerAuthenticator::new(secret))
            }
            _ => client,
        };

        Ok(client)
    }
}
