use std::env;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::{debug, warn};

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Optional override for the service base URL.
pub const BASE_URL_VAR: &str = "GEMINI_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not found in environment.")]
    MissingCredential(&'static str),
}

/// Settings needed to reach the remote service.
#[derive(Debug)]
pub struct Config {
    pub api_key: SecretString,
    pub base_url: Option<String>,
}

impl Config {
    pub fn new(api_key: impl Into<SecretString>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Reads configuration through `lookup`, usually [`env_lookup`].
    ///
    /// Required:
    /// - `GEMINI_API_KEY`
    ///
    /// Optional:
    /// - `GEMINI_BASE_URL`
    ///
    /// Empty values are treated as unset. Anything else is used verbatim.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let api_key = non_empty(API_KEY_VAR).ok_or(ConfigError::MissingCredential(API_KEY_VAR))?;

        Ok(Self {
            api_key: SecretString::from(api_key),
            base_url: non_empty(BASE_URL_VAR),
        })
    }

    /// First few characters of the key, safe to log.
    pub fn masked_key(&self) -> String {
        let prefix: String = self.api_key.expose_secret().chars().take(5).collect();
        format!("{prefix}...")
    }
}

/// Reads a variable from the process environment.
pub fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Best-effort load of a `.env` file from the current directory or one of
/// its parents. Never fails; variables already in the environment win.
pub fn load_dotenv() -> Option<PathBuf> {
    report_dotenv(dotenvy::dotenv())
}

/// Best-effort load of the `.env` file at `path`.
pub fn load_dotenv_from(path: &Path) -> Option<PathBuf> {
    report_dotenv(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn report_dotenv(result: Result<PathBuf, dotenvy::Error>) -> Option<PathBuf> {
    match result {
        Ok(path) => {
            debug!(path = %path.display(), "loaded .env");
            Some(path)
        }
        Err(err) if err.not_found() => {
            debug!("no .env file found");
            None
        }
        Err(err) => {
            warn!("ignoring unreadable .env file: {err}");
            None
        }
    }
}
