//! Portal configuration from environment variables and an optional TOML file.
//!
//! Recognized keys (environment name / file key):
//!
//! | env                  | file                | meaning |
//! |----------------------|---------------------|---------|
//! | `ACADEMIC_API`       | `academic_api`      | academic API root (required) |
//! | `TEACHER_LOGIN_API`  | `teacher_login_api` | login service root, defaults to the academic root |
//! | `DEV_API`            | `dev_api`           | development API root |
//! | `PORTAL_USE_DEV`     | `use_dev`           | route academic calls to `DEV_API` |
//! | `PORTAL_TIMEOUT_SECS`| `timeout_secs`      | request timeout, default 30 |
//! | `PORTAL_SESSION_FILE`| `session_file`      | stored credentials path |
//!
//! Environment values win over file values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use portal_api::ApiConfig;
use serde::Deserialize;

use crate::error::PortalError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Deserialize, Default, Debug)]
struct FileConfig {
    academic_api: Option<String>,
    teacher_login_api: Option<String>,
    dev_api: Option<String>,
    use_dev: Option<bool>,
    timeout_secs: Option<u64>,
    session_file: Option<PathBuf>,
}

/// Resolved configuration.
#[derive(Clone, Debug)]
pub struct PortalConfig {
    pub academic_api: String,
    pub teacher_login_api: String,
    pub dev_api: Option<String>,
    pub use_dev: bool,
    pub timeout: Duration,
    pub session_file: PathBuf,
}

impl PortalConfig {
    /// Resolves configuration from the process environment alone.
    pub fn from_env() -> Result<Self, PortalError> {
        Self::resolve(FileConfig::default(), |key| std::env::var(key).ok())
    }

    /// Reads `path` as TOML, then overlays the process environment.
    pub fn load(path: &Path) -> Result<Self, PortalError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!("Failed to read config file {}: {}", path.display(), e);
            PortalError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let file = toml::from_str::<FileConfig>(&text).map_err(|e| {
            tracing::error!("Failed to parse config file {}: {}", path.display(), e);
            PortalError::Config(format!("invalid config file {}: {}", path.display(), e))
        })?;
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    fn resolve<F>(file: FileConfig, env: F) -> Result<Self, PortalError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let academic_api = env("ACADEMIC_API")
            .or(file.academic_api)
            .ok_or_else(|| PortalError::Config("ACADEMIC_API is not set".to_string()))?;
        let teacher_login_api = env("TEACHER_LOGIN_API")
            .or(file.teacher_login_api)
            .unwrap_or_else(|| academic_api.clone());
        let dev_api = env("DEV_API").or(file.dev_api);

        let use_dev = match env("PORTAL_USE_DEV") {
            Some(v) => parse_flag(&v)?,
            None => file.use_dev.unwrap_or(false),
        };
        if use_dev && dev_api.is_none() {
            return Err(PortalError::Config(
                "PORTAL_USE_DEV is set but DEV_API is not".to_string(),
            ));
        }

        let timeout_secs = match env("PORTAL_TIMEOUT_SECS") {
            Some(v) => v.trim().parse::<u64>().map_err(|_| {
                PortalError::Config(format!("PORTAL_TIMEOUT_SECS must be a number, got '{}'", v))
            })?,
            None => file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };
        if timeout_secs == 0 {
            return Err(PortalError::Config(
                "request timeout must be at least one second".to_string(),
            ));
        }

        let session_file = env("PORTAL_SESSION_FILE")
            .map(PathBuf::from)
            .or(file.session_file)
            .unwrap_or_else(|| default_session_file(env("HOME")));

        Ok(Self {
            academic_api,
            teacher_login_api,
            dev_api,
            use_dev,
            timeout: Duration::from_secs(timeout_secs),
            session_file,
        })
    }

    /// The base URLs handed to the API client. With `use_dev`, academic calls
    /// go to the development API.
    pub fn api_config(&self) -> ApiConfig {
        let academic_api = match (&self.dev_api, self.use_dev) {
            (Some(dev), true) => dev.clone(),
            _ => self.academic_api.clone(),
        };
        ApiConfig {
            academic_api,
            teacher_login_api: self.teacher_login_api.clone(),
            timeout: self.timeout,
        }
    }
}

fn parse_flag(value: &str) -> Result<bool, PortalError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(PortalError::Config(format!(
            "expected a boolean flag, got '{}'",
            value
        ))),
    }
}

fn default_session_file(home: Option<String>) -> PathBuf {
    match home {
        Some(home) => Path::new(&home).join(".portal").join("session.json"),
        None => PathBuf::from(".portal_session.json"),
    }
}
