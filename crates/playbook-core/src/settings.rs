use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use config::builder::DefaultState;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::SettingsError;

/// Process-level settings: server identity, bind address and environment label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default = "default_server_name")]
    pub server_name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_environment")]
    pub environment: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_server_name() -> String {
    "Playbook MCP Server".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_name: default_server_name(),
            port: default_port(),
            host: default_host(),
            environment: default_environment(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load from config files and the process environment.
    ///
    /// Call [`load_dotenv_files`] first for `.env` values to be visible.
    pub fn load() -> Result<Self, SettingsError> {
        let env = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self::load_from(config_paths(), env)
    }

    /// Later sources win: each file in `paths` (missing ones are skipped), the
    /// bare variables in [`BARE_ENV_VARS`], then `PLAYBOOK_`-prefixed variables.
    /// Anything else in `env` is ignored.
    pub fn load_from(
        paths: Vec<PathBuf>,
        env: config::Map<String, String>,
    ) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();
        for path in paths {
            builder = builder.add_source(File::from(path).required(false));
        }

        let bare: config::Map<String, String> = env
            .iter()
            .filter(|(key, _)| BARE_ENV_VARS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        builder = builder
            .add_source(Environment::default().source(Some(bare)).try_parsing(true))
            .add_source(
                Environment::with_prefix("PLAYBOOK")
                    .source(Some(env))
                    .try_parsing(true),
            );

        Self::build(builder)
    }

    /// Parse settings from TOML text alone, without touching the environment.
    pub fn from_toml_str(toml: &str) -> Result<Self, SettingsError> {
        Self::build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.server_name.trim().is_empty() {
            return Err(SettingsError::InvalidValue {
                key: "server_name".to_string(),
                message: "Must not be empty".to_string(),
            });
        }

        if self.port == 0 {
            return Err(SettingsError::InvalidValue {
                key: "port".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Unprefixed variables honoured for compatibility with existing deployments.
pub const BARE_ENV_VARS: [&str; 4] = ["SERVER_NAME", "PORT", "ENVIRONMENT", "LOG_LEVEL"];

fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("playbook.toml"));
    }

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("playbook-mcp").join("config.toml"));
    }

    paths
}

/// Load `.env` files from the working directory and the user config dir into
/// the process environment. Returns the files that exist but failed to load,
/// so the caller can report them once logging is up.
pub fn load_dotenv_files() -> Vec<(PathBuf, dotenvy::Error)> {
    let mut paths = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".env"));
    }
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("playbook-mcp").join(".env"));
    }

    load_dotenv_from(paths)
}

fn load_dotenv_from(paths: Vec<PathBuf>) -> Vec<(PathBuf, dotenvy::Error)> {
    paths
        .into_iter()
        .filter(|path| path.exists())
        .filter_map(|path| dotenvy::from_path(&path).err().map(|e| (path, e)))
        .collect()
}
