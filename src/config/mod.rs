mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;

/// Loads the configuration from `CONFIG_PATH` (default `config.yaml`) and
/// the process environment. Fails if no API key is available, so the
/// server never starts without one.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(&config_path, |name| env::var(name).ok()).await
}

pub async fn load_from<F>(config_path: impl AsRef<Path>, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let config_path = config_path.as_ref();
    debug!("Loading configuration from: {}", config_path.display());

    let config_str = match tokio::fs::read_to_string(config_path).await {
        Ok(contents) => Some(contents),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No configuration file found, using defaults");
            None
        }
        Err(e) => return Err(e.into()),
    };

    from_sources(config_str.as_deref(), lookup)
}

/// Builds a config from optional YAML text, then applies environment
/// overrides read through `lookup`.
pub fn from_sources<F>(yaml: Option<&str>, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config: Config = match yaml {
        Some(s) if !s.trim().is_empty() => serde_yaml::from_str(s)?,
        _ => Config::default(),
    };

    let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(key) = var("OPENAI_API_KEY") {
        config.llm.api_key = key;
    }
    if let Some(model) = var("OPENAI_MODEL") {
        config.llm.model = model;
    }
    if let Some(base_url) = var("OPENAI_BASE_URL") {
        config.llm.base_url = base_url;
    }
    if let Some(host) = var("HOST") {
        config.server.host = host;
    }
    if let Some(port) = var("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }

    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.llm.api_key.trim().is_empty() {
        return Err(Error::config(
            "OPENAI_API_KEY not set in environment variables",
        ));
    }
    if config.llm.model.trim().is_empty() {
        return Err(Error::config("llm.model must not be empty"));
    }
    if !config.server.path.starts_with('/') {
        return Err(Error::config(format!(
            "server.path must start with '/': '{}'",
            config.server.path
        )));
    }
    validate_route_path(&config.server.path)?;
    Ok(())
}

/// Rejects anything axum would treat as a capture or wildcard, and empty
/// segments. The route is served literally.
fn validate_route_path(path: &str) -> Result<()> {
    if let Some(c) = path.chars().find(|c| matches!(c, '*' | ':' | '{' | '}')) {
        return Err(Error::config(format!(
            "server.path must be a literal path, found '{}' in '{}'",
            c, path
        )));
    }
    if path.len() > 1 && path[1..].split('/').any(str::is_empty) {
        return Err(Error::config(format!(
            "server.path must not contain empty segments: '{}'",
            path
        )));
    }
    Ok(())
}
