use std::{collections::HashMap, fs, io, path::Path};

use anyhow::{bail, Context};
use url::Url;

pub const SETTINGS_FILE: &str = "citas.toml";
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/citas/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    /// Applies a command-line endpoint, which wins over every other layer.
    pub fn with_api_url_override(mut self, api_url: Option<String>) -> anyhow::Result<Self> {
        if let Some(api_url) = api_url {
            validate_api_url(&api_url)?;
            self.api_url = api_url;
        }
        Ok(self)
    }
}

/// Defaults, then `citas.toml` in the working directory, then environment.
pub fn load_settings() -> anyhow::Result<Settings> {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg = toml::from_str::<HashMap<String, String>>(&raw)
                .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
            if let Some(v) = file_cfg.get("api_url") {
                settings.api_url = v.clone();
            }
            if let Some(v) = file_cfg.get("log_filter") {
                settings.log_filter = v.clone();
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()));
        }
    }

    if let Some(v) = env("CITAS_API_URL") {
        settings.api_url = v;
    }
    if let Some(v) = env("APP__API_URL") {
        settings.api_url = v;
    }

    if let Some(v) = env("CITAS_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    validate_api_url(&settings.api_url)?;
    Ok(settings)
}

fn validate_api_url(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("invalid appointments endpoint '{raw}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "appointments endpoint '{raw}' must use http or https, not '{}'",
            url.scheme()
        );
    }
    Ok(url)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
