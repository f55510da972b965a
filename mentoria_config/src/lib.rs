use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable holding a colon-separated list of additional config
/// files, loaded after the default one.
pub const CONFIG_PATH_ENV_VAR: &str = "MENTORIA_CONFIG";

/// Loads the default config file, any files listed in [`CONFIG_PATH_ENV_VAR`]
/// and finally scalar overrides from `MENTORIA_*` environment variables
/// (e.g. `MENTORIA_DELIVERY__API_KEY`).
pub fn load() -> anyhow::Result<Config> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
    if let Ok(list) = std::env::var(CONFIG_PATH_ENV_VAR) {
        paths.extend(list.split(':').filter(|p| !p.is_empty()).map(PathBuf::from));
    }
    load_paths(&paths)
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(Environment::with_prefix("MENTORIA").separator("__"))
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub delivery: DeliveryConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct DeliveryConfig {
    /// Credential for the delivery API. An empty key is accepted and surfaces
    /// as a delivery failure on the first send, never as a startup error.
    #[serde(default)]
    pub api_key: String,
    pub endpoint_override: Option<Url>,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub from: String,
    pub to: String,
    pub subject: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let config = load_paths(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        assert!(!config.contact.from.is_empty());
        assert!(!config.contact.to.is_empty());
    }
}
