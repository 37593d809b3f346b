mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(&config_path).await
}

pub async fn load_from(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    match tokio::fs::read_to_string(path).await {
        Ok(raw) => {
            let config: Config = serde_yaml::from_str(&raw)?;
            Ok(config)
        }
        // No config file is fine for a local tool; the built-in defaults
        // point at a stock Ollama install.
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", path);
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}
