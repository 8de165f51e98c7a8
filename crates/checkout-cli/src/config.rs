//! # Config Loading
//!
//! Locates the store configuration for the demo binary.

use checkout_core::StoreConfig;
use tracing::info;

/// Where we look for the store config file, relative to the working
/// directory (the workspace root and two levels of crate directories).
const CONFIG_PATHS: [&str; 3] = [
    "config/store.toml",
    "../config/store.toml",
    "../../config/store.toml",
];

/// Load the store configuration.
///
/// Prefers `config/store.toml`; a present-but-unparseable file is an
/// error rather than a silent fallback. Without a file, environment
/// variables and defaults apply.
pub fn load_store_config() -> anyhow::Result<StoreConfig> {
    for path in CONFIG_PATHS {
        if let Ok(content) = std::fs::read_to_string(path) {
            let config = StoreConfig::from_toml(&content)
                .map_err(|e| anyhow::anyhow!("failed to parse {path}: {e}"))?;
            info!("Loaded store config from {path}");
            return Ok(config);
        }
    }

    info!("No store config file found, using environment and defaults");
    Ok(StoreConfig::from_env())
}
