use std::path::Path;

use anyhow::{ensure, Context, Result};

use crate::models::Config;

/// Load the board config and sanity-check it: everything the client does
/// hangs off `api.base_url`, so an empty one is rejected up front.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    ensure!(
        !config.api.base_url.trim().is_empty(),
        "api.base_url is empty in {}",
        path.display()
    );
    Ok(config)
}
