use anyhow::{Context, Result};
use notecraft::config::{Config, API_KEY_ENV};
use std::path::Path;
use tracing::info;

/// Render the default configuration as commented TOML
pub fn default_config_toml() -> Result<String> {
    let body = toml::to_string_pretty(&Config::default())
        .context("Failed to serialize default config")?;
    Ok(format!(
        "# NoteCraft Configuration\n\
         #\n\
         # The model API key is read from {} unless [model] api_key is set.\n\
         # Without a key the AI endpoints answer 501.\n\n{}",
        API_KEY_ENV, body
    ))
}

pub fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("Config file '{}' already exists", path.display());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    std::fs::write(path, default_config_toml()?)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    info!("Created config file: {}", path.display());
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
