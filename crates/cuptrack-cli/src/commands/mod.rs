pub mod config;
pub mod detect;
pub mod edges;
pub mod track;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use cuptrack_core::config::DetectorConfig;

/// Load the detector configuration from a TOML file, falling back to the
/// defaults, then apply command-line overrides.
pub fn load_detector_config(path: Option<&Path>, threshold: Option<u8>) -> Result<DetectorConfig> {
    let mut config = match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => DetectorConfig::default(),
    };

    if let Some(threshold) = threshold {
        config.edge_threshold = threshold;
    }

    config.validate().context("Invalid detector configuration")?;
    debug!(?config, "detector configuration loaded");
    Ok(config)
}

/// File name of `path` as printable text.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("?")
        .to_string()
}
