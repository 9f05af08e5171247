use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use cuptrack_core::config::DetectorConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the configuration to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save the default detector configuration as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = DetectorConfig::default();
    let rendered = toml::to_string_pretty(&config).context("Failed to render configuration")?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write config to {}", path.display()))?;
            println!("Default config saved to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
