use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use cuptrack_core::detector::CupDetector;

use crate::commands::load_detector_config;

#[derive(Args)]
pub struct EdgesArgs {
    /// Input image (PNG, JPEG)
    pub file: PathBuf,

    /// Output path for the edge map (default: <stem>_edges.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the working-resolution luma grid
    #[arg(long)]
    pub luma: bool,

    /// Detector configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the edge magnitude threshold
    #[arg(short, long)]
    pub threshold: Option<u8>,
}

pub fn run(args: &EdgesArgs) -> Result<()> {
    let config = load_detector_config(args.config.as_deref(), args.threshold)?;
    let mut detector = CupDetector::with_config(config)?;

    let img = image::open(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?
        .to_rgba8();
    println!(
        "Loaded image: {} ({}x{})",
        args.file.display(),
        img.width(),
        img.height()
    );

    let inspection = detector.inspect(&img)?;

    let edges_path = args
        .output
        .clone()
        .unwrap_or_else(|| derived_path(&args.file, "edges"));
    inspection
        .edges
        .save(&edges_path)
        .with_context(|| format!("Failed to save {}", edges_path.display()))?;
    println!("Edge map saved to {}", edges_path.display());

    if args.luma {
        let luma_path = derived_path(&args.file, "luma");
        inspection
            .luma
            .save(&luma_path)
            .with_context(|| format!("Failed to save {}", luma_path.display()))?;
        println!("Luma grid saved to {}", luma_path.display());
    }

    Ok(())
}

fn derived_path(source: &Path, suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output");
    let parent = source.parent().unwrap_or_else(|| Path::new("."));
    parent.join(format!("{stem}_{suffix}.png"))
}
