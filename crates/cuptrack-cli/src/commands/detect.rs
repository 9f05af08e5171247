use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use cuptrack_core::config::DetectorConfig;
use cuptrack_core::detector::CupDetector;
use cuptrack_core::tracker::Circle;

use crate::commands::{display_name, load_detector_config};
use crate::overlay;
use crate::summary;

#[derive(Args)]
pub struct DetectArgs {
    /// Input images (PNG, JPEG)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Detector configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the edge magnitude threshold
    #[arg(short, long)]
    pub threshold: Option<u8>,

    /// Write an annotated copy next to each input
    #[arg(short, long)]
    pub annotate: bool,

    /// Emit one JSON record per image instead of the report table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CircleRecord {
    pub x: f32,
    pub y: f32,
    pub r: f32,
}

impl From<Circle> for CircleRecord {
    fn from(circle: Circle) -> Self {
        Self {
            x: circle.x,
            y: circle.y,
            r: circle.r,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub image: String,
    pub circle: Option<CircleRecord>,
    pub confidence: f32,
    pub elapsed_ms: f64,
}

pub fn run(args: &DetectArgs) -> Result<()> {
    let config = load_detector_config(args.config.as_deref(), args.threshold)?;

    // Still images are independent, so each gets a fresh detector and the
    // batch fans out across threads.
    let records = args
        .files
        .par_iter()
        .map(|path| detect_one(path, &config, args.annotate))
        .collect::<Result<Vec<_>>>()?;

    if args.json {
        for record in &records {
            println!("{}", serde_json::to_string(record)?);
        }
    } else if let [record] = records.as_slice() {
        summary::print_single_detection(record);
    } else {
        summary::print_detection_report(&records);
    }

    Ok(())
}

fn detect_one(path: &Path, config: &DetectorConfig, annotate: bool) -> Result<DetectionRecord> {
    let img = image::open(path)
        .with_context(|| format!("Failed to load {}", path.display()))?
        .to_rgba8();

    let mut detector = CupDetector::with_config(config.clone())?;

    let start = Instant::now();
    let circle = detector.detect(&img)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if annotate {
        // Misses get a marked copy too: one output per input.
        let mut annotated = img;
        match circle {
            Some(ref circle) => overlay::draw_detection(&mut annotated, circle),
            None => overlay::draw_miss(&mut annotated),
        }
        let out_path = annotated_path(path);
        annotated
            .save(&out_path)
            .with_context(|| format!("Failed to save {}", out_path.display()))?;
    }

    Ok(DetectionRecord {
        image: display_name(path),
        circle: circle.map(CircleRecord::from),
        confidence: detector.confidence(),
        elapsed_ms,
    })
}

/// Derive the annotated output path next to the input file.
fn annotated_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output");
    let ext = source
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("png");
    let parent = source.parent().unwrap_or_else(|| Path::new("."));
    parent.join(format!("{stem}_detect.{ext}"))
}
