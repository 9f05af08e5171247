use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use cuptrack_core::detector::CupDetector;
use cuptrack_core::tracker::TrackState;

use crate::commands::detect::CircleRecord;
use crate::commands::{display_name, load_detector_config};
use crate::overlay;
use crate::summary;

#[derive(Args)]
pub struct TrackArgs {
    /// Frame images in playback order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Detector configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the edge magnitude threshold
    #[arg(short, long)]
    pub threshold: Option<u8>,

    /// Write annotated frames into this directory
    #[arg(long)]
    pub annotate_dir: Option<PathBuf>,

    /// Emit one JSON record per frame instead of the report table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRecord {
    pub frame: usize,
    pub image: String,
    pub circle: Option<CircleRecord>,
    pub confidence: f32,
    pub misses: u32,
    pub tracking: bool,
    pub elapsed_ms: f64,
}

pub fn run(args: &TrackArgs) -> Result<()> {
    let config = load_detector_config(args.config.as_deref(), args.threshold)?;
    let mut detector = CupDetector::with_config(config)?;

    if let Some(ref dir) = args.annotate_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    // Frames share one detector: the tracker state carries across them, so
    // they must run in order.
    let pb = if args.json {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(args.files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg:20} [{bar:40}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        pb.set_message("Tracking");
        pb
    };

    let mut records = Vec::with_capacity(args.files.len());
    for (frame, path) in args.files.iter().enumerate() {
        let img = image::open(path)
            .with_context(|| format!("Failed to load {}", path.display()))?
            .to_rgba8();

        let start = Instant::now();
        let circle = detector.detect(&img)?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        if let Some(ref dir) = args.annotate_dir {
            // Misses get a marked frame too: the annotated sequence has no
            // gaps.
            let mut annotated = img;
            match circle {
                Some(ref circle) => overlay::draw_detection(&mut annotated, circle),
                None => overlay::draw_miss(&mut annotated),
            }
            let out_path = match path.file_name() {
                Some(name) => dir.join(name),
                None => dir.join(format!("frame_{frame:04}.png")),
            };
            annotated
                .save(&out_path)
                .with_context(|| format!("Failed to save {}", out_path.display()))?;
        }

        records.push(TrackRecord {
            frame,
            image: display_name(path),
            circle: circle.map(CircleRecord::from),
            confidence: detector.confidence(),
            misses: detector.miss_count(),
            tracking: detector.state() == TrackState::Tracking,
            elapsed_ms,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    if args.json {
        for record in &records {
            println!("{}", serde_json::to_string(record)?);
        }
    } else {
        summary::print_track_report(&records);
    }

    Ok(())
}
