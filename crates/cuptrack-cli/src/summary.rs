use console::Style;

use crate::commands::detect::{CircleRecord, DetectionRecord};
use crate::commands::track::TrackRecord;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    found: Style,
    missing: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            found: Style::new().green(),
            missing: Style::new().dim().yellow(),
        }
    }
}

fn circle_cell(circle: &Option<CircleRecord>) -> String {
    match circle {
        Some(c) => format!("({:.1}, {:.1}) r={:.1}", c.x, c.y, c.r),
        None => String::from("not detected"),
    }
}

pub fn print_single_detection(record: &DetectionRecord) {
    let s = Styles::new();

    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Image"),
        s.value.apply_to(&record.image)
    );
    match &record.circle {
        Some(c) => println!(
            "  {:<14}{}",
            s.label.apply_to("Circle"),
            s.found
                .apply_to(format!("({:.1}, {:.1}) r={:.1}", c.x, c.y, c.r))
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Circle"),
            s.missing.apply_to("not detected")
        ),
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Confidence"),
        s.value.apply_to(format!("{:.2}", record.confidence))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Latency"),
        s.value.apply_to(format!("{:.1}ms", record.elapsed_ms))
    );
    println!();
}

pub fn print_detection_report(records: &[DetectionRecord]) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Detection Report"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!(
        "  {}",
        s.header.apply_to(format!(
            "{:<24}{:<24}{:>6}{:>10}",
            "Image", "Circle", "Conf", "Time"
        ))
    );
    for record in records {
        // Pad the cell before styling so the ANSI codes do not shift the
        // columns that follow.
        let cell = format!("{:<24}", circle_cell(&record.circle));
        let cell = if record.circle.is_some() {
            s.found.apply_to(cell)
        } else {
            s.missing.apply_to(cell)
        };
        println!(
            "  {:<24}{}{:>6.2}{:>10}",
            record.image,
            cell,
            record.confidence,
            format!("{:.1}ms", record.elapsed_ms)
        );
    }

    let detected = records.iter().filter(|r| r.circle.is_some()).count();
    let avg_ms =
        records.iter().map(|r| r.elapsed_ms).sum::<f64>() / records.len().max(1) as f64;

    println!();
    println!(
        "  {:<16}{}",
        s.label.apply_to("Detection rate"),
        s.value.apply_to(format!("{detected}/{}", records.len()))
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Avg latency"),
        s.value.apply_to(format!("{avg_ms:.1}ms"))
    );
    println!();
}

pub fn print_track_report(records: &[TrackRecord]) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Track Report"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!(
        "  {}",
        s.header.apply_to(format!(
            "{:>5}  {:<20}{:<24}{:>5}  {}",
            "Frame", "Image", "Circle", "Conf", "State"
        ))
    );
    for record in records {
        let cell = format!("{:<24}", circle_cell(&record.circle));
        let cell = if record.circle.is_some() {
            s.found.apply_to(cell)
        } else {
            s.missing.apply_to(cell)
        };
        let state = if record.tracking {
            s.found.apply_to("tracking")
        } else {
            s.missing.apply_to("lost")
        };
        println!(
            "  {:>5}  {:<20}{}{:>5.2}  {}",
            record.frame, record.image, cell, record.confidence, state
        );
    }

    let detected = records.iter().filter(|r| r.circle.is_some()).count();
    let avg_ms =
        records.iter().map(|r| r.elapsed_ms).sum::<f64>() / records.len().max(1) as f64;
    let tracking = records.last().map(|r| r.tracking).unwrap_or(false);

    println!();
    println!(
        "  {:<16}{}",
        s.label.apply_to("Detection rate"),
        s.value.apply_to(format!("{detected}/{}", records.len()))
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Avg latency"),
        s.value.apply_to(format!("{avg_ms:.1}ms"))
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Final state"),
        if tracking {
            s.found.apply_to("tracking")
        } else {
            s.missing.apply_to("lost")
        }
    );
    println!();
}
