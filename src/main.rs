use std::path::Path;

use dirt_detector::cloud::OrganizedPointCloud;
use dirt_detector::config::load_config;
use dirt_detector::{DirtDetector, DirtParams};
use nalgebra::Point3;

fn main() {
    // Demo stub: synthesizes a flat floor cloud with a dark stain patch and
    // runs the detector. Pass a JSON config path to override parameters.
    let params = match std::env::args().nth(1) {
        Some(path) => match load_config(Path::new(&path)) {
            Ok(config) => config.params(),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => DirtParams::default(),
    };

    let cloud = synthetic_floor(160, 120);
    let mut detector = DirtDetector::new(params);
    let report = detector.process_cloud(&cloud);

    println!(
        "floor={} regions={} latency_ms={:.3}",
        report.result.floor_found,
        report.result.regions.len(),
        report.result.latency_ms
    );
    for region in &report.result.regions {
        println!(
            "  region at ({:.1}, {:.1}) size {:.1}x{:.1} angle {:.1}",
            region.center[0], region.center[1], region.size[0], region.size[1], region.angle_deg
        );
    }
}

fn synthetic_floor(w: usize, h: usize) -> OrganizedPointCloud {
    let mut positions = Vec::with_capacity(w * h);
    let mut colors = Vec::with_capacity(w * h);
    for row in 0..h {
        for col in 0..w {
            positions.push(Some(Point3::new(
                col as f32 * 0.01,
                row as f32 * 0.01,
                1.0,
            )));
            let stain = (70..80).contains(&col) && (55..63).contains(&row);
            colors.push(if stain { [40, 30, 25] } else { [180, 175, 168] });
        }
    }
    OrganizedPointCloud::new(w, h, positions, colors).expect("buffer sizes match")
}
