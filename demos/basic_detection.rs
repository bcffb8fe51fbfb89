//! Basic example of scanning two short tracks for conflicts.
//!
//! Run with: cargo run --example basic_detection

use conflict_detector::{detect_conflicts, report, DetectorConfig, TrackPoint};

fn main() {
    // Pedestrian crossing along +x, sampled on the 0.16s export grid
    let ped: Vec<TrackPoint> = (0..5)
        .map(|i| TrackPoint {
            time: i as f64 * 0.16,
            x: i as f64 * 0.2,
            y: 0.0,
            vx: 1.25,
            vy: 0.0,
            heading: 0.0,
        })
        .collect();

    // Motorcycle approaching along -x on the same grid
    let moto: Vec<TrackPoint> = (0..5)
        .map(|i| TrackPoint {
            time: i as f64 * 0.16,
            x: 3.0 - i as f64 * 0.8,
            y: 0.2,
            vx: -5.0,
            vy: 0.0,
            heading: 180.0,
        })
        .collect();

    println!("Conflict Detection Examples\n");

    // Strict matching: same grid slot, centers within a meter
    let config = DetectorConfig::default();
    println!(
        "1. Default gates (±{}s, ≤{}m):",
        config.time_buffer, config.distance_threshold
    );
    let conflicts = detect_conflicts(&ped, &moto, &config);
    println!("{}", report::summary(&conflicts, &config));

    // Relaxed matching: one export frame of drift, wider distance gate
    let relaxed = DetectorConfig {
        time_buffer: 0.16,
        distance_threshold: 2.0,
        ..DetectorConfig::default()
    };
    println!(
        "2. Relaxed gates (±{}s, ≤{}m):",
        relaxed.time_buffer, relaxed.distance_threshold
    );
    let conflicts = detect_conflicts(&ped, &moto, &relaxed);
    println!("{}", report::summary(&conflicts, &relaxed));

    // Tracks a second apart never match under the default buffer
    let late_moto: Vec<TrackPoint> = moto
        .iter()
        .map(|m| TrackPoint {
            time: m.time + 1.0,
            ..*m
        })
        .collect();
    println!("3. Same geometry, shifted one second:");
    let conflicts = detect_conflicts(&ped, &late_moto, &config);
    println!("{}", report::summary(&conflicts, &config));
}
