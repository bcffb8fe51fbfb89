//! Detect conflicts between two trajectory tables stored as CSV.
//!
//! Run with: cargo run --example csv_report -- ped_smooth.csv moto_smooth.csv 382 399

use std::env;
use std::process;

use conflict_detector::{detect_conflicts, load_track, report, DetectorConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 5 {
        eprintln!("usage: csv_report <ped.csv> <moto.csv> <ped_track_id> <moto_track_id>");
        process::exit(2);
    }

    let ped_id: i64 = args[3].parse().expect("pedestrian track id must be an integer");
    let moto_id: i64 = args[4].parse().expect("motorcycle track id must be an integer");

    let ped = load_track(&args[1], ped_id).unwrap_or_else(|err| {
        eprintln!("failed to load {}: {}", args[1], err);
        process::exit(1);
    });
    let moto = load_track(&args[2], moto_id).unwrap_or_else(|err| {
        eprintln!("failed to load {}: {}", args[2], err);
        process::exit(1);
    });

    let config = DetectorConfig::default();
    let conflicts = detect_conflicts(&ped, &moto, &config);
    println!("{}", report::summary(&conflicts, &config));
}
