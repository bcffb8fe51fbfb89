//! Generate the synthetic PET dataset.
//!
//! Run with: cargo run --example generate_pet_data --features synth

use conflict_detector::synth::{generate_events, write_csv, SynthConfig};

fn main() {
    let config = SynthConfig {
        seed: Some(42),
        ..SynthConfig::default()
    };

    let events = generate_events(&config);
    write_csv("car_pet_data.csv", &events).expect("failed to write car_pet_data.csv");

    println!("CSV file generated with {} data points!", events.len());
}
