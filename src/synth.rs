//! # Synthetic PET Dataset Generation
//!
//! Produces a randomized table of vehicle encounter events for exercising
//! downstream post-encroachment-time (PET) analyses: an event time as an
//! `HH:MM` string, a vehicle identifier, and a PET value in seconds rounded
//! to two decimals.
//!
//! The generator is seedable, so a fixed seed reproduces the exact dataset.
//! Enabled with the **`synth`** feature.

use std::path::Path;

use chrono::{Duration, NaiveTime};
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::Error;

/// Configuration for synthetic event generation.
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// Number of events to generate. Default: 5000
    pub rows: usize,

    /// Start of the event-time window, minutes after midnight.
    /// Default: 0 (00:00)
    pub start_minute: u32,

    /// End of the event-time window (exclusive), minutes after midnight.
    /// Must be greater than `start_minute`. Default: 900 (15:00)
    pub end_minute: u32,

    /// Car pool divisor: IDs are drawn from `1..=rows / divisor`, so each
    /// car shows up in several events. Default: 3
    pub car_pool_divisor: usize,

    /// Fraction of events carrying a negative PET (the encroaching vehicle
    /// arrived first). Default: 0.10
    pub negative_fraction: f64,

    /// Lower bound of the negative PET range, seconds. Must be below zero.
    /// Default: -2.0
    pub negative_min: f64,

    /// Upper bound (exclusive) of the positive PET range, seconds.
    /// Default: 6.0
    pub positive_max: f64,

    /// RNG seed for reproducible datasets. Default: None (entropy-seeded)
    pub seed: Option<u64>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            rows: 5000,
            start_minute: 0,
            end_minute: 900,
            car_pool_divisor: 3,
            negative_fraction: 0.10,
            negative_min: -2.0,
            positive_max: 6.0,
            seed: None,
        }
    }
}

/// One synthetic encounter event, named as written to the CSV artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetEvent {
    #[serde(rename = "Time_of_Event")]
    pub time_of_event: String,

    #[serde(rename = "Car_ID")]
    pub car_id: u32,

    #[serde(rename = "PET")]
    pub pet: f64,
}

/// Generate `config.rows` random encounter events.
///
/// PET values are drawn as two pools, `floor(rows * negative_fraction)`
/// uniform in `[negative_min, 0)` and the remainder uniform in
/// `[0, positive_max)`, then shuffled together and rounded to two decimals.
/// Event times are uniform over the configured window; formatting as
/// `HH:MM` truncates the seconds.
///
/// # Example
///
/// ```rust
/// use conflict_detector::synth::{generate_events, SynthConfig};
///
/// let config = SynthConfig {
///     rows: 100,
///     seed: Some(42),
///     ..SynthConfig::default()
/// };
///
/// let events = generate_events(&config);
/// assert_eq!(events.len(), 100);
/// assert_eq!(events, generate_events(&config));
/// ```
pub fn generate_events(config: &SynthConfig) -> Vec<PetEvent> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let span_minutes = f64::from(config.end_minute - config.start_minute);
    let car_pool = (config.rows / config.car_pool_divisor).max(1) as u32;

    let times: Vec<String> = (0..config.rows)
        .map(|_| {
            let offset_minutes = f64::from(config.start_minute) + rng.gen_range(0.0..span_minutes);
            let time = NaiveTime::MIN + Duration::seconds((offset_minutes * 60.0) as i64);
            time.format("%H:%M").to_string()
        })
        .collect();

    let car_ids: Vec<u32> = (0..config.rows).map(|_| rng.gen_range(1..=car_pool)).collect();

    let negatives = (config.rows as f64 * config.negative_fraction) as usize;
    let mut pets: Vec<f64> = Vec::with_capacity(config.rows);
    for _ in 0..negatives {
        pets.push(rng.gen_range(config.negative_min..0.0));
    }
    for _ in negatives..config.rows {
        pets.push(rng.gen_range(0.0..config.positive_max));
    }
    pets.shuffle(&mut rng);

    times
        .into_iter()
        .zip(car_ids)
        .zip(pets)
        .map(|((time_of_event, car_id), pet)| PetEvent {
            time_of_event,
            car_id,
            pet: (pet * 100.0).round() / 100.0,
        })
        .collect()
}

/// Write events to a CSV artifact with columns `Time_of_Event,Car_ID,PET`.
pub fn write_csv<P: AsRef<Path>>(path: P, events: &[PetEvent]) -> Result<(), Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for event in events {
        writer.serialize(event)?;
    }
    writer.flush()?;

    info!("wrote {} synthetic events", events.len());
    Ok(())
}
