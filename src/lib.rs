//! # Conflict Detector
//!
//! Spatio-temporal conflict detection between road-user trajectories.
//!
//! Two independently recorded tracks (a pedestrian and a motorcycle) are
//! aligned onto a common time grid, scanned pairwise for temporal and spatial
//! proximity, refined with rotated bounding-box geometry, and reduced to a
//! de-duplicated table of conflict records carrying a derived risk metric
//! (ATTC).
//!
//! ## Features
//!
//! - **`parallel`** - Scan pedestrian points in parallel with rayon
//! - **`synth`** - Synthetic PET dataset generation
//! - **`full`** - Enable all features
//!
//! ## Quick Start
//!
//! ```rust
//! use conflict_detector::{detect_conflicts, DetectorConfig, TrackPoint};
//!
//! let ped = vec![
//!     TrackPoint { time: 1.28, x: 0.0, y: 0.0, vx: 1.2, vy: 0.0, heading: 0.0 },
//! ];
//! let moto = vec![
//!     TrackPoint { time: 1.28, x: 0.5, y: 0.0, vx: -4.0, vy: 0.2, heading: 180.0 },
//! ];
//!
//! let conflicts = detect_conflicts(&ped, &moto, &DetectorConfig::default());
//! assert_eq!(conflicts.len(), 1);
//! assert!(conflicts[0].center_distance <= 1.0);
//! ```

use std::collections::HashSet;

use log::{debug, info};

pub mod error;
pub mod geometry;
pub mod import;
pub mod report;

#[cfg(feature = "synth")]
pub mod synth;

pub use error::Error;
pub use geo::Point;
pub use geometry::{center_distance, min_corner_distance, rotated_corners, round_to_interval};
pub use import::{load_track, read_track};
pub use report::summary;

// ============================================================================
// Core Types
// ============================================================================

/// One observed sample of a road user's smoothed trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    /// Observation timestamp, seconds
    pub time: f64,
    /// Smoothed planar position, meters
    pub x: f64,
    /// Smoothed planar position, meters
    pub y: f64,
    /// Smoothed planar velocity, m/s
    pub vx: f64,
    /// Smoothed planar velocity, m/s
    pub vy: f64,
    /// Heading angle in degrees, counter-clockwise from the +x axis
    pub heading: f64,
}

impl TrackPoint {
    /// Planar position as a point.
    #[inline]
    pub fn position(&self) -> Point<f64> {
        Point::new(self.x, self.y)
    }
}

/// Footprint of a road user as an oriented rectangle, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSize {
    /// Extent along the local forward (+x) axis
    pub length: f64,
    /// Extent along the local lateral (+y) axis
    pub width: f64,
}

impl BoxSize {
    pub const fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }
}

/// Configuration for conflict detection.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Sampling granularity the raw timestamps were exported at; both tracks
    /// are aligned onto multiples of this before matching.
    /// Default: 0.16 seconds
    pub export_interval: f64,

    /// Temporal tolerance between aligned timestamps. With 0.0, only points
    /// landing on the same grid slot match; 0.16-0.32 admits one to two
    /// export frames of drift.
    /// Default: 0.0 seconds
    pub time_buffer: f64,

    /// Center-to-center distance gate applied to raw positions.
    /// Default: 1.0 meters
    pub distance_threshold: f64,

    /// Pedestrian footprint. Default: 0.3m x 0.3m
    pub ped_box: BoxSize,

    /// Motorcycle footprint. Default: 1.87m x 0.64m
    pub moto_box: BoxSize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            export_interval: 0.16,
            time_buffer: 0.0,
            distance_threshold: 1.0,
            ped_box: BoxSize::new(0.3, 0.3),
            moto_box: BoxSize::new(1.87, 0.64),
        }
    }
}

/// One qualifying pedestrian/motorcycle proximity event.
///
/// Records are immutable once emitted by the scan; de-duplication may drop a
/// record but never alters one.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    /// Raw pedestrian timestamp, seconds
    pub ped_time: f64,
    /// Grid-aligned pedestrian timestamp, seconds
    pub ped_time_rounded: f64,
    /// Raw motorcycle timestamp, seconds
    pub moto_time: f64,
    /// Grid-aligned motorcycle timestamp, seconds
    pub moto_time_rounded: f64,
    /// Signed aligned-time difference, motorcycle minus pedestrian
    pub time_diff: f64,
    /// Center-to-center distance at the matched instant, meters
    pub center_distance: f64,
    /// Smallest corner-to-corner distance of the two footprints, meters.
    /// Recorded for every emitted record; nothing filters on it.
    pub min_corner_distance: f64,
    pub ped_x: f64,
    pub ped_y: f64,
    pub moto_x: f64,
    pub moto_y: f64,
    pub ped_vx: f64,
    pub ped_vy: f64,
    pub moto_vx: f64,
    pub moto_vy: f64,
    pub ped_ax: f64,
    pub ped_ay: f64,
    pub moto_ax: f64,
    pub moto_ay: f64,
    pub ped_heading: f64,
    pub moto_heading: f64,
    /// Derived risk score: closing speed plus a single-axis acceleration
    /// term scaled by the export interval. Not a standard time-to-collision
    /// definition; kept as defined for this dataset.
    pub attc: f64,
}

// ============================================================================
// Detection Pipeline
// ============================================================================

/// Scan both tracks pairwise and emit every qualifying conflict record.
///
/// For each pedestrian point (outer, row order) and each motorcycle point
/// (inner, row order), a pair is emitted when the aligned timestamps fall
/// within `time_buffer` of each other and the raw centers are within
/// `distance_threshold`. The refined corner distance is then computed and
/// recorded on the emitted record.
///
/// The raw sequence may contain several records whose aligned timestamps
/// collide on the same grid slot; [`dedup_conflicts`] collapses those.
/// [`detect_conflicts`] runs both stages.
pub fn scan_conflicts(
    ped: &[TrackPoint],
    moto: &[TrackPoint],
    config: &DetectorConfig,
) -> Vec<Conflict> {
    let moto_rounded = rounded_times(moto, config.export_interval);

    let conflicts: Vec<Conflict> = ped
        .iter()
        .flat_map(|p| {
            let p_rounded = round_to_interval(p.time, config.export_interval);
            scan_point(p, p_rounded, moto, &moto_rounded, config)
        })
        .collect();

    info!("pairwise scan emitted {} raw conflict records", conflicts.len());
    conflicts
}

/// Scan pedestrian points in parallel.
///
/// Produces the identical ordered record sequence as [`scan_conflicts`]:
/// each pedestrian point's candidates are collected independently, and
/// flattening keeps pedestrian-row-major, motorcycle-row-minor order, so
/// de-duplication sees the same sequence as the sequential scan.
#[cfg(feature = "parallel")]
pub fn scan_conflicts_parallel(
    ped: &[TrackPoint],
    moto: &[TrackPoint],
    config: &DetectorConfig,
) -> Vec<Conflict> {
    use rayon::prelude::*;

    let moto_rounded = rounded_times(moto, config.export_interval);

    let per_point: Vec<Vec<Conflict>> = ped
        .par_iter()
        .map(|p| {
            let p_rounded = round_to_interval(p.time, config.export_interval);
            scan_point(p, p_rounded, moto, &moto_rounded, config)
        })
        .collect();

    let conflicts: Vec<Conflict> = per_point.into_iter().flatten().collect();

    info!("pairwise scan emitted {} raw conflict records", conflicts.len());
    conflicts
}

/// Drop records that collide on the same aligned-timestamp pair, keeping the
/// first in scan order.
///
/// Several raw timestamps can round onto one grid slot; of the records that
/// share a `(ped_time_rounded, moto_time_rounded)` pair, only the earliest
/// emitted survives.
pub fn dedup_conflicts(conflicts: Vec<Conflict>) -> Vec<Conflict> {
    let before = conflicts.len();

    let mut seen = HashSet::new();
    let deduped: Vec<Conflict> = conflicts
        .into_iter()
        .filter(|c| seen.insert((time_key(c.ped_time_rounded), time_key(c.moto_time_rounded))))
        .collect();

    debug!("de-duplication dropped {} records", before - deduped.len());
    deduped
}

/// Run the full pipeline: pairwise scan, then de-duplication.
pub fn detect_conflicts(
    ped: &[TrackPoint],
    moto: &[TrackPoint],
    config: &DetectorConfig,
) -> Vec<Conflict> {
    let conflicts = dedup_conflicts(scan_conflicts(ped, moto, config));
    info!("{} conflict records after de-duplication", conflicts.len());
    conflicts
}

/// Parallel variant of [`detect_conflicts`]. Deterministic: see
/// [`scan_conflicts_parallel`].
#[cfg(feature = "parallel")]
pub fn detect_conflicts_parallel(
    ped: &[TrackPoint],
    moto: &[TrackPoint],
    config: &DetectorConfig,
) -> Vec<Conflict> {
    let conflicts = dedup_conflicts(scan_conflicts_parallel(ped, moto, config));
    info!("{} conflict records after de-duplication", conflicts.len());
    conflicts
}

// ============================================================================
// Scan Internals
// ============================================================================

fn rounded_times(points: &[TrackPoint], interval: f64) -> Vec<f64> {
    points
        .iter()
        .map(|p| round_to_interval(p.time, interval))
        .collect()
}

/// All qualifying records for one pedestrian point, in motorcycle row order.
fn scan_point(
    ped: &TrackPoint,
    ped_rounded: f64,
    moto: &[TrackPoint],
    moto_rounded: &[f64],
    config: &DetectorConfig,
) -> Vec<Conflict> {
    let time_window = (
        ped_rounded - config.time_buffer,
        ped_rounded + config.time_buffer,
    );

    let mut out = Vec::new();
    for (m, &m_rounded) in moto.iter().zip(moto_rounded) {
        // Temporal gate: window containment and absolute difference are both
        // part of the matching contract, even though the bounds are symmetric.
        if m_rounded < time_window.0 || m_rounded > time_window.1 {
            continue;
        }
        if (m_rounded - ped_rounded).abs() > config.time_buffer {
            continue;
        }

        // Spatial pre-filter on raw centers
        let center = center_distance(ped.position(), m.position());
        if center > config.distance_threshold {
            continue;
        }

        // Geometric refinement; the result is recorded, never filtered on
        let ped_corners = rotated_corners(ped.position(), ped.heading, config.ped_box);
        let moto_corners = rotated_corners(m.position(), m.heading, config.moto_box);
        let min_corner = min_corner_distance(&ped_corners, &moto_corners);

        out.push(build_conflict(
            ped,
            ped_rounded,
            m,
            m_rounded,
            center,
            min_corner,
            config.export_interval,
        ));
    }
    out
}

fn build_conflict(
    ped: &TrackPoint,
    ped_rounded: f64,
    moto: &TrackPoint,
    moto_rounded: f64,
    center: f64,
    min_corner: f64,
    interval: f64,
) -> Conflict {
    // Acceleration channels mirror the smoothed velocities; the upstream
    // export carries no acceleration columns.
    // TODO: feed real acceleration channels once the export provides them.
    let ped_ax = ped.vx;
    let ped_ay = ped.vy;
    let moto_ax = moto.vx;
    let moto_ay = moto.vy;

    let closing_speed = ((ped.vx - moto.vx).powi(2) + (ped.vy - moto.vy).powi(2)).sqrt();
    let attc = closing_speed + (ped_ax * ped_ax + (moto_ay * moto_ay).sqrt()) * interval;

    Conflict {
        ped_time: ped.time,
        ped_time_rounded: ped_rounded,
        moto_time: moto.time,
        moto_time_rounded: moto_rounded,
        time_diff: moto_rounded - ped_rounded,
        center_distance: center,
        min_corner_distance: min_corner,
        ped_x: ped.x,
        ped_y: ped.y,
        moto_x: moto.x,
        moto_y: moto.y,
        ped_vx: ped.vx,
        ped_vy: ped.vy,
        moto_vx: moto.vx,
        moto_vy: moto.vy,
        ped_ax,
        ped_ay,
        moto_ax,
        moto_ay,
        ped_heading: ped.heading,
        moto_heading: moto.heading,
        attc,
    }
}

/// Aligned-timestamp equality key; collapses -0.0 and 0.0 onto one key.
fn time_key(t: f64) -> u64 {
    (t + 0.0).to_bits()
}

// ============================================================================
// Tests
// ============================================================================
