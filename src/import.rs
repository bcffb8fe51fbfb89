//! # Trajectory Table Import
//!
//! Loads a single road user's track out of a CSV trajectory table.
//!
//! Each input table holds smoothed samples for many track IDs; the loader
//! validates the expected columns up front, then keeps only the rows whose
//! `Track ID` matches the requested one, in file order. An empty selection is
//! a valid (empty) track, not an error.

use std::fs::File;
use std::io;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::Error;
use crate::TrackPoint;

/// Columns every trajectory table must carry.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Track ID",
    "TimeStamp",
    "x_smooth",
    "y_smooth",
    "vx_smooth",
    "vy_smooth",
    "HA",
];

/// One raw table row, named as exported by the tracking pipeline.
#[derive(Debug, Deserialize)]
struct TrackRow {
    #[serde(rename = "Track ID")]
    track_id: i64,
    #[serde(rename = "TimeStamp")]
    time: f64,
    x_smooth: f64,
    y_smooth: f64,
    vx_smooth: f64,
    vy_smooth: f64,
    #[serde(rename = "HA")]
    heading: f64,
}

impl From<TrackRow> for TrackPoint {
    fn from(row: TrackRow) -> Self {
        TrackPoint {
            time: row.time,
            x: row.x_smooth,
            y: row.y_smooth,
            vx: row.vx_smooth,
            vy: row.vy_smooth,
            heading: row.heading,
        }
    }
}

/// Read the track with the given ID from CSV data.
///
/// Fails fast with [`Error::MissingColumn`] naming the first absent required
/// column; malformed cell values surface as [`Error::Csv`] with the offending
/// record position.
///
/// # Example
///
/// ```rust
/// use conflict_detector::import::read_track;
///
/// let data = "\
/// Track ID,TimeStamp,x_smooth,y_smooth,vx_smooth,vy_smooth,HA
/// 382,1.28,0.0,0.0,1.2,0.0,0.0
/// 399,1.28,0.5,0.0,-4.0,0.2,180.0
/// ";
///
/// let track = read_track(data.as_bytes(), 382).unwrap();
/// assert_eq!(track.len(), 1);
/// assert_eq!(track[0].x, 0.0);
/// ```
pub fn read_track<R: io::Read>(reader: R, track_id: i64) -> Result<Vec<TrackPoint>, Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == required) {
            return Err(Error::MissingColumn(required.to_string()));
        }
    }

    let mut points = Vec::new();
    for row in csv_reader.deserialize::<TrackRow>() {
        let row = row?;
        if row.track_id != track_id {
            continue;
        }
        points.push(row.into());
    }

    info!("selected {} points for track {}", points.len(), track_id);
    Ok(points)
}

/// Read the track with the given ID from a CSV file on disk.
pub fn load_track<P: AsRef<Path>>(path: P, track_id: i64) -> Result<Vec<TrackPoint>, Error> {
    let file = File::open(path)?;
    read_track(file, track_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Track ID,TimeStamp,x_smooth,y_smooth,vx_smooth,vy_smooth,HA
382,1.28,0.0,0.1,1.2,0.0,0.0
382,1.44,0.2,0.1,1.2,0.0,0.0
399,1.28,0.5,0.0,-4.0,0.2,180.0
382,1.60,0.4,0.1,1.2,0.0,0.0
";

    #[test]
    fn test_selects_requested_track_in_file_order() {
        let track = read_track(SAMPLE.as_bytes(), 382).unwrap();

        assert_eq!(track.len(), 3);
        assert_eq!(track[0].time, 1.28);
        assert_eq!(track[1].time, 1.44);
        assert_eq!(track[2].time, 1.60);
        assert_eq!(track[0].heading, 0.0);
    }

    #[test]
    fn test_maps_all_columns() {
        let track = read_track(SAMPLE.as_bytes(), 399).unwrap();

        assert_eq!(track.len(), 1);
        let point = track[0];
        assert_eq!(point.x, 0.5);
        assert_eq!(point.y, 0.0);
        assert_eq!(point.vx, -4.0);
        assert_eq!(point.vy, 0.2);
        assert_eq!(point.heading, 180.0);
    }

    #[test]
    fn test_unknown_track_id_yields_empty_track() {
        let track = read_track(SAMPLE.as_bytes(), 7).unwrap();
        assert!(track.is_empty());
    }

    #[test]
    fn test_missing_column_is_named() {
        let data = "\
Track ID,TimeStamp,x_smooth,y_smooth,vx_smooth,vy_smooth
382,1.28,0.0,0.1,1.2,0.0
";
        let err = read_track(data.as_bytes(), 382).unwrap_err();
        assert!(matches!(err, Error::MissingColumn(column) if column == "HA"));
    }

    #[test]
    fn test_malformed_value_is_a_csv_error() {
        let data = "\
Track ID,TimeStamp,x_smooth,y_smooth,vx_smooth,vy_smooth,HA
382,1.28,not-a-number,0.1,1.2,0.0,0.0
";
        let err = read_track(data.as_bytes(), 382).unwrap_err();
        assert!(matches!(err, Error::Csv(_)));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let data = "\
Track ID,TimeStamp,x_smooth,y_smooth,vx_smooth,vy_smooth,HA,Frame
382,1.28,0.0,0.1,1.2,0.0,0.0,17
";
        let track = read_track(data.as_bytes(), 382).unwrap();
        assert_eq!(track.len(), 1);
    }
}
