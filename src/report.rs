//! # Console Reporting
//!
//! Renders the outcome of a detection run: either a count line followed by a
//! fixed projection of the conflict table, or a "no conflicts" line carrying
//! the active matching parameters so the reader knows what was searched for.

use crate::{Conflict, DetectorConfig};

/// Render a detection run as a printable summary.
///
/// # Example
///
/// ```rust
/// use conflict_detector::{report, DetectorConfig};
///
/// let summary = report::summary(&[], &DetectorConfig::default());
/// assert_eq!(summary, "No conflicts found (±0s, ≤1m)");
/// ```
pub fn summary(conflicts: &[Conflict], config: &DetectorConfig) -> String {
    if conflicts.is_empty() {
        return format!(
            "No conflicts found (±{}s, ≤{}m)",
            config.time_buffer, config.distance_threshold
        );
    }

    let mut out = format!(
        "Found {} conflict points (±{}s, ≤{}m):\n",
        conflicts.len(),
        config.time_buffer,
        config.distance_threshold
    );

    out.push_str(&format!(
        "{:>9} {:>9} {:>7} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}\n",
        "ped_t",
        "moto_t",
        "dt",
        "center",
        "corner",
        "ped_vx",
        "ped_vy",
        "moto_vx",
        "moto_vy",
        "ped_ax",
        "ped_ay",
        "moto_ax",
        "moto_ay",
        "attc"
    ));

    for c in conflicts {
        out.push_str(&format!(
            "{:>9.3} {:>9.3} {:>7.3} {:>8.3} {:>8.3} {:>8.3} {:>8.3} {:>8.3} {:>8.3} {:>8.3} {:>8.3} {:>8.3} {:>8.3} {:>8.3}\n",
            c.ped_time_rounded,
            c.moto_time_rounded,
            c.time_diff,
            c.center_distance,
            c.min_corner_distance,
            c.ped_vx,
            c.ped_vy,
            c.moto_vx,
            c.moto_vy,
            c.ped_ax,
            c.ped_ay,
            c.moto_ax,
            c.moto_ay,
            c.attc
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{detect_conflicts, TrackPoint};

    #[test]
    fn test_empty_summary_names_the_parameters() {
        let summary = summary(&[], &DetectorConfig::default());
        assert_eq!(summary, "No conflicts found (±0s, ≤1m)");
    }

    #[test]
    fn test_empty_summary_tracks_configured_parameters() {
        let config = DetectorConfig {
            time_buffer: 0.32,
            distance_threshold: 2.5,
            ..DetectorConfig::default()
        };
        let summary = summary(&[], &config);
        assert_eq!(summary, "No conflicts found (±0.32s, ≤2.5m)");
    }

    #[test]
    fn test_populated_summary_has_count_and_projection() {
        let ped = vec![TrackPoint {
            time: 1.28,
            x: 0.0,
            y: 0.0,
            vx: 1.2,
            vy: 0.0,
            heading: 0.0,
        }];
        let moto = vec![TrackPoint {
            time: 1.28,
            x: 0.5,
            y: 0.0,
            vx: -4.0,
            vy: 0.2,
            heading: 180.0,
        }];

        let config = DetectorConfig::default();
        let conflicts = detect_conflicts(&ped, &moto, &config);
        let summary = summary(&conflicts, &config);

        assert!(summary.starts_with("Found 1 conflict points (±0s, ≤1m):"));
        assert!(summary.contains("attc"));
        assert!(summary.contains("corner"));
        assert_eq!(summary.lines().count(), 3); // count line, header, one record
    }
}
