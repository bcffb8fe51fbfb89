//! # Planar Geometry Utilities
//!
//! Core planar computation utilities for trajectory conflict analysis.
//!
//! This module provides the geometric operations used throughout the conflict
//! detection pipeline. All functions operate on metric planar coordinates
//! (meters on a local x/y plane) rather than geographic ones.
//!
//! ## Overview
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`round_to_interval`] | Snap a raw timestamp onto the export time grid |
//! | [`center_distance`] | Euclidean distance between two track positions |
//! | [`rotated_corners`] | Corners of an oriented bounding box |
//! | [`min_corner_distance`] | Smallest corner-to-corner distance of two boxes |
//!
//! ## Example
//!
//! ```rust
//! use conflict_detector::{geometry, BoxSize, Point};
//!
//! // Align a raw timestamp onto a 0.16s export grid
//! let aligned = geometry::round_to_interval(1.01, 0.16);
//!
//! // Footprint corners of a motorcycle heading 90 degrees (counter-clockwise)
//! let corners = geometry::rotated_corners(
//!     Point::new(0.0, 0.0),
//!     90.0,
//!     BoxSize::new(1.87, 0.64),
//! );
//! assert_eq!(corners.len(), 4);
//! println!("aligned to {aligned}s");
//! ```
//!
//! ## Conventions
//!
//! Headings are in degrees, counter-clockwise positive, with 0° aligned with
//! the local +x axis. Box corners are produced in a fixed order (front-right,
//! front-left, rear-left, rear-right relative to the unrotated local frame)
//! so downstream consumers always operate on the same four points.

use crate::BoxSize;
use geo::{Distance, Euclidean, Point};

// =============================================================================
// Time Grid Alignment
// =============================================================================

/// Snap a raw timestamp to the nearest multiple of the export interval.
///
/// Two independently recorded tracks carry timestamps that drift within one
/// export frame of each other; aligning both onto the same discrete grid
/// turns "recorded at (almost) the same time" into an exact match key.
///
/// Ties at exact half-interval boundaries round away from zero (the standard
/// library's [`f64::round`] behavior). This differs from round-half-to-even
/// at those boundaries and is pinned by tests.
///
/// The operation is idempotent: an already-aligned timestamp maps to itself.
///
/// # Example
///
/// ```rust
/// use conflict_detector::geometry::round_to_interval;
///
/// // 0.08 sits exactly halfway between grid slots 0.0 and 0.16
/// assert_eq!(round_to_interval(0.08, 0.16), 0.16);
/// assert_eq!(round_to_interval(-0.08, 0.16), -0.16);
/// assert_eq!(round_to_interval(0.07, 0.16), 0.0);
/// ```
#[inline]
pub fn round_to_interval(time: f64, interval: f64) -> f64 {
    (time / interval).round() * interval
}

// =============================================================================
// Distance Functions
// =============================================================================

/// Euclidean distance in meters between two planar positions.
///
/// # Example
///
/// ```rust
/// use conflict_detector::{geometry::center_distance, Point};
///
/// let d = center_distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
/// assert_eq!(d, 5.0);
/// ```
#[inline]
pub fn center_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    Euclidean::distance(a, b)
}

/// Smallest distance between any corner of one box and any corner of another.
///
/// Evaluates all 16 corner pairings and returns the global minimum. Note this
/// is a corner-to-corner measure, not an edge-to-edge one: two overlapping
/// boxes can still report a positive value.
///
/// # Example
///
/// ```rust
/// use conflict_detector::{geometry, BoxSize, Point};
///
/// let a = geometry::rotated_corners(Point::new(0.0, 0.0), 0.0, BoxSize::new(1.0, 1.0));
/// let b = geometry::rotated_corners(Point::new(3.0, 0.0), 0.0, BoxSize::new(1.0, 1.0));
///
/// // Facing edges are at x=0.5 and x=2.5, sharing corner y-offsets
/// assert_eq!(geometry::min_corner_distance(&a, &b), 2.0);
/// ```
pub fn min_corner_distance(a: &[Point<f64>; 4], b: &[Point<f64>; 4]) -> f64 {
    let mut min = f64::INFINITY;
    for corner_a in a {
        for corner_b in b {
            let d = Euclidean::distance(*corner_a, *corner_b);
            if d < min {
                min = d;
            }
        }
    }
    min
}

// =============================================================================
// Oriented Bounding Boxes
// =============================================================================

/// Corners of an oriented rectangle centered at `center`.
///
/// The box is `size.length` long along its local +x (forward) axis and
/// `size.width` wide along local +y, rotated counter-clockwise by
/// `heading_deg` degrees about the center.
///
/// Corners come back in a fixed order: front-right, front-left, rear-left,
/// rear-right, as labeled in the unrotated local frame.
///
/// # Example
///
/// ```rust
/// use conflict_detector::{geometry::rotated_corners, BoxSize, Point};
///
/// let corners = rotated_corners(Point::new(0.0, 0.0), 0.0, BoxSize::new(2.0, 1.0));
/// assert_eq!(corners[0], Point::new(1.0, 0.5));
/// assert_eq!(corners[2], Point::new(-1.0, -0.5));
/// ```
pub fn rotated_corners(center: Point<f64>, heading_deg: f64, size: BoxSize) -> [Point<f64>; 4] {
    let half_l = size.length / 2.0;
    let half_w = size.width / 2.0;

    // Corner order: front-right, front-left, rear-left, rear-right
    let local = [
        (half_l, half_w),
        (half_l, -half_w),
        (-half_l, -half_w),
        (-half_l, half_w),
    ];

    let rad = heading_deg.to_radians();
    let (sin, cos) = rad.sin_cos();

    local.map(|(dx, dy)| {
        Point::new(
            center.x() + dx * cos - dy * sin,
            center.y() + dx * sin + dy * cos,
        )
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn test_rounding_is_idempotent() {
        for t in [0.0, 0.33, 1.0, 7.36, -2.5, 120.4] {
            let aligned = round_to_interval(t, 0.16);
            assert_eq!(round_to_interval(aligned, 0.16), aligned);
        }
    }

    #[test]
    fn test_rounding_ties_go_away_from_zero() {
        assert_eq!(round_to_interval(0.08, 0.16), 0.16);
        assert_eq!(round_to_interval(-0.08, 0.16), -0.16);
    }

    #[test]
    fn test_rounding_below_half_goes_down() {
        assert_eq!(round_to_interval(0.07, 0.16), 0.0);
    }

    #[test]
    fn test_center_distance_pythagorean() {
        let d = center_distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn test_center_distance_same_point() {
        let p = Point::new(12.5, -3.25);
        assert_eq!(center_distance(p, p), 0.0);
    }

    #[test]
    fn test_corners_axis_aligned_at_zero_heading() {
        let corners = rotated_corners(Point::new(1.0, 2.0), 0.0, BoxSize::new(2.0, 1.0));

        assert_eq!(corners[0], Point::new(2.0, 2.5)); // front-right
        assert_eq!(corners[1], Point::new(2.0, 1.5)); // front-left
        assert_eq!(corners[2], Point::new(0.0, 1.5)); // rear-left
        assert_eq!(corners[3], Point::new(0.0, 2.5)); // rear-right
    }

    #[test]
    fn test_corners_full_turn_matches_zero_heading() {
        let center = Point::new(-4.0, 7.5);
        let size = BoxSize::new(1.87, 0.64);

        let at_zero = rotated_corners(center, 0.0, size);
        let at_full = rotated_corners(center, 360.0, size);

        for (a, b) in at_zero.iter().zip(at_full.iter()) {
            assert!(approx_eq(a.x(), b.x(), 1e-9));
            assert!(approx_eq(a.y(), b.y(), 1e-9));
        }
    }

    #[test]
    fn test_corners_quarter_turn_is_counter_clockwise() {
        let corners = rotated_corners(Point::new(0.0, 0.0), 90.0, BoxSize::new(2.0, 1.0));

        // Front-right local (1.0, 0.5) lands at (-0.5, 1.0) after 90 degrees CCW
        assert!(approx_eq(corners[0].x(), -0.5, 1e-9));
        assert!(approx_eq(corners[0].y(), 1.0, 1e-9));
        // Rear-left local (-1.0, -0.5) lands at (0.5, -1.0)
        assert!(approx_eq(corners[2].x(), 0.5, 1e-9));
        assert!(approx_eq(corners[2].y(), -1.0, 1e-9));
    }

    #[test]
    fn test_min_corner_distance_overlapping_boxes() {
        // Pedestrian box at the origin, motorcycle box half a meter ahead;
        // the footprints overlap yet the nearest corners are still apart:
        // |dx| = 0.435 - 0.15 = 0.285, |dy| = 0.32 - 0.15 = 0.17.
        let ped = rotated_corners(Point::new(0.0, 0.0), 0.0, BoxSize::new(0.3, 0.3));
        let moto = rotated_corners(Point::new(0.5, 0.0), 0.0, BoxSize::new(1.87, 0.64));

        let min = min_corner_distance(&ped, &moto);
        assert!(approx_eq(min, 0.331851, 1e-6));
    }

    #[test]
    fn test_min_corner_distance_identical_boxes() {
        let corners = rotated_corners(Point::new(3.0, -1.0), 45.0, BoxSize::new(1.0, 0.5));
        assert_eq!(min_corner_distance(&corners, &corners), 0.0);
    }
}
