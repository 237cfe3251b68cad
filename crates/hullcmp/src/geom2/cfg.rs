//! Tolerance defaults for the 2D kernel.
//!
//! Policy
//! - Orientation is exact (sign of the computed cross product). The only
//!   tolerance is the inclusive bounding-box slack used by `on_segment`,
//!   which absorbs round-off at segment endpoints.

/// Inclusive per-axis slack for the closed bounding box in `on_segment`.
pub const ON_SEGMENT_EPS: f64 = 1e-9;

/// Largest accepted coordinate magnitude.
///
/// Coordinate differences reach `2·MAX_COORD`, so each cross-product term stays
/// below `4·MAX_COORD² ≈ 4e300`, and their difference stays finite.
pub const MAX_COORD: f64 = 1e150;
