//! Planar convex hulls: gift wrapping (Jarvis march) and angular sweep (Graham scan).
//!
//! Purpose
//! - Two independent engines over the same deduplicated point set, with
//!   deterministic tie-breaking so both report the same extreme points.
//! - An optional post-process that reinserts points lying on hull edges.
//!
//! Conventions
//! - Hulls are open sequences (the first vertex is not repeated at the end).
//! - Jarvis starts at the leftmost-lowest point and walks clockwise.
//! - Graham starts at the lowest-leftmost pivot and walks counter-clockwise.
//! - Inputs with at most two distinct points are returned verbatim (deduplicated).
//!
//! Collinear tie-breaks
//! - Jarvis: among collinear candidates the farthest from the current vertex wins.
//! - Graham: equal angles sort nearest first, so inner collinear points are popped.
//!
//! Code cross-refs: `geom2::{orientation, squared_distance, on_segment}`.

mod boundary;
mod compute;
mod dedup;
mod graham;
mod jarvis;
mod types;

pub use boundary::{extend_with_boundary_points, vertices_only};
pub use compute::{
    compare_hulls, compute_hull, compute_hull_angular_sweep, compute_hull_gift_wrap,
    validate_points,
};
pub use dedup::dedup_points;
pub use graham::graham_scan;
pub use jarvis::jarvis_march;
pub use types::{BoundaryMode, HullAlgorithm, HullCfg, HullComparison, HullError};

#[cfg(test)]
mod tests;
