//! Curated surface for callers that want everything in one import.
//!
//! The three computation entry points plus the configuration and error types
//! they need. Lower-level engines (`jarvis_march`, `graham_scan`) expect
//! deduplicated, validated input and live under `hull`.

// Entry points
pub use crate::hull::{
    compare_hulls, compute_hull, compute_hull_angular_sweep, compute_hull_gift_wrap,
    extend_with_boundary_points, validate_points, vertices_only,
};
// Configuration, labels, results, errors
pub use crate::hull::{BoundaryMode, HullAlgorithm, HullCfg, HullComparison, HullError};
// Kernel
pub use crate::geom2::{cross, on_segment, orientation, squared_distance, Orientation, Point2};
// Samplers and timing
pub use crate::rand2::{
    draw_points, uniform_points, PointDistribution, SampleCfg, SampleError,
};
pub use crate::timing::{analyze, benchmark, time_hull, AnalysisRow, BenchRow, TimedHull};
