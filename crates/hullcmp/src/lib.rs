//! Planar convex hulls with two independent engines.
//!
//! - `geom2`: exact orientation kernel, squared distance, segment membership.
//! - `hull`: dedup, Jarvis march, Graham scan, boundary extension, entry points.
//! - `rand2`: seeded point clouds used by benches, tests and the CLI.
//! - `timing`: wall-clock comparison of the engines.
//!
//! Computation is synchronous and stateless; independent calls can run on
//! separate threads without coordination.

pub mod api;
pub mod geom2;
pub mod hull;
pub mod rand2;
pub mod timing;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Orientation, Point2};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{on_segment, orientation, squared_distance, Orientation, Point2};
    pub use crate::hull::{
        compare_hulls, compute_hull, compute_hull_angular_sweep, compute_hull_gift_wrap,
        extend_with_boundary_points, vertices_only, BoundaryMode, HullAlgorithm, HullCfg,
        HullError,
    };
    pub use crate::rand2::{draw_points, uniform_points, PointDistribution, SampleCfg};
    pub use nalgebra::Vector2 as Vec2;
}
