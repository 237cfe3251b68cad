//! Planar geometry kernel (points, orientation, segment membership).
//!
//! Purpose
//! - Provide the three predicates every hull engine is built on: the turn
//!   direction of three points, squared distance for ordering, and closed
//!   segment membership for collinear points.
//! - Keep the kernel stateless and exact where it matters: `orientation`
//!   compares the computed cross product against exact zero, no epsilon.
//!
//! Tolerance policy
//! - `on_segment` is the single place that admits slack (`ON_SEGMENT_EPS`),
//!   and only on the bounding-box check. Callers that want tolerant
//!   collinearity must snap coordinates before calling into the kernel.
//!
//! Code cross-refs: `hull::{jarvis, graham, boundary}`.

mod cfg;
mod kernel;
mod types;

pub use cfg::{MAX_COORD, ON_SEGMENT_EPS};
pub use kernel::{cross, lex_min_xy, lex_min_yx, on_segment, orientation, squared_distance};
pub use types::{Orientation, Point2};
