//! Configuration, labels and errors for the hull engines.

use std::fmt;

use crate::geom2::{Point2, MAX_COORD};

/// Which engine to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HullAlgorithm {
    /// Jarvis march, O(n·h).
    GiftWrap,
    /// Graham scan, O(n log n).
    AngularSweep,
}

impl HullAlgorithm {
    pub const ALL: [HullAlgorithm; 2] = [HullAlgorithm::GiftWrap, HullAlgorithm::AngularSweep];

    /// Report label used by the CLI output lines.
    pub fn name(self) -> &'static str {
        match self {
            HullAlgorithm::GiftWrap => "Jarvis",
            HullAlgorithm::AngularSweep => "Graham",
        }
    }
}

impl fmt::Display for HullAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether points lying strictly inside hull edges are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryMode {
    VerticesOnly,
    IncludeCollinear,
}

/// Hull configuration.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    pub boundary: BoundaryMode,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            boundary: BoundaryMode::IncludeCollinear,
        }
    }
}

impl HullCfg {
    pub fn vertices_only() -> Self {
        Self {
            boundary: BoundaryMode::VerticesOnly,
        }
    }
}

/// Both engines run on the same input.
#[derive(Clone, Debug)]
pub struct HullComparison {
    /// Deduplicated input, first-occurrence order.
    pub points: Vec<Point2>,
    pub jarvis: Vec<Point2>,
    pub graham: Vec<Point2>,
    /// Vertex sets (boundary points stripped) agree as sets.
    pub same_vertex_set: bool,
}

/// Errors surfaced at the hull API boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum HullError {
    /// A coordinate is NaN or infinite; orientation tests would have no consistent order.
    NonFinite { index: usize, x: f64, y: f64 },
    /// A coordinate magnitude exceeds `MAX_COORD`; cross products could overflow.
    OutOfRange { index: usize, x: f64, y: f64 },
    /// The gift wrap did not return to its start within `steps` vertices.
    WrapDidNotClose { steps: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::NonFinite { index, x, y } => {
                write!(f, "point {index} has non-finite coordinates ({x}, {y})")
            }
            HullError::OutOfRange { index, x, y } => write!(
                f,
                "point {index} at ({x}, {y}) exceeds the coordinate bound {MAX_COORD:e}"
            ),
            HullError::WrapDidNotClose { steps } => write!(
                f,
                "gift wrap did not return to its start after {steps} vertices (inconsistent orientation)"
            ),
        }
    }
}

impl std::error::Error for HullError {}
