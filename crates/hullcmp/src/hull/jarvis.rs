use crate::geom2::{lex_min_xy, orientation, squared_distance, Orientation, Point2};

use super::types::HullError;

/// Gift-wrapping hull over a deduplicated point set.
///
/// Starts at the leftmost-lowest point and repeatedly picks the candidate with no
/// other point strictly counter-clockwise of the current edge, so the walk is
/// clockwise. Collinear candidates resolve to the farthest point from the current
/// vertex, which keeps the wrap advancing on collinear runs.
///
/// Pre: `points` has no exact duplicates and only finite coordinates.
/// Post: at most two points are returned verbatim; otherwise the hull vertices
/// in wrap order, not closed.
///
/// Errors with `WrapDidNotClose` if the walk produces more vertices than there are
/// points. With coordinates inside `MAX_COORD` the cross product never overflows,
/// so this needs rounding-inconsistent orientations on nearly collinear points.
pub fn jarvis_march(points: &[Point2]) -> Result<Vec<Point2>, HullError> {
    let n = points.len();
    if n <= 2 {
        return Ok(points.to_vec());
    }
    let start = match lex_min_xy(points) {
        Some(p) => p,
        None => return Ok(Vec::new()),
    };

    let mut hull: Vec<Point2> = Vec::new();
    let mut p = start;
    loop {
        hull.push(p);
        if hull.len() > n {
            return Err(HullError::WrapDidNotClose { steps: hull.len() });
        }
        let mut q = if points[0] != p { points[0] } else { points[1] };
        for &r in points {
            if r == p {
                continue;
            }
            match orientation(p, q, r) {
                Orientation::CounterClockwise => q = r,
                Orientation::Collinear => {
                    if squared_distance(p, r) > squared_distance(p, q) {
                        q = r;
                    }
                }
                Orientation::Clockwise => {}
            }
        }
        p = q;
        if p == start {
            break;
        }
    }
    Ok(hull)
}
