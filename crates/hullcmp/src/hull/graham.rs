use std::cmp::Ordering;

use crate::geom2::{lex_min_yx, orientation, squared_distance, Point2};

/// Angular-sweep hull over a deduplicated point set.
///
/// The pivot is the lowest-leftmost point. Remaining points are sorted by
/// `atan2` around the pivot, ties by ascending squared distance, then swept with a
/// stack that pops every non-strict left turn. The stack is the hull in
/// counter-clockwise order starting at the pivot.
///
/// Pre: `points` has no exact duplicates and only finite coordinates.
/// Post: at most two points are returned verbatim.
pub fn graham_scan(points: &[Point2]) -> Vec<Point2> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let pivot = match lex_min_yx(points) {
        Some(p) => p,
        None => return Vec::new(),
    };

    // (angle, squared distance, point)
    let mut others: Vec<(f64, f64, Point2)> = points
        .iter()
        .filter(|p| **p != pivot)
        .map(|p| {
            let d = p - pivot;
            (d.y.atan2(d.x), squared_distance(pivot, *p), *p)
        })
        .collect();
    others.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
    });

    let mut stack: Vec<Point2> = Vec::with_capacity(points.len());
    stack.push(pivot);
    for (_, _, p) in others {
        while stack.len() >= 2 {
            let top = stack.len() - 1;
            if orientation(stack[top - 1], stack[top], p).is_ccw() {
                break;
            }
            stack.pop();
        }
        stack.push(p);
    }
    stack
}
