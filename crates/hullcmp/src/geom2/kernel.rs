use std::cmp::Ordering;

use super::cfg::ON_SEGMENT_EPS;
use super::types::{Orientation, Point2};

/// Signed cross product `(b − a) × (c − a)`.
/// Positive for a counter-clockwise turn, negative for clockwise.
#[inline]
pub fn cross(a: Point2, b: Point2, c: Point2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Turn direction of `a → b → c`. Collinear iff the computed cross product is exactly zero.
#[inline]
pub fn orientation(a: Point2, b: Point2, c: Point2) -> Orientation {
    let val = cross(a, b, c);
    if val > 0.0 {
        Orientation::CounterClockwise
    } else if val < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Squared Euclidean distance. Only meant for comparisons.
#[inline]
pub fn squared_distance(a: Point2, b: Point2) -> f64 {
    (a - b).norm_squared()
}

/// Whether `c` lies in the closed bounding box of segment `a–b` (with `ON_SEGMENT_EPS` slack).
///
/// Pre: `orientation(a, b, c)` is `Collinear`; this function does not check it.
#[inline]
pub fn on_segment(a: Point2, b: Point2, c: Point2) -> bool {
    a.x.min(b.x) - ON_SEGMENT_EPS <= c.x
        && c.x <= a.x.max(b.x) + ON_SEGMENT_EPS
        && a.y.min(b.y) - ON_SEGMENT_EPS <= c.y
        && c.y <= a.y.max(b.y) + ON_SEGMENT_EPS
}

/// Lexicographic minimum by `(x, y)`: the leftmost-lowest point. First occurrence wins on ties.
pub fn lex_min_xy(points: &[Point2]) -> Option<Point2> {
    lex_min_by(points, |p| (p.x, p.y))
}

/// Lexicographic minimum by `(y, x)`: the lowest-leftmost point. First occurrence wins on ties.
pub fn lex_min_yx(points: &[Point2]) -> Option<Point2> {
    lex_min_by(points, |p| (p.y, p.x))
}

fn lex_min_by(points: &[Point2], key: impl Fn(&Point2) -> (f64, f64)) -> Option<Point2> {
    let mut best: Option<(Point2, (f64, f64))> = None;
    for p in points {
        let k = key(p);
        let better = match &best {
            None => true,
            Some((_, bk)) => {
                match k.0.partial_cmp(&bk.0).unwrap_or(Ordering::Equal) {
                    Ordering::Less => true,
                    Ordering::Equal => k.1 < bk.1,
                    Ordering::Greater => false,
                }
            }
        };
        if better {
            best = Some((*p, k));
        }
    }
    best.map(|(p, _)| p)
}
