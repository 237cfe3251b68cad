use std::collections::HashSet;

use crate::geom2::Point2;

/// Hash key matching `==` on finite coordinates: `-0.0` folds onto `0.0`.
#[inline]
pub(crate) fn point_key(p: &Point2) -> (u64, u64) {
    #[inline]
    fn bits(v: f64) -> u64 {
        if v == 0.0 {
            0.0f64.to_bits()
        } else {
            v.to_bits()
        }
    }
    (bits(p.x), bits(p.y))
}

/// Remove exact duplicates, keeping the first occurrence of each point in input order.
pub fn dedup_points(points: &[Point2]) -> Vec<Point2> {
    let mut seen: HashSet<(u64, u64)> = HashSet::with_capacity(points.len());
    let mut out = Vec::with_capacity(points.len());
    for p in points {
        if seen.insert(point_key(p)) {
            out.push(*p);
        }
    }
    out
}
