use std::cmp::Ordering;
use std::collections::HashSet;

use crate::geom2::{on_segment, orientation, squared_distance, Point2};

use super::dedup::{dedup_points, point_key};

/// Insert the points lying on each hull edge, in order along the edge.
///
/// For each edge `hull[i] → hull[i+1 mod m]` the start vertex is emitted, followed by
/// every point of `all_points` that is collinear with the edge, lies on the closed
/// segment, and is not itself a hull vertex, sorted by squared distance from the start
/// vertex. The first vertex is not repeated at the end.
///
/// A two-vertex hull is a segment: only the one edge is walked and the far endpoint
/// closes the sequence, so every point appears once.
pub fn extend_with_boundary_points(hull: &[Point2], all_points: &[Point2]) -> Vec<Point2> {
    let m = hull.len();
    if m == 0 {
        return Vec::new();
    }
    let vertex_keys: HashSet<(u64, u64)> = hull.iter().map(point_key).collect();
    let pool: Vec<Point2> = dedup_points(all_points)
        .into_iter()
        .filter(|p| !vertex_keys.contains(&point_key(p)))
        .collect();

    let edges = match m {
        1 => 0,
        2 => 1,
        _ => m,
    };
    let mut out = Vec::with_capacity(m + pool.len());
    for i in 0..edges {
        let a = hull[i];
        let b = hull[(i + 1) % m];
        out.push(a);
        let mut on_edge: Vec<(f64, Point2)> = pool
            .iter()
            .filter(|r| orientation(a, b, **r).is_collinear() && on_segment(a, b, **r))
            .map(|r| (squared_distance(a, *r), *r))
            .collect();
        on_edge.sort_by(|x, y| x.0.partial_cmp(&y.0).unwrap_or(Ordering::Equal));
        out.extend(on_edge.into_iter().map(|(_, r)| r));
    }
    if m <= 2 {
        out.push(hull[m - 1]);
    }
    out
}

/// Drop every point that sits on the closed segment between its cyclic neighbours.
///
/// Inverse of `extend_with_boundary_points` on exactly representable input.
pub fn vertices_only(sequence: &[Point2]) -> Vec<Point2> {
    let m = sequence.len();
    if m <= 2 {
        return sequence.to_vec();
    }
    (0..m)
        .filter(|&i| {
            let prev = sequence[(i + m - 1) % m];
            let cur = sequence[i];
            let next = sequence[(i + 1) % m];
            !(orientation(prev, cur, next).is_collinear() && on_segment(prev, next, cur))
        })
        .map(|i| sequence[i])
        .collect()
}
