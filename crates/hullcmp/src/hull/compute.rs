//! Public entry points: validate, deduplicate, run an engine, post-process.

use std::collections::HashSet;

use crate::geom2::{Point2, MAX_COORD};

use super::boundary::extend_with_boundary_points;
use super::dedup::{dedup_points, point_key};
use super::graham::graham_scan;
use super::jarvis::jarvis_march;
use super::types::{BoundaryMode, HullAlgorithm, HullCfg, HullComparison, HullError};

/// Reject non-finite coordinates and magnitudes above `MAX_COORD`; reports the first
/// offending point.
pub fn validate_points(points: &[Point2]) -> Result<(), HullError> {
    for (index, p) in points.iter().enumerate() {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(HullError::NonFinite {
                index,
                x: p.x,
                y: p.y,
            });
        }
        if p.x.abs() > MAX_COORD || p.y.abs() > MAX_COORD {
            return Err(HullError::OutOfRange {
                index,
                x: p.x,
                y: p.y,
            });
        }
    }
    Ok(())
}

/// Gift-wrapping hull vertices of a raw point list (duplicates allowed).
pub fn compute_hull_gift_wrap(points: &[Point2]) -> Result<Vec<Point2>, HullError> {
    validate_points(points)?;
    let unique = dedup_points(points);
    let hull = jarvis_march(&unique)?;
    tracing::debug!(
        input = points.len(),
        unique = unique.len(),
        hull = hull.len(),
        "gift wrap"
    );
    Ok(hull)
}

/// Angular-sweep hull vertices of a raw point list (duplicates allowed).
pub fn compute_hull_angular_sweep(points: &[Point2]) -> Result<Vec<Point2>, HullError> {
    validate_points(points)?;
    let unique = dedup_points(points);
    let hull = graham_scan(&unique);
    tracing::debug!(
        input = points.len(),
        unique = unique.len(),
        hull = hull.len(),
        "angular sweep"
    );
    Ok(hull)
}

/// Run one engine and apply the configured boundary mode.
pub fn compute_hull(
    points: &[Point2],
    algorithm: HullAlgorithm,
    cfg: HullCfg,
) -> Result<Vec<Point2>, HullError> {
    validate_points(points)?;
    let unique = dedup_points(points);
    let vertices = run_engine(&unique, algorithm)?;
    Ok(apply_boundary(vertices, &unique, cfg.boundary))
}

/// Run both engines on the same deduplicated input.
pub fn compare_hulls(points: &[Point2], cfg: HullCfg) -> Result<HullComparison, HullError> {
    validate_points(points)?;
    let unique = dedup_points(points);
    let jarvis = jarvis_march(&unique)?;
    let graham = graham_scan(&unique);
    let same_vertex_set = same_point_set(&jarvis, &graham);
    if !same_vertex_set {
        tracing::warn!(
            jarvis = jarvis.len(),
            graham = graham.len(),
            "hull engines disagree on the vertex set"
        );
    }
    Ok(HullComparison {
        jarvis: apply_boundary(jarvis, &unique, cfg.boundary),
        graham: apply_boundary(graham, &unique, cfg.boundary),
        points: unique,
        same_vertex_set,
    })
}

fn run_engine(unique: &[Point2], algorithm: HullAlgorithm) -> Result<Vec<Point2>, HullError> {
    match algorithm {
        HullAlgorithm::GiftWrap => jarvis_march(unique),
        HullAlgorithm::AngularSweep => Ok(graham_scan(unique)),
    }
}

fn apply_boundary(vertices: Vec<Point2>, unique: &[Point2], mode: BoundaryMode) -> Vec<Point2> {
    match mode {
        BoundaryMode::VerticesOnly => vertices,
        BoundaryMode::IncludeCollinear => extend_with_boundary_points(&vertices, unique),
    }
}

fn same_point_set(a: &[Point2], b: &[Point2]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let ka: HashSet<(u64, u64)> = a.iter().map(point_key).collect();
    b.iter().all(|p| ka.contains(&point_key(p)))
}
