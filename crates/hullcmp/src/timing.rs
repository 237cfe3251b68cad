//! Wall-clock comparison of the two hull engines.
//!
//! Timings cover the full entry point (validation, dedup, engine), matching what a
//! caller pays. Inputs come from the seeded samplers in `rand2`, so rows are
//! reproducible up to timer noise.

use std::time::{Duration, Instant};

use crate::geom2::Point2;
use crate::hull::{compute_hull_angular_sweep, compute_hull_gift_wrap, HullAlgorithm, HullError};
use crate::rand2::{draw_points, uniform_points, PointDistribution, SampleCfg};

/// Sizes used by the default benchmark sweep.
pub const DEFAULT_SIZES: [usize; 6] = [50, 100, 200, 400, 800, 1600];

/// A hull plus the time it took.
#[derive(Clone, Debug)]
pub struct TimedHull {
    pub hull: Vec<Point2>,
    pub elapsed: Duration,
}

/// Average runtimes for one input size.
#[derive(Clone, Copy, Debug)]
pub struct BenchRow {
    pub n: usize,
    pub jarvis_avg: Duration,
    pub graham_avg: Duration,
}

/// Hull sizes and runtimes for one (distribution, size) cell.
#[derive(Clone, Copy, Debug)]
pub struct AnalysisRow {
    pub distribution: PointDistribution,
    pub n: usize,
    pub jarvis_hull: usize,
    pub graham_hull: usize,
    pub jarvis_time: Duration,
    pub graham_time: Duration,
}

/// Run one engine (vertices only) and measure it.
pub fn time_hull(points: &[Point2], algorithm: HullAlgorithm) -> Result<TimedHull, HullError> {
    let t0 = Instant::now();
    let hull = match algorithm {
        HullAlgorithm::GiftWrap => compute_hull_gift_wrap(points)?,
        HullAlgorithm::AngularSweep => compute_hull_angular_sweep(points)?,
    };
    Ok(TimedHull {
        hull,
        elapsed: t0.elapsed(),
    })
}

/// Average both engines over `trials` uniform clouds in `[0, 1000]²` per size.
///
/// Trial `k`, counted across all sizes in order, samples with seed `seed + k`.
pub fn benchmark(sizes: &[usize], trials: usize, seed: u64) -> Result<Vec<BenchRow>, HullError> {
    let trials = trial_count(trials);
    let cfg = SampleCfg {
        lo: 0.0,
        hi: 1000.0,
    };
    let mut rows = Vec::with_capacity(sizes.len());
    let mut draw = 0u64;
    for &n in sizes {
        let mut jt = Duration::ZERO;
        let mut gt = Duration::ZERO;
        for _ in 0..trials {
            let pts = uniform_points(n, cfg, seed.wrapping_add(draw));
            draw += 1;
            jt += time_hull(&pts, HullAlgorithm::GiftWrap)?.elapsed;
            gt += time_hull(&pts, HullAlgorithm::AngularSweep)?.elapsed;
        }
        let row = BenchRow {
            n,
            jarvis_avg: jt / trials,
            graham_avg: gt / trials,
        };
        tracing::debug!(n, jarvis = ?row.jarvis_avg, graham = ?row.graham_avg, "bench row");
        rows.push(row);
    }
    Ok(rows)
}

/// Trials per size, clamped to `1..=u32::MAX` so averaging never divides by zero.
fn trial_count(trials: usize) -> u32 {
    u32::try_from(trials.max(1)).unwrap_or(u32::MAX)
}

/// Hull sizes and runtimes of both engines for every distribution and size.
pub fn analyze(sizes: &[usize], seed: u64) -> Result<Vec<AnalysisRow>, HullError> {
    let mut rows = Vec::with_capacity(sizes.len() * PointDistribution::ALL.len());
    for &n in sizes {
        for dist in PointDistribution::ALL {
            let pts = draw_points(dist, n, seed);
            let j = time_hull(&pts, HullAlgorithm::GiftWrap)?;
            let g = time_hull(&pts, HullAlgorithm::AngularSweep)?;
            if j.hull.len() != g.hull.len() {
                tracing::warn!(
                    distribution = dist.name(),
                    n,
                    jarvis = j.hull.len(),
                    graham = g.hull.len(),
                    "hull sizes differ"
                );
            }
            rows.push(AnalysisRow {
                distribution: dist,
                n,
                jarvis_hull: j.hull.len(),
                graham_hull: g.hull.len(),
                jarvis_time: j.elapsed,
                graham_time: g.elapsed,
            });
        }
    }
    Ok(rows)
}
