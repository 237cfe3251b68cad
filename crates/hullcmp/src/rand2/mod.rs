//! Seeded planar point clouds for benchmarks, tests and the CLI.
//!
//! Purpose
//! - Provide reproducible inputs that stress the two hull engines differently:
//!   uniform clouds (small hulls), noisy circles (most points on the hull),
//!   clustered clouds with outliers, and jittered grids (many collinear runs
//!   before jitter).
//!
//! Model
//! - Every draw is a pure function of `(distribution, n, seed)` through a single
//!   `StdRng`. Gaussian samples use Box–Muller on uniform draws.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::Point2;

/// Error type for sampler configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    UnknownDistribution { name: String },
    InvalidBounds { lo: f64, hi: f64 },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDistribution { name } => write!(
                f,
                "unknown distribution '{name}' (expected random, circle, clustered or grid)"
            ),
            Self::InvalidBounds { lo, hi } => {
                write!(f, "invalid sample bounds [{lo}, {hi}] (need finite lo < hi)")
            }
        }
    }
}

impl std::error::Error for SampleError {}

/// Point distribution families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointDistribution {
    Uniform,
    Circle,
    Clustered,
    Grid,
}

impl PointDistribution {
    pub const ALL: [PointDistribution; 4] = [
        PointDistribution::Uniform,
        PointDistribution::Circle,
        PointDistribution::Clustered,
        PointDistribution::Grid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PointDistribution::Uniform => "random",
            PointDistribution::Circle => "circle",
            PointDistribution::Clustered => "clustered",
            PointDistribution::Grid => "grid",
        }
    }
}

impl fmt::Display for PointDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PointDistribution {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" | "uniform" => Ok(PointDistribution::Uniform),
            "circle" => Ok(PointDistribution::Circle),
            "clustered" | "cluster" => Ok(PointDistribution::Clustered),
            "grid" => Ok(PointDistribution::Grid),
            _ => Err(SampleError::UnknownDistribution {
                name: s.to_string(),
            }),
        }
    }
}

/// Axis-aligned square box `[lo, hi]²` for plain uniform draws.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub lo: f64,
    pub hi: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self { lo: 0.0, hi: 100.0 }
    }
}

impl SampleCfg {
    pub fn new(lo: f64, hi: f64) -> Result<Self, SampleError> {
        if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
            return Err(SampleError::InvalidBounds { lo, hi });
        }
        Ok(Self { lo, hi })
    }
}

/// `n` points uniform in the configured box.
pub fn uniform_points(n: usize, cfg: SampleCfg, seed: u64) -> Vec<Point2> {
    let mut rng = StdRng::seed_from_u64(seed);
    uniform_in(&mut rng, n, cfg.lo, cfg.hi)
}

/// Draw `n` points from `dist`; deterministic for a given `(dist, n, seed)`.
///
/// Clustered draws return `⌊0.8n⌋ + ⌊0.2n⌋` points, which can be one short of `n`.
pub fn draw_points(dist: PointDistribution, n: usize, seed: u64) -> Vec<Point2> {
    let mut rng = StdRng::seed_from_u64(seed);
    match dist {
        PointDistribution::Uniform => uniform_in(&mut rng, n, 10.0, 90.0),
        PointDistribution::Circle => (0..n)
            .map(|i| {
                let angle = 2.0 * PI * (i as f64) / (n as f64);
                let radius = 35.0 + rng.gen_range(-3.0..=3.0);
                Vector2::new(50.0 + radius * angle.cos(), 50.0 + radius * angle.sin())
            })
            .collect(),
        PointDistribution::Clustered => {
            let core = (n as f64 * 0.8) as usize;
            let outliers = (n as f64 * 0.2) as usize;
            let mut pts: Vec<Point2> = (0..core)
                .map(|_| {
                    let x = gauss(&mut rng, 50.0, 8.0).clamp(10.0, 90.0);
                    let y = gauss(&mut rng, 50.0, 8.0).clamp(10.0, 90.0);
                    Vector2::new(x, y)
                })
                .collect();
            pts.extend(uniform_in(&mut rng, outliers, 10.0, 90.0));
            pts
        }
        PointDistribution::Grid => {
            let g = ((n as f64).sqrt() as usize).max(2);
            let step = 70.0 / ((g - 1).max(1) as f64);
            let mut pts = Vec::with_capacity(n.min(g * g));
            'outer: for i in 0..g {
                for j in 0..g {
                    if pts.len() >= n {
                        break 'outer;
                    }
                    let x = 15.0 + (i as f64) * step + rng.gen_range(-2.0..=2.0);
                    let y = 15.0 + (j as f64) * step + rng.gen_range(-2.0..=2.0);
                    pts.push(Vector2::new(x.clamp(10.0, 90.0), y.clamp(10.0, 90.0)));
                }
            }
            pts
        }
    }
}

fn uniform_in(rng: &mut StdRng, n: usize, lo: f64, hi: f64) -> Vec<Point2> {
    (0..n)
        .map(|_| Vector2::new(rng.gen_range(lo..=hi), rng.gen_range(lo..=hi)))
        .collect()
}

/// Normal sample via Box–Muller.
fn gauss(rng: &mut StdRng, mean: f64, sigma: f64) -> f64 {
    // u1 in (0, 1] keeps ln finite.
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen::<f64>();
    mean + sigma * (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}
