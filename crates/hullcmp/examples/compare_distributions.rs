//! Print hull sizes of both engines for each point distribution.
//!
//! Usage:
//!   cargo run -p hullcmp --example compare_distributions -- 200
//!
//! Both columns should match; a mismatch points at an orientation tie the
//! angular sort and the wrap resolved differently.

use hullcmp::hull::{compare_hulls, HullCfg};
use hullcmp::rand2::{draw_points, PointDistribution};

fn main() {
    let n = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(100);
    for dist in PointDistribution::ALL {
        let pts = draw_points(dist, n, 42);
        match compare_hulls(&pts, HullCfg::vertices_only()) {
            Ok(cmp) => println!(
                "{:<10} n={:<5} jarvis={:<4} graham={:<4} agree={}",
                dist.name(),
                cmp.points.len(),
                cmp.jarvis.len(),
                cmp.graham.len(),
                cmp.same_vertex_set
            ),
            Err(err) => eprintln!("{}: {err}", dist.name()),
        }
    }
}
