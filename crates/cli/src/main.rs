use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hullcmp::hull::{compare_hulls, BoundaryMode, HullAlgorithm, HullCfg};
use hullcmp::rand2::{draw_points, PointDistribution};
use hullcmp::timing::{analyze, benchmark, DEFAULT_SIZES};
use hullcmp::Point2;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls: Jarvis march vs Graham scan")]
struct Cmd {
    /// Log debug events from the hull engines
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read `N x1 y1 ...` from stdin and print both hulls
    Hull {
        /// Report hull vertices only, without points lying on hull edges
        #[arg(long)]
        exclude_collinear: bool,
        /// Also write points and hulls as JSON (plus a provenance sidecar)
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Average runtimes over uniform clouds of increasing size
    Bench {
        #[arg(long, default_value_t = 3)]
        trials: usize,
        #[arg(long, default_value_t = 3000)]
        max_n: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Hull sizes and runtimes per point distribution
    Analyze {
        #[arg(long, value_delimiter = ',', default_values_t = vec![50usize, 100, 200, 500])]
        sizes: Vec<usize>,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Print a sampled point cloud in the format `hull` reads
    Sample {
        /// random, circle, clustered or grid
        #[arg(long, default_value = "random")]
        dist: String,
        #[arg(long, default_value_t = 100)]
        n: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Hull {
            exclude_collinear,
            json,
        } => hull(exclude_collinear, json),
        Action::Bench {
            trials,
            max_n,
            seed,
            json,
        } => bench(trials, max_n, seed, json),
        Action::Analyze { sizes, seed, json } => run_analyze(sizes, seed, json),
        Action::Sample { dist, n, seed } => sample(dist, n, seed),
    }
}

#[derive(Serialize)]
struct HullReport {
    boundary_points: bool,
    same_vertex_set: bool,
    points: Vec<[f64; 2]>,
    jarvis: Vec<[f64; 2]>,
    graham: Vec<[f64; 2]>,
}

#[derive(Serialize)]
struct BenchRecord {
    n: usize,
    jarvis_avg_s: f64,
    graham_avg_s: f64,
}

#[derive(Serialize)]
struct AnalysisRecord {
    distribution: &'static str,
    n: usize,
    jarvis_hull: usize,
    graham_hull: usize,
    jarvis_ms: f64,
    graham_ms: f64,
}

fn hull(exclude_collinear: bool, json: Option<PathBuf>) -> Result<()> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("reading points from stdin")?;
    let parsed = input::parse_points(&text)?;
    if parsed.generated > 0 {
        tracing::warn!(
            generated = parsed.generated,
            seed = input::FILL_SEED,
            "not enough points on stdin; generated the rest"
        );
    }

    let cfg = HullCfg {
        boundary: if exclude_collinear {
            BoundaryMode::VerticesOnly
        } else {
            BoundaryMode::IncludeCollinear
        },
    };
    let cmp = compare_hulls(&parsed.points, cfg).context("computing hulls")?;
    tracing::info!(
        input = parsed.points.len(),
        unique = cmp.points.len(),
        same_vertex_set = cmp.same_vertex_set,
        "hulls computed"
    );
    println!("{}", hull_line(HullAlgorithm::GiftWrap.name(), &cmp.jarvis));
    println!("{}", hull_line(HullAlgorithm::AngularSweep.name(), &cmp.graham));

    if let Some(path) = json {
        let report = HullReport {
            boundary_points: !exclude_collinear,
            same_vertex_set: cmp.same_vertex_set,
            points: to_pairs(&cmp.points),
            jarvis: to_pairs(&cmp.jarvis),
            graham: to_pairs(&cmp.graham),
        };
        provenance::write_json(&path, &report)?;
        provenance::write_sidecar(
            &path,
            "hull",
            serde_json::json!({
                "exclude_collinear": exclude_collinear,
                "input_points": parsed.points.len(),
                "generated_points": parsed.generated,
            }),
        )?;
        tracing::info!(path = %path.display(), "wrote hull report");
    }
    Ok(())
}

fn bench(trials: usize, max_n: usize, seed: u64, json: Option<PathBuf>) -> Result<()> {
    let sizes: Vec<usize> = DEFAULT_SIZES.iter().copied().filter(|&n| n <= max_n).collect();
    tracing::info!(?sizes, trials, seed, "bench");
    let rows = benchmark(&sizes, trials, seed)?;
    for r in &rows {
        println!(
            "N={}: Jarvis avg {:.6}s, Graham avg {:.6}s",
            r.n,
            r.jarvis_avg.as_secs_f64(),
            r.graham_avg.as_secs_f64()
        );
    }
    if let Some(path) = json {
        let records: Vec<BenchRecord> = rows
            .iter()
            .map(|r| BenchRecord {
                n: r.n,
                jarvis_avg_s: r.jarvis_avg.as_secs_f64(),
                graham_avg_s: r.graham_avg.as_secs_f64(),
            })
            .collect();
        provenance::write_json(&path, &records)?;
        provenance::write_sidecar(
            &path,
            "bench",
            serde_json::json!({ "sizes": sizes, "trials": trials, "seed": seed }),
        )?;
    }
    Ok(())
}

fn run_analyze(sizes: Vec<usize>, seed: u64, json: Option<PathBuf>) -> Result<()> {
    tracing::info!(?sizes, seed, "analyze");
    let rows = analyze(&sizes, seed)?;
    println!(
        "{:<10} {:>6} {:>8} {:>8} {:>12} {:>12}",
        "dist", "n", "jarvis_h", "graham_h", "jarvis_ms", "graham_ms"
    );
    let records: Vec<AnalysisRecord> = rows
        .iter()
        .map(|r| AnalysisRecord {
            distribution: r.distribution.name(),
            n: r.n,
            jarvis_hull: r.jarvis_hull,
            graham_hull: r.graham_hull,
            jarvis_ms: r.jarvis_time.as_secs_f64() * 1e3,
            graham_ms: r.graham_time.as_secs_f64() * 1e3,
        })
        .collect();
    for r in &records {
        println!(
            "{:<10} {:>6} {:>8} {:>8} {:>12.4} {:>12.4}",
            r.distribution, r.n, r.jarvis_hull, r.graham_hull, r.jarvis_ms, r.graham_ms
        );
    }
    if let Some(path) = json {
        provenance::write_json(&path, &records)?;
        provenance::write_sidecar(
            &path,
            "analyze",
            serde_json::json!({ "sizes": sizes, "seed": seed }),
        )?;
    }
    Ok(())
}

fn sample(dist: String, n: usize, seed: u64) -> Result<()> {
    let dist: PointDistribution = dist.parse()?;
    let pts = draw_points(dist, n, seed);
    print!("{}", input::format_points(&pts));
    Ok(())
}

/// `<label>: <count> x1 y1 x2 y2 ...`
fn hull_line(label: &str, hull: &[Point2]) -> String {
    let mut line = format!("{label}: {}", hull.len());
    for p in hull {
        line.push_str(&format!(" {:?} {:?}", p.x, p.y));
    }
    line
}

fn to_pairs(points: &[Point2]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}
