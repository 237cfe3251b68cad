//! Whitespace-separated point input: `N x1 y1 x2 y2 ...`.

use anyhow::{bail, Context, Result};
use hullcmp::rand2::{uniform_points, SampleCfg};
use hullcmp::Point2;

/// Points generated when stdin is empty.
pub const DEFAULT_POINTS: usize = 100;
/// Largest accepted point count.
pub const MAX_POINTS: usize = 10_000_000;
/// Seed for every generated fill-in point.
pub const FILL_SEED: u64 = 42;

/// Parsed input plus how many points had to be generated.
#[derive(Debug)]
pub struct ParsedInput {
    pub points: Vec<Point2>,
    pub generated: usize,
}

/// Parse `N` followed by up to `2N` coordinates.
///
/// - Empty input: `DEFAULT_POINTS` uniform points in `[0, 100]²`.
/// - Fewer than `N` pairs: the given pairs, then uniform fill-ins.
/// - Extra coordinates beyond `2N` are ignored.
pub fn parse_points(text: &str) -> Result<ParsedInput> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(ParsedInput {
            points: uniform_points(DEFAULT_POINTS, SampleCfg::default(), FILL_SEED),
            generated: DEFAULT_POINTS,
        });
    }
    let values = tokens
        .iter()
        .enumerate()
        .map(|(i, t)| {
            t.parse::<f64>()
                .with_context(|| format!("token {} ('{}') is not a number", i + 1, t))
        })
        .collect::<Result<Vec<f64>>>()?;

    let declared = values[0];
    if !declared.is_finite() || declared < 0.0 {
        bail!("point count must be a non-negative number, got {declared}");
    }
    if declared > MAX_POINTS as f64 {
        bail!("point count {declared} exceeds the limit of {MAX_POINTS}");
    }
    let n = declared as usize;
    let coords = &values[1..];
    let provided = (coords.len() / 2).min(n);
    let mut points: Vec<Point2> = coords
        .chunks_exact(2)
        .take(provided)
        .map(|c| Point2::new(c[0], c[1]))
        .collect();
    let generated = n - provided;
    if generated > 0 {
        points.extend(uniform_points(generated, SampleCfg::default(), FILL_SEED));
    }
    Ok(ParsedInput { points, generated })
}

/// Render points in the format `parse_points` reads.
pub fn format_points(points: &[Point2]) -> String {
    let mut out = format!("{}\n", points.len());
    for p in points {
        out.push_str(&format!("{:?} {:?}\n", p.x, p.y));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_declared_pairs() {
        let parsed = parse_points("6 0 0 2 0 1 1 0 1 0.5 0.5 0 0.5\n").unwrap();
        assert_eq!(parsed.generated, 0);
        assert_eq!(parsed.points.len(), 6);
        assert_eq!(parsed.points[4], Point2::new(0.5, 0.5));
    }

    #[test]
    fn ignores_extra_coordinates() {
        let parsed = parse_points("1 3 4 5 6").unwrap();
        assert_eq!(parsed.points, vec![Point2::new(3.0, 4.0)]);
    }

    #[test]
    fn fills_missing_points_deterministically() {
        let a = parse_points("4 1 1 2 2 9").unwrap();
        let b = parse_points("4 1 1 2 2").unwrap();
        assert_eq!(a.generated, 2);
        assert_eq!(a.points.len(), 4);
        assert_eq!(a.points[1], Point2::new(2.0, 2.0));
        assert_eq!(a.points, b.points);
    }

    #[test]
    fn empty_input_generates_default_cloud() {
        let parsed = parse_points("  \n").unwrap();
        assert_eq!(parsed.generated, DEFAULT_POINTS);
        assert!(parsed
            .points
            .iter()
            .all(|p| (0.0..=100.0).contains(&p.x) && (0.0..=100.0).contains(&p.y)));
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_points("2 0 0 x 1").unwrap_err();
        assert!(err.to_string().contains("'x'"));
        assert!(parse_points("-3 0 0").is_err());
    }

    #[test]
    fn rejects_huge_count() {
        let err = parse_points("1e30 0 0").unwrap_err();
        assert!(err.to_string().contains("exceeds the limit"));
        assert!(parse_points(&format!("{} 0 0", MAX_POINTS + 1)).is_err());
        assert!(parse_points("inf 0 0").is_err());
    }

    #[test]
    fn format_round_trips() {
        let pts = vec![Point2::new(0.5, -2.0), Point2::new(1e-7, 3.0)];
        let parsed = parse_points(&format_points(&pts)).unwrap();
        assert_eq!(parsed.points, pts);
    }
}
