//! Application configuration from CLI flags and environment.

use std::f64::consts::PI;

use clap::Parser;
use trigsum_core::constants::{
    DEFAULT_COMPARISON_TOLERANCE, DEFAULT_EPSILON, DEFAULT_POOL_THREADS,
};

/// trigsum: evaluate S = Σ cos(nx)/n single-threaded, with raw threads and
/// with a worker pool, and check the sums against −ln(2·sin(x/2)).
#[derive(Parser, Debug)]
#[command(name = "trigsum", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Series argument: a float or a multiple of pi ("pi", "pi/3", "2pi/3").
    #[arg(
        short = 'x',
        long = "x",
        default_value = "pi",
        env = "TRIGSUM_X",
        value_parser = parse_angle,
        allow_hyphen_values = true
    )]
    pub x: f64,

    /// Convergence threshold: summation stops at the first |cos(nx)/n| < epsilon.
    #[arg(short, long, default_value_t = DEFAULT_EPSILON, env = "TRIGSUM_EPSILON")]
    pub epsilon: f64,

    /// Thread counts for the thread-per-chunk runs (comma separated).
    #[arg(short, long, value_delimiter = ',', default_value = "2,4,8")]
    pub threads: Vec<usize>,

    /// Worker pool size for the pooled run.
    #[arg(long, default_value_t = DEFAULT_POOL_THREADS)]
    pub pool_threads: usize,

    /// Strategy to run: single, threads, pool, or all.
    #[arg(long, default_value = "all")]
    pub algo: String,

    /// Relative tolerance when cross-checking strategies.
    #[arg(long, default_value_t = DEFAULT_COMPARISON_TOLERANCE)]
    pub tolerance: f64,

    /// Quiet mode (only print each strategy's sum).
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Fail when strategies disagree instead of warning.
    #[arg(long)]
    pub strict: bool,

    /// Also write the JSON report to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Parse an angle such as `1.5`, `pi`, `-pi/2`, `2pi/3` or `2*pi/3`.
pub fn parse_angle(s: &str) -> Result<f64, String> {
    let normalized: String = s
        .trim()
        .to_ascii_lowercase()
        .replace('\u{3c0}', "pi")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let (numerator, denominator) = match normalized.split_once('/') {
        Some((num, den)) => {
            let den: f64 = den
                .parse()
                .map_err(|_| format!("invalid denominator in angle '{s}'"))?;
            (num, den)
        }
        None => (normalized.as_str(), 1.0),
    };
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(format!("invalid denominator in angle '{s}'"));
    }

    let value = match numerator.strip_suffix("pi") {
        Some(coefficient) => {
            let coefficient = coefficient.strip_suffix('*').unwrap_or(coefficient);
            let coefficient = match coefficient {
                "" | "+" => 1.0,
                "-" => -1.0,
                c => c
                    .parse::<f64>()
                    .map_err(|_| format!("invalid multiple of pi in angle '{s}'"))?,
            };
            coefficient * PI
        }
        None => numerator
            .parse::<f64>()
            .map_err(|_| format!("invalid angle '{s}'"))?,
    } / denominator;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("angle must be finite, got '{s}'"))
    }
}
