//! CLI result presenters.

use trigsum_orchestration::interfaces::ResultPresenter;
use trigsum_orchestration::report::{ComparisonReport, PrecisionCheck, RunSummary};

use crate::output::{format_duration, format_error, format_number, format_value, report_to_json};
use crate::ui::{print_error, print_header, print_section, print_success, print_warning};

/// Human-readable presenter.
pub struct CLIResultPresenter {
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

/// One tab-separated line per run, as printed in quiet mode.
#[must_use]
pub fn quiet_line(run: &RunSummary) -> String {
    match (run.sum, &run.error) {
        (Some(sum), _) => format!("{}\t{}", run.label, format_value(sum)),
        (None, Some(e)) => format!("{}\terror: {e}", run.label),
        (None, None) => format!("{}\t-", run.label),
    }
}

/// Indented detail block for one run in the full report.
#[must_use]
pub fn run_lines(run: &RunSummary) -> Vec<String> {
    let mut lines = vec![format!("  {}", run.label)];
    if let Some(error) = &run.error {
        lines.push(format!("    error:     {error}"));
        return lines;
    }
    if let Some(sum) = run.sum {
        lines.push(format!("    sum:       {}", format_value(sum)));
    }
    if let Some(terms) = run.terms_counted {
        lines.push(format!("    terms:     {}", format_number(terms)));
    }
    lines.push(format!(
        "    duration:  {}",
        format_duration(std::time::Duration::from_secs_f64(run.duration_secs))
    ));
    if let Some(speedup) = run.speedup {
        lines.push(format!("    speedup:   {speedup:.2}x"));
    }
    if let Some(abs_error) = run.abs_error {
        lines.push(format!("    abs error: {}", format_error(abs_error)));
    }
    lines
}

/// `|a_n| = ... vs epsilon = ...` line of the precision check.
#[must_use]
pub fn precision_line(precision: &PrecisionCheck) -> String {
    format!(
        "|a_{}| = {} vs epsilon = {:e}",
        format_number(precision.terms_counted),
        format_error(precision.first_excluded_term),
        precision.epsilon
    )
}

/// Run counts shown under the summary section.
#[must_use]
pub fn strategies_line(report: &ComparisonReport) -> String {
    let failed = report.runs.iter().filter(|r| r.error.is_some()).count();
    format!("strategies:    {} run, {failed} failed", report.runs.len())
}

impl ResultPresenter for CLIResultPresenter {
    fn present_report(&self, report: &ComparisonReport) {
        if self.quiet {
            for run in &report.runs {
                println!("{}", quiet_line(run));
            }
            return;
        }

        print_header("Series S = \u{3a3} cos(nx)/n");
        println!("x:             {}", format_value(report.x));
        println!("epsilon:       {:e}", report.epsilon);
        println!("control:       -ln(2 sin(x/2))");
        println!("control value: {}", format_value(report.control_value));

        print_section("Runs");
        for line in report.runs.iter().flat_map(run_lines) {
            println!("{line}");
        }

        print_section("Analytical value");
        println!("analytical sum: {}", format_value(report.analytical_sum));
        if report.x_is_pi {
            println!("  at x = \u{3c0}, cos(n\u{3c0}) = (-1)^n, so S = -(1 - 1/2 + 1/3 - ...) = -ln 2");
        }
        println!(
            "matches control value: {}",
            if report.analytical_matches_control {
                "yes"
            } else {
                "no"
            }
        );

        print_section("Summary");
        if let Some(gap) = report.gap_to_minus_ln2 {
            println!("|S + ln 2|:    {}", format_error(gap));
        }
        println!("{}", strategies_line(report));

        if let Some(precision) = &report.precision {
            print_section("Precision check");
            println!("{}", precision_line(precision));
            if precision.satisfied {
                print_success("\u{2713} required precision reached");
            } else {
                print_warning("\u{2717} required precision not reached");
            }
        }
    }

    fn present_warning(&self, warning: &str) {
        print_warning(warning);
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}

/// Machine-readable presenter; prints the report as pretty JSON on stdout.
pub struct JsonResultPresenter;

impl ResultPresenter for JsonResultPresenter {
    fn present_report(&self, report: &ComparisonReport) {
        match report_to_json(report) {
            Ok(json) => println!("{json}"),
            Err(e) => print_error(&format!("failed to serialize report: {e}")),
        }
    }

    fn present_warning(&self, warning: &str) {
        eprintln!("warning: {warning}");
    }

    fn present_error(&self, error: &str) {
        eprintln!("error: {error}");
    }
}
