//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::debug;

use trigsum_cli::output::write_report;
use trigsum_cli::presenter::{CLIResultPresenter, JsonResultPresenter};
use trigsum_core::calculator::SeriesError;
use trigsum_core::options::{Options, SeriesParams};
use trigsum_core::registry::DefaultFactory;
use trigsum_orchestration::interfaces::ResultPresenter;
use trigsum_orchestration::orchestrator::{analyze_comparison_results, execute_summations};
use trigsum_orchestration::report::build_report;
use trigsum_orchestration::summer_selection::get_summers_to_run;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        trigsum_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let opts = Options {
        thread_counts: config.threads.clone(),
        pool_threads: config.pool_threads,
        tolerance: config.tolerance,
    }
    .normalize();
    let params = SeriesParams::new(config.x, config.epsilon)?;
    debug!(x = params.x, epsilon = params.epsilon, ?opts, "starting comparison");

    let factory = DefaultFactory::new();
    let summers = get_summers_to_run(&config.algo, &opts, &factory)?;
    let results = execute_summations(&summers, &params);

    let report = build_report(&params, &results)?;
    let presenter: Box<dyn ResultPresenter> = if config.json {
        Box::new(JsonResultPresenter)
    } else {
        Box::new(CLIResultPresenter::new(config.quiet))
    };
    presenter.present_report(&report);
    for result in &results {
        if let Err(e) = &result.outcome {
            presenter.present_error(&format!("{}: {e}", result.label));
        }
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        write_report(path, &report).with_context(|| format!("failed to write report to {path}"))?;
    }

    match analyze_comparison_results(&results, opts.tolerance) {
        Ok(()) => {}
        Err(e @ SeriesError::Mismatch(_)) if !config.strict => {
            presenter.present_warning(&e.to_string());
        }
        Err(e @ SeriesError::Mismatch(_)) => return Err(e.into()),
        // No run succeeded; the failing run is reported below.
        Err(_) if results.iter().any(|r| r.outcome.is_err()) => {}
        Err(e) => return Err(e.into()),
    }

    // A failed strategy still fails the run once the others have been reported.
    if let Some((label, err)) = results
        .iter()
        .find_map(|r| r.outcome.as_ref().err().map(|e| (&r.label, e)))
    {
        return Err(anyhow::Error::new(err.clone()).context(format!("{label} failed")));
    }

    Ok(())
}
