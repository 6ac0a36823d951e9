use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use tracing::{debug, Level};

mod cli;

use cli::Args;
use next_odd::demo::{format_line, format_line_colored, run_demo, DEMO_INPUTS};
use next_odd::models::{evaluate, Evaluation, EvaluationReport};

struct RunParams {
    values: Vec<String>,
    format: String,
    keep_going: bool,
}

fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_evaluation(evaluation: &Evaluation, format: &str) {
    if format == "color" {
        println!("{}", format_line_colored(evaluation));
    } else {
        println!("{}", format_line(evaluation));
    }
}

fn print_report(report: &EvaluationReport) -> Result<()> {
    let json =
        serde_json::to_string_pretty(report).context("Failed to serialize results to JSON")?;
    println!("{}", json);
    Ok(())
}

fn handle_run(params: RunParams) -> Result<()> {
    let evaluations = if params.values.is_empty() {
        debug!("No values given, running demo inputs");
        run_demo(&DEMO_INPUTS)
    } else {
        params.values.iter().map(|v| evaluate(v)).collect()
    };
    let json = params.format == "json";

    let mut kept = Vec::with_capacity(evaluations.len());
    for evaluation in evaluations {
        if let Some(error) = evaluation.error.clone() {
            if !params.keep_going {
                let input = evaluation.input.clone();
                // JSON keeps everything evaluated so far, including the failure
                if json {
                    kept.push(evaluation);
                    print_report(&EvaluationReport::new(kept))?;
                }
                anyhow::bail!("{} (input: {})", error, input);
            }
            debug!("Continuing past invalid input {}", evaluation.input);
        }
        if !json {
            print_evaluation(&evaluation, &params.format);
        }
        kept.push(evaluation);
    }

    let report = EvaluationReport::new(kept);
    if json {
        print_report(&report)?;
    }

    if report.failed > 0 {
        anyhow::bail!(
            "{} of {} inputs were invalid",
            report.failed,
            report.evaluations.len()
        );
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug);
    debug!(
        "Starting {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    handle_run(RunParams {
        values: args.values,
        format: args.format,
        keep_going: args.keep_going,
    })
}
