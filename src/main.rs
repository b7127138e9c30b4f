//! Parking Judge - Application Entry Point
//!
//! Runs the Parking Lot stage against a program and reports the verdict.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use parking_judge::{
    AppError,
    config::Config,
    judge::{ParkingStageTest, ProcessRunner, StageResult, StageRunner},
    utils::{format_milliseconds, logging},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

/// Judge a Parking Lot submission
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Program to judge
    program: PathBuf,

    /// Arguments passed to the program on every run
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            let e = AppError::from(e);
            eprintln!("{}: {}", e.error_code(), e);
            return Ok(ExitCode::from(2));
        }
    };

    logging::init(&config.logging);

    tracing::info!(
        "Judging {} (time limit {})",
        cli.program.display(),
        format_milliseconds(config.judge.time_limit_ms)
    );

    let runner = ProcessRunner::new(&cli.program, cli.args, &config.judge);
    let result = StageRunner::new(config.judge.clone())
        .run(&ParkingStageTest, &runner)
        .await;

    match cli.format {
        ReportFormat::Text => print!("{}", render_text(&result)),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(if result.is_accepted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn render_text(result: &StageResult) -> String {
    match result.failure() {
        None => format!(
            "{}: {}/{} test(s) passed in {}\n",
            result.verdict.label(),
            result.passed_count,
            result.total_count,
            format_milliseconds(result.max_time_ms)
        ),
        Some(failed) => {
            let mut text = format!(
                "{} in test #{}\n",
                failed.verdict.label(),
                failed.testcase_number
            );
            if let Some(message) = failed.message() {
                text.push('\n');
                text.push_str(message);
                text.push('\n');
            }
            text
        }
    }
}
