use std::process::ExitCode;

use clap::Parser;

use irrigation_devkit::config::load_automation_config;
use irrigation_devkit::core::logging::init_tracing;
use irrigation_devkit::features::automation::{Cli, ProcessRunner, build_plan, exit_code, run_plan};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let (config, tasks) = cli.apply(load_automation_config());

    let steps = build_plan(&config, &tasks);
    let report = run_plan(&ProcessRunner::new(), &steps).await;

    if report.all_succeeded() {
        tracing::info!(steps = report.steps.len(), "all steps succeeded");
    } else {
        for step in report.failures() {
            tracing::error!(step = %step.name, command = %step.command, outcome = %step.outcome, "step failed");
        }
    }
    match serde_json::to_string(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => tracing::warn!(error = %err, "could not encode run report"),
    }

    exit_code(&report)
}
