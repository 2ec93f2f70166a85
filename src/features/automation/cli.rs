use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::config::AutomationConfig;
use crate::features::automation::dto::{DEFAULT_TASKS, RunReport, Task};

// Env fallbacks live in `config::loader`; clap only reads flags.

/// Builds and installs the Android app, then launches the mock server.
#[derive(Parser, Debug)]
#[command(name = "test-run", version, about)]
pub struct Cli {
    /// Android project root where Gradle runs. Overrides TEST_RUN_PROJECT_DIR.
    #[arg(long)]
    pub project_dir: Option<PathBuf>,

    /// Directory the mock server is built and launched from. Overrides TEST_RUN_SERVER_DIR.
    #[arg(long)]
    pub server_dir: Option<PathBuf>,

    /// Gradle wrapper to invoke. Overrides TEST_RUN_GRADLE.
    #[arg(long, value_parser = clap::builder::NonEmptyStringValueParser::new())]
    pub gradle: Option<String>,

    /// Tasks to run, in order. Defaults to `debug serve`.
    #[arg(value_enum)]
    pub tasks: Vec<Task>,
}

impl Cli {
    pub fn apply(self, mut config: AutomationConfig) -> (AutomationConfig, Vec<Task>) {
        if let Some(dir) = self.project_dir {
            config.project_dir = dir;
        }
        if let Some(dir) = self.server_dir {
            config.server_dir = dir;
        }
        if let Some(gradle) = self.gradle {
            config.gradle_program = gradle;
        }

        let tasks = if self.tasks.is_empty() {
            DEFAULT_TASKS.to_vec()
        } else {
            self.tasks
        };

        (config, tasks)
    }
}

pub fn exit_code(report: &RunReport) -> ExitCode {
    if report.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
