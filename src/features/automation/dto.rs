use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Task {
    /// List the project, then assemble and install the debug APK.
    Debug,
    /// Full Gradle build.
    Build,
    /// Uninstall every variant of the app from the attached device.
    Uninstall,
    /// Prepare and launch the mock server. Blocks until it exits.
    Serve,
}

pub const DEFAULT_TASKS: &[Task] = &[Task::Debug, Task::Serve];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub name: String,
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl Step {
    pub fn new<I, S>(name: &str, program: &str, args: I, working_dir: PathBuf) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir,
        }
    }

    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    Succeeded,
    // `code` is None when terminated by a signal.
    Failed { code: Option<i32> },
    SpawnFailed { reason: String },
}

impl StepOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed { code: Some(code) } => write!(f, "exited with status {code}"),
            Self::Failed { code: None } => write!(f, "terminated by signal"),
            Self::SpawnFailed { reason } => write!(f, "could not start: {reason}"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub name: String,
    pub command: String,
    #[serde(flatten)]
    pub outcome: StepOutcome,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub steps: Vec<StepReport>,
}

impl RunReport {
    pub fn all_succeeded(&self) -> bool {
        self.steps.iter().all(|step| step.outcome.is_success())
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|step| !step.outcome.is_success())
    }
}
